//! Page event-loop tasks and timers.
//!
//! Widget work that waits (remote calls, notification lifetimes, the
//! simulated submit delay) runs as a local task on the page's event loop.
//! Native builds drop the task unpolled.

use std::future::Future;

/// Spawn `task` on the page event loop.
pub fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(task);
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(task);
    }
}

/// Resolve after `ms` milliseconds. Resolves immediately off the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
