//! Reactive handles over the `ando-core` state machines.
//!
//! DESIGN
//! ======
//! Components read `RwSignal<ChatSession>` / `RwSignal<FormState>` from
//! context. The async drivers in `ando-core` take a `StateCell`, so
//! [`SignalCell`] adapts a signal to that trait; every transition becomes
//! one signal update and one re-render.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use ando_core::StateCell;
use leptos::prelude::*;

pub use ando_core::chat::ChatSession;
pub use ando_core::form::FormState;

/// `StateCell` over a Leptos signal. Disposed signals report `None`.
pub struct SignalCell<S: Send + Sync + 'static>(pub RwSignal<S>);

impl<S: Send + Sync + 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for SignalCell<S> {}

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
