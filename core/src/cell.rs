//! Shared-state handle used by the async drivers.
//!
//! The drivers in [`crate::chat`] and [`crate::form`] never hold a borrow
//! across an `.await`; they apply one synchronous transition at a time
//! through this trait. Front ends plug in whatever owns their state: a
//! `RefCell` in tests and the terminal, a reactive signal in the browser.

use std::cell::RefCell;

pub trait StateCell<S> {
    /// Apply `f` to the state. Returns `None` if the state is gone (for
    /// example a disposed reactive signal).
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S> StateCell<S> for RefCell<S> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
