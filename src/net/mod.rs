//! Networking for the page widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser implementation of `ando_core::ChatApi`; wire types
//! and response classification live in `ando-core`.

pub mod api;
