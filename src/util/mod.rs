//! Browser utilities.

pub mod dom;
pub mod task;
