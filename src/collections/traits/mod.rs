//! Traits that describe what collections require from the elements they store.

mod try_clone;

pub use try_clone::*;
