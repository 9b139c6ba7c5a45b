//! Contiguous collection types. Namely [`Vector`], a growable collection that keeps its previous
//! state whenever copying its elements into a new allocation fails.
#![warn(missing_docs)]

pub(crate) mod buffer;
pub(crate) mod lifecycle;
pub mod vector;

#[doc(inline)]
pub use lifecycle::Slots;
#[doc(inline)]
pub use vector::Vector;
