//! This crate is my attempt at writing a growable, contiguous collection that never loses its
//! contents when copying an element fails.
//!
//! # Purpose
//! [`Vector`](collections::contiguous::Vector) copies its elements whenever it moves to a new
//! allocation, and those copies are allowed to fail (see
//! [`TryClone`](collections::traits::TryClone)). The interesting part is making sure that a
//! failure at any point leaves the Vector exactly as it was, without leaking or double-dropping
//! any of the copies that were already made.
//!
//! # Method
//! Every operation that replaces the allocation builds a complete replacement off to the side and
//! only swaps it in once it's finished. If anything goes wrong before then, the replacement is
//! dropped and the original is never touched. This turns out to be all the "rollback" logic that
//! is needed, because dropping a half-built Vector is already correct.
//!
//! # Error Handling
//! Failed copies are reported through [`Result`]s, because the caller can actually do something
//! about them. Everything else that can go wrong is the caller's fault (indexing out of bounds,
//! popping an empty Vector) or can't reasonably be handled (a capacity that overflows
//! [`isize::MAX`]), so those panic instead. Imagine having to handle the possibility of a capacity
//! overflow every time you push into a Vector.
//!
//! When this crate employs errors, it does so with small structs that implement
//! [`Error`](std::error::Error), derived with `derive_more` to remove some very repetitive
//! programming.
//!
//! # Dependencies
//! I'm not going to go and use [`Vec`] to write [`Vector`](collections::contiguous::Vector) or
//! anything. In fact, this library doesn't use [`Vec`] at all.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
