use derive_more::{Display, Error};

/// An index or position was outside of the live elements of a collection.
#[derive(Debug, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A requested capacity can't be represented by a memory layout.
#[derive(Debug, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
