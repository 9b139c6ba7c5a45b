use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Bound, Deref, DerefMut, RangeBounds};
use std::ptr;
use std::slice;

use crate::collections::contiguous::buffer::Buffer;
use crate::collections::contiguous::lifecycle;
use crate::collections::traits::TryClone;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::{InfallibleExtension, ResultExtension};

/// The capacity of a Vector after its first growth.
const INITIAL_CAP: usize = 4;

/// A variable size contiguous collection, built directly on top of a raw allocation.
///
/// Elements are copied (through [`TryClone`]) rather than moved whenever the Vector needs a new
/// allocation. Every operation that replaces the allocation builds a complete replacement Vector
/// first and only swaps it with `self` once every element has been copied, so a failing copy
/// leaves the Vector exactly as it was before the call. Copies that were already made are dropped
/// and the error is returned to the caller.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being appended.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)`, `O(n)`* |
/// | `erase` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)`**, `O(1)` |
/// | `clear` | `O(n)` |
/// | `swap` | `O(1)` |
/// | `try_extend_from_slice` | `O(m)`, `O(n+m)`* |
///
/// \* If the Vector doesn't have enough capacity for the new elements, they require a copy of
/// every existing element.
///
/// \** No work is done if the capacity already satisfies the request.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1).unwrap();
    /// assert!(!vec.is_empty());
    /// vec.pop_back();
    /// assert!(vec.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a raw pointer to the Vector's buffer. The pointer is dangling (but properly aligned)
    /// while the capacity is 0, and is invalidated whenever the Vector reallocates.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr().as_ptr().cast_const()
    }

    /// Returns a raw mutable pointer to the Vector's buffer. See [`Vector::as_ptr`].
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr().as_ptr()
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn front(&self) -> &T {
        let len = self.len;
        self.first().ok_or(IndexOutOfBounds { index: 0, len }).throw()
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn front_mut(&mut self) -> &mut T {
        let len = self.len;
        self.first_mut().ok_or(IndexOutOfBounds { index: 0, len }).throw()
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let vec: Vector<u8> = [5, 6, 7].into_iter().collect();
    /// assert_eq!(*vec.front(), 5);
    /// assert_eq!(*vec.back(), 7);
    /// ```
    pub fn back(&self) -> &T {
        let len = self.len;
        self.last().ok_or(IndexOutOfBounds { index: 0, len }).throw()
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        let len = self.len;
        self.last_mut().ok_or(IndexOutOfBounds { index: 0, len }).throw()
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap)
    /// to do so. Using this method on a Vector without enough capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: We know that vec has enough capacity to store all three elements.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.buf.ptr().add(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. Never reallocates.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<usize> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, the slot is no longer live afterwards.
            self.len -= 1;

            // SAFETY: len has just been decremented and was previously initialized. The value is
            // moved out with a bitwise copy and the slot is treated as uninitialized from now on.
            Some(unsafe { self.buf.ptr().add(self.len).read() })
        }
    }

    /// Drops the last element of the Vector in place. Never reallocates.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            Err(IndexOutOfBounds {
                index: 0,
                len: 0,
            }).throw()
        }

        self.len -= 1;
        // SAFETY: The slot at the old len - 1 is initialized and isn't considered live anymore.
        unsafe { ptr::drop_in_place(self.buf.ptr().add(self.len).as_ptr()); }
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    /// Returns `index`, which now refers to the element that followed the removed one (or is equal
    /// to the length, if the last element was removed).
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = [4, 5, 6, 7].into_iter().collect();
    /// assert_eq!(vec.erase(2), 2);
    /// assert_eq!(&*vec, &[4, 5, 7]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        self.check_index(index);
        self.erase_range(index..=index)
    }

    /// Removes all elements in `range`, moving all following values to fill in the gap. The
    /// capacity is left unchanged. Returns the start of the range, which now refers to the first
    /// element after the removed ones (or is equal to the length, if the range reached the end).
    ///
    /// # Panics
    /// Panics if the start of the range is greater than its end, or the end is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<char> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase_range(1..4), 1);
    /// assert_eq!(vec.erase_range(6..), 6);
    /// assert_eq!(vec.iter().collect::<String>(), "Ho wor");
    /// ```
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let (start, end) = self.resolve_range(range);
        let tail = self.len - end;
        let base = self.buf.ptr();

        // Shorten the Vector first, so that a panicking destructor leaks the tail rather than
        // dropping anything twice.
        self.len = start;

        // SAFETY: start <= end <= len, so [start, end) is initialized and is dropped exactly once,
        // then the initialized tail [end, len) is moved down to start. ptr::copy handles overlap.
        unsafe {
            lifecycle::destroy_all(base.add(start), end - start);
            ptr::copy(base.add(end).as_ptr(), base.add(start).as_ptr(), tail);
        }

        self.len = start + tail;
        start
    }

    /// Drops every element in the Vector. The capacity and allocation are kept for reuse.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;

        // SAFETY: The first len values were initialized and the Vector no longer considers them
        // live.
        unsafe { lifecycle::destroy_all(self.buf.ptr(), len); }
    }

    /// Swaps the contents of two Vectors, without touching any elements.
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Calculates the capacity to use when growing. Starts at [`INITIAL_CAP`], then grows by a
    /// factor of 1.5 (rounded down), always by at least one element.
    ///
    /// # Panics
    /// Panics if the new capacity can't be represented as a [`usize`].
    pub(crate) fn grown_cap(&self) -> usize {
        match self.cap() {
            0 => INITIAL_CAP,
            cap => {
                let grown = cap.checked_add(cap / 2).ok_or(CapacityOverflow).throw();
                cmp::max(grown, cap + 1)
            },
        }
    }

    /// Checks that the provided index refers to a live element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }

    /// Checks that the provided index is a valid position to insert at, the end included.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    pub(crate) fn check_position(&self, index: usize) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }

    /// Converts any range into `(start, end)` indices, checking it against the length.
    ///
    /// # Panics
    /// Panics if the range is decreasing or reaches past the end of the Vector.
    pub(crate) fn resolve_range<R: RangeBounds<usize>>(&self, range: R) -> (usize, usize) {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        if end > self.len {
            Err(IndexOutOfBounds {
                index: end - 1,
                len: self.len,
            }).throw()
        }
        if start > end {
            Err(IndexOutOfBounds {
                index: start,
                len: end,
            }).throw()
        }

        (start, end)
    }
}

impl<T: TryClone> Vector<T> {
    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// When the Vector is full, a new allocation is built with every existing element copied
    /// into it, followed by `value`. If a copy fails, the Vector is left untouched, `value` is
    /// dropped and the error is returned.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails while growing.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i).unwrap();
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 6);
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), T::Error> {
        if self.len == self.cap() {
            let mut grown = self.relocated(self.grown_cap())?;
            // SAFETY: grown_cap is always greater than len, so there is room for one more value.
            unsafe { grown.push_unchecked(value); }
            self.swap(&mut grown);
        } else {
            // SAFETY: len < cap.
            unsafe { self.push_unchecked(value); }
        }
        Ok(())
    }

    /// Inserts the provided value at the given index, moving all following elements one slot to
    /// the right. Returns the index of the inserted value.
    ///
    /// When there is spare capacity, elements are moved in place and this can't fail. Otherwise a
    /// new allocation is built from copies of the elements before `index`, then `value`, then
    /// copies of the remaining elements. If a copy fails, the Vector is left untouched.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails while growing.
    ///
    /// # Panics
    /// Panics if `index > len`, or if the memory layout of the Vector would have a size that
    /// exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u16> = (0..3).collect();
    /// assert_eq!(vec.insert(1, 100), Ok(1));
    /// vec.insert(1, 200).unwrap();
    /// vec.insert(3, 300).unwrap();
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, T::Error> {
        self.check_position(index);

        if self.len == self.cap() {
            let mut grown: Vector<T> = Vector::with_cap(self.grown_cap());
            // SAFETY: grown is empty and has room for more than len values, which is enough for
            // the prefix, value and suffix.
            unsafe {
                grown.copy_into_spare(&self[..index])?;
                grown.push_unchecked(value);
                grown.copy_into_spare(&self[index..])?;
            }
            self.swap(&mut grown);
            return Ok(index);
        }

        // SAFETY: index <= len < cap. The initialized range [index, len) is moved one slot up,
        // which stays in bounds, then the now vacant slot at index is written.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(index)
    }

    /// Ensures that the Vector has a capacity of at least `new_cap`. Requests for a capacity that
    /// is already satisfied do nothing, the capacity is never reduced.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails, leaving the Vector untouched.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(10).unwrap();
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(5).unwrap();
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) -> Result<(), T::Error> {
        if new_cap <= self.cap() {
            return Ok(());
        }

        self.realloc_with_cap(new_cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length. A Vector that is already
    /// tight keeps its allocation.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails, leaving the Vector untouched.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(10).unwrap();
    /// vec.try_extend_from_slice(&[5, 6, 7]).unwrap();
    /// vec.shrink_to_fit().unwrap();
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn shrink_to_fit(&mut self) -> Result<(), T::Error> {
        if self.cap() == self.len {
            return Ok(());
        }

        self.realloc_with_cap(self.len)
    }

    /// Replaces the contents of `self` with copies of the elements in `other`. The copy is made in
    /// full before `self` is changed.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails, leaving `self` untouched.
    pub fn try_assign(&mut self, other: &Vector<T>) -> Result<(), T::Error> {
        let mut copy = other.relocated(other.len)?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Appends copies of every element in `other`.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails, leaving the Vector untouched.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<(), T::Error> {
        let needed = self.len.checked_add(other.len()).ok_or(CapacityOverflow).throw();

        if needed > self.cap() {
            let mut grown = self.relocated(cmp::max(self.grown_cap(), needed))?;
            // SAFETY: grown has room for len + other.len() values.
            unsafe { grown.copy_into_spare(other)?; }
            self.swap(&mut grown);
        } else {
            // SAFETY: The capacity has just been checked. On failure, the copies are unwound and
            // len is unchanged.
            unsafe { self.copy_into_spare(other)?; }
        }
        Ok(())
    }

    /// Appends every value produced by `iter`, growing as required. Growth follows the same
    /// factor as [`push`](Vector::push), so repeated calls stay amortized `O(1)` per value.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails while growing. Values that were
    /// already appended remain in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use standard_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.try_extend([1, 2, 3]).unwrap();
    /// assert_eq!(vec.cap(), 4);
    /// vec.try_extend([4, 5]).unwrap();
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 6);
    /// ```
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), T::Error> {
        let iter = iter.into_iter();
        let needed = self.len.saturating_add(iter.size_hint().0);

        if needed > self.cap() {
            self.reserve(cmp::max(self.grown_cap(), needed))?;
        }

        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    /// Reallocates the Vector with exactly `new_cap` slots, by building a copy and swapping it in.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails, leaving the Vector untouched.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), T::Error> {
        let mut copy = self.relocated(new_cap)?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Creates a new Vector with exactly `new_cap` slots, containing copies of all elements.
    ///
    /// # Errors
    /// Returns the error of the first element copy that fails. No copies survive a failure.
    pub(crate) fn relocated(&self, new_cap: usize) -> Result<Vector<T>, T::Error> {
        debug_assert!(new_cap >= self.len);

        let mut copy = Vector::with_cap(new_cap);
        // SAFETY: copy is empty and new_cap >= len.
        unsafe { copy.copy_into_spare(self)?; }
        Ok(copy)
    }

    /// Copies every element of `src` into the spare capacity after len, adding them to the Vector
    /// only once all copies have succeeded.
    ///
    /// # Safety
    /// The Vector must have at least `src.len()` slots of spare capacity.
    pub(crate) unsafe fn copy_into_spare(&mut self, src: &[T]) -> Result<(), T::Error> {
        // SAFETY: The slots after len are uninitialized and the caller guarantees that there are
        // enough of them.
        unsafe { lifecycle::copy_construct_all(self.buf.ptr().add(self.len), src)?; }
        self.len += src.len();
        Ok(())
    }
}

impl<T: TryClone> TryClone for Vector<T> {
    type Error = T::Error;

    /// Creates a copy of the Vector, with capacity equal to its length.
    fn try_clone(&self) -> Result<Self, Self::Error> {
        self.relocated(self.len)
    }
}

impl<T: TryClone<Error = Infallible>> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.try_clone().into_ok()
    }

    fn clone_from(&mut self, source: &Self) {
        self.try_assign(source).into_ok();
    }
}

impl<T: TryClone<Error = Infallible>> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.try_extend(iter).into_ok();
    }
}

impl<T: TryClone<Error = Infallible>> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { lifecycle::destroy_all(self.buf.ptr(), self.len); }

        // Implicitly drop self.buf, which deallocates without touching any values.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when dangling for a capacity of 0. The total size
        // is < isize::MAX as the result of being a valid Layout.
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker enforces that self isn't accessed while the
        // slice exists.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors uniquely own their buffer and values, so they are safe for Send when T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
