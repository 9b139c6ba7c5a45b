//! Element lifecycle helpers that operate on raw ranges of a [`Buffer`](super::buffer::Buffer).
//!
//! None of these functions know about the length of a collection. They construct or destroy
//! exactly the range they are given, and leave bookkeeping to the caller.

use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::{self, NonNull};

use crate::collections::traits::TryClone;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A writer over a range of uninitialized slots, handed to [`TryClone::try_clone_all`].
///
/// Values are written front to back. If the `Slots` is dropped before the range has been handed
/// over to its owner, every value written so far is dropped again in reverse order, so that no
/// live elements are left behind in memory that the owner considers uninitialized.
pub struct Slots<'a, T> {
    ptr: NonNull<T>,
    cap: usize,
    init: usize,
    _phantom: PhantomData<&'a mut [MaybeUninit<T>]>,
}

impl<'a, T> Slots<'a, T> {
    /// Creates a writer over the `cap` slots starting at `ptr`.
    ///
    /// # Safety
    /// `ptr` must be properly aligned and valid for writes of `cap` values of `T`. The slots must
    /// be uninitialized and must not be accessed through any other pointer for `'a`.
    pub(crate) const unsafe fn new(ptr: NonNull<T>, cap: usize) -> Slots<'a, T> {
        Slots {
            ptr,
            cap,
            init: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of values written so far.
    pub const fn len(&self) -> usize {
        self.init
    }

    /// Returns true if nothing has been written yet.
    pub const fn is_empty(&self) -> bool {
        self.init == 0
    }

    /// Returns the total number of slots.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if every slot has been written.
    pub const fn is_full(&self) -> bool {
        self.init == self.cap
    }

    /// Writes `value` into the next free slot.
    ///
    /// # Panics
    /// Panics if every slot has already been written.
    pub fn write(&mut self, value: T) {
        if self.is_full() {
            Err(IndexOutOfBounds {
                index: self.init,
                len: self.cap,
            }).throw()
        }

        // SAFETY: init < cap, so the slot is within the range provided to Slots::new and hasn't
        // been written yet.
        unsafe { self.ptr.add(self.init).write(value); }
        self.init += 1;
    }

    /// Writes a bitwise copy of every value in `src` into the next free slots, using a single bulk
    /// copy. Nothing is touched when `src` is empty.
    ///
    /// # Panics
    /// Panics if there are fewer than `src.len()` free slots.
    pub fn copy_from_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        if src.is_empty() {
            return;
        }

        if src.len() > self.cap - self.init {
            Err(IndexOutOfBounds {
                index: self.init + src.len() - 1,
                len: self.cap,
            }).throw()
        }

        // SAFETY: The destination range has been checked to fit in the free slots. src is a
        // shared borrow, so it can't overlap with the uniquely owned destination. Both pointers
        // are properly aligned and non-null because src is non-empty.
        unsafe {
            ptr::copy_nonoverlapping(
                src.as_ptr(),
                self.ptr.add(self.init).as_ptr(),
                src.len(),
            );
        }
        self.init += src.len();
    }

    /// Hands the written values over to the caller, who becomes responsible for dropping them.
    pub(crate) fn finish(self) -> usize {
        let init = self.init;
        mem::forget(self);
        init
    }
}

impl<T> Drop for Slots<'_, T> {
    fn drop(&mut self) {
        if !mem::needs_drop::<T>() {
            return;
        }

        while self.init != 0 {
            // Decrement first, so a panicking destructor can't cause a double drop.
            self.init -= 1;
            // SAFETY: All slots below the old value of init have been written and not yet
            // dropped.
            unsafe { ptr::drop_in_place(self.ptr.add(self.init).as_ptr()); }
        }
    }
}

/// Drops `count` live values starting at `ptr`. Does nothing at all for types without drop glue.
///
/// # Safety
/// `ptr` must point to `count` initialized values of `T` that won't be used again.
pub(crate) unsafe fn destroy_all<T>(ptr: NonNull<T>, count: usize) {
    if !mem::needs_drop::<T>() {
        return;
    }

    // SAFETY: It is up to the caller to provide an initialized range that isn't used again.
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), count)); }
}

/// Constructs a copy of every value in `src` in the slots starting at `dst`.
///
/// If a copy fails, all copies that were already constructed are dropped before the error is
/// returned, leaving the destination without any live values.
///
/// # Safety
/// `dst` must be properly aligned and valid for writes of `src.len()` uninitialized values, which
/// aren't accessed elsewhere until this function returns.
pub(crate) unsafe fn copy_construct_all<T: TryClone>(
    dst: NonNull<T>,
    src: &[T],
) -> Result<(), T::Error> {
    // SAFETY: The requirements of Slots::new are passed on to the caller.
    let mut slots = unsafe { Slots::new(dst, src.len()) };
    T::try_clone_all(src, &mut slots)?;

    // Slots drops (and unwinds) the partial copy if this fails.
    assert!(
        slots.is_full(),
        "TryClone::try_clone_all returned without copying every element!"
    );
    slots.finish();
    Ok(())
}
