use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::buffer::Buffer;
use crate::collections::contiguous::lifecycle;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: vec is never dropped, so ownership of the buffer (and the len values in it)
            // moves into the iterator without being duplicated.
            buf: unsafe { ptr::read(&vec.buf) },
            start: 0,
            end: vec.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Values that haven't been yielded when the iterator is dropped are dropped with it.
pub struct IntoIter<T> {
    buf: Buffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining values as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The values in [start, end) are initialized and haven't been yielded yet.
        unsafe {
            slice::from_raw_parts(self.buf.ptr().add(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: The values in [start, end) are initialized and haven't been yielded yet.
        unsafe {
            lifecycle::destroy_all(self.buf.ptr().add(self.start), self.end - self.start);
        }

        // Implicitly drop self.buf to deallocate.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the value is initialized. start is incremented next, so the
            // value is effectively moved out of the buffer.
            let value = unsafe { self.buf.ptr().add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end was initialized and is no longer in range.
            let value = unsafe { self.buf.ptr().add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// SAFETY: IntoIter uniquely owns its buffer and remaining values, like the Vector it came from.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: IntoIter's safe API only hands out shared references through &self.
unsafe impl<T: Sync> Sync for IntoIter<T> {}
