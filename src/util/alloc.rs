use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use derive_more::{Display, Error};

use crate::collections::traits::TryClone;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

impl TryClone for ZeroSizedType {
    type Error = Infallible;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(*self)
    }
}

/// The error produced by a [`Counted`] copy once its [`Tracker`] countdown runs out.
#[derive(Debug, Display, Error, PartialEq)]
#[display("copy failed")]
pub struct CopyFailed;

#[derive(Debug, Default)]
struct TrackerState {
    live: usize,
    countdown: usize,
}

/// A shared handle that counts the live [`Counted`] values created through it, and can be
/// configured to make one of their copies fail.
#[derive(Debug, Clone, Default)]
pub struct Tracker(Rc<RefCell<TrackerState>>);

impl Tracker {
    pub fn new() -> Tracker {
        Tracker::default()
    }

    /// Returns the number of values created through this Tracker that haven't been dropped.
    pub fn live(&self) -> usize {
        self.0.borrow().live
    }

    /// Makes the `copies`-th copy from now on fail. A value of 0 disables failures.
    pub fn fail_after(&self, copies: usize) {
        self.0.borrow_mut().countdown = copies;
    }

    pub fn make<V>(&self, value: V) -> Counted<V> {
        self.0.borrow_mut().live += 1;
        Counted {
            value,
            tracker: self.clone(),
        }
    }

    fn copy(&self) -> Result<(), CopyFailed> {
        let mut state = self.0.borrow_mut();
        if state.countdown != 0 {
            state.countdown -= 1;
            if state.countdown == 0 {
                return Err(CopyFailed);
            }
        }
        Ok(())
    }
}

/// A value that is tracked by a [`Tracker`] for as long as it lives.
pub struct Counted<V> {
    value: V,
    tracker: Tracker,
}

impl<V> Counted<V> {
    pub const fn value(&self) -> &V {
        &self.value
    }
}

impl<V: Clone> TryClone for Counted<V> {
    type Error = CopyFailed;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        self.tracker.copy()?;
        Ok(self.tracker.make(self.value.clone()))
    }
}

impl<V> Drop for Counted<V> {
    fn drop(&mut self) {
        self.tracker.0.borrow_mut().live -= 1;
    }
}

impl<V: PartialEq> PartialEq for Counted<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: PartialEq> PartialEq<V> for Counted<V> {
    fn eq(&self, other: &V) -> bool {
        self.value == *other
    }
}

impl<V: Debug> Debug for Counted<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
