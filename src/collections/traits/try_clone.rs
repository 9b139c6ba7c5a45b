use std::convert::Infallible;
use std::rc::Rc;
use std::sync::Arc;

use crate::collections::contiguous::Slots;

/// A copy operation that is allowed to fail, used by collections that need to duplicate their
/// elements (for example, when moving them into a larger allocation).
///
/// Unlike [`Clone`], failure is reported through [`TryClone::Error`] rather than a panic, which
/// lets collections keep their previous state and hand the error back to the caller.
///
/// # Bulk copies
/// [`TryClone::try_clone_all`] copies a whole slice at once. The provided implementation clones
/// one element at a time, left to right. Types whose copy is a plain bitwise copy should override
/// it using [`Slots::copy_from_slice`], which performs a single bulk copy. All of the primitive
/// [`Copy`] types implemented here do so.
///
/// # Examples
/// ```
/// # use standard_vector::collections::contiguous::Vector;
/// # use standard_vector::collections::traits::TryClone;
/// #[derive(Debug, PartialEq)]
/// struct Ticket(u32);
///
/// impl TryClone for Ticket {
///     type Error = &'static str;
///
///     fn try_clone(&self) -> Result<Self, Self::Error> {
///         if self.0 == 0 { Err("ticket 0 is unique") } else { Ok(Ticket(self.0)) }
///     }
/// }
///
/// let mut vec = Vector::new();
/// vec.push(Ticket(0)).unwrap();
/// assert_eq!(vec.reserve(8), Err("ticket 0 is unique"));
/// assert_eq!(vec.cap(), 4);
/// ```
pub trait TryClone: Sized {
    /// The error produced when a copy fails.
    type Error;

    /// Attempts to create a copy of `self`.
    fn try_clone(&self) -> Result<Self, Self::Error>;

    /// Copies every element of `src` into `dst`, in order.
    ///
    /// On success, `dst` must hold exactly `src.len()` new elements. On failure, any elements
    /// already written to `dst` are destroyed (in reverse order) when `dst` is dropped, so an
    /// implementation only needs to return the error.
    fn try_clone_all(src: &[Self], dst: &mut Slots<'_, Self>) -> Result<(), Self::Error> {
        for item in src {
            dst.write(item.try_clone()?);
        }
        Ok(())
    }
}

macro_rules! impl_try_clone_bitwise {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryClone for $t {
                type Error = Infallible;

                fn try_clone(&self) -> Result<Self, Self::Error> {
                    Ok(*self)
                }

                fn try_clone_all(src: &[Self], dst: &mut Slots<'_, Self>) -> Result<(), Self::Error> {
                    dst.copy_from_slice(src);
                    Ok(())
                }
            }
        )*
    };
}

impl_try_clone_bitwise!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char, (),
);

impl<T: ?Sized> TryClone for &T {
    type Error = Infallible;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(*self)
    }

    fn try_clone_all(src: &[Self], dst: &mut Slots<'_, Self>) -> Result<(), Self::Error> {
        dst.copy_from_slice(src);
        Ok(())
    }
}

impl TryClone for String {
    type Error = Infallible;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(self.clone())
    }
}

impl<T: TryClone> TryClone for Box<T> {
    type Error = T::Error;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(Box::new((**self).try_clone()?))
    }
}

impl<T: TryClone> TryClone for Option<T> {
    type Error = T::Error;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        self.as_ref().map(T::try_clone).transpose()
    }
}

impl<T: ?Sized> TryClone for Rc<T> {
    type Error = Infallible;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(Rc::clone(self))
    }
}

impl<T: ?Sized> TryClone for Arc<T> {
    type Error = Infallible;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(Arc::clone(self))
    }
}
