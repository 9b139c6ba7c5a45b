use std::convert::Infallible;
use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the [`Result`], panicking with the message of the error itself. Used for contract
    /// violations, where the caller is at fault and there is nothing to recover.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

pub(crate) trait InfallibleExtension<T> {
    /// Extracts the value of a [`Result`] that can't hold an error.
    fn into_ok(self) -> T;
}

impl<T> InfallibleExtension<T> for Result<T, Infallible> {
    fn into_ok(self) -> T {
        match self {
            Ok(val) => val,
            Err(never) => match never {},
        }
    }
}
