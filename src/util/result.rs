use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], restricted to error types which implement
    /// [`Error`] so that the panic message is the error's own [`Display`](std::fmt::Display)
    /// output rather than its [`Debug`](std::fmt::Debug) form.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}
