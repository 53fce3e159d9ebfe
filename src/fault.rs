//! Error types produced by the library itself.
//!
//! There are exactly two:
//!
//! - [`Fault`] is the error payload of [`Outcome::from_throwing`] and
//!   [`Outcome::from_async_catching`]. It holds whatever a panicking
//!   computation passed to `panic!` / [`std::panic::panic_any`].
//! - [`UnwrappedError`] is returned by [`Outcome::unwrap_or_throw`] when the
//!   outcome holds an error, carrying that error as its cause.
//!
//! [`Outcome::from_throwing`]: crate::Outcome::from_throwing
//! [`Outcome::from_async_catching`]: crate::Outcome::from_async_catching
//! [`Outcome::unwrap_or_throw`]: crate::Outcome::unwrap_or_throw

use std::any::Any;
use std::fmt;

/// A panic captured by one of the capturing constructors.
///
/// The original panic payload is kept intact, so a value raised with
/// [`std::panic::panic_any`] can be recovered with [`Fault::downcast_ref`]
/// or [`Fault::downcast`], and string messages from `panic!` are available
/// through [`Fault::message`].
///
/// # Example
///
/// ```rust
/// use wellspring::Outcome;
///
/// let outcome = Outcome::from_throwing(|| -> i32 { panic!("disk on fire") });
/// let fault = outcome.error_value().unwrap();
/// assert_eq!(fault.message(), Some("disk on fire"));
/// ```
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    /// Wrap a payload obtained from [`std::panic::catch_unwind`].
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        Fault { payload }
    }

    /// The panic message, if the payload was a `&'static str` or `String`.
    ///
    /// `panic!("literal")` produces the former, `panic!("{}", x)` the latter.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(s)
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Borrow the payload as `T`, if that is what was raised.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct QuotaExceeded(u32);
    ///
    /// let outcome = Outcome::from_throwing(|| -> () {
    ///     std::panic::panic_any(QuotaExceeded(3))
    /// });
    /// let fault = outcome.error_value().unwrap();
    /// assert_eq!(fault.downcast_ref::<QuotaExceeded>(), Some(&QuotaExceeded(3)));
    /// ```
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Returns `true` if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Take the payload as `T`, giving the fault back unchanged on mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Fault { payload }),
        }
    }

    /// Unwrap into the raw payload.
    pub fn into_panic(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continue unwinding with the original payload.
    ///
    /// Use this to hand a captured panic back to the caller's caller once it
    /// has been observed.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.message().unwrap_or("<non-string payload>");
        f.debug_tuple("Fault").field(&shown).finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "computation panicked: {}", msg),
            None => write!(f, "computation panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Fault {}

/// Error returned by [`Outcome::unwrap_or_throw`](crate::Outcome::unwrap_or_throw)
/// when called on an `Error` outcome.
///
/// The wrapped error payload is the cause and can be recovered with
/// [`UnwrappedError::into_cause`].
///
/// # Example
///
/// ```rust
/// use wellspring::{Outcome, UnwrappedError};
///
/// fn load() -> Result<u32, UnwrappedError<&'static str>> {
///     let port = Outcome::<u32, _>::error("missing port").unwrap_or_throw()?;
///     Ok(port)
/// }
///
/// let err = load().unwrap_err();
/// assert_eq!(err.cause(), &"missing port");
/// assert_eq!(err.to_string(), "unwrapped an error outcome: missing port");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrappedError<E> {
    cause: E,
}

impl<E> UnwrappedError<E> {
    /// Create a new UnwrappedError around `cause`.
    pub fn new(cause: E) -> Self {
        UnwrappedError { cause }
    }

    /// Get a reference to the error payload that was unwrapped.
    pub fn cause(&self) -> &E {
        &self.cause
    }

    /// Extract the error payload.
    pub fn into_cause(self) -> E {
        self.cause
    }
}

impl<E: fmt::Display> fmt::Display for UnwrappedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unwrapped an error outcome: {}", self.cause)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for UnwrappedError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, PartialEq)]
    struct Marker(u8);

    #[test]
    fn test_message_from_static_str() {
        let fault = Fault::from_panic(Box::new("boom"));
        assert_eq!(fault.message(), Some("boom"));
        assert_eq!(fault.to_string(), "computation panicked: boom");
    }

    #[test]
    fn test_message_from_string() {
        let fault = Fault::from_panic(Box::new(format!("code {}", 7)));
        assert_eq!(fault.message(), Some("code 7"));
    }

    #[test]
    fn test_non_string_payload() {
        let fault = Fault::from_panic(Box::new(Marker(1)));
        assert_eq!(fault.message(), None);
        assert!(fault.is::<Marker>());
        assert_eq!(
            fault.to_string(),
            "computation panicked with a non-string payload"
        );
        assert_eq!(format!("{:?}", fault), "Fault(\"<non-string payload>\")");
    }

    #[test]
    fn test_downcast() {
        let fault = Fault::from_panic(Box::new(Marker(9)));
        let fault = fault.downcast::<String>().unwrap_err();
        assert_eq!(fault.downcast::<Marker>().unwrap(), Marker(9));
    }

    #[test]
    #[should_panic(expected = "resumed")]
    fn test_resume_continues_unwinding() {
        Fault::from_panic(Box::new("resumed")).resume();
    }

    #[test]
    fn test_unwrapped_error_accessors() {
        let err = UnwrappedError::new("not found");
        assert_eq!(err.cause(), &"not found");
        assert_eq!(err.to_string(), "unwrapped an error outcome: not found");
        assert_eq!(err.into_cause(), "not found");
    }

    #[test]
    fn test_unwrapped_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = UnwrappedError::new(io);
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "gone");
    }
}
