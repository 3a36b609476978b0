use std::fmt;
#[cfg(feature="std")]
use std::error::Error;

/// Error value indicating that an optional held no value
///
/// Only returned by the crate, never built by callers:
///
/// ```compile_fail
/// let _ = inlineopt::AbsentError::default();
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AbsentError {
    _priv: (),
}

impl AbsentError {
    pub(crate) const fn new() -> Self {
        AbsentError { _priv: () }
    }
}

const ABSENTERROR: &'static str = "optional value is absent";

#[cfg(feature="std")]
/// Requires `features="std"`.
impl Error for AbsentError {}

impl fmt::Display for AbsentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ABSENTERROR)
    }
}

impl fmt::Debug for AbsentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "AbsentError", ABSENTERROR)
    }
}
