//! Unified error type.

use std::fmt;

/// The error type returned by ruta's fallible operations.
///
/// Routing failures (404, 405) are expressed as [`Envelope`](crate::Envelope)
/// values and never as `Error`s; every resolution path yields an envelope.
/// This type surfaces the remaining infrastructure failures, all of which are
/// transport-level: binding the listener or accepting a connection.
#[derive(Debug)]
pub struct Error(std::io::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}
