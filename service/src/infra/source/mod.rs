//! [`Source`]-related implementations.

#[cfg(feature = "dummy-json")]
pub mod dummy_json;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "dummy-json")]
pub use self::dummy_json::DummyJson;

/// Read-only remote data source operation.
pub use common::Handler as Source;

/// [`Source`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Source`] responded with a non-successful HTTP status.
    #[display("`Source` responded with `{_0}` status")]
    #[from(ignore)]
    Status(#[error(not(source))] u16),

    #[cfg(feature = "dummy-json")]
    /// [`DummyJson`] error.
    #[display("`DummyJson` error: {_0}")]
    DummyJson(dummy_json::Error),
}

impl Error {
    /// Returns the non-successful HTTP status code the [`Source`] responded
    /// with, if that is what this [`Error`] is about.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            #[cfg(feature = "dummy-json")]
            Self::DummyJson(_) => None,
        }
    }
}
