// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Container usage errors are programmer/configuration mistakes surfaced at
//! the point of misuse. Nothing here is retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value of the wrong type was assigned to the container's manager slot.
    #[error("Incompatible manager: expected {expected}")]
    IncompatibleManager { expected: &'static str },

    /// A manager event arrived while an external items source is bound.
    #[error("Items collection cannot be used while an items source is bound")]
    ItemsSourceInUse,

    /// An items source was bound while the internal items list was not empty.
    #[error("Items collection must be empty before binding an items source")]
    ItemsNotEmpty,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for misuse of the container itself (as opposed to
    /// environment failures such as I/O).
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::IncompatibleManager { .. } | Error::ItemsSourceInUse | Error::ItemsNotEmpty
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
