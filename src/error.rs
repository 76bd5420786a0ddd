#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the discovery crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.
//!
//! Only fatal conditions are represented here. Degraded results (a missing
//! access key, an unreadable binding) are reported as
//! [`DiscoveryWarning`](crate::DiscoveryWarning) values instead.

use std::path::{Path, PathBuf};

/// Unified error type returned by the discovery sources and the CLI.
///
/// Variants never embed credential material. Instances are typically
/// constructed through the helper constructors or by converting from
/// serde_json errors via the provided `From` implementation.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// The targets file could not be opened.
    #[error("failed to open targets file {path:?}: {source}")]
    Io {
        /// Location of the targets file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// The targets file is not valid comma-separated data.
    #[error("failed to parse targets file {path:?}: {source}")]
    Parse {
        /// Location of the targets file.
        path:   PathBuf,
        /// Decoding or quoting failure.
        source: CsvError
    },
    /// A credential entry holds a value that is not a string.
    #[error("credential '{key}' must be a string, found {found}")]
    Lookup {
        /// Credential key that matched.
        key:   String,
        /// JSON type of the stored value.
        found: &'static str
    },
    /// The hosting platform environment could not be read.
    #[error("platform environment unavailable: {message}")]
    Platform {
        /// Human readable message describing the failure.
        message: String
    },
    /// Required settings are missing or invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Human readable message describing the configuration problem.
        message: String
    },
    /// No authenticated cloud session could be established.
    #[error("authentication failed: {message}")]
    Auth {
        /// Human readable message describing the authentication failure.
        message: String
    },
    /// A cloud enumeration request failed.
    #[error("cloud query failed: {message}")]
    Query {
        /// Human readable message describing the failed request.
        message: String
    },
    /// Returned when command line input violates invariants.
    #[error("invalid arguments: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps serialization errors when writing discovered targets.
    #[error("failed to serialize targets: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

/// Failure to decode comma-separated targets.
#[derive(Debug, masterror::Error)]
pub enum CsvError {
    /// The CSV reader rejected the input.
    #[error("{source}")]
    Decode {
        /// Underlying CSV reader error.
        source: csv::Error
    },
    /// A quoted field is malformed.
    #[error("line {line}: {reason}")]
    Quote {
        /// One-based line where the problem was detected.
        line:   u64,
        /// Description of the quoting problem.
        reason: &'static str
    }
}

impl From<csv::Error> for CsvError {
    fn from(source: csv::Error) -> Self {
        Self::Decode {
            source
        }
    }
}

impl Error {
    /// Constructs a configuration error from the provided message.
    pub fn config<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Config {
            message: message.into()
        }
    }

    /// Constructs an authentication error from the provided message.
    pub fn auth<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Auth {
            message: message.into()
        }
    }

    /// Constructs a query error from the provided message.
    pub fn query<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Query {
            message: message.into()
        }
    }

    /// Constructs a platform error from the provided message.
    pub fn platform<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Platform {
            message: message.into()
        }
    }

    /// Constructs a validation error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the targets file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Parse`] variant capturing the failing path and source.
pub fn parse_error(path: &Path, source: CsvError) -> Error {
    Error::Parse {
        path: path.to_path_buf(),
        source
    }
}
