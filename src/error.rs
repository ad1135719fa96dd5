//! Error types for the fallible corners of the crate.
//!
//! Classification itself never fails: every predicate answers with a `bool`.
//! Errors only come from converting a value into one of the typed domains
//! ([`StatusCode`](crate::StatusCode), [`LooseCode`](crate::LooseCode)) and
//! from loading a [`MatcherConfig`](crate::config::MatcherConfig).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// The number is not in `100..=599`.
    #[error("{0} is outside the status code range 100-599")]
    OutOfRange(u16),

    /// The number is in range but no status code is registered for it.
    #[error("{0} is not a registered status code")]
    Unregistered(u16),

    #[error("unknown status code name `{0}`")]
    UnknownName(String),

    /// Text that is neither a symbolic name nor a three-digit code.
    #[error("malformed status code `{0}`")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse matcher config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("matcher config already set")]
    AlreadySet,
}
