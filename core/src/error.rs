//! Usage errors raised while matching flags.
//!
//! Classification never fails; only matching does. Every variant names the
//! exact flag or token at fault so the embedding application can print it
//! as-is.

use thiserror::Error;

/// Fatal usage errors surfaced by [`ArgScanner::try_match`] and
/// [`FlagTable`].
///
/// [`ArgScanner::try_match`]: crate::ArgScanner::try_match
/// [`FlagTable`]: crate::FlagTable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A flag that takes a value matched, but no token followed it.
    #[error("missing value for flag `--{flag}`")]
    MissingValue {
        /// Canonical (long) name of the flag, without dashes.
        flag: String,
    },

    /// A single-dash token longer than one character, e.g. `-name`.
    #[error("malformed flag `{token}`: long flags must start with `--`")]
    MalformedShortFlag {
        /// The offending token, verbatim.
        token: String,
    },

    /// A flag-shaped token that no flag in the table accepted.
    #[error("unrecognized flag `{token}`")]
    UnrecognizedToken {
        /// The offending token, verbatim.
        token: String,
    },
}

impl UsageError {
    /// Returns the flag name or token this error refers to.
    pub fn subject(&self) -> &str {
        match self {
            Self::MissingValue { flag } => flag,
            Self::MalformedShortFlag { token } | Self::UnrecognizedToken { token } => token,
        }
    }
}

/// Convenience alias for results with [`UsageError`].
pub type Result<T> = std::result::Result<T, UsageError>;
