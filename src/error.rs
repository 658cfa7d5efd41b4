//! Error type for programmer-facing failures
//!
//! A failed check is never an error: it becomes a [`Notification`](crate::Notification).
//! This type only covers input the caller controls directly, such as a regular
//! expression that does not compile or a message template that references a
//! missing argument.
//!
//! # Examples
//!
//! ```
//! use notifiable::{Error, Locale};
//!
//! let err = "fr-FR".parse::<Locale>().unwrap_err();
//! assert_eq!(err, Error::UnknownLocale("fr-FR".to_string()));
//! assert_eq!(err.to_string(), "unknown locale: fr-FR");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Errors raised by fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A regular expression handed to a check did not compile.
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Reason reported by the regex engine
        reason: String,
    },
    /// A message template referenced `{index}` but fewer arguments were given.
    MissingArgument {
        /// Placeholder index found in the template
        index: usize,
        /// Number of arguments supplied
        provided: usize,
    },
    /// A message template has an unbalanced or non-numeric placeholder.
    MalformedTemplate {
        /// The offending template
        template: String,
    },
    /// A locale name that is not supported.
    UnknownLocale(String),
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: &str, err: &regex::Error) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern `{}`: {}", pattern, reason)
            }
            Error::MissingArgument { index, provided } => write!(
                f,
                "template placeholder {{{}}} has no argument ({} provided)",
                index, provided
            ),
            Error::MalformedTemplate { template } => {
                write!(f, "malformed template: {}", template)
            }
            Error::UnknownLocale(name) => write!(f, "unknown locale: {}", name),
        }
    }
}

impl StdError for Error {}

/// Result alias used by the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;
