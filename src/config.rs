//! Collector configuration
//!
//! Each [`Notifications`](crate::Notifications) collector carries its own
//! [`Settings`]. There is no process-wide culture: two collectors in the same
//! thread can produce messages in different languages.
//!
//! # Examples
//!
//! ```
//! use notifiable::{Locale, Notifications, Settings};
//!
//! let settings = Settings::new()
//!     .locale(Locale::PtBr)
//!     .capture_values(true);
//!
//! let notifications = Notifications::with_settings(settings);
//! assert_eq!(notifications.locale(), Locale::PtBr);
//! assert!(notifications.settings().captures_values());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Language used to render default notification messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// English (United States). Dates are read month first.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en-US"))]
    EnUs,
    /// Portuguese (Brazil). Dates are read day first.
    #[cfg_attr(feature = "serde", serde(rename = "pt-BR"))]
    PtBr,
}

impl Locale {
    /// The BCP 47 tag of this locale.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
        }
    }

    /// Whether `dd/mm/yyyy` is preferred over `mm/dd/yyyy`.
    pub fn day_first(self) -> bool {
        matches!(self, Locale::PtBr)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Parse `en`, `en-US`, `en_US`, `pt`, `pt-BR` or `pt_BR`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

/// Settings shared by every check recorded into a collector.
///
/// Built with chained setters:
///
/// ```
/// use notifiable::{Locale, Settings};
///
/// let settings = Settings::new().locale(Locale::PtBr);
/// assert_eq!(settings.get_locale(), Locale::PtBr);
/// assert!(!settings.captures_values());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    locale: Locale,
    capture_values: bool,
}

impl Settings {
    /// Default settings: `en-US`, attempted values not recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message locale.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Record the attempted value alongside each notification raised by a check.
    pub fn capture_values(mut self, capture: bool) -> Self {
        self.capture_values = capture;
        self
    }

    /// The configured locale.
    pub fn get_locale(&self) -> Locale {
        self.locale
    }

    /// Whether attempted values are recorded.
    pub fn captures_values(&self) -> bool {
        self.capture_values
    }
}
