//! The notification record and the property selector
//!
//! # Examples
//!
//! ```
//! use notifiable::{Code, Notification, Property};
//!
//! let n = Notification::new("Name", "Name could not be empty").with_value("");
//! assert_eq!(n.property(), "Name");
//! assert_eq!(n.code(), Code::Custom);
//! assert_eq!(n.to_string(), "Name: Name could not be empty");
//!
//! let p = Property::new("Age").message("too young");
//! assert_eq!(p.name(), "Age");
//! assert_eq!(p.custom_message(), Some("too young"));
//! ```

use std::fmt;

use crate::messages::Code;

/// A recorded validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    property: String,
    message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    value: Option<String>,
    code: Code,
}

impl Notification {
    /// Create a custom notification for `property`.
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            property: property.into(),
            message: message.into(),
            value: None,
            code: Code::Custom,
        }
    }

    /// Attach the attempted value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the code of the check that produced this notification.
    pub fn with_code(mut self, code: Code) -> Self {
        self.code = code;
        self
    }

    /// Name of the property that failed.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attempted value, when it was recorded.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The check that produced this notification.
    pub fn code(&self) -> Code {
        self.code
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.message)
    }
}

/// Names the property being checked, optionally overriding its message.
///
/// Every check accepts `impl Into<Property>`, so a plain string literal is
/// enough in the common case:
///
/// ```
/// use notifiable::prelude::*;
///
/// let name: Option<&str> = None;
/// let mut notifications = Notifications::new();
/// notifications
///     .if_null_or_empty("Name", name)
///     .if_null_or_empty(Property::new("Email").message("E-mail is required"), "");
///
/// let messages: Vec<&str> = notifications.messages().collect();
/// assert_eq!(
///     messages,
///     ["Field Name should not be null or empty.", "E-mail is required"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    message: Option<String>,
}

impl Property {
    /// Select the property called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            message: None,
        }
    }

    /// Replace the default message. An empty message keeps the default.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = if message.is_empty() {
            None
        } else {
            Some(message)
        };
        self
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message override, if any.
    pub fn custom_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>) {
        (self.name, self.message)
    }
}

impl From<&str> for Property {
    fn from(name: &str) -> Self {
        Property::new(name)
    }
}

impl From<String> for Property {
    fn from(name: String) -> Self {
        Property::new(name)
    }
}

impl From<&String> for Property {
    fn from(name: &String) -> Self {
        Property::new(name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_custom_without_value() {
        let n = Notification::new("Customer", "This is a custom notification");
        assert_eq!(n.code(), Code::Custom);
        assert_eq!(n.value(), None);
        assert_eq!(n.message(), "This is a custom notification");
    }

    #[test]
    fn test_builders() {
        let n = Notification::new("Age", "too young")
            .with_value("10")
            .with_code(Code::LowerThan);
        assert_eq!(n.value(), Some("10"));
        assert_eq!(n.code(), Code::LowerThan);
    }

    #[test]
    fn test_empty_override_keeps_default() {
        let p = Property::new("Name").message("");
        assert_eq!(p.custom_message(), None);
    }

    #[test]
    fn test_property_conversions() {
        let owned = String::from("Cpf");
        assert_eq!(Property::from("Cpf"), Property::new("Cpf"));
        assert_eq!(Property::from(&owned), Property::new("Cpf"));
        assert_eq!(Property::from(owned), Property::new("Cpf"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let n = Notification::new("Cnpj", "invalid")
            .with_code(Code::NotCnpj)
            .with_value("80288216000134");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(
            json,
            r#"{"property":"Cnpj","message":"invalid","value":"80288216000134","code":"not_cnpj"}"#
        );
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_skips_missing_value() {
        let n = Notification::new("Name", "required");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, r#"{"property":"Name","message":"required","code":"custom"}"#);
    }
}
