//! The notification collector
//!
//! [`Notifications`] keeps every recorded [`Notification`] in insertion
//! order. It never short-circuits: each failed check appends a record and
//! the chain continues, so a single pass reports every problem of a model.
//!
//! # Examples
//!
//! ```
//! use notifiable::prelude::*;
//!
//! let mut notifications = Notifications::new();
//! notifications
//!     .if_null_or_empty("Name", "")
//!     .if_lower_than("Age", 10, 18)
//!     .if_true("Blocked", false);
//!
//! assert!(notifications.is_invalid());
//! assert_eq!(notifications.count(), 2);
//! assert_eq!(
//!     notifications.to_string(),
//!     "Name: Field Name should not be null or empty.\n\
//!      Age: Field Age should be greater than or equals to 18."
//! );
//! ```

use std::error::Error as StdError;
use std::fmt::{self, Display};

use crate::config::{Locale, Settings};
use crate::error::Result;
use crate::messages::{self, Code};
use crate::notifiable::Notifiable;
use crate::notification::{Notification, Property};

/// Ordered collection of notifications plus the settings used to produce them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notifications {
    items: Vec<Notification>,
    #[cfg_attr(feature = "serde", serde(default))]
    settings: Settings,
}

impl Notifications {
    /// Create an empty collector with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collector with `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Notifications {
            items: Vec::new(),
            settings,
        }
    }

    /// Create an empty collector rendering messages in `locale`.
    pub fn with_locale(locale: Locale) -> Self {
        Self::with_settings(Settings::new().locale(locale))
    }

    /// The collector settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The message locale.
    pub fn locale(&self) -> Locale {
        self.settings.get_locale()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` when nothing was recorded.
    pub fn is_valid(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` when at least one notification was recorded.
    pub fn is_invalid(&self) -> bool {
        !self.items.is_empty()
    }

    /// Alias of [`is_invalid`](Self::is_invalid).
    pub fn has_notifications(&self) -> bool {
        !self.items.is_empty()
    }

    /// Iterate over the notifications in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// The notifications as a slice.
    pub fn as_slice(&self) -> &[Notification] {
        &self.items
    }

    /// Iterate over the messages in insertion order.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(Notification::message)
    }

    /// Notifications recorded for `property`.
    pub fn for_property<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a Notification> {
        self.items.iter().filter(move |n| n.property() == property)
    }

    /// Whether some notification carries exactly `message`.
    pub fn contains_message(&self, message: &str) -> bool {
        self.items.iter().any(|n| n.message() == message)
    }

    /// Append a custom notification.
    pub fn add(&mut self, property: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.push(Notification::new(property, message));
        self
    }

    /// Append a custom notification whose message is rendered from a
    /// positional template such as `"{0} must be older than {1}"`.
    ///
    /// # Errors
    ///
    /// Fails when the template is malformed or references a missing argument.
    /// Nothing is recorded in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use notifiable::Notifications;
    ///
    /// let mut notifications = Notifications::new();
    /// notifications
    ///     .add_formatted("Age", "{0} must be at least {1}", &[&"Age", &18])
    ///     .unwrap();
    /// assert!(notifications.contains_message("Age must be at least 18"));
    /// ```
    pub fn add_formatted(
        &mut self,
        property: impl Into<String>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<&mut Self> {
        let message = messages::render(template, args)?;
        self.push(Notification::new(property, message));
        Ok(self)
    }

    /// Append an existing notification.
    pub fn push(&mut self, notification: Notification) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            property = notification.property(),
            code = notification.code().as_str(),
            "notification recorded"
        );
        self.items.push(notification);
    }

    /// Copy every notification of `other` into this collector.
    pub fn merge<N: Notifiable + ?Sized>(&mut self, other: &N) -> &mut Self {
        self.extend(other.notifications().iter().cloned());
        self
    }

    /// Copy the notifications of every item of `others`, in order.
    pub fn merge_all<'a, I, N>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a N>,
        N: Notifiable + ?Sized + 'a,
    {
        for other in others {
            self.merge(other);
        }
        self
    }

    /// Remove every notification, keeping the settings.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consume the collector, returning its notifications.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }

    /// `Ok(value)` when valid, otherwise the collector itself as the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use notifiable::prelude::*;
    ///
    /// fn parse_age(age: i32) -> Result<i32, Notifications> {
    ///     let mut notifications = Notifications::new();
    ///     notifications.if_not_in_range("Age", age, 0, 150);
    ///     notifications.into_result(age)
    /// }
    ///
    /// assert_eq!(parse_age(30), Ok(30));
    /// assert!(parse_age(200).is_err());
    /// ```
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, Notifications> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Record the outcome of a failed check.
    pub(crate) fn record(
        &mut self,
        code: Code,
        property: Property,
        args: &[&dyn Display],
        value: Option<&dyn Display>,
    ) {
        let (name, custom) = property.into_parts();
        let message = custom.unwrap_or_else(|| code.message(self.locale(), &name, args));
        let mut notification = Notification::new(name, message).with_code(code);
        if self.settings.captures_values() {
            if let Some(value) = value {
                notification = notification.with_value(value.to_string());
            }
        }
        self.push(notification);
    }
}

impl Notifiable for Notifications {
    fn notifications(&self) -> &Notifications {
        self
    }

    fn notifications_mut(&mut self) -> &mut Notifications {
        self
    }
}

impl Extend<Notification> for Notifications {
    fn extend<I: IntoIterator<Item = Notification>>(&mut self, iter: I) {
        for notification in iter {
            self.push(notification);
        }
    }
}

impl FromIterator<Notification> for Notifications {
    fn from_iter<I: IntoIterator<Item = Notification>>(iter: I) -> Self {
        let mut notifications = Notifications::new();
        notifications.extend(iter);
        notifications
    }
}

impl IntoIterator for Notifications {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notifications {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, notification) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", notification)?;
        }
        Ok(())
    }
}

impl StdError for Notifications {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_is_valid() {
        let n = Notifications::new();
        assert!(n.is_valid());
        assert!(!n.is_invalid());
        assert!(!n.has_notifications());
        assert_eq!(n.count(), 0);
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut n = Notifications::new();
        n.add("A", "first").add("B", "second").add("A", "first");
        let props: Vec<&str> = n.iter().map(Notification::property).collect();
        assert_eq!(props, ["A", "B", "A"]);
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn test_add_formatted() {
        let mut n = Notifications::new();
        n.add_formatted("Age", "{0} is {1}", &[&"Age", &12]).unwrap();
        assert_eq!(n.as_slice()[0].message(), "Age is 12");
    }

    #[test]
    fn test_add_formatted_error_records_nothing() {
        let mut n = Notifications::new();
        let err = n.add_formatted("Age", "{0} is {1}", &[&"Age"]).unwrap_err();
        assert_eq!(
            err,
            Error::MissingArgument {
                index: 1,
                provided: 1
            }
        );
        assert!(n.is_valid());
    }

    #[test]
    fn test_for_property() {
        let mut n = Notifications::new();
        n.add("Name", "a").add("Age", "b").add("Name", "c");
        let messages: Vec<&str> = n.for_property("Name").map(Notification::message).collect();
        assert_eq!(messages, ["a", "c"]);
    }

    #[test]
    fn test_merge_all() {
        let mut first = Notifications::new();
        first.add("A", "1");
        let mut second = Notifications::new();
        second.add("B", "2").add("C", "3");

        let mut target = Notifications::new();
        target.merge_all([&first, &second]);
        assert_eq!(target.count(), 3);
        assert_eq!(first.count(), 1);
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut n = Notifications::with_locale(Locale::PtBr);
        n.add("A", "1");
        n.clear();
        assert!(n.is_valid());
        assert_eq!(n.locale(), Locale::PtBr);
    }

    #[test]
    fn test_record_without_capture() {
        let mut n = Notifications::new();
        n.record(Code::LowerThan, "Age".into(), &[&18], Some(&10));
        let item = &n.as_slice()[0];
        assert_eq!(item.code(), Code::LowerThan);
        assert_eq!(item.value(), None);
        assert_eq!(item.message(), "Field Age should be greater than or equals to 18.");
    }

    #[test]
    fn test_record_with_capture() {
        let mut n = Notifications::with_settings(Settings::new().capture_values(true));
        n.record(Code::LowerThan, "Age".into(), &[&18], Some(&10));
        assert_eq!(n.as_slice()[0].value(), Some("10"));
    }

    #[test]
    fn test_record_with_override() {
        let mut n = Notifications::new();
        n.record(
            Code::NullOrEmpty,
            Property::new("Name").message("Name could not be empty"),
            &[],
            None,
        );
        assert!(n.contains_message("Name could not be empty"));
        assert_eq!(n.as_slice()[0].code(), Code::NullOrEmpty);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Notifications::new().into_result(5), Ok(5));
        let mut n = Notifications::new();
        n.add("A", "bad");
        let err = n.into_result(5).unwrap_err();
        assert_eq!(err.count(), 1);
    }

    #[test]
    fn test_collect_and_into_iter() {
        let collected: Notifications = vec![Notification::new("A", "1"), Notification::new("B", "2")]
            .into_iter()
            .collect();
        let back: Vec<Notification> = collected.into_iter().collect();
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Notifications::new().to_string(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_settings() {
        let mut n = Notifications::with_locale(Locale::PtBr);
        n.add("Name", "obrigatório");
        let json = serde_json::to_string(&n).unwrap();
        let back: Notifications = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
        assert_eq!(back.locale(), Locale::PtBr);
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_push_emits_debug_event() {
        let mut n = Notifications::new();
        n.record(Code::NotCpf, "Cpf".into(), &[], None);
        assert!(logs_contain("notification recorded"));
        assert!(logs_contain("not_cpf"));
    }
}
