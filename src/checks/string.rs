//! Checks over optional strings
//!
//! Values are `impl Into<Option<&str>>`: pass a `&str`, or an `Option<&str>`
//! (`field.as_deref()`) where `None` stands for a missing value.

use regex::Regex;

use super::{attempted, notify};
use crate::error::{Error, Result};
use crate::messages::Code;
use crate::notifiable::Notifiable;
use crate::notification::Property;
use crate::predicate::{
    contains, eq_ignore_case, is_blank, is_cnpj, is_cpf, is_date, is_email, is_empty_str, is_guid,
    is_url, len_between, len_eq, len_max, len_min, matches, Predicate,
};

/// Checks for string values.
pub trait StringChecks: Notifiable {
    /// Notify when the value is missing or empty.
    fn if_null_or_empty<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if value.map_or(true, |v| is_empty_str().check(v)) {
            notify(self, Code::NullOrEmpty, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing, empty or only whitespace.
    fn if_null_or_white_space<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if value.map_or(true, |v| is_blank().check(v)) {
            notify(self, Code::NullOrWhiteSpace, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is present and not empty.
    fn if_not_null_or_empty<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if value.is_some_and(|v| !is_empty_str().check(v)) {
            notify(self, Code::NotNullOrEmpty, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing, blank, or its length falls outside
    /// `min..=max`.
    fn if_null_or_invalid_length<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        min: usize,
        max: usize,
    ) -> &mut Self {
        let value = value.into();
        let invalid = match value {
            Some(v) => is_blank().check(v) || !len_between(min, max).check(v),
            None => true,
        };
        if invalid {
            notify(
                self,
                Code::NullOrInvalidLength,
                property,
                &[&min, &max],
                attempted(&value),
            );
        }
        self
    }

    /// Notify when a non-empty value is shorter than `min` characters.
    fn if_length_lower_than<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        min: usize,
    ) -> &mut Self {
        let value = value.into();
        if value.is_some_and(|v| !v.is_empty() && !len_min(min).check(v)) {
            notify(self, Code::LengthLowerThan, property, &[&min], attempted(&value));
        }
        self
    }

    /// Notify when a non-empty value is longer than `max` characters.
    fn if_length_greater_than<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        max: usize,
    ) -> &mut Self {
        let value = value.into();
        if value.is_some_and(|v| !v.is_empty() && !len_max(max).check(v)) {
            notify(self, Code::LengthGreaterThan, property, &[&max], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing, empty, or not exactly `len`
    /// characters long.
    fn if_length_not_equal<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        len: usize,
    ) -> &mut Self {
        let value = value.into();
        if value.map_or(true, |v| v.is_empty() || !len_eq(len).check(v)) {
            notify(self, Code::LengthNotEqual, property, &[&len], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing or not an e-mail address.
    fn if_not_email<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| is_email().check(v)) {
            notify(self, Code::NotEmail, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing or not an http(s) URL.
    fn if_not_url<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| is_url().check(v)) {
            notify(self, Code::NotUrl, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing or does not contain `text`.
    fn if_not_contains<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        text: &str,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| contains(text).check(v)) {
            notify(self, Code::NotContains, property, &[&text], attempted(&value));
        }
        self
    }

    /// Notify when the value contains `text`.
    fn if_contains<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        text: &str,
    ) -> &mut Self {
        let value = value.into();
        if value.is_some_and(|v| contains(text).check(v)) {
            notify(self, Code::Contains, property, &[&text], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing, blank, or not a valid CPF.
    fn if_not_cpf<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| is_cpf().check(v)) {
            notify(self, Code::NotCpf, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing, blank, or not a valid CNPJ.
    fn if_not_cnpj<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| is_cnpj().check(v)) {
            notify(self, Code::NotCnpj, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing or not a GUID.
    fn if_not_guid<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| is_guid().check(v)) {
            notify(self, Code::NotGuid, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing or not a date.
    ///
    /// Slash-separated dates are read in the collector's locale order.
    fn if_not_date<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into();
        let date = is_date(self.notifications().locale());
        if !value.is_some_and(|v| date.check(v)) {
            notify(self, Code::NotDate, property, &[], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing or differs from `text` ignoring case.
    fn if_not_equals_ignore_case<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        text: &str,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| eq_ignore_case(text).check(v)) {
            notify(self, Code::NotEqualsIgnoreCase, property, &[&text], attempted(&value));
        }
        self
    }

    /// Notify when the value equals `text` ignoring case.
    fn if_equals_ignore_case<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        text: &str,
    ) -> &mut Self {
        let value = value.into();
        if value.is_some_and(|v| eq_ignore_case(text).check(v)) {
            notify(self, Code::EqualsIgnoreCase, property, &[&text], attempted(&value));
        }
        self
    }

    /// Notify when the value is missing or does not match `regex`.
    fn if_not_match<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        regex: &Regex,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_some_and(|v| matches(regex).check(v)) {
            notify(self, Code::NotMatch, property, &[], attempted(&value));
        }
        self
    }

    /// Like [`if_not_match`](Self::if_not_match), compiling `pattern` first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPattern`] when `pattern` does not compile. Nothing is
    /// recorded in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use notifiable::prelude::*;
    ///
    /// let mut notifications = Notifications::new();
    /// notifications.try_if_not_match("Zip", "01310-100", r"^\d{5}-\d{3}$")?;
    /// assert!(notifications.is_valid());
    ///
    /// assert!(notifications.try_if_not_match("Zip", "x", "(").is_err());
    /// # Ok::<(), notifiable::Error>(())
    /// ```
    fn try_if_not_match<'v>(
        &mut self,
        property: impl Into<Property>,
        value: impl Into<Option<&'v str>>,
        pattern: &str,
    ) -> Result<&mut Self> {
        let regex = Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, &e))?;
        Ok(self.if_not_match(property, value, &regex))
    }
}

impl<N: Notifiable> StringChecks for N {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Locale, Settings};
    use crate::notifications::Notifications;

    fn codes(n: &Notifications) -> Vec<Code> {
        n.iter().map(|x| x.code()).collect()
    }

    #[test]
    fn test_null_or_empty() {
        let mut n = Notifications::new();
        n.if_null_or_empty("A", None)
            .if_null_or_empty("B", "")
            .if_null_or_empty("C", " ")
            .if_null_or_empty("D", "x");
        let props: Vec<&str> = n.iter().map(|x| x.property()).collect();
        assert_eq!(props, ["A", "B"]);
    }

    #[test]
    fn test_null_or_white_space() {
        let mut n = Notifications::new();
        n.if_null_or_white_space("A", " \t")
            .if_null_or_white_space("B", Some("b"));
        assert_eq!(codes(&n), [Code::NullOrWhiteSpace]);
    }

    #[test]
    fn test_not_null_or_empty() {
        let mut n = Notifications::new();
        n.if_not_null_or_empty("A", None)
            .if_not_null_or_empty("B", "")
            .if_not_null_or_empty("C", "c");
        assert_eq!(n.count(), 1);
        assert_eq!(n.as_slice()[0].property(), "C");
    }

    #[test]
    fn test_invalid_length() {
        let mut n = Notifications::new();
        n.if_null_or_invalid_length("A", "abc", 3, 5)
            .if_null_or_invalid_length("B", "abcdef", 3, 5)
            .if_null_or_invalid_length("C", "   ", 0, 5)
            .if_null_or_invalid_length("D", None, 0, 5);
        let props: Vec<&str> = n.iter().map(|x| x.property()).collect();
        assert_eq!(props, ["B", "C", "D"]);
        assert_eq!(
            n.as_slice()[0].message(),
            "Field B should have between 3 and 5 characters."
        );
    }

    #[test]
    fn test_length_bounds_skip_empty() {
        let mut n = Notifications::new();
        n.if_length_lower_than("A", "", 3)
            .if_length_lower_than("B", None, 3)
            .if_length_greater_than("C", "", 0)
            .if_length_lower_than("D", "ab", 3)
            .if_length_greater_than("E", "abcd", 3);
        assert_eq!(codes(&n), [Code::LengthLowerThan, Code::LengthGreaterThan]);
    }

    #[test]
    fn test_length_not_equal() {
        let mut n = Notifications::new();
        n.if_length_not_equal("A", None, 2)
            .if_length_not_equal("B", "", 0)
            .if_length_not_equal("C", "abc", 2)
            .if_length_not_equal("D", "ab", 2);
        let props: Vec<&str> = n.iter().map(|x| x.property()).collect();
        assert_eq!(props, ["A", "B", "C"]);
    }

    #[test]
    fn test_email_and_url() {
        let mut n = Notifications::new();
        n.if_not_email("A", "ana@example.com")
            .if_not_email("B", "ana")
            .if_not_email("C", None)
            .if_not_url("D", "https://example.com")
            .if_not_url("E", "example");
        assert_eq!(codes(&n), [Code::NotEmail, Code::NotEmail, Code::NotUrl]);
    }

    #[test]
    fn test_contains() {
        let mut n = Notifications::new();
        n.if_not_contains("A", "Maria Silva", "Silva")
            .if_not_contains("B", "Maria", "Silva")
            .if_not_contains("C", None, "Silva")
            .if_contains("D", "Maria Silva", "Silva")
            .if_contains("E", None, "Silva");
        let props: Vec<&str> = n.iter().map(|x| x.property()).collect();
        assert_eq!(props, ["B", "C", "D"]);
        assert_eq!(n.as_slice()[0].message(), "Field B should contain Silva.");
    }

    #[test]
    fn test_documents() {
        let mut n = Notifications::new();
        n.if_not_cpf("A", "529.982.247-25")
            .if_not_cpf("B", "0000000000")
            .if_not_cpf("C", "   ")
            .if_not_cnpj("D", "11222333000181")
            .if_not_cnpj("E", "80288216000134")
            .if_not_cnpj("F", None);
        let props: Vec<&str> = n.iter().map(|x| x.property()).collect();
        assert_eq!(props, ["B", "C", "E", "F"]);
    }

    #[test]
    fn test_guid() {
        let mut n = Notifications::new();
        n.if_not_guid("A", "67e55044-10b1-426f-9247-bb680e5fe0c8")
            .if_not_guid("B", "67e55044")
            .if_not_guid("C", "(67e55044-10b1-426f-9247-bb680e5fe0c8)")
            .if_not_guid("D", "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8");
        let props: Vec<&str> = n.iter().map(|x| x.property()).collect();
        assert_eq!(props, ["B", "D"]);
        assert_eq!(codes(&n), [Code::NotGuid, Code::NotGuid]);
    }

    #[test]
    fn test_date_follows_locale() {
        let mut en = Notifications::new();
        en.if_not_date("A", "12/31/2024").if_not_date("B", "31/12/2024");
        assert_eq!(en.count(), 1);
        assert_eq!(en.as_slice()[0].property(), "B");

        let mut pt = Notifications::with_locale(Locale::PtBr);
        pt.if_not_date("A", "12/31/2024").if_not_date("B", "31/12/2024");
        assert_eq!(pt.count(), 1);
        assert_eq!(pt.as_slice()[0].message(), "O campo A deve ser uma data válida.");
    }

    #[test]
    fn test_equals_ignore_case() {
        let mut n = Notifications::new();
        n.if_not_equals_ignore_case("A", "ADMIN", "admin")
            .if_not_equals_ignore_case("B", "user", "admin")
            .if_not_equals_ignore_case("C", None, "admin")
            .if_equals_ignore_case("D", "Admin", "admin")
            .if_equals_ignore_case("E", None, "admin");
        let props: Vec<&str> = n.iter().map(|x| x.property()).collect();
        assert_eq!(props, ["B", "C", "D"]);
    }

    #[test]
    fn test_ignore_case_is_per_character() {
        let mut n = Notifications::new();
        n.if_not_equals_ignore_case("Street", "STRASSE", "straße")
            .if_equals_ignore_case("Avenue", "STRASSE", "straße");
        assert_eq!(codes(&n), [Code::NotEqualsIgnoreCase]);
        assert_eq!(n.as_slice()[0].property(), "Street");
    }

    #[test]
    fn test_match() {
        let zip = Regex::new(r"^\d{5}-\d{3}$").unwrap();
        let mut n = Notifications::new();
        n.if_not_match("A", "01310-100", &zip)
            .if_not_match("B", "01310100", &zip)
            .if_not_match("C", None, &zip);
        assert_eq!(codes(&n), [Code::NotMatch, Code::NotMatch]);
    }

    #[test]
    fn test_try_match_invalid_pattern() {
        let mut n = Notifications::new();
        let err = n.try_if_not_match("A", "x", "[").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "["));
        assert!(n.is_valid());
    }

    #[test]
    fn test_captures_attempted_value() {
        let mut n = Notifications::with_settings(Settings::new().capture_values(true));
        n.if_not_email("Email", "ana").if_null_or_empty("Name", None);
        assert_eq!(n.as_slice()[0].value(), Some("ana"));
        assert_eq!(n.as_slice()[1].value(), None);
    }

    #[test]
    fn test_message_override() {
        let mut n = Notifications::new();
        n.if_null_or_empty(Property::new("Name").message("Name could not be empty"), "");
        assert_eq!(n.as_slice()[0].message(), "Name could not be empty");
    }
}
