//! String predicates
//!
//! Lengths are counted in `char`s, so `"ção"` has length 3.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::combinators::Predicate;
use crate::config::Locale;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(http://www\.|https://www\.|http://|https://)[a-z0-9]+([-.][a-z0-9]+)*\.[a-z]{2,5}(:[0-9]{1,5})?(/.*)?$",
    )
    .unwrap()
});

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

const DAY_FIRST_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];

const MONTH_FIRST_FORMATS: [&str; 3] = ["%m/%d/%Y", "%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"];

/// Predicate that checks if a string is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmptyStr;

impl Predicate<str> for IsEmptyStr {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.is_empty()
    }
}

impl Predicate<String> for IsEmptyStr {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.is_empty()
    }
}

/// Create a predicate that checks if a string is empty.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_empty_str().check(""));
/// assert!(!is_empty_str().check(" "));
/// ```
pub fn is_empty_str() -> IsEmptyStr {
    IsEmptyStr
}

/// Predicate that checks if a string is empty or only whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBlank;

impl Predicate<str> for IsBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.trim().is_empty()
    }
}

impl Predicate<String> for IsBlank {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.trim().is_empty()
    }
}

/// Create a predicate that checks if a string is empty or only whitespace.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_blank().check(" \t\n"));
/// assert!(!is_blank().check(" a "));
/// ```
pub fn is_blank() -> IsBlank {
    IsBlank
}

/// Predicate that checks string length is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

impl Predicate<String> for LenBetween {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.check(value.as_str())
    }
}

/// Create a predicate that checks if string length is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// let p = len_between(3, 10);
/// assert!(!p.check("ab"));      // too short
/// assert!(p.check("abc"));      // exactly min
/// assert!(p.check("1234567890")); // exactly max
/// assert!(!p.check("12345678901")); // too long
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks if string length is at least min.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(len_min(3).check("ação"));
/// assert!(!len_min(3).check("ab"));
/// ```
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(len_max(5).check("hello"));
/// assert!(!len_max(5).check("toolong"));
/// ```
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Create a predicate that checks if string length is exactly len.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(len_eq(3).check("ção"));
/// assert!(!len_eq(5).check("hi"));
/// ```
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}

/// Predicate that checks if string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for Contains<S> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.contains(self.0.as_ref())
    }
}

/// Create a predicate that checks if string contains substring.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(contains("@").check("user@example.com"));
/// assert!(!contains("@").check("invalid"));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Upper case of `c` when it maps to a single character, `c` otherwise.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Predicate that compares strings ignoring case.
///
/// Characters are compared one by one, so `ß` never equals `SS`.
#[derive(Clone, Debug)]
pub struct EqIgnoreCase<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EqIgnoreCase<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value
            .chars()
            .map(simple_upper)
            .eq(self.0.as_ref().chars().map(simple_upper))
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for EqIgnoreCase<S> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.check(value.as_str())
    }
}

/// Create a predicate that checks if a string equals `expected` ignoring case.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(eq_ignore_case("JOÃO").check("joão"));
/// assert!(!eq_ignore_case("joão").check("joana"));
/// ```
pub fn eq_ignore_case<S: AsRef<str> + Send + Sync>(expected: S) -> EqIgnoreCase<S> {
    EqIgnoreCase(expected)
}

/// Predicate that checks if a string matches a regular expression.
#[derive(Clone, Copy, Debug)]
pub struct Matches<'r>(pub &'r Regex);

impl Predicate<str> for Matches<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl Predicate<String> for Matches<'_> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks if a string matches `regex`.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
/// use notifiable::Regex;
///
/// let zip = Regex::new(r"^\d{5}-\d{3}$").unwrap();
/// assert!(matches(&zip).check("01310-100"));
/// assert!(!matches(&zip).check("01310100"));
/// ```
pub fn matches(regex: &Regex) -> Matches<'_> {
    Matches(regex)
}

/// Predicate that checks if a string is an e-mail address.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmail;

impl Predicate<str> for IsEmail {
    #[inline]
    fn check(&self, value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}

impl Predicate<String> for IsEmail {
    #[inline]
    fn check(&self, value: &String) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}

/// Create a predicate that checks if a string is an e-mail address.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_email().check("maria.silva@empresa.com.br"));
/// assert!(!is_email().check("maria.silva"));
/// ```
pub fn is_email() -> IsEmail {
    IsEmail
}

/// Predicate that checks if a string is an absolute http(s) URL.
///
/// Hosts are matched in lower case only.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUrl;

impl Predicate<str> for IsUrl {
    #[inline]
    fn check(&self, value: &str) -> bool {
        URL_REGEX.is_match(value)
    }
}

impl Predicate<String> for IsUrl {
    #[inline]
    fn check(&self, value: &String) -> bool {
        URL_REGEX.is_match(value)
    }
}

/// Create a predicate that checks if a string is an http(s) URL.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_url().check("https://www.example.com:8080/path?q=1"));
/// assert!(!is_url().check("ftp://example.com"));
/// ```
pub fn is_url() -> IsUrl {
    IsUrl
}

/// Predicate that checks if a string is a GUID.
///
/// Hyphenated, simple, braced and parenthesised forms are accepted.
/// The `urn:uuid:` form is not.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsGuid;

impl Predicate<str> for IsGuid {
    fn check(&self, value: &str) -> bool {
        let value = value.trim();
        let guid = match value.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
            Some(inner) if inner.len() == 36 => inner,
            Some(_) => return false,
            None => value,
        };
        let urn = guid
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("urn:"));
        !urn && uuid::Uuid::parse_str(guid).is_ok()
    }
}

impl Predicate<String> for IsGuid {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.check(value.as_str())
    }
}

/// Create a predicate that checks if a string is a GUID.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_guid().check("67e55044-10b1-426f-9247-bb680e5fe0c8"));
/// assert!(is_guid().check("{67e55044-10b1-426f-9247-bb680e5fe0c8}"));
/// assert!(is_guid().check("(67e55044-10b1-426f-9247-bb680e5fe0c8)"));
/// assert!(!is_guid().check("urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8"));
/// assert!(!is_guid().check("67e55044-10b1-426f"));
/// ```
pub fn is_guid() -> IsGuid {
    IsGuid
}

/// Predicate that checks if a string is a date or a date-time.
///
/// Accepted forms: RFC 3339, RFC 2822, ISO 8601 dates and date-times,
/// `yyyy/mm/dd`, and slash-separated dates whose day/month order follows the
/// locale (`dd/mm/yyyy` for `pt-BR`, `mm/dd/yyyy` for `en-US`).
#[derive(Clone, Copy, Default, Debug)]
pub struct IsDate {
    locale: Locale,
}

impl IsDate {
    fn parses(&self, value: &str) -> bool {
        let value = value.trim();
        if DateTime::parse_from_rfc3339(value).is_ok()
            || DateTime::parse_from_rfc2822(value).is_ok()
        {
            return true;
        }

        let local = if self.locale.day_first() {
            &DAY_FIRST_FORMATS
        } else {
            &MONTH_FIRST_FORMATS
        };

        DATE_TIME_FORMATS
            .iter()
            .chain(local.iter().skip(1))
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
            || DATE_FORMATS
                .iter()
                .chain(local.iter().take(1))
                .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
    }
}

impl Predicate<str> for IsDate {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.parses(value)
    }
}

impl Predicate<String> for IsDate {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.parses(value)
    }
}

/// Create a predicate that checks if a string is a date in `locale`.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
/// use notifiable::Locale;
///
/// assert!(is_date(Locale::PtBr).check("31/12/2024"));
/// assert!(!is_date(Locale::EnUs).check("31/12/2024"));
/// assert!(is_date(Locale::EnUs).check("2024-12-31T23:59:59Z"));
/// ```
pub fn is_date(locale: Locale) -> IsDate {
    IsDate { locale }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_blank_and_empty() {
        assert!(is_empty_str().check(""));
        assert!(!is_empty_str().check("   "));
        assert!(is_blank().check("   "));
        assert!(is_blank().check(&String::new()));
        assert!(!is_blank().check("x"));
    }

    #[test]
    fn test_len_counts_chars() {
        assert!(len_eq(4).check("ação"));
        assert!(len_between(1, 4).check(&String::from("ação")));
        assert!(!len_max(3).check("ação"));
    }

    #[test]
    fn test_contains() {
        assert!(contains("Silva").check("Maria Silva"));
        assert!(!contains("silva").check("Maria Silva"));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("ANDRE").check("andre"));
        assert!(eq_ignore_case("ÉLODIE").check("élodie"));
        assert!(!eq_ignore_case("straße").check("STRASSE"));
        assert!(!eq_ignore_case("STRASSE").check("straße"));
        assert!(!eq_ignore_case("andre").check("andrea"));
    }

    #[test]
    fn test_email() {
        for ok in ["a@b.co", "first.last@domain.com.br", "o'neil@x.org", "a+b@c-d.io"] {
            assert!(is_email().check(ok), "{}", ok);
        }
        for bad in ["", "plain", "a@b", "@b.com", "a@.com", "a b@c.com"] {
            assert!(!is_email().check(bad), "{}", bad);
        }
    }

    #[test]
    fn test_url() {
        for ok in [
            "http://example.com",
            "https://www.example.com.br/x",
            "http://sub.example.io:8080",
        ] {
            assert!(is_url().check(ok), "{}", ok);
        }
        for bad in ["example.com", "ftp://example.com", "http://localhost", "https://Example.com"] {
            assert!(!is_url().check(bad), "{}", bad);
        }
    }

    #[test]
    fn test_guid() {
        assert!(is_guid().check("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(is_guid().check(" (67E55044-10B1-426F-9247-BB680E5FE0C8) "));
        assert!(!is_guid().check("(67e5504410b1426f9247bb680e5fe0c8)"));
        assert!(!is_guid().check("(67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(!is_guid().check("URN:UUID:67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(!is_guid().check("not-a-guid"));
        assert!(!is_guid().check(""));
    }

    #[test]
    fn test_date_formats() {
        let en = is_date(Locale::EnUs);
        let pt = is_date(Locale::PtBr);
        for ok in [
            "2024-02-29",
            "2024/02/29",
            "2024-02-29T10:30:00",
            "2024-02-29 10:30:00.125",
            "2024-02-29T10:30:00-03:00",
            "Thu, 29 Feb 2024 10:30:00 +0000",
        ] {
            assert!(en.check(ok), "{}", ok);
            assert!(pt.check(ok), "{}", ok);
        }
        assert!(en.check("02/29/2024"));
        assert!(pt.check("29/02/2024 10:30"));
        assert!(!pt.check("02/29/2024"));
        assert!(!en.check("2023-02-29"));
        assert!(!en.check("yesterday"));
    }

    #[test]
    fn test_matches() {
        let digits = Regex::new(r"^\d+$").unwrap();
        let p = PredicateExt::<str>::and(matches(&digits), len_eq(8));
        assert!(p.check("01310100"));
        assert!(!p.check("0131010"));
        assert!(!p.check("0131010a"));
    }
}
