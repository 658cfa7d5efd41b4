//! Testing utilities
//!
//! Assertion macros for anything [`Notifiable`](crate::Notifiable) and, with
//! the `proptest` feature, strategies that generate Brazilian documents.
//!
//! # Examples
//!
//! ```rust
//! use notifiable::prelude::*;
//! use notifiable::{assert_invalid, assert_message, assert_notified, assert_valid};
//!
//! let mut ok = Notifications::new();
//! ok.if_null_or_empty("Name", "Ana");
//! assert_valid!(ok);
//!
//! let mut bad = Notifications::new();
//! bad.if_not_cpf("Cpf", "123");
//! assert_invalid!(bad);
//! assert_notified!(bad, "Cpf");
//! assert_message!(bad, "Field Cpf should be a valid CPF.");
//! ```

/// Assert that a notifiable value has no notifications.
///
/// Panics listing the notifications otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($notifiable:expr) => {{
        let target = &$notifiable;
        let notifications = $crate::Notifiable::notifications(target);
        if notifications.is_invalid() {
            panic!("Expected valid, got notifications:\n{}", notifications);
        }
    }};
}

/// Assert that a notifiable value has at least one notification.
#[macro_export]
macro_rules! assert_invalid {
    ($notifiable:expr) => {{
        let target = &$notifiable;
        let notifications = $crate::Notifiable::notifications(target);
        if notifications.is_valid() {
            panic!("Expected invalid, got no notifications");
        }
    }};
}

/// Assert that some notification was recorded for `property`.
#[macro_export]
macro_rules! assert_notified {
    ($notifiable:expr, $property:expr) => {{
        let target = &$notifiable;
        let notifications = $crate::Notifiable::notifications(target);
        let property: &str = $property;
        if notifications.for_property(property).next().is_none() {
            panic!(
                "Expected a notification for {}, got:\n{}",
                property, notifications
            );
        }
    }};
}

/// Assert that some notification carries exactly `message`.
#[macro_export]
macro_rules! assert_message {
    ($notifiable:expr, $message:expr) => {{
        let target = &$notifiable;
        let notifications = $crate::Notifiable::notifications(target);
        let message: &str = $message;
        if !notifications.contains_message(message) {
            panic!(
                "Expected message {:?}, got:\n{}",
                message, notifications
            );
        }
    }};
}

#[cfg(feature = "proptest")]
pub use self::strategies::{formatted_cnpj, formatted_cpf, valid_cnpj, valid_cpf};

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::config::Locale;
    use crate::predicate::{cnpj_check_digits, cpf_check_digits};

    fn digits_to_string(digits: &[u8]) -> String {
        digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Unformatted CPFs with correct check digits.
    pub fn valid_cpf() -> impl Strategy<Value = String> {
        any::<[u8; 9]>().prop_map(|raw| {
            let base = raw.map(|b| b % 10);
            let check = cpf_check_digits(&base);
            let mut all = base.to_vec();
            all.extend_from_slice(&check);
            digits_to_string(&all)
        })
    }

    /// CPFs in the `000.000.000-00` layout.
    pub fn formatted_cpf() -> impl Strategy<Value = String> {
        valid_cpf().prop_map(|d| format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]))
    }

    /// Unformatted CNPJs with correct check digits.
    pub fn valid_cnpj() -> impl Strategy<Value = String> {
        any::<[u8; 12]>().prop_map(|raw| {
            let base = raw.map(|b| b % 10);
            let check = cnpj_check_digits(&base);
            let mut all = base.to_vec();
            all.extend_from_slice(&check);
            digits_to_string(&all)
        })
    }

    /// CNPJs in the `00.000.000/0000-00` layout.
    pub fn formatted_cnpj() -> impl Strategy<Value = String> {
        valid_cnpj().prop_map(|d| {
            format!(
                "{}.{}.{}/{}-{}",
                &d[..2],
                &d[2..5],
                &d[5..8],
                &d[8..12],
                &d[12..]
            )
        })
    }

    impl Arbitrary for Locale {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Locale::EnUs), Just(Locale::PtBr)].boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::checks::{BoolChecks, StringChecks};
    use crate::notifications::Notifications;

    fn invalid() -> Notifications {
        let mut n = Notifications::new();
        n.if_true("Blocked", true);
        n
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Notifications::new());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(invalid());
    }

    #[test]
    fn assert_notified_and_message_macros() {
        let n = invalid();
        assert_notified!(n, "Blocked");
        assert_message!(n, "Field Blocked should be false.");
    }

    #[test]
    #[should_panic(expected = "Expected valid, got notifications")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(invalid());
    }

    #[test]
    #[should_panic(expected = "Expected invalid")]
    fn assert_invalid_panics_on_valid() {
        let mut n = Notifications::new();
        n.if_null_or_empty("Name", "Ana");
        assert_invalid!(n);
    }

    #[test]
    #[should_panic(expected = "Expected a notification for Name")]
    fn assert_notified_panics_on_other_property() {
        assert_notified!(invalid(), "Name");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::*;
        use crate::config::Locale;
        use crate::predicate::{valid_cnpj as is_valid_cnpj, valid_cpf as is_valid_cpf};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generated_cpfs_are_valid(cpf in valid_cpf(), formatted in formatted_cpf()) {
                prop_assert!(is_valid_cpf(&cpf));
                prop_assert_eq!(formatted.len(), 14);
                prop_assert!(is_valid_cpf(&formatted));
            }

            #[test]
            fn generated_cnpjs_are_valid(cnpj in valid_cnpj(), formatted in formatted_cnpj()) {
                prop_assert!(is_valid_cnpj(&cnpj));
                prop_assert_eq!(formatted.len(), 18);
                prop_assert!(is_valid_cnpj(&formatted));
            }

            #[test]
            fn locale_arbitrary_roundtrips(locale in any::<Locale>()) {
                prop_assert_eq!(locale.tag().parse::<Locale>().ok(), Some(locale));
            }
        }
    }
}
