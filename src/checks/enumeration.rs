//! Checks over raw values that should name an enum variant

use std::fmt::Display;

use super::notify;
use crate::messages::Code;
use crate::notifiable::Notifiable;
use crate::notification::Property;
use crate::predicate::{is_defined, Predicate};

/// Checks for enumerations.
pub trait EnumChecks: Notifiable {
    /// Notify when `raw` does not convert into a variant of `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notifiable::prelude::*;
    ///
    /// enum Gender {
    ///     Male,
    ///     Female,
    /// }
    ///
    /// impl TryFrom<i32> for Gender {
    ///     type Error = ();
    ///
    ///     fn try_from(raw: i32) -> Result<Self, ()> {
    ///         match raw {
    ///             1 => Ok(Gender::Male),
    ///             2 => Ok(Gender::Female),
    ///             _ => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// let mut notifications = Notifications::new();
    /// notifications
    ///     .if_enum_invalid::<Gender, _>("Gender", 1)
    ///     .if_enum_invalid::<Gender, _>("Gender", 3);
    /// assert_eq!(notifications.count(), 1);
    /// ```
    fn if_enum_invalid<E, R>(&mut self, property: impl Into<Property>, raw: R) -> &mut Self
    where
        E: TryFrom<R>,
        R: Clone + Display,
    {
        if !is_defined::<E>().check(&raw) {
            notify(self, Code::EnumInvalid, property, &[], Some(&raw));
        }
        self
    }
}

impl<N: Notifiable> EnumChecks for N {}
