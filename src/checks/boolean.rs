//! Checks over booleans

use super::notify;
use crate::messages::Code;
use crate::notifiable::Notifiable;
use crate::notification::Property;

/// Checks for boolean values.
pub trait BoolChecks: Notifiable {
    /// Notify when the value is `true`.
    fn if_true(&mut self, property: impl Into<Property>, value: bool) -> &mut Self {
        if value {
            notify(self, Code::True, property, &[], Some(&value));
        }
        self
    }

    /// Notify when the value is `false`.
    fn if_false(&mut self, property: impl Into<Property>, value: bool) -> &mut Self {
        if !value {
            notify(self, Code::False, property, &[], Some(&value));
        }
        self
    }
}

impl<N: Notifiable> BoolChecks for N {}
