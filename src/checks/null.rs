//! Checks over optional values of any type

use super::notify;
use crate::messages::Code;
use crate::notifiable::Notifiable;
use crate::notification::Property;

/// Checks for presence or absence of a value.
pub trait NullChecks: Notifiable {
    /// Notify when the value is missing.
    fn if_null<V: ?Sized>(&mut self, property: impl Into<Property>, value: Option<&V>) -> &mut Self {
        if value.is_none() {
            notify(self, Code::Null, property, &[], None);
        }
        self
    }

    /// Notify when the value is present.
    fn if_not_null<V: ?Sized>(
        &mut self,
        property: impl Into<Property>,
        value: Option<&V>,
    ) -> &mut Self {
        if value.is_some() {
            notify(self, Code::NotNull, property, &[], None);
        }
        self
    }
}

impl<N: Notifiable> NullChecks for N {}
