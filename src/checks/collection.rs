//! Checks over collections

use super::notify;
use crate::messages::Code;
use crate::notifiable::Notifiable;
use crate::notification::Property;
use crate::predicate::{is_empty, HasLength, Predicate};

/// Checks for collections.
pub trait CollectionChecks: Notifiable {
    /// Notify when the collection is missing.
    fn if_collection_is_null<C>(
        &mut self,
        property: impl Into<Property>,
        value: Option<&C>,
    ) -> &mut Self
    where
        C: HasLength + ?Sized,
    {
        if value.is_none() {
            notify(self, Code::CollectionIsNull, property, &[], None);
        }
        self
    }

    /// Notify when the collection is missing or has no elements.
    fn if_collection_is_null_or_empty<C>(
        &mut self,
        property: impl Into<Property>,
        value: Option<&C>,
    ) -> &mut Self
    where
        C: HasLength + ?Sized,
    {
        if value.map_or(true, |c| is_empty().check(c)) {
            notify(self, Code::CollectionIsNullOrEmpty, property, &[], None);
        }
        self
    }

    /// Notify when the collection has no elements.
    fn if_collection_is_empty<C>(&mut self, property: impl Into<Property>, value: &C) -> &mut Self
    where
        C: HasLength + ?Sized,
    {
        if is_empty().check(value) {
            notify(self, Code::CollectionIsEmpty, property, &[], None);
        }
        self
    }
}

impl<N: Notifiable> CollectionChecks for N {}
