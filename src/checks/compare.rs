//! Checks over ordered values
//!
//! Works for any `PartialOrd + Display` value: integers, floats,
//! `rust_decimal::Decimal`, `chrono` dates and date-times. Comparisons follow
//! `PartialOrd`, so a NaN never satisfies an ordering condition.

use std::fmt::Display;

use super::notify;
use crate::messages::Code;
use crate::notifiable::Notifiable;
use crate::notification::Property;
use crate::predicate::{
    eq, ge, gt, is_zero, le, lt, ne, strictly_between, Predicate, PredicateExt, Zero,
};

/// Checks for comparable values.
pub trait CompareChecks: Notifiable {
    /// Notify when `value < min`.
    fn if_lower_than<V>(&mut self, property: impl Into<Property>, value: V, min: V) -> &mut Self
    where
        V: PartialOrd + Display + Sync,
    {
        if lt(&min).check(&&value) {
            notify(self, Code::LowerThan, property, &[&min], Some(&value));
        }
        self
    }

    /// Notify when `value > max`.
    fn if_greater_than<V>(&mut self, property: impl Into<Property>, value: V, max: V) -> &mut Self
    where
        V: PartialOrd + Display + Sync,
    {
        if gt(&max).check(&&value) {
            notify(self, Code::GreaterThan, property, &[&max], Some(&value));
        }
        self
    }

    /// Notify when `value <= bound`.
    fn if_lower_or_equal<V>(
        &mut self,
        property: impl Into<Property>,
        value: V,
        bound: V,
    ) -> &mut Self
    where
        V: PartialOrd + Display + Sync,
    {
        if le(&bound).check(&&value) {
            notify(self, Code::LowerOrEqual, property, &[&bound], Some(&value));
        }
        self
    }

    /// Notify when `value >= bound`.
    fn if_greater_or_equal<V>(
        &mut self,
        property: impl Into<Property>,
        value: V,
        bound: V,
    ) -> &mut Self
    where
        V: PartialOrd + Display + Sync,
    {
        if ge(&bound).check(&&value) {
            notify(self, Code::GreaterOrEqual, property, &[&bound], Some(&value));
        }
        self
    }

    /// Notify when `value < min` or `value > max`.
    fn if_not_in_range<V>(
        &mut self,
        property: impl Into<Property>,
        value: V,
        min: V,
        max: V,
    ) -> &mut Self
    where
        V: PartialOrd + Display + Sync,
    {
        if lt(&min).or(gt(&max)).check(&&value) {
            notify(self, Code::NotInRange, property, &[&min, &max], Some(&value));
        }
        self
    }

    /// Notify when `min < value < max`.
    fn if_in_range<V>(
        &mut self,
        property: impl Into<Property>,
        value: V,
        min: V,
        max: V,
    ) -> &mut Self
    where
        V: PartialOrd + Display + Sync,
    {
        if strictly_between(&min, &max).check(&&value) {
            notify(self, Code::InRange, property, &[&min, &max], Some(&value));
        }
        self
    }

    /// Notify when `value == other`.
    fn if_equals<V>(&mut self, property: impl Into<Property>, value: V, other: V) -> &mut Self
    where
        V: PartialEq + Display + Sync,
    {
        if eq(&other).check(&&value) {
            notify(self, Code::Equals, property, &[&other], Some(&value));
        }
        self
    }

    /// Notify when `value != other`.
    fn if_not_equals<V>(&mut self, property: impl Into<Property>, value: V, other: V) -> &mut Self
    where
        V: PartialEq + Display + Sync,
    {
        if ne(&other).check(&&value) {
            notify(self, Code::NotEquals, property, &[&other], Some(&value));
        }
        self
    }

    /// Notify when `value` is zero.
    fn if_zero<V>(&mut self, property: impl Into<Property>, value: V) -> &mut Self
    where
        V: Zero + Display,
    {
        if is_zero().check(&value) {
            notify(self, Code::Zero, property, &[], Some(&value));
        }
        self
    }
}

impl<N: Notifiable> CompareChecks for N {}
