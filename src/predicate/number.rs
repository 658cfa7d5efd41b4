//! Ordering and equality predicates
//!
//! Comparisons work for anything `PartialOrd`: integers, floats,
//! `rust_decimal::Decimal` and `chrono` dates all go through the same
//! predicates. A NaN fails every comparison.
//!
//! ```rust
//! use notifiable::predicate::*;
//! use rust_decimal::Decimal;
//!
//! let price = Decimal::new(1999, 2);
//! assert!(between(Decimal::ZERO, Decimal::new(5000, 2)).check(&price));
//! assert!(gt(Decimal::new(1000, 2)).check(&price));
//! ```

use super::combinators::Predicate;

macro_rules! comparison {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $bound:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(pub T);

        impl<T: $bound + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        $(#[$doc])*
        pub fn $ctor<T: $bound + Send + Sync>(reference: T) -> $name<T> {
            $name(reference)
        }
    };
}

comparison!(
    /// Holds when the value equals the reference.
    Eq, eq, PartialEq, ==
);
comparison!(
    /// Holds when the value differs from the reference.
    Ne, ne, PartialEq, !=
);
comparison!(
    /// Holds when the value is greater than the reference.
    ///
    /// ```rust
    /// use notifiable::predicate::*;
    ///
    /// assert!(gt(100).check(&101));
    /// assert!(!gt(100).check(&100));
    /// ```
    Gt, gt, PartialOrd, >
);
comparison!(
    /// Holds when the value is greater than or equal to the reference.
    Ge, ge, PartialOrd, >=
);
comparison!(
    /// Holds when the value is lower than the reference.
    ///
    /// ```rust
    /// use notifiable::predicate::*;
    ///
    /// let minor = lt(18);
    /// assert!(minor.check(&17));
    /// assert!(!minor.check(&18));
    /// ```
    Lt, lt, PartialOrd, <
);
comparison!(
    /// Holds when the value is lower than or equal to the reference.
    Le, le, PartialOrd, <=
);

/// Value inside `[min, max]`.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate for `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// let adult = between(18, 130);
/// assert!(adult.check(&18));
/// assert!(adult.check(&130));
/// assert!(!adult.check(&17));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Value inside `(min, max)`.
#[derive(Clone, Copy, Debug)]
pub struct StrictlyBetween<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for StrictlyBetween<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.min && *value < self.max
    }
}

/// Create a predicate for `min < value < max`.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// let p = strictly_between(0, 10);
/// assert!(p.check(&5));
/// assert!(!p.check(&0));
/// assert!(!p.check(&10));
/// ```
pub fn strictly_between<T: PartialOrd + Send + Sync>(min: T, max: T) -> StrictlyBetween<T> {
    StrictlyBetween { min, max }
}

/// Values with a zero.
pub trait Zero {
    /// Whether this value is zero.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_zero {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Zero for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero!(0.0 => f32, f64);
impl_zero!(rust_decimal::Decimal::ZERO => rust_decimal::Decimal);

/// Predicate that checks if a value is zero.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsZero;

impl<T: Zero> Predicate<T> for IsZero {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_zero()
    }
}

/// Create a predicate that checks if a value is zero.
///
/// `-0.0` is zero.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_zero().check(&0_i32));
/// assert!(is_zero().check(&-0.0_f64));
/// assert!(!is_zero().check(&0.01_f32));
/// ```
pub fn is_zero() -> IsZero {
    IsZero
}
