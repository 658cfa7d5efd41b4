//! Enumeration predicates

use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;

/// Predicate that checks if a raw value maps to a variant of `E`.
pub struct IsDefined<E>(PhantomData<fn() -> E>);

impl<E> Clone for IsDefined<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for IsDefined<E> {}

impl<E> fmt::Debug for IsDefined<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsDefined<{}>", std::any::type_name::<E>())
    }
}

impl<E, R> Predicate<R> for IsDefined<E>
where
    E: TryFrom<R>,
    R: Clone,
{
    #[inline]
    fn check(&self, value: &R) -> bool {
        E::try_from(value.clone()).is_ok()
    }
}

/// Create a predicate that checks if a raw value converts into `E`.
///
/// "Defined" means `E: TryFrom<R>` accepts the value.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// #[derive(Debug)]
/// enum Gender {
///     Male = 1,
///     Female = 2,
/// }
///
/// impl TryFrom<i32> for Gender {
///     type Error = i32;
///
///     fn try_from(raw: i32) -> Result<Self, i32> {
///         match raw {
///             1 => Ok(Gender::Male),
///             2 => Ok(Gender::Female),
///             other => Err(other),
///         }
///     }
/// }
///
/// assert!(is_defined::<Gender>().check(&2));
/// assert!(!is_defined::<Gender>().check(&3));
/// ```
pub fn is_defined<E>() -> IsDefined<E> {
    IsDefined(PhantomData)
}
