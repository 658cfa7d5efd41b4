//! Collection predicates
//!
//! Any container implementing [`HasLength`] can be checked, including maps
//! and sets.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::combinators::Predicate;

/// Containers that know how many elements they hold.
pub trait HasLength {
    /// Number of elements. Strings count `char`s.
    fn length(&self) -> usize;
}

impl<T> HasLength for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLength for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for str {
    #[inline]
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    #[inline]
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl<C: HasLength + ?Sized> HasLength for &C {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Predicate that checks if a collection is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl<C: HasLength + ?Sized> Predicate<C> for IsEmpty {
    #[inline]
    fn check(&self, value: &C) -> bool {
        value.length() == 0
    }
}

/// Create a predicate that checks if a collection is empty.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_empty().check(&Vec::<i32>::new()));
/// assert!(!is_empty().check(&vec![1, 2, 3]));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Predicate that checks if a collection is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNotEmpty;

impl<C: HasLength + ?Sized> Predicate<C> for IsNotEmpty {
    #[inline]
    fn check(&self, value: &C) -> bool {
        value.length() != 0
    }
}

/// Create a predicate that checks if a collection is not empty.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_not_empty().check(&vec![1, 2, 3]));
/// assert!(!is_not_empty().check(&Vec::<i32>::new()));
/// ```
pub fn is_not_empty() -> IsNotEmpty {
    IsNotEmpty
}
