//! The `Predicate` trait and its logical combinators

/// A pure condition over values of type `T`.
///
/// Every check of this crate is a predicate plus a message. Predicates
/// compose with [`PredicateExt`]:
///
/// ```rust
/// use notifiable::predicate::*;
///
/// let working_age = ge(16).and(le(70));
/// assert!(working_age.check(&25));
/// assert!(!working_age.check(&12));
///
/// let corporate = PredicateExt::<str>::and(is_email(), contains("@empresa.com.br"));
/// assert!(corporate.check("ana@empresa.com.br"));
/// assert!(!corporate.check("ana@gmail.com"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Whether `value` satisfies the condition.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// `and`, `or` and `not` for every predicate.
///
/// The combinators return concrete types, so a composed predicate is as
/// cheap as the hand-written condition.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both predicates hold.
    ///
    /// ```rust
    /// use notifiable::predicate::*;
    ///
    /// let short_code = PredicateExt::<str>::and(len_min(3), len_max(5));
    /// assert!(short_code.check("SP01"));
    /// assert!(!short_code.check("SP"));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// At least one predicate holds.
    ///
    /// ```rust
    /// use notifiable::predicate::*;
    ///
    /// let document = PredicateExt::<str>::or(is_cpf(), is_cnpj());
    /// assert!(document.check("529.982.247-25"));
    /// assert!(document.check("11.222.333/0001-81"));
    /// assert!(!document.check("123"));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// The predicate does not hold.
    ///
    /// ```rust
    /// use notifiable::predicate::*;
    ///
    /// let filled = PredicateExt::<str>::not(is_blank());
    /// assert!(filled.check("Ana"));
    /// assert!(!filled.check("  "));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Conjunction of two predicates.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Disjunction of two predicates.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// Negation of a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{gt, is_blank, is_cnpj, is_cpf, is_email, is_zero, len_max, lt};

    #[test]
    fn test_and_bounds_an_age() {
        let p = gt(0).and(lt(120));
        assert!(p.check(&35));
        assert!(!p.check(&0));
        assert!(!p.check(&120));
    }

    #[test]
    fn test_or_outside_range() {
        let out_of_range = lt(18).or(gt(65));
        assert!(out_of_range.check(&16));
        assert!(out_of_range.check(&70));
        assert!(!out_of_range.check(&40));
    }

    #[test]
    fn test_not_zero() {
        let p = PredicateExt::<i32>::not(is_zero());
        assert!(p.check(&-5_i32));
        assert!(!p.check(&0_i32));
    }

    #[test]
    fn test_document_either() {
        let p = PredicateExt::<str>::or(is_cpf(), is_cnpj());
        assert!(p.check("529.982.247-25"));
        assert!(p.check("11.222.333/0001-81"));
        assert!(!p.check("80288216000134"));
    }

    #[test]
    fn test_string_chain() {
        let p = PredicateExt::<str>::and(
            PredicateExt::<str>::and(is_email(), len_max(20)),
            PredicateExt::<str>::not(is_blank()),
        );
        assert!(p.check("ana@example.com"));
        assert!(!p.check("a.very.long.address@example.com"));
        assert!(!p.check("ana"));
    }

    #[test]
    fn test_closure_as_predicate() {
        let even = |x: &u32| x % 2 == 0;
        assert!(even.check(&4));
        assert!(!even.check(&3));

        let even_and_positive = even.and(gt(0));
        assert!(even_and_positive.check(&4));
        assert!(!even_and_positive.check(&0));
    }
}
