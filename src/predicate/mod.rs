//! Pure predicates behind every check
//!
//! Each check of [`checks`](crate::checks) is a predicate from this module
//! plus a message. The predicates can also be used on their own and composed
//! with `and`, `or` and `not`:
//!
//! ```rust
//! use notifiable::predicate::*;
//!
//! let document = PredicateExt::<str>::or(is_cpf(), is_cnpj());
//! assert!(document.check("529.982.247-25"));
//! assert!(document.check("11.222.333/0001-81"));
//!
//! let adult = ge(18).and(lt(150));
//! assert!(adult.check(&30));
//! assert!(!adult.check(&12));
//! ```

mod collection;
mod combinators;
mod document;
mod enumeration;
mod number;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export string predicates
pub use string::{
    contains, eq_ignore_case, is_blank, is_date, is_email, is_empty_str, is_guid, is_url,
    len_between, len_eq, len_max, len_min, matches, Contains, EqIgnoreCase, IsBlank, IsDate,
    IsEmail, IsEmptyStr, IsGuid, IsUrl, LenBetween, Matches,
};

// Re-export number predicates
pub use number::{
    between, eq, ge, gt, is_zero, le, lt, ne, strictly_between, Between, Eq, Ge, Gt, IsZero, Le,
    Lt, Ne, StrictlyBetween, Zero,
};

// Re-export collection predicates
pub use collection::{is_empty, is_not_empty, HasLength, IsEmpty, IsNotEmpty};

// Re-export enumeration predicates
pub use enumeration::{is_defined, IsDefined};

// Re-export document predicates
pub use document::{
    cnpj_check_digits, cpf_check_digits, is_cnpj, is_cpf, valid_cnpj, valid_cpf, Cnpj, Cpf,
};
