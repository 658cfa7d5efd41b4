//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use notifiable::predicate::prelude::*;
//!
//! let valid_age = ge(0).and(le(150));
//! assert!(valid_age.check(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{And, Not, Or};

// String predicates
pub use super::string::{
    contains, eq_ignore_case, is_blank, is_date, is_email, is_empty_str, is_guid, is_url,
    len_between, len_eq, len_max, len_min, matches,
};

// Number predicates
pub use super::number::{between, eq, ge, gt, is_zero, le, lt, ne, strictly_between, Zero};

// Collection predicates
pub use super::collection::{is_empty, is_not_empty, HasLength};

// Enumeration and documents
pub use super::document::{is_cnpj, is_cpf};
pub use super::enumeration::is_defined;
