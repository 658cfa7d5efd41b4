//! # notifiable
//!
//! The Notification pattern for Rust: run every check on a model and collect
//! what is wrong, instead of stopping at the first failure.
//!
//! ## Quick Example
//!
//! ```rust
//! use notifiable::prelude::*;
//!
//! struct Customer {
//!     name: String,
//!     email: Option<String>,
//!     age: u32,
//!     cpf: String,
//! }
//!
//! fn check(customer: &Customer) -> Notifications {
//!     let mut notifications = Notifications::new();
//!     notifications
//!         .if_null_or_invalid_length("Name", customer.name.as_str(), 3, 60)
//!         .if_not_email("Email", customer.email.as_deref())
//!         .if_lower_than("Age", customer.age, 18)
//!         .if_not_cpf("Cpf", customer.cpf.as_str());
//!     notifications
//! }
//!
//! let customer = Customer {
//!     name: "Jo".to_string(),
//!     email: None,
//!     age: 30,
//!     cpf: "529.982.247-25".to_string(),
//! };
//!
//! let notifications = check(&customer);
//! assert!(notifications.is_invalid());
//!
//! let properties: Vec<&str> = notifications.iter().map(|n| n.property()).collect();
//! assert_eq!(properties, ["Name", "Email"]);
//! ```
//!
//! ## Layers
//!
//! - [`predicate`]: pure `(value, constraints) -> bool` functions, including
//!   the CPF and CNPJ checksums.
//! - [`checks`]: fluent traits turning predicates into notifications.
//! - [`Notifications`]: the ordered collector, with per-collector
//!   [`Settings`] (message [`Locale`], attempted value capture).
//! - [`Notifiable`]: implemented by domain types that embed a collector.
//! - [`Contract`]: reusable rule sets run through [`Notifiable::validate`].
//!
//! ## Features
//!
//! - `async`: [`AsyncContract`] and `Notifications::validate_all_async`.
//! - `tracing`: a `debug` event per recorded notification and a span per contract.
//! - `serde`: serialization of notifications, codes and settings.
//! - `proptest`: strategies generating valid CPF and CNPJ values.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checks;
pub mod config;
pub mod contract;
pub mod error;
pub mod messages;
pub mod notifiable;
pub mod notification;
pub mod notifications;
pub mod predicate;
pub mod testing;

// Re-exports
pub use checks::{BoolChecks, CollectionChecks, CompareChecks, EnumChecks, NullChecks, StringChecks};
pub use config::{Locale, Settings};
pub use contract::Contract;
#[cfg(feature = "async")]
pub use contract::{AsyncContract, BoxFuture};
pub use error::{Error, Result};
pub use messages::Code;
pub use notifiable::Notifiable;
pub use notification::{Notification, Property};
pub use notifications::Notifications;
pub use regex::Regex;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checks::{
        BoolChecks, CollectionChecks, CompareChecks, EnumChecks, NullChecks, StringChecks,
    };
    pub use crate::config::{Locale, Settings};
    pub use crate::contract::Contract;
    pub use crate::messages::Code;
    pub use crate::notifiable::Notifiable;
    pub use crate::notification::{Notification, Property};
    pub use crate::notifications::Notifications;
}
