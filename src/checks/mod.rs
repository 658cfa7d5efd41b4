//! Fluent checks
//!
//! Each trait groups the checks for one family of values and is implemented
//! for every [`Notifiable`]. A check records a notification when the
//! condition its name describes holds, then hands `self` back so checks can
//! be chained:
//!
//! ```
//! use notifiable::prelude::*;
//!
//! let mut notifications = Notifications::new();
//! notifications
//!     .if_not_cpf("Cpf", "529.982.247-25")
//!     .if_not_cnpj("Cnpj", "80288216000134")
//!     .if_false("Active", true)
//!     .if_collection_is_empty("Dependents", &Vec::<String>::new());
//!
//! let codes: Vec<Code> = notifications.iter().map(|n| n.code()).collect();
//! assert_eq!(codes, [Code::NotCnpj, Code::CollectionIsEmpty]);
//! ```
//!
//! Default messages follow the collector's [`Locale`](crate::Locale). Pass a
//! [`Property`](crate::Property) with a message to replace one.

use std::fmt::Display;

use crate::messages::Code;
use crate::notifiable::Notifiable;
use crate::notification::Property;

mod boolean;
mod collection;
mod compare;
mod enumeration;
mod null;
mod string;

pub use boolean::BoolChecks;
pub use collection::CollectionChecks;
pub use compare::CompareChecks;
pub use enumeration::EnumChecks;
pub use null::NullChecks;
pub use string::StringChecks;

/// Record a failed check on `target`.
fn notify<N: Notifiable + ?Sized>(
    target: &mut N,
    code: Code,
    property: impl Into<Property>,
    args: &[&dyn Display],
    value: Option<&dyn Display>,
) {
    target
        .notifications_mut()
        .record(code, property.into(), args, value);
}

/// The attempted value of an optional input, for capture.
fn attempted<V: Display>(value: &Option<V>) -> Option<&dyn Display> {
    value.as_ref().map(|v| v as &dyn Display)
}
