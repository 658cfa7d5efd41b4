//! Entities that accumulate notifications
//!
//! A domain type embeds a [`Notifications`] collector and implements the two
//! accessor methods of [`Notifiable`]. Every check of [`checks`](crate::checks)
//! then becomes available on the type itself.
//!
//! # Examples
//!
//! ```
//! use notifiable::prelude::*;
//!
//! struct Customer {
//!     name: String,
//!     age: u32,
//!     notifications: Notifications,
//! }
//!
//! impl Notifiable for Customer {
//!     fn notifications(&self) -> &Notifications {
//!         &self.notifications
//!     }
//!
//!     fn notifications_mut(&mut self) -> &mut Notifications {
//!         &mut self.notifications
//!     }
//! }
//!
//! impl Customer {
//!     fn new(name: &str, age: u32) -> Self {
//!         let mut customer = Customer {
//!             name: name.to_string(),
//!             age,
//!             notifications: Notifications::new(),
//!         };
//!         let name = customer.name.clone();
//!         customer
//!             .if_null_or_empty("Name", name.as_str())
//!             .if_lower_than("Age", age, 18);
//!         customer
//!     }
//! }
//!
//! let customer = Customer::new("", 12);
//! assert!(customer.is_invalid());
//! assert_eq!(customer.notifications().count(), 2);
//! ```

use crate::contract::Contract;
use crate::notification::Notification;
use crate::notifications::Notifications;

/// An entity capable of accumulating notifications.
pub trait Notifiable {
    /// The collected notifications.
    fn notifications(&self) -> &Notifications;

    /// Mutable access to the collected notifications.
    fn notifications_mut(&mut self) -> &mut Notifications;

    /// `true` when no notification was recorded.
    fn is_valid(&self) -> bool {
        self.notifications().is_valid()
    }

    /// `true` when at least one notification was recorded.
    fn is_invalid(&self) -> bool {
        self.notifications().is_invalid()
    }

    /// Record a custom notification.
    fn add_notification(
        &mut self,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self
    where
        Self: Sized,
    {
        self.notifications_mut().add(property, message);
        self
    }

    /// Record every notification of `notifications`.
    fn add_notifications<I>(&mut self, notifications: I) -> &mut Self
    where
        I: IntoIterator<Item = Notification>,
        Self: Sized,
    {
        self.notifications_mut().extend(notifications);
        self
    }

    /// Copy the notifications of another notifiable entity.
    fn absorb<N: Notifiable + ?Sized>(&mut self, other: &N) -> &mut Self
    where
        Self: Sized,
    {
        self.notifications_mut().merge(other);
        self
    }

    /// Remove every notification.
    fn clear_notifications(&mut self) {
        self.notifications_mut().clear();
    }

    /// Run `contract` against `model`, appending what it reports.
    ///
    /// Returns whether the contract alone passed, regardless of notifications
    /// recorded earlier.
    fn validate<T, C>(&mut self, model: &T, contract: &C) -> bool
    where
        T: ?Sized,
        C: Contract<T> + ?Sized,
        Self: Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("contract", model = std::any::type_name::<T>()).entered();

        let mut found = Notifications::with_settings(self.notifications().settings().clone());
        contract.check(model, &mut found);
        let passed = found.is_valid();

        #[cfg(feature = "tracing")]
        tracing::debug!(passed, notifications = found.count(), "contract evaluated");

        self.notifications_mut().extend(found);
        passed
    }

    /// Run `contract` against `model` and keep its notifications.
    fn if_invalid_contract<T, C>(&mut self, model: &T, contract: &C) -> &mut Self
    where
        T: ?Sized,
        C: Contract<T> + ?Sized,
        Self: Sized,
    {
        self.validate(model, contract);
        self
    }
}
