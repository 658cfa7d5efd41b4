//! Reusable rule sets for a model type
//!
//! A [`Contract`] groups the checks of a model so they can be run by any
//! [`Notifiable`](crate::Notifiable) through
//! [`validate`](crate::Notifiable::validate). Closures taking the model and a
//! collector are contracts too.
//!
//! # Examples
//!
//! ```
//! use notifiable::prelude::*;
//!
//! struct Customer {
//!     name: String,
//!     email: Option<String>,
//! }
//!
//! struct CustomerContract;
//!
//! impl Contract<Customer> for CustomerContract {
//!     fn check(&self, customer: &Customer, notifications: &mut Notifications) {
//!         notifications
//!             .if_null_or_empty(
//!                 Property::new("Name").message("Name could not be empty"),
//!                 customer.name.as_str(),
//!             )
//!             .if_not_email("Email", customer.email.as_deref());
//!     }
//! }
//!
//! let customer = Customer { name: String::new(), email: None };
//! let mut notifications = Notifications::new();
//! assert!(!notifications.validate(&customer, &CustomerContract));
//! assert!(notifications.contains_message("Name could not be empty"));
//! assert_eq!(notifications.count(), 2);
//! ```

use crate::notifications::Notifications;

/// A set of checks for values of type `T`.
pub trait Contract<T: ?Sized> {
    /// Record into `notifications` every rule `model` breaks.
    fn check(&self, model: &T, notifications: &mut Notifications);
}

impl<T: ?Sized, F> Contract<T> for F
where
    F: Fn(&T, &mut Notifications),
{
    #[inline]
    fn check(&self, model: &T, notifications: &mut Notifications) {
        self(model, notifications)
    }
}

#[cfg(feature = "async")]
pub use self::asynchronous::{AsyncContract, BoxFuture};

#[cfg(feature = "async")]
mod asynchronous {
    use std::future::Future;
    use std::pin::Pin;

    use crate::config::Settings;
    use crate::notifications::Notifications;

    /// A boxed future that is Send
    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

    /// A contract whose rules need to await, such as a uniqueness lookup.
    ///
    /// The returned collector must be built with `settings` so its messages
    /// match the caller's locale.
    ///
    /// # Example
    ///
    /// ```rust
    /// use notifiable::prelude::*;
    /// use notifiable::{AsyncContract, BoxFuture};
    ///
    /// struct UniqueEmail {
    ///     taken: Vec<String>,
    /// }
    ///
    /// impl AsyncContract<str> for UniqueEmail {
    ///     fn check<'a>(&'a self, email: &'a str, settings: &'a Settings) -> BoxFuture<'a, Notifications> {
    ///         Box::pin(async move {
    ///             let mut n = Notifications::with_settings(settings.clone());
    ///             if self.taken.iter().any(|t| t.as_str() == email) {
    ///                 n.add("Email", "E-mail already registered");
    ///             }
    ///             n
    ///         })
    ///     }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let contract = UniqueEmail { taken: vec!["ana@x.com".to_string()] };
    /// let mut notifications = Notifications::new();
    /// assert!(!notifications.validate_all_async("ana@x.com", &[&contract]).await);
    /// assert_eq!(notifications.count(), 1);
    /// # });
    /// ```
    pub trait AsyncContract<T: ?Sized>: Send + Sync {
        /// Evaluate the rules against `model`.
        fn check<'a>(&'a self, model: &'a T, settings: &'a Settings) -> BoxFuture<'a, Notifications>;
    }

    impl Notifications {
        /// Run `contracts` concurrently against `model`.
        ///
        /// Records are appended in contract order, whatever order the contracts
        /// finish in. Returns whether every contract passed.
        pub async fn validate_all_async<T>(
            &mut self,
            model: &T,
            contracts: &[&dyn AsyncContract<T>],
        ) -> bool
        where
            T: ?Sized + Sync,
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(contracts = contracts.len(), "running async contracts");

            let settings = self.settings().clone();
            let futures: Vec<_> = contracts
                .iter()
                .map(|contract| contract.check(model, &settings))
                .collect();

            let results: Vec<Notifications> = futures::future::join_all(futures).await;

            let passed = results.iter().all(Notifications::is_valid);
            for found in results {
                self.extend(found);
            }
            passed
        }
    }
}
