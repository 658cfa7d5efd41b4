//! Contracts run through a notifiable entity.

use notifiable::prelude::*;
use notifiable::{assert_invalid, assert_message, assert_notified, assert_valid};

#[derive(Debug, Default)]
struct Customer {
    name: String,
    email: Option<String>,
    age: u32,
    tags: Vec<String>,
    notifications: Notifications,
}

impl Notifiable for Customer {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }
}

struct CustomerContract;

impl Contract<Customer> for CustomerContract {
    fn check(&self, customer: &Customer, notifications: &mut Notifications) {
        notifications.if_null_or_empty(
            Property::new("Name").message("Name could not be empty"),
            customer.name.as_str(),
        );
    }
}

struct AdultContract {
    min_age: u32,
}

impl Contract<Customer> for AdultContract {
    fn check(&self, customer: &Customer, notifications: &mut Notifications) {
        notifications
            .if_lower_than("Age", customer.age, self.min_age)
            .if_not_email("Email", customer.email.as_deref())
            .if_collection_is_empty("Tags", &customer.tags);
    }
}

impl Customer {
    fn validated(mut self) -> Self {
        let mut found = Notifications::new();
        found.validate(&self, &CustomerContract);
        self.absorb(&found);
        self
    }
}

#[test]
fn contract_reports_custom_message() {
    let customer = Customer::default().validated();
    assert_invalid!(customer);
    assert_message!(customer, "Name could not be empty");
    assert_eq!(customer.notifications().count(), 1);
}

#[test]
fn contract_passes_for_named_customer() {
    let customer = Customer {
        name: "Robert".to_string(),
        ..Customer::default()
    }
    .validated();
    assert_valid!(customer);
}

#[test]
fn contracts_accumulate_in_order() {
    let model = Customer {
        name: String::new(),
        email: Some("not-an-email".to_string()),
        age: 16,
        tags: Vec::new(),
        notifications: Notifications::new(),
    };

    let mut collector = Notifications::new();
    let first = collector.validate(&model, &CustomerContract);
    let second = collector.validate(&model, &AdultContract { min_age: 18 });
    assert!(!first);
    assert!(!second);

    let properties: Vec<&str> = collector.iter().map(|n| n.property()).collect();
    assert_eq!(properties, ["Name", "Age", "Email", "Tags"]);
}

#[test]
fn validate_reports_only_the_current_contract() {
    let model = Customer {
        name: "Ana".to_string(),
        ..Customer::default()
    };
    let mut collector = Notifications::new();
    collector.add("Earlier", "already invalid");

    assert!(collector.validate(&model, &CustomerContract));
    assert!(collector.is_invalid());
    assert_eq!(collector.count(), 1);
}

#[test]
fn closure_contracts_and_trait_objects() {
    let model = Customer {
        name: "Ana".to_string(),
        age: 70,
        ..Customer::default()
    };
    let retired = |c: &Customer, n: &mut Notifications| {
        n.if_greater_than("Age", c.age, 65);
    };
    let contracts: [&dyn Contract<Customer>; 2] = [&CustomerContract, &retired];

    let mut target = Customer::default();
    for contract in contracts {
        target.if_invalid_contract(&model, contract);
    }
    assert_notified!(target, "Age");
    assert_eq!(target.notifications().count(), 1);
}

#[test]
fn contract_messages_follow_collector_locale() {
    let model = Customer {
        name: "Ana".to_string(),
        age: 10,
        email: Some("ana@example.com".to_string()),
        tags: vec!["vip".to_string()],
        ..Customer::default()
    };
    let mut collector = Notifications::with_locale(Locale::PtBr);
    collector.validate(&model, &AdultContract { min_age: 18 });
    assert_message!(collector, "O campo Age deve ser maior ou igual a 18.");
}

#[test]
fn into_result_after_contract() {
    let model = Customer {
        name: "Ana".to_string(),
        ..Customer::default()
    };
    let mut collector = Notifications::new();
    collector.validate(&model, &CustomerContract);
    let accepted = collector.into_result(model.name.clone());
    assert_eq!(accepted.ok().as_deref(), Some("Ana"));

    let mut rejected = Notifications::new();
    rejected.validate(&Customer::default(), &CustomerContract);
    let err = rejected.into_result(()).unwrap_err();
    assert_eq!(err.to_string(), "Name: Name could not be empty");
}
