//! Customer registration example - every problem of a form in one pass
//!
//! Run with `cargo run --example customer_registration`.

use notifiable::prelude::*;

// Raw input from a signup form
struct RegistrationForm {
    name: String,
    email: String,
    cpf: String,
    age: u32,
    phones: Vec<String>,
}

// Domain entity carrying its own notifications
#[derive(Debug)]
struct Customer {
    name: String,
    email: String,
    cpf: String,
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

struct RegistrationContract {
    min_age: u32,
}

impl Contract<RegistrationForm> for RegistrationContract {
    fn check(&self, form: &RegistrationForm, n: &mut Notifications) {
        n.if_null_or_invalid_length("Name", form.name.as_str(), 3, 60)
            .if_not_email("Email", form.email.as_str())
            .if_not_cpf("Cpf", form.cpf.as_str())
            .if_lower_than("Age", form.age, self.min_age)
            .if_collection_is_empty(
                Property::new("Phones").message("At least one phone is required"),
                &form.phones,
            );
    }
}

fn register(form: &RegistrationForm, locale: Locale) -> Customer {
    let mut customer = Customer {
        name: form.name.clone(),
        email: form.email.clone(),
        cpf: form.cpf.clone(),
        notifications: Notifications::with_locale(locale),
    };
    customer.validate(form, &RegistrationContract { min_age: 18 });
    customer
}

fn print(customer: &Customer) {
    if customer.is_valid() {
        println!("  registered {} <{}> ({})", customer.name, customer.email, customer.cpf);
        return;
    }
    for notification in customer.notifications() {
        println!("  {}", notification);
    }
}

fn main() {
    println!("Customer Registration Examples\n");

    let good = RegistrationForm {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        cpf: "529.982.247-25".to_string(),
        age: 34,
        phones: vec!["+55 11 99999-0000".to_string()],
    };
    println!("Valid form:");
    print(&register(&good, Locale::EnUs));

    let bad = RegistrationForm {
        name: "Al".to_string(),
        email: "not-an-email".to_string(),
        cpf: "111.111.111-12".to_string(),
        age: 16,
        phones: Vec::new(),
    };
    println!("\nInvalid form (en-US):");
    print(&register(&bad, Locale::EnUs));

    println!("\nInvalid form (pt-BR):");
    print(&register(&bad, Locale::PtBr));
}
