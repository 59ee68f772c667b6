use oso::{Oso, PolarClass};

use crate::auth::{Platform, User};

pub fn new() -> Oso {
    let mut o = Oso::new();

    o.register_class(Platform::get_polar_class()).unwrap();
    o.register_class(User::get_polar_class()).unwrap();

    o.load_str(include_str!("rules.polar")).unwrap();

    o
}

#[test]
fn system_role_test() {
    use uuid::Uuid;

    let authorizor = new();

    let system = User {
        id: Uuid::new_v4(),
        roles: vec!["system".into()],
    };

    let result = authorizor.query_rule("has_role", (system.clone(), "system", Platform::default()));
    assert!(result.unwrap().next().unwrap().is_ok());

    let result = authorizor.is_allowed(system.clone(), "submit_booking", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(system.clone(), "settle_booking", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(system, "read_snapshot", Platform::default());
    assert_eq!(result.unwrap(), true);
}

#[test]
fn customer_role_test() {
    let authorizor = new();

    let customer = User::new_customer();

    let result = authorizor.is_allowed(customer.clone(), "create_quote", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(customer.clone(), "submit_booking", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(customer.clone(), "submit_rental", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(customer.clone(), "settle_booking", Platform::default());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(customer, "read_snapshot", Platform::default());
    assert_eq!(result.unwrap(), false);
}

#[test]
fn staff_role_test() {
    let authorizor = new();

    let staff = User::new_staff();

    let result = authorizor.is_allowed(staff.clone(), "settle_booking", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(staff.clone(), "read_snapshot", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(staff, "submit_booking", Platform::default());
    assert_eq!(result.unwrap(), false);
}

#[test]
fn unprivileged_user_test() {
    use uuid::Uuid;

    let authorizor = new();

    let unprivileged = User {
        id: Uuid::new_v4(),
        roles: vec![],
    };

    let result =
        authorizor.query_rule("has_role", (unprivileged.clone(), "system", Platform::default()));
    assert!(result.unwrap().next().is_none());

    let result = authorizor.is_allowed(unprivileged.clone(), "create_quote", Platform::default());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(unprivileged, "settle_booking", Platform::default());
    assert_eq!(result.unwrap(), false);
}
