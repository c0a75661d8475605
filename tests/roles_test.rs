//! Effective role computation

use resource_accounts::db::schemas::{Account, ROLE_PRO, ROLE_USER};

fn account() -> Account {
    Account::new("roles@example.org", "Role", "Holder")
}

#[test]
fn test_empty_roles_still_yield_base_role() {
    let mut account = account();
    account.set_roles(Vec::new());
    assert_eq!(account.roles(), vec![ROLE_USER.to_string()]);
    assert!(account.stored_roles().is_empty());
}

#[test]
fn test_specific_base_role() {
    let mut account = account();
    account.set_specific_role("ROLE_USER");
    assert_eq!(account.stored_roles(), &["ROLE_USER".to_string()]);
    assert_eq!(account.roles(), vec!["ROLE_USER".to_string()]);
}

#[test]
fn test_specific_elevated_role() {
    let mut account = account();
    account.set_specific_role("ROLE_ADMIN");
    assert_eq!(
        account.stored_roles(),
        &["ROLE_ADMIN".to_string(), "ROLE_PRO".to_string()]
    );

    let effective = account.roles();
    assert_eq!(effective.len(), 3);
    assert!(effective.contains(&"ROLE_ADMIN".to_string()));
    assert!(effective.contains(&ROLE_PRO.to_string()));
    assert!(effective.contains(&ROLE_USER.to_string()));
}

#[test]
fn test_set_roles_is_verbatim() {
    let mut account = account();
    let roles = vec![
        "ROLE_AUDITOR".to_string(),
        "ROLE_USER".to_string(),
        "ROLE_AUDITOR".to_string(),
    ];
    account.set_roles(roles.clone());

    assert_eq!(account.stored_roles(), roles.as_slice());
    assert_eq!(
        account.roles(),
        vec!["ROLE_AUDITOR".to_string(), "ROLE_USER".to_string()]
    );
}
