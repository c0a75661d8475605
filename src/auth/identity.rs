//! Contract between accounts and the authentication layer
//!
//! The authenticator only sees an account through these traits: an identity
//! string, the stored hash, the effective roles, and a hook to drop any
//! transient secrets once a login succeeds.

use tracing::{debug, warn};

use crate::auth::password::verify_password;
use crate::db::schemas::Account;
use crate::db::store::AccountStore;
use crate::types::{AccountError, Result};

/// Something the authentication layer can identify and authorize
pub trait UserIdentity {
    /// Identity string. Empty when unset, which callers must treat as invalid.
    fn user_identifier(&self) -> String;

    /// Effective roles
    fn roles(&self) -> Vec<String>;

    /// Clear transient sensitive state after authentication
    fn erase_credentials(&mut self);
}

/// Identity that authenticates with a password hash
pub trait PasswordAuthenticated: UserIdentity {
    /// Stored hash, or an empty string if none is set
    fn password(&self) -> &str;
}

impl UserIdentity for Account {
    fn user_identifier(&self) -> String {
        self.email().unwrap_or_default().to_string()
    }

    fn roles(&self) -> Vec<String> {
        Account::roles(self)
    }

    fn erase_credentials(&mut self) {
        // Accounts hold no plaintext secrets
    }
}

impl PasswordAuthenticated for Account {
    fn password(&self) -> &str {
        self.password_hash().unwrap_or_default()
    }
}

/// Look up an account by email and check its password.
///
/// Soft-deleted accounts are not found. On success the account's credentials
/// hook has already run.
pub async fn authenticate<S>(store: &S, email: &str, password: &str) -> Result<Account>
where
    S: AccountStore + ?Sized,
{
    let mut account = store
        .find_by_email(email)
        .await?
        .ok_or_else(|| AccountError::Auth("Invalid credentials".into()))?;

    if account.user_identifier().is_empty() || PasswordAuthenticated::password(&account).is_empty() {
        warn!(id = ?account.id(), "Account has no usable credentials");
        return Err(AccountError::Auth("Invalid credentials".into()));
    }

    if !verify_password(password, PasswordAuthenticated::password(&account))? {
        debug!(id = ?account.id(), "Password mismatch");
        return Err(AccountError::Auth("Invalid credentials".into()));
    }

    account.erase_credentials();
    debug!(id = ?account.id(), "Authenticated account");
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_degrade_to_empty() {
        let account = Account::default();
        assert_eq!(account.user_identifier(), "");
        assert_eq!(PasswordAuthenticated::password(&account), "");
    }

    #[test]
    fn test_identifier_is_email() {
        let account = Account::new("mary@example.org", "Mary", "Somerville");
        assert_eq!(account.user_identifier(), "mary@example.org");
        assert_eq!(UserIdentity::roles(&account), vec!["ROLE_USER".to_string()]);
    }
}
