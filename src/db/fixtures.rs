//! Account fixtures
//!
//! JSON records with plaintext passwords, hashed on the way into the store.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::auth::hash_password;
use crate::db::schemas::Account;
use crate::db::store::AccountStore;
use crate::types::{AccountError, Result};

/// One account in a fixture file
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AccountFixture {
    pub email: String,

    /// Plaintext; only ever passed to the hasher
    pub password: String,

    pub first_name: String,

    pub last_name: String,

    /// Primary role, applied through `Account::set_specific_role`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

impl AccountFixture {
    /// Build an unsaved account, hashing the password
    pub fn into_account(self) -> Result<Account> {
        let mut account = Account::new(self.email, self.first_name, self.last_name);
        account
            .set_password(hash_password(&self.password)?)
            .set_wallet_address(self.wallet_address);
        if let Some(role) = self.role.as_deref() {
            account.set_specific_role(role);
        }
        Ok(account)
    }
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// Read a JSON array of fixtures from disk
pub fn load_fixtures(path: &Path) -> Result<Vec<AccountFixture>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AccountError::Fixture(format!("Failed to read {}: {}", path.display(), e)))?;
    let fixtures: Vec<AccountFixture> = serde_json::from_str(&raw)?;
    Ok(fixtures)
}

/// Save every fixture into `store`.
///
/// Records rejected with a user-facing error (duplicate email, failed
/// validation) are skipped unless `fail_fast` is set. Other errors always
/// abort the run.
pub async fn seed<S>(store: &S, fixtures: Vec<AccountFixture>, fail_fast: bool) -> Result<SeedReport>
where
    S: AccountStore + ?Sized,
{
    let mut report = SeedReport::default();

    for fixture in fixtures {
        let email = fixture.email.clone();
        let mut account = fixture.into_account()?;

        match store.save(&mut account).await {
            Ok(id) => {
                info!(id, email = %email, roles = ?account.roles(), "Seeded account");
                report.created += 1;
            }
            Err(e) if e.is_user_facing() && !fail_fast => {
                warn!(email = %email, "Skipping fixture: {}", e);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
