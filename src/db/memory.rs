//! In-process account store
//!
//! Keeps accounts in a map behind an async lock. The uniqueness check and the
//! write happen under the same write guard, so two concurrent saves of the
//! same email cannot both succeed.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::db::schemas::{Account, AccountId, ACCOUNT_COLLECTION};
use crate::db::store::{normalize_email, AccountStore};
use crate::types::{AccountError, Result};

#[derive(Debug)]
struct State {
    next_id: AccountId,
    accounts: BTreeMap<AccountId, Account>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_id: 1,
            accounts: BTreeMap::new(),
        }
    }
}

/// Account store backed by memory
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    state: Arc<RwLock<State>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts, soft-deleted ones included
    pub async fn len(&self) -> usize {
        self.state.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn save(&self, account: &mut Account) -> Result<AccountId> {
        account.validate()?;

        // validate() guarantees an email is present
        let email = normalize_email(account.email().unwrap_or_default());

        let mut state = self.state.write().await;

        let taken = state.accounts.values().any(|existing| {
            existing.id() != account.id()
                && existing.email().map(normalize_email).as_deref() == Some(email.as_str())
        });
        if taken {
            return Err(AccountError::DuplicateEmail(email));
        }

        let id = match account.id() {
            Some(id) => {
                // Soft-deleted records are closed to updates
                let live = state
                    .accounts
                    .get(&id)
                    .is_some_and(|stored| !stored.is_deleted());
                if !live {
                    return Err(AccountError::NotFound(format!(
                        "{ACCOUNT_COLLECTION}/{id}"
                    )));
                }
                id
            }
            None => {
                let id = state.next_id;
                state.next_id += 1;
                account.assign_id(id);
                info!(collection = ACCOUNT_COLLECTION, id, "Inserted account");
                id
            }
        };

        state.accounts.insert(id, account.clone());
        debug!(collection = ACCOUNT_COLLECTION, id, "Saved account");
        Ok(id)
    }

    async fn find(&self, id: AccountId) -> Result<Option<Account>> {
        let state = self.state.read().await;
        Ok(state
            .accounts
            .get(&id)
            .filter(|account| !account.is_deleted())
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let wanted = normalize_email(email);
        let state = self.state.read().await;
        Ok(state
            .accounts
            .values()
            .filter(|account| !account.is_deleted())
            .find(|account| account.email().map(normalize_email).as_deref() == Some(wanted.as_str()))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Account>> {
        let state = self.state.read().await;
        Ok(state
            .accounts
            .values()
            .filter(|account| !account.is_deleted())
            .cloned()
            .collect())
    }

    async fn soft_delete(&self, id: AccountId) -> Result<()> {
        let mut state = self.state.write().await;
        let account = state
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AccountError::NotFound(format!("{ACCOUNT_COLLECTION}/{id}")))?;

        if !account.is_deleted() {
            account.set_deleted_at(Some(Utc::now()));
            info!(collection = ACCOUNT_COLLECTION, id, "Soft-deleted account");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> Account {
        let mut account = Account::new(email, "Ada", "Lovelace");
        account.set_password("$argon2id$v=19$stub");
        account
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = MemoryAccountStore::new();
        let mut a = account("a@example.org");
        let mut b = account("b@example.org");

        assert_eq!(store.save(&mut a).await.unwrap(), 1);
        assert_eq!(store.save(&mut b).await.unwrap(), 2);
        assert_eq!(a.id(), Some(1));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_resave_keeps_id() {
        let store = MemoryAccountStore::new();
        let mut a = account("a@example.org");
        store.save(&mut a).await.unwrap();

        a.set_first_name("Augusta");
        assert_eq!(store.save(&mut a).await.unwrap(), 1);
        assert_eq!(store.len().await, 1);

        let found = store.find(1).await.unwrap().unwrap();
        assert_eq!(found.first_name(), Some("Augusta"));
    }

    #[tokio::test]
    async fn test_invalid_account_not_stored() {
        let store = MemoryAccountStore::new();
        let mut a = Account::new("a@example.org", "Ada", "Lovelace");

        assert!(matches!(
            store.save(&mut a).await,
            Err(AccountError::Validation(_))
        ));
        assert!(a.id().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_soft_delete_unknown_id() {
        let store = MemoryAccountStore::new();
        assert!(matches!(
            store.soft_delete(42).await,
            Err(AccountError::NotFound(_))
        ));
    }
}
