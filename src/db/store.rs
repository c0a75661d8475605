//! Persistence boundary for accounts

use async_trait::async_trait;

use crate::db::schemas::{Account, AccountId};
use crate::types::Result;

/// Storage backend for accounts.
///
/// Implementations assign the storage ID on first save, reject a second
/// account with the same email (compared case-insensitively, soft-deleted
/// accounts included) and hide soft-deleted accounts from every lookup.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Validate and persist an account, assigning its ID if it has none.
    ///
    /// An account whose ID is unknown or soft-deleted is `NotFound`.
    async fn save(&self, account: &mut Account) -> Result<AccountId>;

    async fn find(&self, id: AccountId) -> Result<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// All active accounts ordered by ID
    async fn list(&self) -> Result<Vec<Account>>;

    /// Mark an account deleted without removing it
    async fn soft_delete(&self, id: AccountId) -> Result<()>;
}

/// Form used for uniqueness comparisons
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ada@Example.ORG "), "ada@example.org");
    }
}
