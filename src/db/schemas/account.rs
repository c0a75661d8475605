//! Account document schema
//!
//! Stores credentials, profile fields and the account's side of its
//! associations with reports, research, resources and acquisition requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::refs::{AccountRef, ProductionSiteRef};
use super::related::{OwnershipAcquisitionRequest, Report, Resource, UserResearch};
use super::relation::{
    OwnedCollection, ReportAuthor, RequestsReceived, RequestsSent, ResearchAuthor,
    ResourceOwnership,
};
use crate::types::{AccountError, Result};

/// Collection name for accounts
pub const ACCOUNT_COLLECTION: &str = "accounts";

/// Role every account holds, whether stored or not
pub const ROLE_USER: &str = "ROLE_USER";

/// Tier flag granted alongside any role other than [`ROLE_USER`]
pub const ROLE_PRO: &str = "ROLE_PRO";

pub const EMAIL_MAX_LEN: usize = 180;
pub const NAME_MAX_LEN: usize = 255;
pub const WALLET_MAX_LEN: usize = 255;

/// Storage identifier
pub type AccountId = i64;

/// Account document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Account {
    /// Storage ID, assigned on first save
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<AccountId>,

    /// Object identity used by related entities' back-references
    key: AccountRef,

    /// Login identifier, unique across accounts
    email: Option<String>,

    /// Stored roles, without the implicit base role
    #[serde(default)]
    roles: Vec<String>,

    /// Argon2 password hash
    password: Option<String>,

    first_name: Option<String>,

    last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    wallet_address: Option<String>,

    /// Soft-delete marker
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    production_site: Option<ProductionSiteRef>,

    #[serde(default)]
    reports: OwnedCollection<ReportAuthor>,

    #[serde(default)]
    user_research: OwnedCollection<ResearchAuthor>,

    #[serde(default)]
    owned_resources: OwnedCollection<ResourceOwnership>,

    #[serde(default)]
    transfer_requests_sent: OwnedCollection<RequestsSent>,

    #[serde(default)]
    transfer_requests_received: OwnedCollection<RequestsReceived>,
}

impl Account {
    /// Create an unsaved account with empty associations
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    /// Record the storage ID. Has no effect once an ID is present.
    pub(crate) fn assign_id(&mut self, id: AccountId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    pub fn key(&self) -> AccountRef {
        self.key
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = Some(email.into());
        self
    }

    /// Effective roles: the stored roles plus [`ROLE_USER`], without duplicates.
    pub fn roles(&self) -> Vec<String> {
        let mut effective: Vec<String> = Vec::with_capacity(self.roles.len() + 1);
        let stored = self.roles.iter().map(String::as_str);
        for role in stored.chain(std::iter::once(ROLE_USER)) {
            if !effective.iter().any(|held| held == role) {
                effective.push(role.to_string());
            }
        }
        effective
    }

    /// Roles exactly as persisted
    pub fn stored_roles(&self) -> &[String] {
        &self.roles
    }

    /// Replace the stored roles verbatim
    pub fn set_roles(&mut self, roles: Vec<String>) -> &mut Self {
        self.roles = roles;
        self
    }

    /// Give the account a single primary role.
    ///
    /// [`ROLE_USER`] alone for the base role, otherwise the role paired with
    /// [`ROLE_PRO`]. Previously held roles are discarded.
    pub fn set_specific_role(&mut self, role: &str) -> &mut Self {
        let roles = if role == ROLE_USER {
            vec![ROLE_USER.to_string()]
        } else {
            vec![role.to_string(), ROLE_PRO.to_string()]
        };
        self.set_roles(roles)
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Store an already hashed password
    pub fn set_password(&mut self, hash: impl Into<String>) -> &mut Self {
        self.password = Some(hash.into());
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> &mut Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> &mut Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.wallet_address.as_deref()
    }

    pub fn set_wallet_address(&mut self, wallet_address: Option<String>) -> &mut Self {
        self.wallet_address = wallet_address;
        self
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn set_deleted_at(&mut self, deleted_at: Option<DateTime<Utc>>) -> &mut Self {
        self.deleted_at = deleted_at;
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn production_site(&self) -> Option<ProductionSiteRef> {
        self.production_site
    }

    pub fn set_production_site(&mut self, site: Option<ProductionSiteRef>) -> &mut Self {
        self.production_site = site;
        self
    }

    pub fn reports(&self) -> &OwnedCollection<ReportAuthor> {
        &self.reports
    }

    /// Returns false if the report was already linked to this account.
    pub fn add_report(&mut self, report: &mut Report) -> bool {
        self.reports.link(self.key, report)
    }

    /// Returns false if the report was not linked to this account.
    pub fn remove_report(&mut self, report: &mut Report) -> bool {
        self.reports.unlink(self.key, report)
    }

    pub fn user_research(&self) -> &OwnedCollection<ResearchAuthor> {
        &self.user_research
    }

    pub fn add_user_research(&mut self, research: &mut UserResearch) -> bool {
        self.user_research.link(self.key, research)
    }

    pub fn remove_user_research(&mut self, research: &mut UserResearch) -> bool {
        self.user_research.unlink(self.key, research)
    }

    pub fn owned_resources(&self) -> &OwnedCollection<ResourceOwnership> {
        &self.owned_resources
    }

    pub fn add_owned_resource(&mut self, resource: &mut Resource) -> bool {
        self.owned_resources.link(self.key, resource)
    }

    pub fn remove_owned_resource(&mut self, resource: &mut Resource) -> bool {
        self.owned_resources.unlink(self.key, resource)
    }

    pub fn transfer_requests_sent(&self) -> &OwnedCollection<RequestsSent> {
        &self.transfer_requests_sent
    }

    pub fn add_transfer_request_sent(&mut self, request: &mut OwnershipAcquisitionRequest) -> bool {
        self.transfer_requests_sent.link(self.key, request)
    }

    pub fn remove_transfer_request_sent(
        &mut self,
        request: &mut OwnershipAcquisitionRequest,
    ) -> bool {
        self.transfer_requests_sent.unlink(self.key, request)
    }

    pub fn transfer_requests_received(&self) -> &OwnedCollection<RequestsReceived> {
        &self.transfer_requests_received
    }

    pub fn add_transfer_request_received(
        &mut self,
        request: &mut OwnershipAcquisitionRequest,
    ) -> bool {
        self.transfer_requests_received.link(self.key, request)
    }

    pub fn remove_transfer_request_received(
        &mut self,
        request: &mut OwnershipAcquisitionRequest,
    ) -> bool {
        self.transfer_requests_received.unlink(self.key, request)
    }

    /// Check required fields and column limits before the account is saved
    pub fn validate(&self) -> Result<()> {
        let email = required(self.email.as_deref(), "email")?;
        if !email.contains('@') {
            return Err(AccountError::Validation(format!(
                "email '{email}' is not a valid address"
            )));
        }
        max_len(email, EMAIL_MAX_LEN, "email")?;

        let first_name = required(self.first_name.as_deref(), "first_name")?;
        max_len(first_name, NAME_MAX_LEN, "first_name")?;

        let last_name = required(self.last_name.as_deref(), "last_name")?;
        max_len(last_name, NAME_MAX_LEN, "last_name")?;

        if let Some(wallet) = self.wallet_address.as_deref() {
            max_len(wallet, WALLET_MAX_LEN, "wallet_address")?;
        }

        required(self.password.as_deref(), "password")?;
        Ok(())
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AccountError::Validation(format!("{field} is required"))),
    }
}

fn max_len(value: &str, max: usize, field: &str) -> Result<()> {
    if value.chars().count() > max {
        return Err(AccountError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
