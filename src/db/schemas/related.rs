//! Entities an account is associated with
//!
//! Only the parts the account side relies on are modelled here: an identity
//! handle and the back-reference field each entity holds towards an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::refs::{
    AccountRef, AcquisitionRequestRef, ProductionSiteRef, ReportRef, ResourceRef, UserResearchRef,
};

/// Report filed by an account
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Report {
    key: ReportRef,

    pub title: String,

    /// Author (owning side of `Account::reports`)
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<AccountRef>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            key: ReportRef::new(),
            title: title.into(),
            user: None,
        }
    }

    pub fn key(&self) -> ReportRef {
        self.key
    }

    pub fn user(&self) -> Option<AccountRef> {
        self.user
    }

    pub fn set_user(&mut self, user: Option<AccountRef>) {
        self.user = user;
    }
}

/// Research progress record kept for an account
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserResearch {
    key: UserResearchRef,

    /// Research topic identifier
    pub research: String,

    /// When the research was started
    pub started_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<AccountRef>,
}

impl UserResearch {
    pub fn new(research: impl Into<String>) -> Self {
        Self {
            key: UserResearchRef::new(),
            research: research.into(),
            started_at: Utc::now(),
            user: None,
        }
    }

    pub fn key(&self) -> UserResearchRef {
        self.key
    }

    pub fn user(&self) -> Option<AccountRef> {
        self.user
    }

    pub fn set_user(&mut self, user: Option<AccountRef>) {
        self.user = user;
    }
}

/// Tradable resource held by at most one account
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Resource {
    key: ResourceRef,

    pub name: String,

    /// Holder (owning side of `Account::owned_resources`)
    #[serde(skip_serializing_if = "Option::is_none")]
    current_owner: Option<AccountRef>,
}

impl Resource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: ResourceRef::new(),
            name: name.into(),
            current_owner: None,
        }
    }

    pub fn key(&self) -> ResourceRef {
        self.key
    }

    pub fn current_owner(&self) -> Option<AccountRef> {
        self.current_owner
    }

    pub fn set_current_owner(&mut self, owner: Option<AccountRef>) {
        self.current_owner = owner;
    }
}

/// Request by one account to take over a resource held by another.
///
/// Appears in the requester's sent collection and in the holder's received
/// collection, through two independent back-references.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OwnershipAcquisitionRequest {
    key: AcquisitionRequestRef,

    /// Resource being requested
    pub resource: ResourceRef,

    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    requester: Option<AccountRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    initial_owner: Option<AccountRef>,
}

impl OwnershipAcquisitionRequest {
    pub fn new(resource: ResourceRef) -> Self {
        Self {
            key: AcquisitionRequestRef::new(),
            resource,
            created_at: Utc::now(),
            requester: None,
            initial_owner: None,
        }
    }

    pub fn key(&self) -> AcquisitionRequestRef {
        self.key
    }

    pub fn requester(&self) -> Option<AccountRef> {
        self.requester
    }

    pub fn set_requester(&mut self, requester: Option<AccountRef>) {
        self.requester = requester;
    }

    pub fn initial_owner(&self) -> Option<AccountRef> {
        self.initial_owner
    }

    pub fn set_initial_owner(&mut self, owner: Option<AccountRef>) {
        self.initial_owner = owner;
    }
}

/// Site accounts work at. Accounts reference it many-to-one; the site's own
/// member list is not maintained from the account side.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProductionSite {
    key: ProductionSiteRef,

    pub name: String,
}

impl ProductionSite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: ProductionSiteRef::new(),
            name: name.into(),
        }
    }

    pub fn key(&self) -> ProductionSiteRef {
        self.key
    }
}
