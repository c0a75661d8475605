//! Two-sided relationship bookkeeping
//!
//! An account owns several collections whose members each point back at the
//! account through a single field. [`OwnedCollection`] keeps the two views in
//! agreement: membership is unique and ordered by insertion, adding sets the
//! member's back-reference, and removing clears it only while it still names
//! the account doing the removal.
//!
//! Which field of which entity a collection targets is described by a
//! [`Relation`] marker, so the same request type can sit in two collections
//! through two different fields.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

use super::refs::{AccountRef, AcquisitionRequestRef, ReportRef, ResourceRef, UserResearchRef};
use super::related::{OwnershipAcquisitionRequest, Report, Resource, UserResearch};

/// Describes one side of an account-owned association.
pub trait Relation {
    /// Entity stored in the collection
    type Entity;

    /// Identity handle used for membership
    type Key: Copy + Eq + fmt::Debug + fmt::Display;

    /// Short name used in log events
    const NAME: &'static str;

    fn key(entity: &Self::Entity) -> Self::Key;

    /// Current value of the entity's back-reference
    fn owner(entity: &Self::Entity) -> Option<AccountRef>;

    fn set_owner(entity: &mut Self::Entity, owner: Option<AccountRef>);
}

/// Reports authored by an account (`Report::user`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportAuthor;

impl Relation for ReportAuthor {
    type Entity = Report;
    type Key = ReportRef;
    const NAME: &'static str = "reports";

    fn key(entity: &Report) -> ReportRef {
        entity.key()
    }

    fn owner(entity: &Report) -> Option<AccountRef> {
        entity.user()
    }

    fn set_owner(entity: &mut Report, owner: Option<AccountRef>) {
        entity.set_user(owner);
    }
}

/// Research records of an account (`UserResearch::user`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchAuthor;

impl Relation for ResearchAuthor {
    type Entity = UserResearch;
    type Key = UserResearchRef;
    const NAME: &'static str = "user_research";

    fn key(entity: &UserResearch) -> UserResearchRef {
        entity.key()
    }

    fn owner(entity: &UserResearch) -> Option<AccountRef> {
        entity.user()
    }

    fn set_owner(entity: &mut UserResearch, owner: Option<AccountRef>) {
        entity.set_user(owner);
    }
}

/// Resources currently held by an account (`Resource::current_owner`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceOwnership;

impl Relation for ResourceOwnership {
    type Entity = Resource;
    type Key = ResourceRef;
    const NAME: &'static str = "owned_resources";

    fn key(entity: &Resource) -> ResourceRef {
        entity.key()
    }

    fn owner(entity: &Resource) -> Option<AccountRef> {
        entity.current_owner()
    }

    fn set_owner(entity: &mut Resource, owner: Option<AccountRef>) {
        entity.set_current_owner(owner);
    }
}

/// Acquisition requests an account has sent (`OwnershipAcquisitionRequest::requester`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestsSent;

impl Relation for RequestsSent {
    type Entity = OwnershipAcquisitionRequest;
    type Key = AcquisitionRequestRef;
    const NAME: &'static str = "transfer_requests_sent";

    fn key(entity: &OwnershipAcquisitionRequest) -> AcquisitionRequestRef {
        entity.key()
    }

    fn owner(entity: &OwnershipAcquisitionRequest) -> Option<AccountRef> {
        entity.requester()
    }

    fn set_owner(entity: &mut OwnershipAcquisitionRequest, owner: Option<AccountRef>) {
        entity.set_requester(owner);
    }
}

/// Acquisition requests addressed to an account (`OwnershipAcquisitionRequest::initial_owner`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestsReceived;

impl Relation for RequestsReceived {
    type Entity = OwnershipAcquisitionRequest;
    type Key = AcquisitionRequestRef;
    const NAME: &'static str = "transfer_requests_received";

    fn key(entity: &OwnershipAcquisitionRequest) -> AcquisitionRequestRef {
        entity.key()
    }

    fn owner(entity: &OwnershipAcquisitionRequest) -> Option<AccountRef> {
        entity.initial_owner()
    }

    fn set_owner(entity: &mut OwnershipAcquisitionRequest, owner: Option<AccountRef>) {
        entity.set_initial_owner(owner);
    }
}

/// Insertion-ordered set of related entity handles owned by one account.
///
/// Read access is public. Mutation goes through [`Account`](super::Account)
/// so the member's back-reference is always updated alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[serde(bound(serialize = "R::Key: Serialize"))]
pub struct OwnedCollection<R: Relation> {
    members: Vec<R::Key>,
    #[serde(skip)]
    relation: PhantomData<R>,
}

impl<R: Relation> Default for OwnedCollection<R> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            relation: PhantomData,
        }
    }
}

// Stored arrays may repeat a handle; membership stays a set, first occurrence wins.
impl<'de, R: Relation> Deserialize<'de> for OwnedCollection<R>
where
    R::Key: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = Vec::<R::Key>::deserialize(deserializer)?;
        let mut members: Vec<R::Key> = Vec::with_capacity(stored.len());
        for key in stored {
            if !members.contains(&key) {
                members.push(key);
            }
        }
        Ok(Self {
            members,
            relation: PhantomData,
        })
    }
}

impl<R: Relation> OwnedCollection<R> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.members.contains(key)
    }

    /// Members in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &R::Key> + '_ {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[R::Key] {
        &self.members
    }

    /// Add `entity` and point its back-reference at `owner`.
    ///
    /// Returns false when the entity was already a member. Whatever collection
    /// the entity previously sat in is left alone.
    pub(crate) fn link(&mut self, owner: AccountRef, entity: &mut R::Entity) -> bool {
        let key = R::key(entity);
        if self.contains(&key) {
            return false;
        }

        self.members.push(key);
        R::set_owner(entity, Some(owner));
        debug!(relation = R::NAME, account = %owner, member = %key, "Linked member");
        true
    }

    /// Remove `entity`, clearing its back-reference unless it has already been
    /// reassigned to a different account.
    ///
    /// Returns false when the entity was not a member.
    pub(crate) fn unlink(&mut self, owner: AccountRef, entity: &mut R::Entity) -> bool {
        let key = R::key(entity);
        let Some(position) = self.members.iter().position(|member| *member == key) else {
            return false;
        };

        self.members.remove(position);
        if R::owner(entity) == Some(owner) {
            R::set_owner(entity, None);
            debug!(relation = R::NAME, account = %owner, member = %key, "Unlinked member");
        } else {
            debug!(
                relation = R::NAME,
                account = %owner,
                member = %key,
                "Unlinked member already owned elsewhere; back-reference kept"
            );
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_sets_back_reference_once() {
        let owner = AccountRef::new();
        let mut reports = OwnedCollection::<ReportAuthor>::default();
        let mut report = Report::new("Quarterly yield");

        assert!(reports.link(owner, &mut report));
        assert!(!reports.link(owner, &mut report));

        assert_eq!(reports.len(), 1);
        assert_eq!(report.user(), Some(owner));
    }

    #[test]
    fn test_unlink_non_member_is_noop() {
        let owner = AccountRef::new();
        let other = AccountRef::new();
        let mut reports = OwnedCollection::<ReportAuthor>::default();
        let mut report = Report::new("Stray");
        report.set_user(Some(other));

        assert!(!reports.unlink(owner, &mut report));
        assert_eq!(report.user(), Some(other));
    }

    #[test]
    fn test_unlink_keeps_reassigned_owner() {
        let first = AccountRef::new();
        let second = AccountRef::new();
        let mut reports = OwnedCollection::<ReportAuthor>::default();
        let mut report = Report::new("Moved");

        reports.link(first, &mut report);
        report.set_user(Some(second));

        assert!(reports.unlink(first, &mut report));
        assert!(reports.is_empty());
        assert_eq!(report.user(), Some(second));
    }

    #[test]
    fn test_members_keep_insertion_order() {
        let owner = AccountRef::new();
        let mut resources = OwnedCollection::<ResourceOwnership>::default();
        let mut a = Resource::new("Seed stock");
        let mut b = Resource::new("Kiln");
        let mut c = Resource::new("Loom");

        resources.link(owner, &mut b);
        resources.link(owner, &mut a);
        resources.link(owner, &mut c);
        resources.unlink(owner, &mut a);

        assert_eq!(resources.as_slice(), &[b.key(), c.key()]);
    }

    #[test]
    fn test_identity_not_value_equality() {
        let owner = AccountRef::new();
        let mut reports = OwnedCollection::<ReportAuthor>::default();
        let mut a = Report::new("Same title");
        let mut b = Report::new("Same title");

        reports.link(owner, &mut a);
        reports.link(owner, &mut b);

        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn test_same_request_targets_distinct_fields() {
        let requester = AccountRef::new();
        let holder = AccountRef::new();
        let mut sent = OwnedCollection::<RequestsSent>::default();
        let mut received = OwnedCollection::<RequestsReceived>::default();
        let mut request = OwnershipAcquisitionRequest::new(ResourceRef::new());

        sent.link(requester, &mut request);
        received.link(holder, &mut request);

        assert_eq!(request.requester(), Some(requester));
        assert_eq!(request.initial_owner(), Some(holder));

        received.unlink(holder, &mut request);
        assert_eq!(request.requester(), Some(requester));
        assert_eq!(request.initial_owner(), None);
    }

    #[test]
    fn test_serializes_as_handle_array() {
        let owner = AccountRef::new();
        let mut reports = OwnedCollection::<ReportAuthor>::default();
        let mut report = Report::new("Audit");
        reports.link(owner, &mut report);

        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json, serde_json::json!([report.key().to_string()]));

        let back: OwnedCollection<ReportAuthor> = serde_json::from_value(json).unwrap();
        assert_eq!(back, reports);
    }

    #[test]
    fn test_repeated_handles_collapse_on_load() {
        let owner = AccountRef::new();
        let mut first = Report::new("First");
        let second = Report::new("Second");
        let json = serde_json::json!([
            first.key().to_string(),
            second.key().to_string(),
            first.key().to_string(),
        ]);

        let mut reports: OwnedCollection<ReportAuthor> = serde_json::from_value(json).unwrap();
        assert_eq!(reports.as_slice(), &[first.key(), second.key()]);

        first.set_user(Some(owner));
        assert!(reports.unlink(owner, &mut first));
        assert!(!reports.contains(&first.key()));
        assert_eq!(first.user(), None);
    }
}
