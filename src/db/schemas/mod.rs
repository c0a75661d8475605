//! Document schemas
//!
//! The account entity, the entities it is associated with, and the
//! bookkeeping that keeps both sides of each association in agreement.

mod account;
mod refs;
mod related;
mod relation;

pub use account::{
    Account, AccountId, ACCOUNT_COLLECTION, EMAIL_MAX_LEN, NAME_MAX_LEN, ROLE_PRO, ROLE_USER,
    WALLET_MAX_LEN,
};
pub use refs::{
    AccountRef, AcquisitionRequestRef, ProductionSiteRef, ReportRef, ResourceRef, UserResearchRef,
};
pub use related::{OwnershipAcquisitionRequest, ProductionSite, Report, Resource, UserResearch};
pub use relation::{
    OwnedCollection, Relation, ReportAuthor, RequestsReceived, RequestsSent, ResearchAuthor,
    ResourceOwnership,
};
