//! Object identity handles
//!
//! Every in-memory entity carries a handle minted when the object is created.
//! Relationship membership and back-references compare handles, never field
//! values, so two entities with identical contents stay distinct. Handles are
//! separate from the storage identifier, which only exists after a save.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_ref {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a fresh handle
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_ref!(
    /// Identity of an [`Account`](super::Account) object
    AccountRef
);
entity_ref!(
    /// Identity of a [`Report`](super::Report)
    ReportRef
);
entity_ref!(
    /// Identity of a [`UserResearch`](super::UserResearch) record
    UserResearchRef
);
entity_ref!(
    /// Identity of a [`Resource`](super::Resource)
    ResourceRef
);
entity_ref!(
    /// Identity of an [`OwnershipAcquisitionRequest`](super::OwnershipAcquisitionRequest)
    AcquisitionRequestRef
);
entity_ref!(
    /// Identity of a [`ProductionSite`](super::ProductionSite)
    ProductionSiteRef
);
