//! Resource accounts - account entity for the resource management platform
//!
//! An account carries login identity, roles and profile fields, and owns five
//! associations with other entities:
//!
//! - **Reports** it has filed
//! - **Research** records it is pursuing
//! - **Resources** it currently holds
//! - **Acquisition requests** it has sent, and those it has received
//!
//! Each association is kept consistent from both ends: adding a member sets
//! the member's back-reference to the account, removing it clears that
//! back-reference unless another account has claimed the member since.
//!
//! Storage and authentication sit behind [`db::AccountStore`] and
//! [`auth::UserIdentity`]; an in-memory store and Argon2 hashing are included.
//!
//! ```
//! use resource_accounts::db::schemas::{Account, Resource};
//!
//! let mut alice = Account::new("alice@example.org", "Alice", "Ng");
//! let mut bob = Account::new("bob@example.org", "Bob", "Ortiz");
//! let mut kiln = Resource::new("Kiln");
//!
//! alice.add_owned_resource(&mut kiln);
//! bob.add_owned_resource(&mut kiln);
//! alice.remove_owned_resource(&mut kiln);
//!
//! assert_eq!(kiln.current_owner(), Some(bob.key()));
//! ```

pub mod auth;
pub mod config;
pub mod db;
pub mod types;

pub use config::Args;
pub use types::{AccountError, Result};
