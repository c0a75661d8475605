//! Account persistence
//!
//! Schemas for the account entity and its associations, the storage
//! boundary, and fixture loading for seeding a store.

pub mod fixtures;
pub mod memory;
pub mod schemas;
pub mod store;

pub use memory::MemoryAccountStore;
pub use store::AccountStore;
