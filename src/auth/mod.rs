//! Authentication for accounts
//!
//! Provides:
//! - Password hashing with Argon2
//! - The identity contract accounts expose to the authenticator
//! - Email/password authentication against an account store

pub mod identity;
pub mod password;

pub use identity::{authenticate, PasswordAuthenticated, UserIdentity};
pub use password::{hash_password, verify_password};
