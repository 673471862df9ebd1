//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post storage via SeaORM
//! - `auth` - Argon2 password hashing

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, PasswordHashConfig};
