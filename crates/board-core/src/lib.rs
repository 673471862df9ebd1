//! # Board Core
//!
//! The domain layer of the post board.
//! This crate contains the post use cases with zero infrastructure dependencies;
//! storage and password hashing are reached through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::PostService;
