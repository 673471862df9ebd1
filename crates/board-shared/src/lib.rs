//! # Board Shared
//!
//! Wire types shared between the HTTP layer and the domain services.
//! Field names here are part of the public JSON contract.

pub mod convert;
pub mod dto;
pub mod response;

pub use convert::{IdConverter, MapConverter, to_id_map};
pub use response::ErrorResponse;
