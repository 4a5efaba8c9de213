//! Player registry module.
//!
//! Owns player identity. Ids are serial database keys assigned at
//! registration and never reused; names are free text and need not be unique.
//! Win and match counts are deliberately absent here — they are derived from
//! the match log (see [`crate::standings`]).

pub mod manager;
pub mod models;

pub use manager::PlayerRegistry;
pub use models::{Player, PlayerId};
