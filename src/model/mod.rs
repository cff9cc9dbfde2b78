//! Domain model types and pure derivations.
//!
//! Everything here is pure data or a total function over it.

pub mod entity;
pub mod error;
pub mod filter;
pub mod key_action;
pub mod power;

// Re-export for convenience
pub use entity::{Entity, PeoplePage, UNKNOWN};
pub use error::{AppError, NetworkError};
pub use filter::filter_entities;
pub use key_action::KeyAction;
pub use power::{MISSING_MARKER, Power, compute_power};
