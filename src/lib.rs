//! Power table (powertable)
//!
//! TUI application that fetches a paginated collection of people and shows a
//! filterable table with a computed power column.
//!
//! Follows a Pure Core / Impure Shell architecture: `model` and `state` are
//! pure, while `source`, `view` and `logging` perform I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
