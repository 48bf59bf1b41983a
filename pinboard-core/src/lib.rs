//! pinboard-core: configuration and domain model for the pinboard
//! message board.
//!
//! No HTTP or SQL execution lives here; the server crate owns those.

pub mod config;
pub mod message;

pub use config::{AppConfig, DbConfig};
pub use message::{Message, NewMessage};
