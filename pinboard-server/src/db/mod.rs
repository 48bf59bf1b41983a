//! Database layer - connection pool, migrations, and the message repository
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) shared through AppState - no
//!   per-request connection open/close
//! - Acquisition and release are scoped by sqlx on every exit path,
//!   including errors
//! - Parameterized statements only

pub mod messages;
pub mod migrations;
pub mod pool;

pub use messages::{insert_message, list_messages};
pub use pool::{create_pool, create_pool_lazy};
