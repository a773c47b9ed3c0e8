//! Statement application layer
//!
//! Wires the statement and export domains into a session that owns one
//! document and one export pipeline, and loads the settings the
//! `statement-export` binary runs with.
//!
//! # Modules
//!
//! - `config`: Environment-driven settings
//! - `session`: The per-user statement session
//! - `telemetry`: Tracing subscriber setup
//! - `error`: Application error type

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
pub use session::StatementSession;
