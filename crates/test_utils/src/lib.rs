//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! statement test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built statements and line items
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators
//! - `assertions`: Assertion helpers for statement snapshots
//! - `render_stub`: A local HTTP rendering service for export tests

pub mod fixtures;
pub mod builders;
pub mod generators;
pub mod assertions;
pub mod render_stub;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
pub use assertions::*;
pub use render_stub::*;
