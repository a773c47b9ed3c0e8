//! Core Kernel - Foundational types and utilities for the statement system
//!
//! This crate provides the building blocks shared by the statement and export domains:
//! - Lenient decimal parsing and statement amount formatting
//! - Port error taxonomy and adapter marker traits

pub mod amount;
pub mod ports;

pub use amount::{parse_amount_or_zero, format_statement_amount, round_cents};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
    OperationMetadata,
};
