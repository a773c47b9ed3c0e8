//! Rendering adapters

pub mod http;

pub use http::{HttpRenderAdapter, HttpRenderConfig};
