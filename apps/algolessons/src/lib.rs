//! # Algolessons Library
//!
//! This library exposes the algolessons modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod page;

// Re-export the workspace crates for convenience
pub use algolessons_core;
pub use algolessons_sdk;
