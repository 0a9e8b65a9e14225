//! Common utilities for the Thistle selector builder.
//!
//! This crate provides shared infrastructure used by the selector crate and the CLI:
//! - **Warning System** - colored, deduplicated stderr output for suspicious input

pub mod warning;
