//! # CLI Layer
//!
//! This module is **one possible UI client** for the storefront, not the application
//! itself. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Parses arguments
//! - Formats output for humans
//! - Installs a `tracing` subscriber
//!
//! A submission the core rejects (empty message, missing fields, bad price) is shown
//! like any other render, and then reported as an error so the process exits non-zero.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
