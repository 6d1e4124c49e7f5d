//! # Storefront Architecture
//!
//! Storefront is a **UI-agnostic view-state engine** for a small decorative shop display:
//! a personal message card and a row of product cards (image, title, price) that the
//! visitor can add, remove and reprice. The CLI in `crates/storefront` is one client;
//! the same core could sit behind a web or desktop front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (CLI, or anything sending `Event`s)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns ViewState + store + keys                            │
//! │  - Dispatches events to commands                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Transition functions over `&mut ViewState`               │
//! │  - Validation, buffer rebuilds, persistence writes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FsStore (production), MemStore (testing)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides whether anyone sees
//! them.
//!
//! ## Failure Model
//!
//! Nothing a visitor does is fatal. Validation problems become inline error text in
//! the state, a corrupt persisted product list falls back to the built-in cards, and
//! unparsable prices in a bulk edit are skipped. The only `Err` surfaced by the core
//! is a storage write failure.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade; entry point for all operations
//! - [`commands`]: Transition logic per edit flow
//! - [`state`]: `ViewState` and the outbound `RenderState`
//! - [`events`]: Serializable inbound events
//! - [`model`]: `Product`, defaults, price parsing and formatting
//! - [`store`]: Key-value storage abstraction and backends
//! - [`image`]: `data:` URL encoding for uploaded images
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod image;
pub mod model;
pub mod state;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
