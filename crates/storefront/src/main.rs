//! # Storefront CLI
//!
//! The binary is deliberately thin: everything lives in `src/cli/`, and this file only
//! invokes `cli::run()` and turns a failure into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/storefront/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering via outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/storefrontapp/src/api.rs)                │
//! │  - Owns the view state, dispatches to commands              │
//! │  - Returns structured `CmdResult` / `RenderState` values    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each invocation is one page visit: the session is opened (which runs the startup
//! load), one flow is driven through the API, and the resulting view is printed.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
