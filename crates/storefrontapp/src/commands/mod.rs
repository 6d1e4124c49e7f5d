//! # Command Layer
//!
//! Every state transition of the storefront lives here, one submodule per edit flow.
//! Commands are free functions over an explicitly passed `&mut ViewState` and a
//! `KeyValueStore`; nothing is global.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting for humans
//! - **Argument parsing**: that's the CLI layer's job
//! - **Fail on bad input**: validation problems are written into the state (inline
//!   error text) and into the returned messages, never returned as `Err`
//!
//! The only `Err` a command returns is a storage failure while persisting. By then the
//! in-memory transition has already happened.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`]:
//! - `affected_products`: cards that were added, removed or repriced
//! - `messages`: leveled messages (info, success, warning, error)
//! - `upload_ticket`: set by [`add::select_image_file`]
//!
//! A result carrying an error-level message means the submission was rejected; see
//! [`CmdResult::is_rejected`].
//!
//! ## Command Modules
//!
//! - [`load`]: Startup; reads the persisted snapshot
//! - [`message`]: Message card edit flow
//! - [`prices`]: Bulk price edit flow
//! - [`add`]: Add-product flow, including image uploads
//! - [`remove`]: Per-card removal
//! - [`helpers`]: Product persistence shared by the flows above

use crate::state::{ProductCard, UploadTicket};
use serde::Serialize;

pub mod add;
pub mod helpers;
pub mod load;
pub mod message;
pub mod prices;
pub mod remove;

/// Inline error shown when saving an empty message.
pub const EMPTY_MESSAGE_ERROR: &str = "Please enter a cute message.";
/// Inline error shown when a field of the add-product form is missing.
pub const MISSING_FIELDS_ERROR: &str = "All fields are required.";
/// Inline error shown when the add-product price does not parse.
pub const INVALID_PRICE_ERROR: &str = "Price must be a number.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_products: Vec<ProductCard>,
    pub messages: Vec<CmdMessage>,
    pub upload_ticket: Option<UploadTicket>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<ProductCard>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_upload_ticket(mut self, ticket: UploadTicket) -> Self {
        self.upload_ticket = Some(ticket);
        self
    }

    /// True when the command was blocked by a validation error.
    pub fn is_rejected(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::error(error));
        result
    }
}
