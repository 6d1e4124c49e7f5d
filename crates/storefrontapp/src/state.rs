//! # View State
//!
//! All mutable state of one storefront session lives in a single owned [`ViewState`].
//! Transition functions in [`crate::commands`] take it by `&mut` and are the only
//! code that mutates it.
//!
//! ## Slices
//!
//! - [`MessageState`]: committed message, draft, edit flag, inline error.
//! - `products`: the ordered product sequence.
//! - [`PriceEditState`]: raw text buffer for bulk price editing plus its edit flag.
//! - [`AddProductState`]: add-form draft, edit flag, inline error, pending upload.
//!
//! ## The Buffer Invariant
//!
//! `price_edit.buffer.len() == products.len()` holds after every transition. Anything
//! that changes the product sequence calls [`ViewState::rebuild_price_buffer`], which
//! re-derives the whole buffer from current prices instead of patching single entries.
//!
//! ## Render State
//!
//! [`RenderState`] is the read-only view handed to a presentation layer. It carries
//! display-ready strings (fallback message, two-digit prices) so front ends never
//! re-implement formatting.

use crate::model::{default_products, price_text, Product, DEFAULT_MESSAGE, DEFAULT_NEW_PRICE};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one image-selection attempt in the add-product form.
///
/// Selecting a new file issues a new ticket. A completion carrying an older ticket
/// is stale and gets discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadTicket(Uuid);

impl UploadTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UploadTicket {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UploadTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const ADD_MESSAGE_ACTION: &str = "Add Message";
pub const EDIT_MESSAGE_ACTION: &str = "Edit Message";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub committed: String,
    pub draft: String,
    pub editing: bool,
    pub error: String,
}

impl MessageState {
    /// The text to show on the message card.
    pub fn display(&self) -> &str {
        if self.committed.is_empty() {
            DEFAULT_MESSAGE
        } else {
            &self.committed
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceEditState {
    pub buffer: Vec<String>,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub image: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: DEFAULT_NEW_PRICE.to_string(),
            image: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProductState {
    pub draft: ProductDraft,
    pub editing: bool,
    pub error: String,
    pub pending_upload: Option<UploadTicket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub message: MessageState,
    pub products: Vec<Product>,
    pub price_edit: PriceEditState,
    pub add_product: AddProductState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_products(default_products())
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let mut state = Self {
            message: MessageState::default(),
            products,
            price_edit: PriceEditState::default(),
            add_product: AddProductState::default(),
        };
        state.rebuild_price_buffer();
        state
    }

    /// Re-derives the price-edit buffer from the current product prices.
    pub fn rebuild_price_buffer(&mut self) {
        self.price_edit.buffer = self.products.iter().map(|p| price_text(p.price)).collect();
    }

    pub fn render(&self) -> RenderState {
        RenderState {
            message: self.message.display().to_string(),
            has_message: !self.message.committed.is_empty(),
            message_action: if self.message.committed.is_empty() {
                ADD_MESSAGE_ACTION
            } else {
                EDIT_MESSAGE_ACTION
            }
            .to_string(),
            editing_message: self.message.editing,
            message_draft: self.message.draft.clone(),
            message_error: self.message.error.clone(),
            products: self
                .products
                .iter()
                .enumerate()
                .map(|(index, p)| ProductCard::new(index, p))
                .collect(),
            editing_prices: self.price_edit.editing,
            price_buffer: self.price_edit.buffer.clone(),
            adding_product: self.add_product.editing,
            new_product: self.add_product.draft.clone(),
            add_product_error: self.add_product.error.clone(),
            upload_pending: self.add_product.pending_upload.is_some(),
        }
    }
}

/// One product as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub index: usize,
    pub image: String,
    pub title: String,
    pub price: String,
}

impl ProductCard {
    pub fn new(index: usize, product: &Product) -> Self {
        Self {
            index,
            image: product.image.clone(),
            title: product.title.clone(),
            price: product.formatted_price(),
        }
    }
}

/// Outbound view of the whole session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub message: String,
    pub has_message: bool,
    /// Label for the message card's edit action.
    pub message_action: String,
    pub editing_message: bool,
    pub message_draft: String,
    pub message_error: String,
    pub products: Vec<ProductCard>,
    pub editing_prices: bool,
    pub price_buffer: Vec<String>,
    pub adding_product: bool,
    pub new_product: ProductDraft,
    pub add_product_error: String,
    pub upload_pending: bool,
}
