//! Add-product flow.
//!
//! The form holds a [`ProductDraft`](crate::state::ProductDraft) of raw text fields.
//! Submitting validates in a fixed order:
//!
//! 1. title (trimmed), image and price text (trimmed) must all be non-empty,
//!    else `"All fields are required."`
//! 2. price must parse, else `"Price must be a number."`
//!
//! A rejected submission leaves products, draft and edit mode untouched.
//!
//! ## Image Uploads
//!
//! Reading an image file completes later than the selection that started it. Each
//! selection gets an [`UploadTicket`]; [`image_ready`] only accepts data for the ticket
//! issued last. A completion for an older selection is dropped, so a slow first read
//! can never overwrite the image of a newer selection.

use crate::commands::{
    helpers, CmdMessage, CmdResult, INVALID_PRICE_ERROR, MISSING_FIELDS_ERROR,
};
use crate::error::Result;
use crate::model::{parse_price, Product};
use crate::state::{ProductCard, ProductDraft, UploadTicket, ViewState};
use crate::store::{KeyValueStore, StorageKeys};
use tracing::debug;

/// Opens the add-product form. The current draft is kept.
pub fn begin(state: &mut ViewState) -> CmdResult {
    state.add_product.editing = true;
    CmdResult::default()
}

pub fn edit_title(state: &mut ViewState, text: impl Into<String>) -> CmdResult {
    state.add_product.draft.title = text.into();
    CmdResult::default()
}

pub fn edit_price(state: &mut ViewState, text: impl Into<String>) -> CmdResult {
    state.add_product.draft.price = text.into();
    CmdResult::default()
}

/// Starts a new image upload attempt. Any earlier attempt becomes stale.
pub fn select_image_file(state: &mut ViewState) -> CmdResult {
    let ticket = UploadTicket::new();
    if let Some(previous) = state.add_product.pending_upload.replace(ticket) {
        debug!(%previous, %ticket, "image selection superseded");
    }
    CmdResult::default().with_upload_ticket(ticket)
}

/// Delivers the encoded image for `ticket`.
///
/// Accepted only if `ticket` is the pending attempt and `data` is non-empty.
pub fn image_ready(state: &mut ViewState, ticket: UploadTicket, data: impl Into<String>) -> CmdResult {
    let data = data.into();
    let mut result = CmdResult::default();

    if state.add_product.pending_upload != Some(ticket) {
        debug!(%ticket, "discarding stale image completion");
        result.add_message(CmdMessage::info("Ignored an outdated image upload"));
        return result;
    }
    if data.is_empty() {
        debug!(%ticket, "image read produced no data");
        return result;
    }

    state.add_product.draft.image = data;
    state.add_product.pending_upload = None;
    result
}

/// Submits the add form with explicit values.
pub fn submit<S: KeyValueStore>(
    state: &mut ViewState,
    store: &S,
    keys: &StorageKeys,
    title: &str,
    price: &str,
    image: &str,
) -> Result<CmdResult> {
    if title.trim().is_empty() || image.is_empty() || price.trim().is_empty() {
        return Ok(reject(state, MISSING_FIELDS_ERROR));
    }
    let Some(price) = parse_price(price) else {
        return Ok(reject(state, INVALID_PRICE_ERROR));
    };

    let product = Product::new(image, title, price);
    let card = ProductCard::new(state.products.len(), &product);
    state.products.push(product);

    state.add_product.editing = false;
    state.add_product.error.clear();
    state.add_product.draft = ProductDraft::default();
    state.add_product.pending_upload = None;

    helpers::products_changed(state, store, keys)?;

    let mut result = CmdResult::default().with_affected_products(vec![card]);
    result.add_message(CmdMessage::success(format!("Product added: {}", title)));
    Ok(result)
}

/// Submits the add form using the current draft fields.
pub fn submit_draft<S: KeyValueStore>(
    state: &mut ViewState,
    store: &S,
    keys: &StorageKeys,
) -> Result<CmdResult> {
    let ProductDraft {
        title,
        price,
        image,
    } = state.add_product.draft.clone();
    submit(state, store, keys, &title, &price, &image)
}

fn reject(state: &mut ViewState, error: &str) -> CmdResult {
    state.add_product.error = error.to_string();
    CmdResult::rejected(error)
}
