use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::parse_price;
use crate::state::{ProductCard, ViewState};
use crate::store::{KeyValueStore, StorageKeys};
use tracing::debug;

/// Opens the price editor with a buffer freshly derived from current prices.
pub fn begin_edit(state: &mut ViewState) -> CmdResult {
    state.rebuild_price_buffer();
    state.price_edit.editing = true;
    CmdResult::default()
}

/// Replaces one raw buffer entry. Indexes outside the buffer are ignored.
pub fn edit_field(state: &mut ViewState, index: usize, text: impl Into<String>) -> CmdResult {
    let mut result = CmdResult::default();
    match state.price_edit.buffer.get_mut(index) {
        Some(slot) => *slot = text.into(),
        None => {
            debug!(index, len = state.price_edit.buffer.len(), "price field out of range");
            result.add_message(CmdMessage::warning(format!(
                "No product at position {}",
                index.saturating_add(1)
            )));
        }
    }
    result
}

/// Applies `buffer` to the product prices, index by index.
///
/// Entries that do not parse (or are missing because `buffer` is short) keep the old
/// price. Submitting never fails validation: the editor always closes.
pub fn submit<S: KeyValueStore>(
    state: &mut ViewState,
    store: &S,
    keys: &StorageKeys,
    buffer: &[String],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for (index, product) in state.products.iter_mut().enumerate() {
        let parsed = buffer.get(index).and_then(|text| parse_price(text));
        match parsed {
            Some(price) if price != product.price => {
                product.price = price;
                result.affected_products.push(ProductCard::new(index, product));
            }
            Some(_) => {}
            None => debug!(index, "unparsable price ignored"),
        }
    }

    state.price_edit.editing = false;
    helpers::products_changed(state, store, keys)?;

    result.add_message(CmdMessage::success(match result.affected_products.len() {
        0 => "Prices unchanged".to_string(),
        1 => "1 price updated".to_string(),
        n => format!("{} prices updated", n),
    }));
    Ok(result)
}
