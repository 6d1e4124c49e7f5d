use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::{ProductCard, ViewState};
use crate::store::{KeyValueStore, StorageKeys};

/// Removes the product at `index` (0-based). Later products shift down by one.
///
/// An out-of-range index changes nothing and persists nothing.
pub fn run<S: KeyValueStore>(
    state: &mut ViewState,
    store: &S,
    keys: &StorageKeys,
    index: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if index >= state.products.len() {
        result.add_message(CmdMessage::warning(format!(
            "No product at position {}",
            index.saturating_add(1)
        )));
        return Ok(result);
    }

    let removed = state.products.remove(index);
    helpers::products_changed(state, store, keys)?;

    result.add_message(CmdMessage::success(format!(
        "Product removed: {}",
        removed.title
    )));
    result.affected_products.push(ProductCard::new(index, &removed));
    Ok(result)
}
