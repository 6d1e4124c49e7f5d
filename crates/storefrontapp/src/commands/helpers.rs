use crate::error::{Result, StorefrontError};
use crate::model::Product;
use crate::state::ViewState;
use crate::store::{KeyValueStore, StorageKeys};

/// Called after every change to the product sequence: rebuilds the price buffer, then
/// writes the sequence under the products key.
pub fn products_changed<S: KeyValueStore>(
    state: &mut ViewState,
    store: &S,
    keys: &StorageKeys,
) -> Result<()> {
    state.rebuild_price_buffer();
    save_products(store, keys, &state.products)
}

pub fn save_products<S: KeyValueStore>(
    store: &S,
    keys: &StorageKeys,
    products: &[Product],
) -> Result<()> {
    let json = serde_json::to_string(products).map_err(StorefrontError::Serialization)?;
    store.set(&keys.products, &json)
}
