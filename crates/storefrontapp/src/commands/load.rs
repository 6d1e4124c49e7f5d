//! Startup: restores the persisted snapshot into a fresh [`ViewState`].
//!
//! Nothing here can fail for the user. A missing, unreadable or undecodable product
//! entry leaves the built-in defaults in place and only produces a log line. After
//! loading, the resolved product list is written back so the store always holds what
//! is displayed (this also replaces a corrupt entry with the defaults).

use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::state::ViewState;
use crate::store::{KeyValueStore, StorageKeys};
use tracing::{debug, warn};

pub fn run<S: KeyValueStore>(
    state: &mut ViewState,
    store: &S,
    keys: &StorageKeys,
) -> Result<CmdResult> {
    if let Some(message) = read_entry(store, &keys.message) {
        if !message.is_empty() {
            state.message.committed = message.clone();
            state.message.draft = message;
        }
    }

    if let Some(raw) = read_entry(store, &keys.products) {
        match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => {
                debug!(count = products.len(), "restored persisted products");
                state.products = products;
            }
            Err(e) => {
                warn!(error = %e, key = %keys.products, "error parsing saved products, using defaults");
            }
        }
    }

    helpers::products_changed(state, store, keys)?;
    Ok(CmdResult::default())
}

fn read_entry<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, key, "failed to read persisted entry, treating as absent");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_products;
    use crate::store::mem_backend::MemStore;

    fn load(store: &MemStore) -> ViewState {
        let mut state = ViewState::new();
        run(&mut state, store, &StorageKeys::default()).unwrap();
        state
    }

    #[test]
    fn test_empty_store_keeps_defaults() {
        let store = MemStore::new();
        let state = load(&store);
        assert_eq!(state.products, default_products());
        assert_eq!(state.message.committed, "");
        assert_eq!(state.price_edit.buffer.len(), 3);
    }

    #[test]
    fn test_empty_store_gets_defaults_written() {
        let store = MemStore::new();
        load(&store);
        let raw = store.get("products").unwrap().unwrap();
        let stored: Vec<Product> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, default_products());
    }

    #[test]
    fn test_restores_message_into_committed_and_draft() {
        let store = MemStore::with_entries([("favoriteMessage", "hello there")]);
        let state = load(&store);
        assert_eq!(state.message.committed, "hello there");
        assert_eq!(state.message.draft, "hello there");
        assert!(!state.message.editing);
    }

    #[test]
    fn test_empty_stored_message_is_ignored() {
        let store = MemStore::with_entries([("favoriteMessage", "")]);
        let state = load(&store);
        assert_eq!(state.message.committed, "");
        assert_eq!(state.message.draft, "");
    }

    #[test]
    fn test_restores_products_and_rebuilds_buffer() {
        let store = MemStore::with_entries([(
            "products",
            r#"[{"image":"a.png","title":"Hat","price":12.5},{"image":"b.png","title":"Cap","price":3}]"#,
        )]);
        let state = load(&store);
        assert_eq!(
            state.products,
            vec![
                Product::new("a.png", "Hat", 12.5),
                Product::new("b.png", "Cap", 3.0)
            ]
        );
        assert_eq!(state.price_edit.buffer, vec!["12.5", "3"]);
    }

    #[test]
    fn test_empty_product_array_is_respected() {
        let store = MemStore::with_entries([("products", "[]")]);
        let state = load(&store);
        assert!(state.products.is_empty());
        assert!(state.price_edit.buffer.is_empty());
    }

    #[test]
    fn test_malformed_products_fall_back_to_defaults() {
        let store = MemStore::with_entries([("products", "{not json")]);
        let mut state = ViewState::new();
        let result = run(&mut state, &store, &StorageKeys::default()).unwrap();

        assert_eq!(state.products, default_products());
        assert_eq!(state.price_edit.buffer, vec!["10", "10", "10"]);
        assert!(result.messages.is_empty());
        assert_eq!(state.message.error, "");
        assert_eq!(state.add_product.error, "");
    }

    #[test]
    fn test_wrong_shape_products_fall_back_to_defaults() {
        let store = MemStore::with_entries([("products", r#"[{"title":"no price"}]"#)]);
        let state = load(&store);
        assert_eq!(state.products, default_products());
    }

    #[test]
    fn test_malformed_entry_is_overwritten_with_defaults() {
        let store = MemStore::with_entries([("products", "garbage")]);
        load(&store);
        let raw = store.get("products").unwrap().unwrap();
        assert!(serde_json::from_str::<Vec<Product>>(&raw).is_ok());
    }

    #[test]
    fn test_custom_keys_are_honoured() {
        let store = MemStore::with_entries([("msg", "custom")]);
        let keys = StorageKeys {
            message: "msg".into(),
            products: "cards".into(),
        };
        let mut state = ViewState::new();
        run(&mut state, &store, &keys).unwrap();
        assert_eq!(state.message.committed, "custom");
        assert!(store.get("cards").unwrap().is_some());
        assert!(store.get("products").unwrap().is_none());
    }
}
