use std::fs;
use storefrontapp::api::StorefrontApi;
use storefrontapp::model::{default_products, Product};
use storefrontapp::store::fs_backend::FsStore;
use storefrontapp::store::mem_backend::MemStore;
use storefrontapp::store::KeyValueStore;
use tempfile::TempDir;

#[test]
fn test_added_products_survive_reload() {
    let dir = TempDir::new().unwrap();

    let mut api = StorefrontApi::open(FsStore::new(dir.path())).unwrap();
    for (i, title) in ["Hat", "Scarf", "Mug"].iter().enumerate() {
        let price = format!("{}.75", i + 1);
        let image = format!("/img/{}.png", title.to_lowercase());
        let result = api.submit_new_product(title, &price, &image).unwrap();
        assert!(!result.is_rejected());
    }
    let before = api.state().products.clone();
    assert_eq!(before.len(), 6);

    let reloaded = StorefrontApi::open(FsStore::new(dir.path())).unwrap();
    assert_eq!(reloaded.state().products, before);
    assert_eq!(reloaded.render().price_buffer.len(), 6);
    assert_eq!(reloaded.render().products[5].price, "3.75");
}

#[test]
fn test_buffer_tracks_products_across_operations() {
    let mut api = StorefrontApi::open(MemStore::new()).unwrap();
    let check = |api: &StorefrontApi<MemStore>| {
        let state = api.state();
        assert_eq!(state.price_edit.buffer.len(), state.products.len());
        for (text, product) in state.price_edit.buffer.iter().zip(&state.products) {
            assert_eq!(text.parse::<f64>().unwrap(), product.price);
        }
    };

    check(&api);
    api.submit_new_product("A", "1.5", "a").unwrap();
    check(&api);
    api.remove_product(0).unwrap();
    check(&api);
    api.remove_product(10).unwrap();
    check(&api);
    api.submit_new_product("B", "2", "b").unwrap();
    api.remove_product(2).unwrap();
    check(&api);
    api.submit_prices(&["9".to_string()]).unwrap();
    check(&api);
}

#[test]
fn test_corrupt_disk_entry_recovers_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("products"), "[{\"image\": 3").unwrap();
    fs::write(dir.path().join("favoriteMessage"), "still here").unwrap();

    let api = StorefrontApi::open(FsStore::new(dir.path())).unwrap();

    assert_eq!(api.state().products, default_products());
    assert_eq!(api.render().message, "still here");
    assert_eq!(api.render().message_error, "");
    assert_eq!(api.render().add_product_error, "");

    let healed = api.store().get("products").unwrap().unwrap();
    let decoded: Vec<Product> = serde_json::from_str(&healed).unwrap();
    assert_eq!(decoded, default_products());
}

#[test]
fn test_reads_entries_written_by_a_browser() {
    let store = MemStore::with_entries([
        ("favoriteMessage", "Have a lovely day"),
        (
            "products",
            r#"[{"image":"data:image/png;base64,iVBORw0KGgo=","title":"Bunny's Milk","price":10},{"image":"/images/card2.png","title":"Pikachu Pouch","price":7.5}]"#,
        ),
    ]);

    let api = StorefrontApi::open(store).unwrap();
    let render = api.render();

    assert_eq!(render.message, "Have a lovely day");
    assert!(render.has_message);
    assert_eq!(render.products.len(), 2);
    assert_eq!(render.products[0].price, "10.00");
    assert_eq!(render.products[1].price, "7.50");
    assert_eq!(render.price_buffer, vec!["10", "7.5"]);
}
