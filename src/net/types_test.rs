use super::*;

fn sample_json() -> &'static str {
    r#"{
        "id": 301,
        "external_id": "ext-301",
        "name": "Logo Tee",
        "thumbnail_url": "https://files.example/tee.png",
        "variants": [
            {
                "external_id": "v-1",
                "name": "Logo Tee - Black / M",
                "retail_price": "25.00",
                "currency": "CAD",
                "files": [
                    {"type": "default", "preview_url": null},
                    {"type": "preview", "preview_url": "https://files.example/black.png"}
                ]
            },
            {
                "external_id": "v-2",
                "name": "Logo Tee - White / M",
                "retail_price": "25.00",
                "currency": "CAD"
            }
        ]
    }"#
}

fn sample() -> Product {
    serde_json::from_str(sample_json()).expect("product")
}

#[test]
fn product_deserializes_catalog_payload() {
    let product = sample();
    assert_eq!(product.id, ItemId::from(301_u64));
    assert_eq!(product.variants.len(), 2);
    assert!(!product.has_single_style());
    assert!(product.variants[1].files.is_empty());
}

#[test]
fn variant_preview_url_picks_preview_file() {
    let product = sample();
    assert_eq!(
        product.variants[0].preview_url(),
        Some("https://files.example/black.png")
    );
    assert_eq!(product.variants[1].preview_url(), None);
}

#[test]
fn variant_lookup_by_external_id() {
    let product = sample();
    assert_eq!(product.variant("v-2").map(|v| v.name.as_str()), Some("Logo Tee - White / M"));
    assert!(product.variant("missing").is_none());
}

#[test]
fn product_converts_to_wishlist_item_with_payload() {
    let item = sample().to_wishlist_item().expect("item");
    assert_eq!(item.key(), Some(&ItemId::from(301_u64)));
    assert_eq!(item.field_str("name"), Some("Logo Tee"));
    assert!(item.fields.get("variants").is_some_and(serde_json::Value::is_array));
}
