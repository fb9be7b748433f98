use super::*;

#[test]
fn wishlist_config_default_key() {
    if option_env!("STOREFRONT_WISHLIST_KEY").map_or(true, str::is_empty) {
        assert_eq!(WishlistConfig::default().storage_key, STORAGE_KEY);
    }
}

#[test]
fn checkout_disabled_without_api_key() {
    let config = StorefrontConfig::default();
    assert!(config.checkout_api_key.is_empty());
    assert!(!config.checkout_enabled());
}

#[test]
fn checkout_enabled_with_api_key() {
    let config = StorefrontConfig {
        checkout_api_key: "pk_test".to_owned(),
        ..StorefrontConfig::default()
    };
    assert!(config.checkout_enabled());
}
