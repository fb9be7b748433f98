//! Storefront configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so public settings are
//! baked in at compile time from `STOREFRONT_*` variables and fall back to
//! defaults. The composition root may override any field.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Durable-storage key holding the serialized wishlist.
pub const STORAGE_KEY: &str = "items-wishlist";

/// Settings for the wishlist store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishlistConfig {
    pub storage_key: String,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            storage_key: option_env!("STOREFRONT_WISHLIST_KEY")
                .filter(|k| !k.is_empty())
                .unwrap_or(STORAGE_KEY)
                .to_owned(),
        }
    }
}

/// Top-level storefront settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub wishlist: WishlistConfig,
    /// Public API key for the checkout widget. Empty disables checkout.
    pub checkout_api_key: String,
}

impl StorefrontConfig {
    /// Build configuration from compile-time environment.
    pub fn from_build_env() -> Self {
        Self {
            wishlist: WishlistConfig::default(),
            checkout_api_key: option_env!("STOREFRONT_SNIPCART_API_KEY")
                .unwrap_or_default()
                .to_owned(),
        }
    }

    pub fn checkout_enabled(&self) -> bool {
        !self.checkout_api_key.is_empty()
    }
}
