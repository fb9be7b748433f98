//! Catalog DTOs served by the storefront API.
//!
//! DESIGN
//! ======
//! These mirror the fulfillment provider's sync-product shape. The wishlist
//! core only relies on `Product::id`; everything else is payload that rides
//! along inside a [`WishlistItem`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::wishlist::{ItemId, WishlistItem};

/// A catalog product with its purchasable variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ItemId,
    #[serde(default)]
    pub external_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// One purchasable style of a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Id the checkout widget uses for the cart line.
    pub external_id: String,
    pub name: String,
    /// Decimal price as sent by the fulfillment API, e.g. `"25.00"`.
    pub retail_price: String,
    pub currency: String,
    #[serde(default)]
    pub files: Vec<VariantFile>,
}

/// A rendered asset attached to a variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantFile {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl ProductVariant {
    /// Preview image URL, if the variant has one.
    pub fn preview_url(&self) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.kind == "preview")
            .and_then(|f| f.preview_url.as_deref())
    }
}

impl Product {
    pub fn variant(&self, external_id: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.external_id == external_id)
    }

    pub fn has_single_style(&self) -> bool {
        self.variants.len() <= 1
    }

    /// Snapshot this product as a wishlist entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be serialized.
    pub fn to_wishlist_item(&self) -> Result<WishlistItem, serde_json::Error> {
        WishlistItem::from_record(self)
    }
}
