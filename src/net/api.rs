//! REST helpers for the storefront catalog.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an empty catalog since the listing is
//! fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and collapse to an empty catalog so a broken API
//! leaves the page usable.

#![allow(clippy::unused_async)]

use super::types::Product;

/// Fetch the product catalog from `/api/products`.
pub async fn fetch_products() -> Vec<Product> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/products").send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("catalog request failed: {e}");
                return Vec::new();
            }
        };
        if !resp.ok() {
            log::warn!("catalog request returned {}", resp.status());
            return Vec::new();
        }
        resp.json::<Vec<Product>>().await.unwrap_or_else(|e| {
            log::warn!("catalog response was not a product list: {e}");
            Vec::new()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
