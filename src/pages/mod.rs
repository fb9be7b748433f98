//! Routed storefront pages.

pub mod catalog;
pub mod wishlist;
