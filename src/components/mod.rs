//! Reusable storefront UI components.

pub mod checkout_widget;
pub mod product_card;
pub mod site_header;
pub mod wishlist_panel;
