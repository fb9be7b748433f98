//! Storefront helpers below the state layer.
//!
//! `local_storage` is the durable bridge the wishlist persists through;
//! `format` turns catalog variant names and prices into display strings.

pub mod format;
pub mod local_storage;
