//! Client-side storefront state.
//!
//! DESIGN
//! ======
//! `wishlist` holds the plain-Rust model, reducer and store; `wishlist_context`
//! lifts it into a reactive scope for components.

pub mod wishlist;
pub mod wishlist_context;
