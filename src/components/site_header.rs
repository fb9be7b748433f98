//! Top bar with catalog/wishlist navigation and the cart summary.

use leptos::prelude::*;

use crate::state::wishlist_context::use_wishlist_state;

/// Storefront header.
///
/// The `snipcart-*` classes are picked up by the checkout widget, which
/// fills in the item count and opens the cart on click.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let wishlist = use_wishlist_state();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Storefront"</a>
            <nav class="site-header__nav">
                <a
                    href="/wishlist"
                    class="site-header__wishlist"
                    class:site-header__wishlist--active=move || wishlist.has_items()
                >
                    "Wishlist"
                    <span class="site-header__count">{move || wishlist.len()}</span>
                </a>
                <button class="snipcart-checkout site-header__cart">
                    "Cart "
                    <span class="snipcart-items-count"></span>
                </button>
            </nav>
        </header>
    }
}
