//! Wishlist page.

use leptos::prelude::*;

use crate::components::wishlist_panel::WishlistPanel;

#[component]
pub fn WishlistPage() -> impl IntoView {
    view! {
        <div class="wishlist-page">
            <h1 class="wishlist-page__title">"Wishlist"</h1>
            <WishlistPanel/>
        </div>
    }
}
