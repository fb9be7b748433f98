//! Saved-items list for the wishlist page.

use leptos::prelude::*;

use crate::state::wishlist::WishlistItem;
use crate::state::wishlist_context::{use_wishlist_dispatch, use_wishlist_state};

/// Lists every saved item in insertion order with a remove button each.
#[component]
pub fn WishlistPanel() -> impl IntoView {
    let wishlist = use_wishlist_state();

    view! {
        <section class="wishlist-panel">
            <Show
                when=move || wishlist.has_items()
                fallback=|| view! { <p class="wishlist-panel__empty">"Your wishlist is empty."</p> }
            >
                <ul class="wishlist-panel__items">
                    {move || {
                        wishlist
                            .items()
                            .into_iter()
                            .map(|item| view! { <WishlistRow item=item/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn WishlistRow(item: WishlistItem) -> impl IntoView {
    let dispatch = use_wishlist_dispatch();

    let name = item.field_str("name").unwrap_or("Untitled").to_owned();
    let thumbnail = item.field_str("thumbnail_url").map(str::to_owned);
    let id = item.id;

    let on_remove = move |_| {
        if let Some(id) = &id {
            dispatch.remove_item(id);
        }
    };

    view! {
        <li class="wishlist-panel__item">
            {thumbnail.map(|src| view! { <img class="wishlist-panel__thumb" src=src alt=""/> })}
            <span class="wishlist-panel__name">{name}</span>
            <button class="wishlist-panel__remove" title="Remove from wishlist" on:click=on_remove>
                "\u{d7}"
            </button>
        </li>
    }
}
