//! Catalog card with variant picker, wishlist toggle, and add-to-cart button.

use leptos::prelude::*;

use crate::net::types::{Product, ProductVariant};
use crate::state::wishlist_context::{use_wishlist_dispatch, use_wishlist_state};
use crate::util::format::{format_price, format_variant_name};

const HEART_PATH: &str = "M12.001 4.529c2.349-2.109 5.979-2.039 8.242.228 2.262 2.268 2.34 5.88.236 8.236l-8.48 8.492-8.478-8.492c-2.104-2.356-2.025-5.974.236-8.236 2.265-2.264 5.888-2.34 8.244-.228z";

/// A product tile.
///
/// The heart button toggles wishlist membership for the whole product; the
/// cart button carries the checkout widget's `data-item-*` attributes for
/// the selected variant.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let dispatch = use_wishlist_dispatch();
    let wishlist = use_wishlist_state();

    let item = product
        .to_wishlist_item()
        .map_err(|e| log::warn!("product {} cannot be saved: {e}", product.id))
        .ok();
    let product_id = product.id.clone();
    let saved = Memo::new(move |_| wishlist.is_saved(&product_id));

    let name = product.name.clone();
    let one_style = product.has_single_style();
    let active = RwSignal::new(
        product
            .variants
            .first()
            .map(|v| v.external_id.clone())
            .unwrap_or_default(),
    );
    let options = product
        .variants
        .iter()
        .map(|v| {
            let value = v.external_id.clone();
            let label = format_variant_name(&v.name);
            view! { <option value=value>{label}</option> }
        })
        .collect::<Vec<_>>();
    let product = StoredValue::new(product);

    let active_variant = move || product.with_value(|p| p.variant(&active.get()).cloned());
    let variant_field = move |f: fn(&ProductVariant) -> String| {
        active_variant().map(|v| f(&v)).unwrap_or_default()
    };

    let on_toggle = move |_| {
        if let Some(item) = item.clone() {
            dispatch.add_item(item);
        }
    };

    let image_name = name.clone();
    let cart_name = name.clone();
    let preview = move || {
        let variant = active_variant()?;
        let src = variant.preview_url()?.to_owned();
        let alt = format!("{} {image_name}", variant.name);
        Some(view! { <img class="product-card__image" src=src alt=alt.clone() title=alt width="250" height="250"/> })
    };

    view! {
        <article class="product-card">
            <button
                class="product-card__wishlist"
                class:product-card__wishlist--saved=move || saved.get()
                aria-label=move || if saved.get() { "Remove from wishlist" } else { "Add to wishlist" }
                aria-pressed=move || saved.get().to_string()
                on:click=on_toggle
            >
                <svg class="product-card__heart" viewBox="0 0 24 24" aria-hidden="true">
                    <path d=HEART_PATH></path>
                </svg>
            </button>
            <div class="product-card__media">{preview}</div>
            <div class="product-card__body">
                <p class="product-card__name">{name}</p>
                <p class="product-card__price">
                    {move || active_variant().map(|v| format_price(&v.retail_price, &v.currency))}
                </p>
            </div>
            <div class="product-card__actions">
                <select
                    class="product-card__variants"
                    disabled=one_style
                    prop:value=move || active.get()
                    on:change=move |ev| active.set(event_target_value(&ev))
                >
                    {options}
                </select>
                <button
                    class="snipcart-add-item product-card__add"
                    data-item-id=move || active.get()
                    data-item-price=move || variant_field(|v| v.retail_price.clone())
                    data-item-url=move || format!("/api/products/{}", active.get())
                    data-item-description=move || variant_field(|v| v.name.clone())
                    data-item-image=move || variant_field(|v| v.preview_url().unwrap_or_default().to_owned())
                    data-item-name=cart_name
                >
                    "Add to Cart"
                </button>
            </div>
        </article>
    }
}
