//! Catalog page listing every product.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;

/// Product grid fetched from the catalog API on mount.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let products = LocalResource::new(|| crate::net::api::fetch_products());

    view! {
        <div class="catalog-page">
            <h1 class="catalog-page__title">"Shop"</h1>
            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="catalog-page__empty">"No products available."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="catalog-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|product| view! { <ProductCard product=product/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
