//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::checkout_widget::{CHECKOUT_PRECONNECT, CHECKOUT_STYLESHEET, CheckoutWidget};
use crate::components::site_header::SiteHeader;
use crate::config::StorefrontConfig;
use crate::pages::{catalog::CatalogPage, wishlist::WishlistPage};
use crate::state::wishlist_context::WishlistProvider;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Wires the checkout widget's assets into the document; the widget is
/// omitted entirely when no public API key is configured.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = StorefrontConfig::from_build_env();
    let checkout = config
        .checkout_enabled()
        .then(|| view! { <CheckoutWidget api_key=config.checkout_api_key.clone()/> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {CHECKOUT_PRECONNECT
                    .into_iter()
                    .map(|href| view! { <link rel="preconnect" href=href/> })
                    .collect::<Vec<_>>()}
                <link rel="stylesheet" href=CHECKOUT_STYLESHEET/>
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
                {checkout}
            </body>
        </html>
    }
}

/// Root application component.
///
/// Mounts the wishlist scope around the router so every page can reach the
/// wishlist capabilities.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StorefrontConfig::from_build_env();
    let wishlist_config = config.wishlist.clone();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <WishlistProvider config=wishlist_config>
            <Router>
                <SiteHeader/>
                <main class="site-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=CatalogPage/>
                        <Route path=StaticSegment("wishlist") view=WishlistPage/>
                    </Routes>
                </main>
            </Router>
        </WishlistProvider>
    }
}
