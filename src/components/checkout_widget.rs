//! Third-party checkout widget bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget owns cart, address and payment UI. The storefront only loads
//! its assets and renders the hidden config container it reads on start.

use leptos::prelude::*;

pub const CHECKOUT_PRECONNECT: [&str; 2] = ["https://app.snipcart.com", "https://cdn.snipcart.com"];
pub const CHECKOUT_STYLESHEET: &str = "https://cdn.snipcart.com/themes/v3.4.0/default/snipcart.css";
const CHECKOUT_SCRIPT: &str = "https://cdn.snipcart.com/themes/v3.4.0/default/snipcart.js";

// Extra address field collected by the widget.
const ADDRESS_FIELDS: &str = r#"<address-fields section="top"><div class="snipcart-form__field"><snipcart-label for="phone">Phone number</snipcart-label><snipcart-input name="phone"></snipcart-input></div></address-fields>"#;

/// Script tag plus the hidden `#snipcart` container.
#[component]
pub fn CheckoutWidget(api_key: String) -> impl IntoView {
    view! {
        <script src=CHECKOUT_SCRIPT defer=true></script>
        <div
            id="snipcart"
            data-config-modal-style="side"
            data-api-key=api_key
            hidden=true
            inner_html=ADDRESS_FIELDS
        ></div>
    }
}
