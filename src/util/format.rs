//! Display formatting for catalog data.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Label shown for products that have a single unnamed variant.
pub const ONE_STYLE: &str = "One style";

/// Extract the style part of a fulfillment variant name.
///
/// Variant names look like `"Product - Style"`; anything without a style
/// segment is labelled [`ONE_STYLE`].
pub fn format_variant_name(variant_name: &str) -> String {
    match variant_name.split(" - ").nth(1) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => ONE_STYLE.to_owned(),
    }
}

/// Format a decimal price string in Canadian-English currency style.
///
/// Only CAD, USD, EUR and GBP get a symbol. Any other currency renders as
/// `"<CODE> 12.00"`, and an unparseable amount is echoed with its code.
pub fn format_price(amount: &str, currency: &str) -> String {
    let Ok(value) = amount.trim().parse::<f64>() else {
        return format!("{amount} {currency}");
    };
    let symbol = match currency {
        "CAD" => "$",
        "USD" => "US$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        other => return format!("{other} {value:.2}"),
    };
    format!("{symbol}{value:.2}")
}
