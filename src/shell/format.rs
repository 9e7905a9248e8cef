//! Text rendering for shell replies.

use crate::{
    core::{CartState, OrderSummary, format_price},
    entities::{Category, Product},
};
use std::fmt::Write;

/// One-line product listing: `[id] Name - price (badge) (Only N left)`.
pub(crate) fn product_line(product: &Product, currency: &str, low_stock_threshold: u32) -> String {
    let mut line = format!(
        "[{}] {} - {}",
        product.id,
        product.name,
        format_price(product.price, currency)
    );
    if let Some(old) = product.old_price.filter(|old| *old > product.price) {
        let _ = write!(line, " (was {})", format_price(old, currency));
    }
    if let Some(badge) = &product.badge {
        let _ = write!(line, " [{badge}]");
    }
    if !product.is_in_stock() {
        line.push_str(" (Sold out)");
    } else if product.is_low_stock(low_stock_threshold) {
        let _ = write!(line, " (Only {} left)", product.stock);
    }
    line
}

/// A list of products, or `empty_message` when there are none.
pub(crate) fn product_list<'a, I>(
    products: I,
    currency: &str,
    low_stock_threshold: u32,
    empty_message: &str,
) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    let lines: Vec<String> = products
        .into_iter()
        .map(|p| product_line(p, currency, low_stock_threshold))
        .collect();
    if lines.is_empty() {
        empty_message.to_string()
    } else {
        lines.join("\n")
    }
}

/// Everything the product detail overlay shows.
pub(crate) fn product_detail(product: &Product, currency: &str, low_stock_threshold: u32) -> String {
    let mut out = format!("**{}**\n", product.name);
    let _ = writeln!(out, "{}", product.description);
    let _ = write!(out, "Price: {}", format_price(product.price, currency));
    if let Some(percent) = product.discount_percent() {
        let _ = write!(out, " ({percent}% off)");
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "Rating: {:.1}/5 ({} reviews)",
        product.rating, product.review_count
    );
    if !product.is_in_stock() {
        out.push_str("Sold out\n");
    } else if product.is_low_stock(low_stock_threshold) {
        let _ = writeln!(out, "Only {} left", product.stock);
    } else {
        let _ = writeln!(out, "In stock: {}", product.stock);
    }
    for benefit in &product.benefits {
        let _ = writeln!(out, "• {benefit}");
    }
    let _ = write!(out, "Categories: {}", product.categories.join(", "));
    out
}

/// The category directory.
pub(crate) fn category_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{} ({}) - {}", c.name, c.id, c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The cart panel: lines, then subtotal, shipping and total.
pub(crate) fn cart_view(state: &CartState, summary: &OrderSummary, currency: &str) -> String {
    if state.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut out = format!("Your cart ({} items)\n", state.total_items());
    for item in state.items() {
        let _ = writeln!(
            out,
            "[{}] {} x{} - {}",
            item.id,
            item.name,
            item.quantity,
            format_price(item.line_total(), currency)
        );
    }
    let _ = writeln!(out, "Subtotal: {}", format_price(summary.subtotal, currency));
    if summary.free_shipping {
        out.push_str("Shipping: Free\n");
    } else {
        let _ = writeln!(out, "Shipping: {}", format_price(summary.shipping, currency));
    }
    if let Some(remaining) = summary.free_shipping_remaining {
        let _ = writeln!(
            out,
            "Add {} more for free shipping",
            format_price(remaining, currency)
        );
    }
    let _ = write!(out, "Total: {}", format_price(summary.total, currency));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CartStore, ShippingPolicy};
    use crate::test_utils::{sample_item, sample_product};

    #[test]
    fn test_product_line_markers() {
        let mut product = sample_product(9, "Philodendron Pink Princess", 1999);
        product.old_price = Some(2499);
        product.badge = Some("Rare Find".to_string());
        product.stock = 3;
        assert_eq!(
            product_line(&product, "Rs.", 5),
            "[9] Philodendron Pink Princess - Rs. 1999.00/- (was Rs. 2499.00/-) [Rare Find] (Only 3 left)"
        );

        product.stock = 0;
        assert!(product_line(&product, "Rs.", 5).ends_with("(Sold out)"));
    }

    #[test]
    fn test_product_list_empty_message() {
        assert_eq!(
            product_list(Vec::<&Product>::new(), "Rs.", 5, "Nothing here."),
            "Nothing here."
        );
    }

    #[test]
    fn test_product_detail_includes_discount() {
        let mut product = sample_product(1, "Monstera Deliciosa", 1299);
        product.old_price = Some(1499);
        let detail = product_detail(&product, "Rs.", 5);
        assert!(detail.contains("Price: Rs. 1299.00/- (13% off)"));
        assert!(detail.contains("In stock: 10"));
        assert!(detail.contains("• Low maintenance"));
    }

    #[test]
    fn test_cart_view() {
        let policy = ShippingPolicy::default();
        let mut store = CartStore::new();
        assert_eq!(
            cart_view(store.state(), &OrderSummary::from_cart(store.state(), &policy), "Rs."),
            "Your cart is empty."
        );

        store.add(sample_item(2, 300), 2);
        let view = cart_view(store.state(), &OrderSummary::from_cart(store.state(), &policy), "Rs.");
        assert!(view.starts_with("Your cart (2 items)"));
        assert!(view.contains("[2] Plant 2 x2 - Rs. 600.00/-"));
        assert!(view.contains("Shipping: Rs. 99.00/-"));
        assert!(view.contains("Add Rs. 399.00/- more for free shipping"));
        assert!(view.ends_with("Total: Rs. 699.00/-"));

        store.add(sample_item(2, 300), 2);
        let view = cart_view(store.state(), &OrderSummary::from_cart(store.state(), &policy), "Rs.");
        assert!(view.contains("Shipping: Free"));
        assert!(!view.contains("more for free shipping"));
    }
}
