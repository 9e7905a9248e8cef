//! Cart commands - add, remove, quantity changes, and the cart panel.

use super::{parse_id, parse_quantity};
use crate::{
    core::OrderSummary,
    errors::{Error, Result},
    shell::{ShellData, format},
};

/// Whether an error is the shopper's mistake and should be answered with a `❌` reply.
const fn is_user_error(error: &Error) -> bool {
    matches!(
        error,
        Error::ProductNotFound { .. }
            | Error::OutOfStock { .. }
            | Error::InsufficientStock { .. }
            | Error::InvalidQuantity { .. }
    )
}

/// `add <id> [qty]` - adds a product after checking its stock.
///
/// # Errors
/// Returns an error only for failures other than bad ids, quantities or stock.
pub fn add(data: &mut ShellData, args: &str) -> Result<String> {
    let mut parts = args.split_whitespace();
    let id = match parse_id(parts.next()) {
        Ok(id) => id,
        Err(message) => return Ok(message),
    };
    let quantity = match parts.next().map(parse_quantity).transpose() {
        Ok(quantity) => quantity.unwrap_or(1),
        Err(message) => return Ok(message),
    };

    let result = data.catalog.product(id).and_then(|product| {
        let state = data.cart.add_product(product, quantity)?;
        Ok(format!(
            "✅ Added {quantity} x {} to your cart ({} items).",
            product.name,
            state.total_items()
        ))
    });
    match result {
        Err(e) if is_user_error(&e) => Ok(format!("❌ {e}")),
        other => other,
    }
}

/// `remove <id>` - drops a line from the cart.
pub fn remove(data: &mut ShellData, args: &str) -> String {
    let id = match parse_id(args.split_whitespace().next()) {
        Ok(id) => id,
        Err(message) => return message,
    };

    let Some(name) = data.cart.state().get(id).map(|item| item.name.clone()) else {
        return format!("Nothing with id {id} is in your cart.");
    };
    data.cart.remove(id);
    format!("🗑️ Removed {name} from your cart.")
}

/// `qty <id> <n>` - sets a line's quantity within the product's stock; zero removes it.
///
/// # Errors
/// Returns an error only for failures other than bad ids, quantities or stock.
pub fn set_quantity(data: &mut ShellData, args: &str) -> Result<String> {
    let mut parts = args.split_whitespace();
    let id = match parse_id(parts.next()) {
        Ok(id) => id,
        Err(message) => return Ok(message),
    };
    let Some(raw) = parts.next() else {
        return Ok("❌ Missing quantity.".to_string());
    };
    let quantity = match parse_quantity(raw) {
        Ok(quantity) => quantity,
        Err(message) => return Ok(message),
    };

    if data.cart.state().get(id).is_none() {
        return Ok(format!("Nothing with id {id} is in your cart."));
    }
    let result = data.catalog.product(id).and_then(|product| {
        let state = data.cart.set_product_quantity(product, quantity)?;
        Ok(match state.get(id) {
            Some(item) => format!("Quantity of {} set to {}.", item.name, item.quantity),
            None => format!("Removed item {id} from your cart."),
        })
    });
    match result {
        Err(e) if is_user_error(&e) => Ok(format!("❌ {e}")),
        other => other,
    }
}

/// `inc <id>` - one more unit, within the product's stock.
///
/// # Errors
/// Returns an error only for failures other than bad ids or stock.
pub fn increment(data: &mut ShellData, args: &str) -> Result<String> {
    let id = match parse_id(args.split_whitespace().next()) {
        Ok(id) => id,
        Err(message) => return Ok(message),
    };
    if data.cart.state().get(id).is_none() {
        return Ok(format!("Nothing with id {id} is in your cart."));
    }
    let result = data.catalog.product(id).and_then(|product| {
        let state = data.cart.add_product(product, 1)?;
        Ok(state.get(id).map_or_else(
            || format!("Nothing with id {id} is in your cart."),
            |item| format!("{} x{}", item.name, item.quantity),
        ))
    });
    match result {
        Err(e) if is_user_error(&e) => Ok(format!("❌ {e}")),
        other => other,
    }
}

/// `dec <id>` - one less unit, removing the line below one.
pub fn decrement(data: &mut ShellData, args: &str) -> String {
    let id = match parse_id(args.split_whitespace().next()) {
        Ok(id) => id,
        Err(message) => return message,
    };
    if data.cart.state().get(id).is_none() {
        return format!("Nothing with id {id} is in your cart.");
    }
    data.cart.decrement(id).get(id).map_or_else(
        || format!("Removed item {id} from your cart."),
        |item| format!("{} x{}", item.name, item.quantity),
    )
}

/// `cart` - the cart panel with its order summary.
pub fn view(data: &ShellData) -> String {
    let state = data.cart.state();
    let summary = OrderSummary::from_cart(state, &data.shipping_policy());
    format::cart_view(state, &summary, &data.settings.currency)
}

/// `clear` - empties the cart.
pub fn clear(data: &mut ShellData) -> String {
    data.cart.clear();
    "Your cart is now empty.".to_string()
}
