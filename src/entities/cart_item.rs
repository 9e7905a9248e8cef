//! Cart item entity - One product line in the shopping cart.

use serde::{Deserialize, Serialize};

/// A product the shopper intends to buy, with the quantity chosen.
///
/// Name, price and image are copied from the product when the line is created.
/// The cart holds at most one line per product id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Id of the product this line refers to
    pub id: i64,
    /// Product name at the time it was added
    pub name: String,
    /// Unit price at the time it was added
    pub price: u64,
    /// Image reference
    pub image: String,
    /// Units in the cart, always at least 1
    pub quantity: u32,
}

impl CartItem {
    /// Price of the whole line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}
