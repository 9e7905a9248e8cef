//! Cart business logic - The shopping cart state and its transitions.
//!
//! Cart state is a single value made of the item list and its two aggregates
//! (`total_items`, `total_price`). Every transition goes through [`CartState::reduce`],
//! which builds a fresh state with the items and totals updated together, so a
//! caller never observes a list that disagrees with its totals. [`CartStore`] owns the
//! current state and exposes the storefront's intents on top of the reducer.

use crate::{
    entities::{CartItem, Product},
    errors::{Error, Result},
};
use serde::Serialize;
use tracing::debug;

/// An intent dispatched against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` units of `item`, merging with an existing line for the same id
    AddItem {
        /// Line to add; its own `quantity` field is ignored
        item: CartItem,
        /// Units to add
        quantity: u32,
    },
    /// Drop the line for a product id
    RemoveItem {
        /// Product id
        id: i64,
    },
    /// Replace the quantity of an existing line
    UpdateQuantity {
        /// Product id
        id: i64,
        /// New quantity; zero removes the line
        quantity: u32,
    },
    /// Empty the cart
    ClearCart,
}

/// Items in the cart plus their running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartItem>,
    total_items: u64,
    total_price: u64,
}

impl CartState {
    /// The empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of all line quantities.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub const fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for a product id, if present.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Applies an action and returns the resulting state.
    ///
    /// Absent ids, zero-unit adds and changes that would overflow a quantity or a
    /// total leave the state unchanged. Totals are adjusted incrementally from the
    /// previous state rather than recomputed.
    #[must_use]
    pub fn reduce(&self, action: CartAction) -> Self {
        match action {
            CartAction::AddItem { item, quantity } => self.with_added(item, quantity),
            CartAction::RemoveItem { id } => self.with_removed(id),
            CartAction::UpdateQuantity { id, quantity } => self.with_quantity(id, quantity),
            CartAction::ClearCart => Self::default(),
        }
    }

    fn with_added(&self, item: CartItem, quantity: u32) -> Self {
        if quantity == 0 {
            return self.clone();
        }

        let added_units = u64::from(quantity);
        let mut items = self.items.clone();

        // A merged line keeps the price it was first added at
        let added_price = match self.position(item.id) {
            Some(index) => {
                let line = &mut items[index];
                let Some(merged) = line.quantity.checked_add(quantity) else {
                    return self.clone();
                };
                line.quantity = merged;
                line.price.checked_mul(added_units)
            }
            None => {
                let added_price = item.price.checked_mul(added_units);
                items.push(CartItem { quantity, ..item });
                added_price
            }
        };

        let totals = added_price.and_then(|added_price| {
            Some((
                self.total_items.checked_add(added_units)?,
                self.total_price.checked_add(added_price)?,
            ))
        });
        let Some((total_items, total_price)) = totals else {
            return self.clone();
        };

        Self {
            items,
            total_items,
            total_price,
        }
    }

    fn with_removed(&self, id: i64) -> Self {
        let Some(index) = self.position(id) else {
            return self.clone();
        };

        let removed = &self.items[index];
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();

        Self {
            items,
            total_items: self.total_items - u64::from(removed.quantity),
            total_price: self.total_price - removed.line_total(),
        }
    }

    fn with_quantity(&self, id: i64, quantity: u32) -> Self {
        if quantity == 0 {
            return self.with_removed(id);
        }
        let Some(index) = self.position(id) else {
            return self.clone();
        };

        let current = &self.items[index];
        let Some(new_line_total) = current.price.checked_mul(u64::from(quantity)) else {
            return self.clone();
        };
        let Some(total_price) =
            (self.total_price - current.line_total()).checked_add(new_line_total)
        else {
            return self.clone();
        };
        let total_items = self.total_items - u64::from(current.quantity) + u64::from(quantity);

        let mut items = self.items.clone();
        items[index].quantity = quantity;

        Self {
            items,
            total_items,
            total_price,
        }
    }
}

/// Owns the shopper's cart and routes every mutation through the reducer.
///
/// Presentation code holds a `CartStore` (or a reference to one) instead of reaching
/// for shared global state, so each store can be created and tested on its own.
#[derive(Debug, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Creates a store holding the empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Applies an action to the current state and returns the new state.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        debug!(?action, "Dispatching cart action");
        self.state = self.state.reduce(action);
        debug!(
            total_items = self.state.total_items,
            total_price = self.state.total_price,
            lines = self.state.items.len(),
            "Cart updated"
        );
        &self.state
    }

    /// Adds `quantity` units of `item`. Stock is not checked here.
    pub fn add(&mut self, item: CartItem, quantity: u32) -> &CartState {
        self.dispatch(CartAction::AddItem { item, quantity })
    }

    /// Adds a single unit of `item`.
    pub fn add_one(&mut self, item: CartItem) -> &CartState {
        self.add(item, 1)
    }

    /// Removes the line for `id`; no-op when absent.
    pub fn remove(&mut self, id: i64) -> &CartState {
        self.dispatch(CartAction::RemoveItem { id })
    }

    /// Sets the quantity of the line for `id`; no-op when absent, removal when zero.
    pub fn set_quantity(&mut self, id: i64, quantity: u32) -> &CartState {
        self.dispatch(CartAction::UpdateQuantity { id, quantity })
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> &CartState {
        self.dispatch(CartAction::ClearCart)
    }

    /// Raises the quantity of the line for `id` by one; no-op when absent or already at `u32::MAX`.
    pub fn increment(&mut self, id: i64) -> &CartState {
        match self
            .state
            .get(id)
            .and_then(|item| item.quantity.checked_add(1))
        {
            Some(quantity) => self.set_quantity(id, quantity),
            None => &self.state,
        }
    }

    /// Lowers the quantity of the line for `id` by one, removing the line below one unit.
    pub fn decrement(&mut self, id: i64) -> &CartState {
        match self.state.get(id).map(|item| item.quantity) {
            Some(quantity) if quantity > 1 => self.set_quantity(id, quantity - 1),
            Some(_) => self.remove(id),
            None => &self.state,
        }
    }

    /// Adds a catalog product after checking it against the product's stock.
    ///
    /// This is the guard the product pages apply before dispatching an add; the raw
    /// [`CartStore::add`] accepts any quantity.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `quantity` is zero
    /// - The product has no stock
    /// - The cart would end up holding more units than are in stock
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<&CartState> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity { quantity });
        }
        if !product.is_in_stock() {
            return Err(Error::OutOfStock {
                name: product.name.clone(),
            });
        }

        let in_cart = self.state.get(product.id).map_or(0, |item| item.quantity);
        let requested = in_cart.saturating_add(quantity);
        if requested > product.stock {
            return Err(Error::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested,
            });
        }

        Ok(self.add(product.to_cart_item(), quantity))
    }

    /// Sets the quantity of a product's line after checking it against the product's stock.
    ///
    /// Zero removes the line. A product that is not in the cart is left alone.
    ///
    /// # Errors
    /// Returns an error if `quantity` is more than the product has in stock.
    pub fn set_product_quantity(&mut self, product: &Product, quantity: u32) -> Result<&CartState> {
        if quantity > product.stock {
            return Err(Error::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }
        Ok(self.set_quantity(product.id, quantity))
    }
}
