//! Order summary business logic.
//!
//! Derives the figures shown at the bottom of the cart panel (subtotal, shipping
//! and grand total) from a cart state and the store's shipping policy. Nothing here
//! mutates the cart; the summary is recomputed whenever it is displayed.

use super::cart::CartState;
use crate::config::StoreSettings;
use serde::Serialize;

/// How shipping is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free
    pub free_shipping_threshold: u64,
    /// Fee charged below the threshold
    pub flat_fee: u64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: 999,
            flat_fee: 99,
        }
    }
}

impl From<&StoreSettings> for ShippingPolicy {
    fn from(settings: &StoreSettings) -> Self {
        Self {
            free_shipping_threshold: settings.free_shipping_threshold,
            flat_fee: settings.flat_shipping_fee,
        }
    }
}

impl ShippingPolicy {
    /// Shipping fee for a given subtotal. An empty order ships nothing and costs nothing.
    #[must_use]
    pub const fn fee_for(&self, subtotal: u64) -> u64 {
        if subtotal == 0 || subtotal >= self.free_shipping_threshold {
            0
        } else {
            self.flat_fee
        }
    }

    /// How much more must be spent to qualify for free shipping, if anything.
    #[must_use]
    pub const fn remaining_for_free_shipping(&self, subtotal: u64) -> Option<u64> {
        if subtotal >= self.free_shipping_threshold {
            None
        } else {
            Some(self.free_shipping_threshold - subtotal)
        }
    }
}

/// Figures shown under the cart's item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Number of units in the cart
    pub item_count: u64,
    /// Sum of line totals
    pub subtotal: u64,
    /// Shipping fee (zero when waived)
    pub shipping: u64,
    /// `subtotal + shipping`
    pub total: u64,
    /// Whether the subtotal reached the free-shipping threshold
    pub free_shipping: bool,
    /// Amount still to spend before shipping becomes free, if it is not already
    pub free_shipping_remaining: Option<u64>,
}

impl OrderSummary {
    /// Summarizes a cart under the given shipping policy.
    #[must_use]
    pub const fn from_cart(state: &CartState, policy: &ShippingPolicy) -> Self {
        let subtotal = state.total_price();
        let shipping = policy.fee_for(subtotal);
        Self {
            item_count: state.total_items(),
            subtotal,
            shipping,
            total: subtotal + shipping,
            free_shipping: subtotal > 0 && shipping == 0,
            free_shipping_remaining: policy.remaining_for_free_shipping(subtotal),
        }
    }
}

/// Formats an amount the way the storefront prints prices, e.g. `Rs. 1299.00/-`.
#[must_use]
pub fn format_price(amount: u64, currency: &str) -> String {
    format!("{currency} {amount}.00/-")
}
