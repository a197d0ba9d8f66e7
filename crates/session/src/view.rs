//! Display outputs derived from cart state.

use serde::Serialize;

use farmstand_cart::Cart;
use farmstand_core::ProductId;

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub price: u64,
    pub image_url: String,
    pub quantity: u32,
    pub subtotal: u64,
}

/// The cart as the storefront displays it.
///
/// Computed from current cart state on demand, never stored — the badge,
/// subtotals and total cannot drift from the lines they are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Number of distinct line items (the header badge).
    pub badge: usize,
    pub total: u64,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        let lines: Vec<CartLineView> = cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                product_id: line.product.id,
                name: line.product.name.clone(),
                category: line.product.category.clone(),
                price: line.product.price,
                image_url: line.product.image_url.clone(),
                quantity: line.quantity,
                subtotal: line.subtotal(),
            })
            .collect();

        Self {
            badge: lines.len(),
            total: cart.total(),
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
