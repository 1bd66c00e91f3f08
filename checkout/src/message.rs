//! Order message renderer
//!
//! Formats a cart + totals into the multi-line text handed to the
//! messaging collaborator (pre-filled chat message for manual order
//! confirmation). Delivery of the message is fire-and-forget and outside
//! this crate's concern.

use crate::cart::Cart;
use crate::pricing;
use shared::cart::LineItem;
use shared::order::OrderTotals;

/// Renders the human-readable order summary
///
/// One line per cart line (`{qty}x {name} - {currency}{gross}`), with the
/// selected modifiers indented beneath it, grouped by category and
/// comma-joined within a category.
pub struct OrderMessageRenderer<'a> {
    cart: &'a Cart,
    totals: &'a OrderTotals,
    store_name: &'a str,
    currency: &'a str,
}

impl<'a> OrderMessageRenderer<'a> {
    pub fn new(
        cart: &'a Cart,
        totals: &'a OrderTotals,
        store_name: &'a str,
        currency: &'a str,
    ) -> Self {
        Self {
            cart,
            totals,
            store_name,
            currency,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("🥪 *Nuevo Pedido - {}*\n\n", self.store_name));

        for (i, item) in self.cart.items().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!(
                "{}x {} - {}{:.2}",
                item.quantity,
                item.name,
                self.currency,
                pricing::line_gross(item)
            ));
            self.render_modifiers(&mut out, item);
        }

        out.push_str(&format!(
            "\n\n*Total: {}{:.2}*",
            self.currency, self.totals.grand_total
        ));
        out
    }

    fn render_modifiers(&self, out: &mut String, item: &LineItem) {
        if !item.modifiers.salsas.is_empty() {
            out.push_str(&format!(
                "\n  Salsas: {}",
                item.modifiers.salsas.join(", ")
            ));
        }
        if !item.modifiers.extras.is_empty() {
            let names: Vec<&str> = item.modifiers.extras.iter().map(|m| m.name.as_str()).collect();
            out.push_str(&format!("\n  Extras: {}", names.join(", ")));
        }
        if !item.modifiers.beverages.is_empty() {
            let names: Vec<&str> = item
                .modifiers
                .beverages
                .iter()
                .map(|m| m.name.as_str())
                .collect();
            out.push_str(&format!("\n  Bebidas: {}", names.join(", ")));
        }
    }
}
