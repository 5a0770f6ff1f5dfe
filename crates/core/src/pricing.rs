//! Order pricing
//!
//! Pure arithmetic from an [`OrderSelection`] to an [`OrderTotals`]. Every
//! monetary step is rounded to the cent (half up) before the next step, so
//! the printed receipt always adds up.

use crate::money::round_cents;
use crate::order::{DeliveryMethod, OrderSelection};
use rust_decimal::Decimal;

// Menu prices. Mantissa is cents, scale 2.
fn pizza_price() -> Decimal {
    Decimal::new(15_00, 2)
}

fn drink_price() -> Decimal {
    Decimal::new(1_50, 2)
}

fn delivery_fee() -> Decimal {
    Decimal::new(3_00, 2)
}

fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Amounts derived from one order selection
///
/// Immutable once computed; every field is already rounded to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Pizzas + drinks + delivery fee
    pub subtotal: Decimal,
    /// 10% of subtotal
    pub tax: Decimal,
    /// Tip on subtotal plus tax
    pub tip: Decimal,
    /// Subtotal + tax + tip
    pub total: Decimal,
}

/// Compute totals for an order selection
///
/// Pure and deterministic; inputs are pre-validated, so there are no error
/// conditions. Toppings and crust are carried through to the receipt but
/// never priced.
#[must_use]
pub fn compute_totals(selection: &OrderSelection) -> OrderTotals {
    let pizza_cost = Decimal::from(selection.num_pizzas) * pizza_price();
    let drink_cost = Decimal::from(selection.num_drinks) * drink_price();
    let delivery_cost = match selection.delivery_method {
        DeliveryMethod::Delivery => delivery_fee(),
        DeliveryMethod::PickUp => Decimal::ZERO,
    };

    let subtotal = round_cents(pizza_cost + drink_cost + delivery_cost);
    let tax = round_cents(subtotal * tax_rate());
    let tip = round_cents((subtotal + tax) * selection.tip.rate());
    let total = round_cents(subtotal + tax + tip);

    OrderTotals {
        subtotal,
        tax,
        tip,
        total,
    }
}
