//! Currency rounding and display
//!
//! All amounts in an order are decimal dollars. Rounding is always to the
//! cent, half away from zero (amounts are never negative, so this is
//! round-half-up).

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to the cent, half up
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with exactly two decimal places, e.g. `34.50`
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
