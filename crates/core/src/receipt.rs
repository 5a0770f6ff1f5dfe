//! Receipt rendering and persistence
//!
//! A receipt is a fixed-layout UTF-8 text block. Exactly one receipt file
//! exists at a time: every order overwrites the previous one. No history.

use crate::error::{Error, Result};
use crate::fsutil::write_atomic;
use crate::money::format_amount;
use crate::order::OrderSelection;
use crate::pricing::OrderTotals;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// File name of the single saved receipt
pub const RECEIPT_FILE_NAME: &str = "receipt.txt";

/// Render the receipt text for an order
#[must_use]
pub fn render(selection: &OrderSelection, totals: &OrderTotals) -> String {
    let toppings = if selection.toppings.is_empty() {
        "(none)".to_string()
    } else {
        selection
            .toppings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let header = "Bob's Pizza Order";
    let mut out = String::new();
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(header.len()));
    let _ = writeln!(out, "Delivery method: {}", selection.delivery_method);
    let _ = writeln!(out, "Pizzas: {}", selection.num_pizzas);
    let _ = writeln!(out, "Crust: {}", selection.crust);
    let _ = writeln!(out, "Toppings: {}", toppings);
    let _ = writeln!(out, "Drinks: {}", selection.num_drinks);
    let _ = writeln!(out, "Tip: {}", selection.tip);
    let _ = writeln!(out);
    let _ = writeln!(out, "Subtotal: ${}", format_amount(totals.subtotal));
    let _ = writeln!(out, "Tax: ${}", format_amount(totals.tax));
    let _ = writeln!(out, "Tip: ${}", format_amount(totals.tip));
    let _ = writeln!(out, "Total: ${}", format_amount(totals.total));
    out
}

/// The single well-known receipt file
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    path: PathBuf,
}

impl ReceiptFile {
    /// Receipt file in the platform data directory
    #[must_use]
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bobs-pizza");
        Self::in_dir(dir)
    }

    /// Receipt file inside an explicit directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(RECEIPT_FILE_NAME),
        }
    }

    /// Where the receipt lives on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the saved receipt with `receipt`
    pub fn save(&self, receipt: &str) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "saving receipt");
        write_atomic(&self.path, receipt)
    }

    /// Read back the last saved receipt
    pub fn load(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::receipt_not_found(&self.path))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::order::{Crust, DeliveryMethod, TipPercent, Topping};
    use crate::pricing::compute_totals;
    use tempfile::TempDir;

    fn sample_order() -> OrderSelection {
        OrderSelection {
            delivery_method: DeliveryMethod::Delivery,
            num_pizzas: 2,
            crust: Crust::HandTossed,
            toppings: vec![Topping::Mushrooms, Topping::Pepperoni],
            num_drinks: 1,
            tip: TipPercent::Fifteen,
        }
    }

    #[test]
    fn test_render_fixed_layout() {
        let selection = sample_order();
        let totals = compute_totals(&selection);

        let expected = "\
Bob's Pizza Order
-----------------
Delivery method: Delivery
Pizzas: 2
Crust: Hand Tossed
Toppings: Mushrooms, Pepperoni
Drinks: 1
Tip: 15%

Subtotal: $34.50
Tax: $3.45
Tip: $5.69
Total: $43.64
";
        assert_eq!(render(&selection, &totals), expected);
    }

    #[test]
    fn test_render_empty_toppings() {
        let selection = OrderSelection::default();
        let totals = compute_totals(&selection);
        let text = render(&selection, &totals);

        assert!(text.contains("Toppings: (none)\n"));
        assert!(text.contains("Total: $0.00\n"));
    }

    #[test]
    fn test_save_overwrites_previous_receipt() {
        let dir = TempDir::new().unwrap();
        let file = ReceiptFile::in_dir(dir.path());

        file.save("first order").unwrap();
        file.save("second order").unwrap();

        assert_eq!(file.load().unwrap(), "second order");
    }

    #[test]
    fn test_load_without_order_fails() {
        let dir = TempDir::new().unwrap();
        let file = ReceiptFile::in_dir(dir.path());

        let err = file.load().unwrap_err();
        assert_eq!(err.code, ErrorCode::ReceiptNotFound);
    }
}
