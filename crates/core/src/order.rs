//! Strongly-typed order model
//!
//! One [`OrderSelection`] is built per submission from already-validated
//! form values. Fields are tagged types rather than a generic map, so a
//! selection can never hold an unknown crust or topping.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMethod {
    /// Customer collects the order
    #[default]
    PickUp,
    /// Order is delivered (flat surcharge applies)
    Delivery,
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickUp => write!(f, "Pick up"),
            Self::Delivery => write!(f, "Delivery"),
        }
    }
}

/// Pizza crust style. Descriptive only; does not affect price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crust {
    /// Thin crust
    #[default]
    Thin,
    /// Hand-tossed crust
    HandTossed,
}

impl Crust {
    /// All crust styles, in menu order
    pub const ALL: &'static [Crust] = &[Crust::Thin, Crust::HandTossed];
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thin => write!(f, "Thin"),
            Self::HandTossed => write!(f, "Hand Tossed"),
        }
    }
}

impl FromStr for Crust {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "thin" => Ok(Self::Thin),
            "hand-tossed" => Ok(Self::HandTossed),
            other => Err(Error::invalid_input(format!("Unknown crust: {}", other))
                .with_suggestion("Use 'thin' or 'hand-tossed'")),
        }
    }
}

/// Pizza topping. Descriptive only; does not affect price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topping {
    /// Mushrooms
    Mushrooms,
    /// Sausage
    Sausage,
    /// Pepperoni
    Pepperoni,
    /// Green peppers
    GreenPeppers,
}

impl Topping {
    /// All toppings, in menu order
    pub const ALL: &'static [Topping] = &[
        Topping::Mushrooms,
        Topping::Sausage,
        Topping::Pepperoni,
        Topping::GreenPeppers,
    ];

    /// Drop repeated toppings, preserving the order of first mention
    #[must_use]
    pub fn dedup(toppings: Vec<Topping>) -> Vec<Topping> {
        let mut seen = Vec::with_capacity(toppings.len());
        for topping in toppings {
            if !seen.contains(&topping) {
                seen.push(topping);
            }
        }
        seen
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mushrooms => write!(f, "Mushrooms"),
            Self::Sausage => write!(f, "Sausage"),
            Self::Pepperoni => write!(f, "Pepperoni"),
            Self::GreenPeppers => write!(f, "Green Peppers"),
        }
    }
}

impl FromStr for Topping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mushrooms" => Ok(Self::Mushrooms),
            "sausage" => Ok(Self::Sausage),
            "pepperoni" => Ok(Self::Pepperoni),
            "green-peppers" => Ok(Self::GreenPeppers),
            other => Err(Error::invalid_input(format!("Unknown topping: {}", other))
                .with_suggestion("Use mushrooms, sausage, pepperoni, or green-peppers")),
        }
    }
}

/// Tip as a percentage of subtotal plus tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipPercent {
    /// No tip
    #[default]
    None,
    /// 10%
    Ten,
    /// 15%
    Fifteen,
    /// 20%
    Twenty,
}

impl TipPercent {
    /// The tip rate as a decimal fraction (0.00 to 0.20)
    #[must_use]
    pub fn rate(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Ten => Decimal::new(10, 2),
            Self::Fifteen => Decimal::new(15, 2),
            Self::Twenty => Decimal::new(20, 2),
        }
    }
}

impl fmt::Display for TipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "0%"),
            Self::Ten => write!(f, "10%"),
            Self::Fifteen => write!(f, "15%"),
            Self::Twenty => write!(f, "20%"),
        }
    }
}

impl FromStr for TipPercent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "0" => Ok(Self::None),
            "10" => Ok(Self::Ten),
            "15" => Ok(Self::Fifteen),
            "20" => Ok(Self::Twenty),
            other => Err(Error::invalid_input(format!("Unknown tip: {}%", other))
                .with_suggestion("Use 0, 10, 15, or 20")),
        }
    }
}

/// One order submission, fully validated
///
/// Ephemeral: built per submission, consumed by
/// [`compute_totals`](crate::pricing::compute_totals), never persisted.
#[derive(Debug, Clone, Default)]
pub struct OrderSelection {
    /// Pick up or delivery
    pub delivery_method: DeliveryMethod,
    /// Number of pizzas ordered
    pub num_pizzas: u32,
    /// Crust style for every pizza in the order
    pub crust: Crust,
    /// Toppings, set-like, in order of first mention
    pub toppings: Vec<Topping>,
    /// Number of drinks ordered
    pub num_drinks: u32,
    /// Tip choice
    pub tip: TipPercent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crust_parse() {
        assert_eq!("thin".parse::<Crust>().unwrap(), Crust::Thin);
        assert_eq!("hand-tossed".parse::<Crust>().unwrap(), Crust::HandTossed);
        assert!("stuffed".parse::<Crust>().is_err());
    }

    #[test]
    fn test_topping_parse_and_display() {
        let t: Topping = "green-peppers".parse().unwrap();
        assert_eq!(t, Topping::GreenPeppers);
        assert_eq!(t.to_string(), "Green Peppers");
        assert!("pineapple".parse::<Topping>().is_err());
    }

    #[test]
    fn test_topping_dedup_preserves_first_mention_order() {
        let toppings = vec![
            Topping::Pepperoni,
            Topping::Mushrooms,
            Topping::Pepperoni,
            Topping::Sausage,
            Topping::Mushrooms,
        ];
        assert_eq!(
            Topping::dedup(toppings),
            vec![Topping::Pepperoni, Topping::Mushrooms, Topping::Sausage]
        );
    }

    #[test]
    fn test_tip_parse_and_rate() {
        assert_eq!("15".parse::<TipPercent>().unwrap(), TipPercent::Fifteen);
        assert_eq!(TipPercent::Fifteen.rate(), Decimal::new(15, 2));
        assert_eq!(TipPercent::None.rate(), Decimal::ZERO);
        assert!("12".parse::<TipPercent>().is_err());
    }

    #[test]
    fn test_default_selection_is_empty_pickup() {
        let selection = OrderSelection::default();
        assert_eq!(selection.delivery_method, DeliveryMethod::PickUp);
        assert_eq!(selection.num_pizzas, 0);
        assert_eq!(selection.num_drinks, 0);
        assert!(selection.toppings.is_empty());
        assert_eq!(selection.tip, TipPercent::None);
    }
}
