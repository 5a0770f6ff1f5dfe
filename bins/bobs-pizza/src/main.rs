//! Bob's Pizza CLI
//!
//! Place pizza orders and manage display preferences.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pizza_cli::output::{format_setting, Status};
use pizza_cli::theme::Theme;
use pizza_core::error::exit_codes;
use pizza_core::order::{Crust, DeliveryMethod, OrderSelection, TipPercent, Topping};
use pizza_core::prefs::{BackgroundColor, PrefStore};
use pizza_core::pricing::compute_totals;
use pizza_core::receipt::{self, ReceiptFile};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bobs-pizza")]
#[command(about = "Place pizza orders and manage display preferences")]
#[command(version)]
struct Cli {
    /// Directory holding preferences and the saved receipt
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place an order and save the receipt
    Order {
        /// Number of pizzas
        #[arg(long, default_value = "0")]
        pizzas: u32,
        /// Number of drinks
        #[arg(long, default_value = "0")]
        drinks: u32,
        /// Crust: thin, hand-tossed
        #[arg(long, default_value = "thin")]
        crust: String,
        /// Add a topping (repeatable): mushrooms, sausage, pepperoni, green-peppers
        #[arg(long = "topping")]
        toppings: Vec<String>,
        /// Deliver the order (picked up when not set)
        #[arg(long)]
        delivery: bool,
        /// Tip percentage: 0, 10, 15, 20
        #[arg(long, default_value = "0")]
        tip: String,
        /// Skip the Ok acknowledgement
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the last saved receipt
    Receipt,

    /// Read or write display preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Show current preferences and their display values
    Show,
    /// Change a preference
    Set {
        #[command(subcommand)]
        setting: PrefsSetting,
    },
}

#[derive(Subcommand)]
enum PrefsSetting {
    /// Background color: default, red, blue, green
    Color {
        /// Color name
        value: String,
    },
    /// Large text toggle: on, off
    #[command(name = "large-text")]
    LargeText {
        /// on or off
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pizza_core=debug,bobs_pizza=debug")
            .init();
    }

    let store = match &cli.data_dir {
        Some(dir) => PrefStore::in_dir(dir),
        None => PrefStore::open_default(),
    };
    let receipt_file = match &cli.data_dir {
        Some(dir) => ReceiptFile::in_dir(dir),
        None => ReceiptFile::open_default(),
    };

    let result = match cli.command {
        Commands::Order {
            pizzas,
            drinks,
            crust,
            toppings,
            delivery,
            tip,
            yes,
        } => run_order(
            &store,
            &receipt_file,
            pizzas,
            drinks,
            &crust,
            &toppings,
            delivery,
            &tip,
            yes,
        ),
        Commands::Receipt => run_receipt(&receipt_file),
        Commands::Prefs { action } => match action {
            PrefsAction::Show => run_prefs_show(&store),
            PrefsAction::Set { setting } => match setting {
                PrefsSetting::Color { value } => run_prefs_set_color(&store, &value),
                PrefsSetting::LargeText { value } => run_prefs_set_large_text(&store, &value),
            },
        },
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            exit_codes::FAILURE
        }
    };

    std::process::exit(exit_code);
}

/// Map a domain error to the exit code of its category
fn exit_code_for(err: &pizza_core::Error) -> i32 {
    match err.code.category() {
        "Validation" => exit_codes::VALIDATION_ERROR,
        "Preferences" => exit_codes::CONFIG_ERROR,
        _ => exit_codes::FAILURE,
    }
}

#[allow(clippy::too_many_arguments)]
fn run_order(
    store: &PrefStore,
    receipt_file: &ReceiptFile,
    pizzas: u32,
    drinks: u32,
    crust: &str,
    toppings: &[String],
    delivery: bool,
    tip: &str,
    yes: bool,
) -> Result<i32> {
    let crust: Crust = match crust.parse() {
        Ok(c) => c,
        Err(e) => {
            Status::error(&e.to_string());
            return Ok(exit_code_for(&e));
        }
    };
    let tip: TipPercent = match tip.parse() {
        Ok(t) => t,
        Err(e) => {
            Status::error(&e.to_string());
            return Ok(exit_code_for(&e));
        }
    };
    let mut parsed_toppings = Vec::with_capacity(toppings.len());
    for name in toppings {
        match name.parse::<Topping>() {
            Ok(t) => parsed_toppings.push(t),
            Err(e) => {
                Status::error(&e.to_string());
                return Ok(exit_code_for(&e));
            }
        }
    }

    let selection = OrderSelection {
        delivery_method: if delivery {
            DeliveryMethod::Delivery
        } else {
            DeliveryMethod::PickUp
        },
        num_pizzas: pizzas,
        crust,
        toppings: Topping::dedup(parsed_toppings),
        num_drinks: drinks,
        tip,
    };

    // Display settings are read once, at screen start.
    let prefs = match store.load() {
        Ok(p) => p,
        Err(e) => {
            Status::error(&e.to_string());
            return Ok(exit_code_for(&e));
        }
    };
    let theme = Theme::from_prefs(&prefs);

    let totals = compute_totals(&selection);
    let text = receipt::render(&selection, &totals);

    theme.header("Your order");
    theme.print_block(&text);

    if !yes {
        print!("Ok? [Enter] ");
        std::io::stdout().flush()?;
        let mut ack = String::new();
        std::io::stdin().read_line(&mut ack)?;
    }

    if let Err(e) = receipt_file.save(&text) {
        Status::error(&e.to_string());
        return Ok(exit_code_for(&e));
    }
    Status::success(&format!(
        "Receipt saved to {}",
        receipt_file.path().display()
    ));

    Ok(exit_codes::SUCCESS)
}

fn run_receipt(receipt_file: &ReceiptFile) -> Result<i32> {
    match receipt_file.load() {
        Ok(text) => {
            print!("{}", text);
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            Status::error(&e.to_string());
            Ok(exit_code_for(&e))
        }
    }
}

fn run_prefs_show(store: &PrefStore) -> Result<i32> {
    let prefs = match store.load() {
        Ok(p) => p,
        Err(e) => {
            Status::error(&e.to_string());
            return Ok(exit_code_for(&e));
        }
    };

    let theme = Theme::from_prefs(&prefs);
    theme.header("Display preferences");
    println!(
        "{}",
        format_setting(
            "Background color",
            &prefs.background_color.to_string(),
            prefs.background_color.hex(),
        )
    );
    println!(
        "{}",
        format_setting(
            "Text size",
            &prefs.text_size().to_string(),
            if prefs.use_large_text { "large" } else { "normal" },
        )
    );

    Ok(exit_codes::SUCCESS)
}

fn run_prefs_set_color(store: &PrefStore, value: &str) -> Result<i32> {
    let color: BackgroundColor = match value.parse() {
        Ok(c) => c,
        Err(e) => {
            Status::error(&e.to_string());
            return Ok(exit_code_for(&e));
        }
    };

    match store.set_background_color(color) {
        Ok(()) => {
            Status::success(&format!("Background color set to {}", color));
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            Status::error(&e.to_string());
            Ok(exit_code_for(&e))
        }
    }
}

fn run_prefs_set_large_text(store: &PrefStore, value: &str) -> Result<i32> {
    let on = match value {
        "on" => true,
        "off" => false,
        other => {
            Status::error(&format!("Unknown large-text value: {}", other));
            Status::info("Use 'on' or 'off'");
            return Ok(exit_codes::VALIDATION_ERROR);
        }
    };

    match store.set_use_large_text(on) {
        Ok(()) => {
            Status::success(&format!(
                "Large text {}",
                if on { "enabled" } else { "disabled" }
            ));
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            Status::error(&e.to_string());
            Ok(exit_code_for(&e))
        }
    }
}
