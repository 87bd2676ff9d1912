//! CLI 인자 정의.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rtfc_cost_calculator::app::QuoteOverrides;
use rtfc_cost_calculator::config::DEFAULT_CONFIG_PATH;
use rtfc_cost_calculator::conversion::{parse_basis, parse_currency};
use rtfc_cost_calculator::units::{Currency, PriceBasis};

/// RTFC cost-per-certificate calculator.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Language: auto, en, ko
    #[arg(long, short = 'L', default_value = "auto")]
    pub lang: String,

    /// Path to the TOML config file (created with defaults if missing)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// PIN-gated interactive menu (default)
    Interactive,
    /// One-shot calculation; unset fields come from the catalog entry and config
    Calc(CalcArgs),
    /// Print the fuel catalog
    Catalog,
}

#[derive(Debug, clap::Args)]
pub struct CalcArgs {
    /// Catalog fuel name used for defaults
    #[arg(long)]
    pub fuel: Option<String>,
    /// Price per unit basis
    #[arg(long)]
    pub price: Option<f64>,
    /// Unit basis: USD/m3, USD/t, GBP/m3, GBP/t, m3, t
    #[arg(long, value_parser = parse_basis)]
    pub unit: Option<PriceBasis>,
    /// Price currency: USD or GBP
    #[arg(long, value_parser = parse_currency)]
    pub currency: Option<Currency>,
    /// Density in t/m3
    #[arg(long)]
    pub density: Option<f64>,
    /// RTFCs earned per litre (1 or 2)
    #[arg(long)]
    pub multiplier: Option<u32>,
    /// Energy content relative to the reference fuel
    #[arg(long)]
    pub energy_ratio: Option<f64>,
    /// Shipping premium value (0 = none)
    #[arg(long)]
    pub ship_value: Option<f64>,
    /// Shipping premium unit: "per m3" or "per tonne"
    #[arg(long, value_parser = parse_basis)]
    pub ship_unit: Option<PriceBasis>,
    /// Shipping premium currency: USD or GBP
    #[arg(long, value_parser = parse_currency)]
    pub ship_currency: Option<Currency>,
    /// USD per GBP exchange rate
    #[arg(long)]
    pub fx: Option<f64>,
}

impl From<CalcArgs> for QuoteOverrides {
    fn from(a: CalcArgs) -> Self {
        QuoteOverrides {
            fuel: a.fuel,
            price: a.price,
            unit: a.unit,
            currency: a.currency,
            density: a.density,
            multiplier: a.multiplier,
            energy_ratio: a.energy_ratio,
            ship_value: a.ship_value,
            ship_unit: a.ship_unit,
            ship_currency: a.ship_currency,
            usd_per_gbp: a.fx,
        }
    }
}
