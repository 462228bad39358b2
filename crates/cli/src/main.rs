//! Solidkit CLI - pricing quotes and account/order demos
//!
//! Usage:
//! ```bash
//! solidkit discount VIP 1000
//! solidkit shipping International 2 Europe
//! solidkit quote Premium 250 Express 3 USA --json
//! solidkit strategies
//! solidkit interest fixed-deposit 2000
//! solidkit --config solidkit.json demo all
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

mod commands;
mod config;
mod logger;

use commands::{account, demo, pricing};
use config::SolidkitConfig;

/// Solidkit - account rules, pricing strategies and order handling
#[derive(Parser)]
#[command(name = "solidkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON config file with `accounts` and `pricing` sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discount for a customer type
    Discount {
        /// Customer type (e.g., Regular, Premium, VIP)
        customer_type: String,
        /// Order amount
        amount: Decimal,
    },

    /// Shipping cost for a method
    Shipping {
        /// Shipping method (e.g., Standard, Express, International)
        method: String,
        /// Parcel weight
        weight: Decimal,
        /// Destination (e.g., USA, Europe, Asia)
        destination: String,
    },

    /// Discount and shipping for one order
    Quote {
        customer_type: String,
        amount: Decimal,
        method: String,
        weight: Decimal,
        destination: String,
    },

    /// List registered discount types and shipping methods
    Strategies,

    /// Interest on a balance for an account type
    Interest {
        /// Account type
        kind: AccountKindArg,
        /// Balance to accrue interest on
        balance: Decimal,
        /// Days until a fixed deposit matures
        #[arg(long, default_value_t = 30)]
        matures_in_days: i64,
    },

    /// Run a scripted walkthrough
    Demo {
        #[arg(default_value = "all")]
        which: DemoArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountKindArg {
    Savings,
    Checking,
    FixedDeposit,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoArg {
    Bank,
    Pricing,
    Orders,
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = SolidkitConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Discount {
            customer_type,
            amount,
        } => {
            pricing::discount(&config.pricing, &customer_type, amount, cli.json)?;
        }

        Commands::Shipping {
            method,
            weight,
            destination,
        } => {
            pricing::shipping(&config.pricing, &method, weight, &destination, cli.json)?;
        }

        Commands::Quote {
            customer_type,
            amount,
            method,
            weight,
            destination,
        } => {
            pricing::quote(
                &config.pricing,
                &customer_type,
                amount,
                &method,
                weight,
                &destination,
                cli.json,
            )?;
        }

        Commands::Strategies => {
            pricing::strategies(&config.pricing, cli.json)?;
        }

        Commands::Interest {
            kind,
            balance,
            matures_in_days,
        } => {
            account::interest(&config.accounts, kind, balance, matures_in_days, cli.json)?;
        }

        Commands::Demo { which } => {
            demo::run(&config, which)?;
        }
    }

    Ok(())
}
