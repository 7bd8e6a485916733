use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// The CLI plays the host's role: it encodes human input into the wire
// argument vector, generates the invocation context, and renders the
// contract's response. Validation stays in the contract, so every value
// travels as a string exactly as a real host would pass it.
#[derive(Parser)]
#[command(
    name = "tally",
    about = "Tally — deterministic inventory ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the local state file.
    #[arg(long, global = true, default_value = "tally-state.bin")]
    pub store: PathBuf,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create or replace a product record
    Add(AddArgs),
    /// Sell stock from a product
    Sell(SellArgs),
    /// Show the stored product record
    View(ViewArgs),
    /// Show a retailer's latest transaction
    History(HistoryArgs),
}

/// Arguments in wire order, as `addInventory` expects them.
#[derive(Args)]
pub struct AddArgs {
    pub retailer_id: String,
    pub supplier_id: String,
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub style: String,
    pub size: String,
    pub color: String,
    pub quantity: String,
}

#[derive(Args)]
pub struct SellArgs {
    pub product_id: String,
    pub quantity: String,
}

#[derive(Args)]
pub struct ViewArgs {
    pub product_id: String,
}

#[derive(Args)]
pub struct HistoryArgs {
    pub retailer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from([
            "tally", "add", "1", "2", "100", "Shoe", "Acme", "Run", "9", "Red", "50",
        ])
        .unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.retailer_id, "1");
            assert_eq!(args.product_name, "Shoe");
            assert_eq!(args.quantity, "50");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_add_requires_all_nine_fields() {
        assert!(Cli::try_parse_from(["tally", "add", "1", "2", "100"]).is_err());
    }

    #[test]
    fn parse_sell() {
        let cli = Cli::try_parse_from(["tally", "sell", "100", "20"]).unwrap();
        if let Command::Sell(args) = cli.command {
            assert_eq!(args.product_id, "100");
            assert_eq!(args.quantity, "20");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_view() {
        let cli = Cli::try_parse_from(["tally", "view", "100"]).unwrap();
        assert!(matches!(cli.command, Command::View(_)));
    }

    #[test]
    fn parse_history() {
        let cli = Cli::try_parse_from(["tally", "history", "1"]).unwrap();
        if let Command::History(args) = cli.command {
            assert_eq!(args.retailer_id, "1");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_store_path() {
        let cli = Cli::try_parse_from(["tally", "--store", "/tmp/demo.bin", "view", "1"]).unwrap();
        assert_eq!(cli.store, PathBuf::from("/tmp/demo.bin"));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["tally", "--format", "json", "view", "1"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn store_defaults_to_local_file() {
        let cli = Cli::try_parse_from(["tally", "view", "1"]).unwrap();
        assert_eq!(cli.store, PathBuf::from("tally-state.bin"));
    }
}
