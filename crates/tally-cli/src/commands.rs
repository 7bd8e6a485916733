use colored::Colorize;

use tally_contract::{InventoryContract, Operation, Response, TxContext};
use tally_state::FileStateStore;
use tally_types::{Product, Transaction};

use crate::cli::{Cli, Command, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = FileStateStore::open(&cli.store)?;
    let contract = InventoryContract::new(store);
    let ctx = TxContext::generate();

    let (operation, args) = encode(&cli.command);
    let response = contract.invoke(&ctx, operation.verb(), &args);
    render(&cli.format, operation, response)
}

/// Encode a subcommand into the wire verb and positional argument vector.
///
/// No validation happens here: the contract owns it, and pre-checking would
/// shadow its error messages.
fn encode(command: &Command) -> (Operation, Vec<String>) {
    match command {
        Command::Add(a) => (
            Operation::AddInventory,
            vec![
                a.retailer_id.clone(),
                a.supplier_id.clone(),
                a.product_id.clone(),
                a.product_name.clone(),
                a.brand.clone(),
                a.style.clone(),
                a.size.clone(),
                a.color.clone(),
                a.quantity.clone(),
            ],
        ),
        Command::Sell(a) => (
            Operation::SellFromInventory,
            vec![a.product_id.clone(), a.quantity.clone()],
        ),
        Command::View(a) => (Operation::ViewInventory, vec![a.product_id.clone()]),
        Command::History(a) => (Operation::TransactionHistory, vec![a.retailer_id.clone()]),
    }
}

fn render(format: &OutputFormat, operation: Operation, response: Response) -> anyhow::Result<()> {
    match response {
        Response::Success(payload) => {
            match format {
                // Payloads are already canonical JSON; pass them through.
                OutputFormat::Json => println!("{}", String::from_utf8_lossy(&payload)),
                OutputFormat::Text => print_text(operation, &payload)?,
            }
            Ok(())
        }
        Response::Error(message) => anyhow::bail!(message),
    }
}

fn print_text(operation: Operation, payload: &[u8]) -> anyhow::Result<()> {
    match operation {
        Operation::TransactionHistory => {
            let tx: Transaction = serde_json::from_slice(payload)?;
            print_transaction(&tx);
        }
        _ => {
            let product: Product = serde_json::from_slice(payload)?;
            print_product(&product);
        }
    }
    Ok(())
}

fn print_product(product: &Product) {
    println!(
        "{} {} — {} ({}, {})",
        "✓".green().bold(),
        format!("product/{}", product.product_id).yellow(),
        product.product_name.bold(),
        product.brand,
        product.style
    );
    println!(
        "  Retailer: {}  Supplier: {}",
        product.retailer_id.to_string().cyan(),
        product.supplier_id.to_string().cyan()
    );
    println!("  Size: {}  Color: {}", product.size, product.color);
    println!("  Quantity: {}", product.quantity.to_string().bold());
}

fn print_transaction(tx: &Transaction) {
    println!(
        "{} {} transaction by {}",
        "✓".green().bold(),
        tx.kind.to_string().cyan(),
        tx.owner.yellow()
    );
    println!(
        "  Id: {}  At: {}",
        tx.transaction_id.short_id().dimmed(),
        tx.timestamp.to_rfc3339()
    );
    println!(
        "  Snapshot: {} ({}) quantity {}",
        tx.product_snapshot.product_name.bold(),
        format!("product/{}", tx.product_snapshot.product_id).yellow(),
        tx.product_snapshot.quantity.to_string().bold()
    );
}
