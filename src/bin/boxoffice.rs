//! CLI box office tool for cinema-tickets.
//!
//! Runs a ticket purchase against the in-process payment and seat booking
//! gateways, printing the receipt or the rejection reason.
//!
//! # Usage
//!
//! ```bash
//! # Purchase from category flags
//! cargo run --bin boxoffice -- purchase --account-id 5 --adult 1 --child 1 --infant 1
//!
//! # Purchase from a JSON order file
//! cargo run --bin boxoffice -- purchase --account-id 5 --order order.json
//!
//! # Show the price table
//! cargo run --bin boxoffice -- prices
//! ```
//!
//! An order file is a JSON array of request lines:
//!
//! ```json
//! [
//!   { "type": "ADULT", "quantity": 2 },
//!   { "type": "CHILD", "quantity": 1 }
//! ]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` (optional): log level filter, default `info`
//! - `LOG_FORMAT` (optional): `text` or `json`, default `text`

use cinema_tickets::config::Config;
use cinema_tickets::prelude::*;
use cinema_tickets::infrastructure::gateways::{
    InProcessPaymentGateway, InProcessSeatReservation,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for purchasing cinema tickets.
#[derive(Parser)]
#[command(name = "boxoffice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate and execute a ticket purchase
    Purchase {
        /// Account to charge and reserve seats for
        #[arg(long)]
        account_id: i64,

        /// Number of adult tickets
        #[arg(long, default_value_t = 0)]
        adult: u32,

        /// Number of child tickets
        #[arg(long, default_value_t = 0)]
        child: u32,

        /// Number of infant tickets
        #[arg(long, default_value_t = 0)]
        infant: u32,

        /// JSON order file; overrides the category flags when given
        #[arg(long)]
        order: Option<PathBuf>,
    },

    /// Show the ticket price table
    Prices,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config);

    let cli = Cli::parse();

    match cli.command {
        Commands::Purchase {
            account_id,
            adult,
            child,
            infant,
            order,
        } => {
            let requests = match order {
                Some(path) => read_order_file(&path)?,
                None => requests_from_flags(adult, child, infant),
            };
            run_purchase(account_id, &requests).await;
        }
        Commands::Prices => print_prices(),
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::new(config.log_level.clone());
    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Builds request lines from the category flags, skipping zero counts so a
/// flag left at its default does not become an invalid zero-quantity request.
fn requests_from_flags(adult: u32, child: u32, infant: u32) -> Vec<TicketTypeRequest> {
    [
        (TicketType::Adult, adult),
        (TicketType::Child, child),
        (TicketType::Infant, infant),
    ]
    .into_iter()
    .filter(|(_, quantity)| *quantity > 0)
    .map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
    .collect()
}

fn read_order_file(path: &PathBuf) -> Result<Vec<TicketTypeRequest>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse order file {}", path.display()))
}

async fn run_purchase(account_id: i64, requests: &[TicketTypeRequest]) {
    let service = TicketPurchaseService::new(
        Arc::new(InProcessPaymentGateway::new()),
        Arc::new(InProcessSeatReservation::new()),
    );

    match service.purchase_tickets(account_id, requests).await {
        Ok(()) => print_receipt(account_id, requests),
        Err(err) => {
            println!(
                "{} {} {}",
                "Purchase rejected:".red().bold(),
                err,
                format!("[{}]", err.kind()).dimmed()
            );
            std::process::exit(1);
        }
    }
}

/// Prints the receipt for an accepted purchase.
///
/// Recomputes the totals from the same aggregate the service used; this is a
/// pure read-only pass for display.
fn print_receipt(account_id: i64, requests: &[TicketTypeRequest]) {
    let mut totals = OrderTotals::new();
    for request in requests {
        totals.add(request);
    }
    let summary = totals.summarize();

    println!("{}", "Purchase accepted".green().bold());
    println!("  Account:  {account_id}");
    for request in requests {
        println!(
            "  {:<8} x{:<3} = {}",
            request.ticket_type.to_string(),
            request.quantity,
            request.price()
        );
    }
    println!("  Charged:  {}", summary.total_price.to_string().bold());
    println!(
        "  Seats:    {} (infants included)",
        summary.total_tickets.to_string().bold()
    );
}

fn print_prices() {
    println!("{}", "Ticket prices".bold());
    for ticket_type in TicketType::ALL {
        println!("  {:<8} {}", ticket_type.to_string(), ticket_type.price());
    }
    println!(
        "\nAt most {MAX_TICKETS_PER_PURCHASE} tickets per purchase; at least one adult; \
         no more infants than adults."
    );
}
