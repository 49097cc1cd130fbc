//! Terminal front end for the larder inventory tracker.
//!
//! Every invocation opens the storage file, runs one operation through a
//! tracker session, and prints the listing the session hands back. View
//! state (the critical-only flag) lives in the storage file, so it carries
//! across invocations until a `list --all` resets it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use larder_common::listing::{ListingRow, SortOrder};
use larder_store::backend::FileBackend;
use larder_store::error::StoreError;
use larder_store::session::{NewProduct, Tracker};

#[derive(Parser)]
#[command(name = "larder", about = "Track perishable goods and their expiry status")]
struct Cli {
    /// Storage file (default: <data dir>/larder/storage.json).
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a product to the inventory.
    Add {
        /// Product type: "Food Item", "Medicine", "Grocery Item", or free text.
        #[arg(long)]
        kind: String,

        /// Product name, unique across the inventory.
        #[arg(long)]
        name: String,

        #[arg(long)]
        quantity: u32,

        /// Expiry date, YYYY-MM-DD.
        #[arg(long)]
        expiry: String,

        /// Free-form notes.
        #[arg(long, default_value = "")]
        details: String,
    },

    /// Show the inventory.
    List {
        /// Sort order for the listing (defaults to storage order).
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Reset the view first, dropping the critical-only filter.
        #[arg(long)]
        all: bool,
    },

    /// Search by name or expiry date fragment.
    Search { query: String },

    /// Delete the product with this exact name.
    Delete { name: String },

    /// Remove every product and reset the view.
    Clear,

    /// Replace the inventory with the built-in demo data.
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    None,
    TimeLeft,
    ItemType,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortOrder::Unsorted,
            SortArg::TimeLeft => SortOrder::TimeLeft,
            SortArg::ItemType => SortOrder::ItemType,
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), StoreError> {
    let path = cli.data_file.unwrap_or_else(default_data_path);
    debug!("using storage file {}", path.display());
    let mut tracker = Tracker::open(FileBackend::open(&path));

    match cli.command {
        Command::Add {
            kind,
            name,
            quantity,
            expiry,
            details,
        } => {
            let draft = NewProduct {
                kind,
                name,
                quantity,
                expiry,
                details,
            };
            let rows = tracker.submit_new_product(draft, SortOrder::Unsorted)?;
            print_rows(&rows);
        }

        Command::List { sort, all } => {
            let sort = sort.map(SortOrder::from).unwrap_or_default();
            if all {
                tracker.on_view_reload()?;
            }
            let rows = tracker.request_sort(sort);
            if tracker.critical_only() {
                println!("Showing critical products only; `larder list --all` lists everything.");
            }
            print_rows(&rows);
        }

        Command::Search { query } => {
            print_rows(&tracker.request_search(&query));
        }

        Command::Delete { name } => {
            let known = tracker.products().iter().any(|p| p.name == name);
            let rows = tracker.request_delete(&name, SortOrder::Unsorted)?;
            if !known {
                println!("No product named \"{name}\".");
            }
            print_rows(&rows);
        }

        Command::Clear => {
            tracker.request_clear_all()?;
            println!("Inventory cleared.");
        }

        Command::Demo => {
            let rows = tracker.request_load_demo_data()?;
            println!(
                "Loaded {} demo products; showing the critical ones.",
                tracker.products().len()
            );
            print_rows(&rows);
        }
    }

    Ok(())
}

fn default_data_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("larder").join("storage.json")
}

fn print_rows(rows: &[ListingRow]) {
    if rows.is_empty() {
        println!("No products found.");
        return;
    }

    println!(
        "{:<14} {:<20} {:>5}  {:<12} {:<15} {:<26} {}",
        "TYPE", "NAME", "QTY", "EXPIRY", "TIME LEFT", "STATUS", ""
    );
    for row in rows {
        println!(
            "{:<14} {:<20} {:>5}  {:<12} {:<15} {:<26} {}",
            row.kind.as_str(),
            row.name,
            row.quantity,
            row.expiry.to_string(),
            row.days_label,
            row.message,
            if row.action_needed { "!" } else { "" },
        );
    }
    println!("{} product(s)", rows.len());
}
