use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{
    initialize_db,
    transaction::{SQLiteTransactionStore, TransactionStore},
};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many sample transactions to create.
    #[arg(long, short, default_value_t = 20)]
    count: usize,
}

const SAMPLE_DESCRIPTIONS: [&str; 8] = [
    "Groceries",
    "Coffee",
    "Bus fare",
    "Lunch",
    "Movie ticket",
    "Electricity bill",
    "Books",
    "Dinner with friends",
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating {} transactions...", args.count);

    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));

    for i in 0..args.count {
        let description = SAMPLE_DESCRIPTIONS[i % SAMPLE_DESCRIPTIONS.len()];
        let amount = 5 + (i as i64 * 37) % 120;

        store.create(amount, description)?;
    }

    println!("Success!");

    Ok(())
}
