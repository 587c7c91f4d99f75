use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{
    expense::{ExpenseStore, NewExpense, SQLiteExpenseStore},
    initialize_db,
};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_EXPENSES: [(&str, &str, f64, &str); 8] = [
    ("Lunch", "Food", 250.0, "2026-01-05T12:30:00"),
    ("Bus pass", "Transport", 120.0, "2026-01-06T08:00:00"),
    ("Groceries", "Food", 1340.5, "2026-01-12T18:15:00"),
    ("Electricity", "Bills", 980.0, "2026-01-28T09:00:00"),
    ("Movie", "Entertainment", 300.0, "2026-02-02T20:00:00"),
    ("Dinner", "Food", 450.0, "2026-02-14T19:30:00"),
    ("Taxi", "Transport", 210.75, "2026-02-15T23:10:00"),
    ("Internet", "Bills", 799.0, "2026-02-28T09:00:00"),
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

    println!("Creating sample expenses...");

    let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));

    for (title, category, amount, date) in SAMPLE_EXPENSES {
        store.create(NewExpense::new(title, category, amount, date)?)?;
    }

    println!("Success!");

    Ok(())
}
