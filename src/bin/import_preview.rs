//! Dry-run a bank statement import and preview the dashboard reports.
//!
//! Imports the statement into an in-memory store, so nothing is persisted.
//! Useful for checking how a bank's export will be interpreted before
//! importing it for real.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use time::{Date, OffsetDateTime, UtcOffset};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use finboard::{
    AccountStore, CategoryStore, DateWindow, MemoryStore, category_breakdown_for_window, currency,
    get_local_offset, import_statement, monthly_series_ending_at,
};

/// Preview how a bank statement CSV would import.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the bank statement CSV.
    file: PathBuf,

    /// The number of trailing months to include in the monthly series.
    #[arg(long, default_value_t = 6)]
    months: usize,

    /// Canonical timezone used to resolve today's date, e.g.
    /// "Pacific/Auckland". Defaults to the system timezone.
    #[arg(long)]
    timezone: Option<String>,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let data = match std::fs::read(&args.file) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("Could not read {}: {error}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let today = today_in(args.timezone.as_deref());

    let mut store = MemoryStore::new();
    let account = store
        .create_account("Statement preview", "NZD")
        .expect("Could not create the preview account");

    let outcome = match import_statement(&data, account.id, &mut store) {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("Import failed: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Imported {} transactions ({} rows dropped, {} duplicates skipped)",
        outcome.imported.len(),
        outcome.skipped_rows,
        outcome.duplicates
    );

    let account = store
        .get_account(account.id)
        .expect("Could not get the preview account");
    println!("Net movement: {}", currency(account.balance));

    let categories = store
        .get_categories()
        .expect("Could not get categories");

    let breakdown =
        match category_breakdown_for_window(&store, &categories, DateWindow::month_of(today)) {
            Ok(breakdown) => breakdown,
            Err(error) => {
                eprintln!("Could not build the category breakdown: {error}");
                return ExitCode::FAILURE;
            }
        };

    if breakdown.is_empty() {
        println!("\nNo expenses in the current month.");
    } else {
        println!("\nExpenses this month by category:");
        for slice in breakdown {
            println!("  {:<24} {}", slice.name, currency(slice.total));
        }
    }

    let series = match monthly_series_ending_at(&store, args.months, today) {
        Ok(series) => series,
        Err(error) => {
            eprintln!("Could not build the monthly series: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("\nTrailing {} months:", args.months);
    for month in series {
        println!(
            "  {:<8} income {:>12}  expenses {:>12}  net {:>12}",
            month.label,
            currency(month.income),
            currency(month.expenses),
            currency(month.net)
        );
    }

    ExitCode::SUCCESS
}

/// Today's date in the requested timezone, the system timezone, or UTC,
/// in that order of preference.
fn today_in(timezone: Option<&str>) -> Date {
    let offset = timezone.and_then(|name| {
        let offset = get_local_offset(name);

        if offset.is_none() {
            tracing::warn!("unknown timezone {name}, falling back to the system offset");
        }

        offset
    });

    let offset = offset
        .or_else(|| UtcOffset::current_local_offset().ok())
        .unwrap_or(UtcOffset::UTC);

    OffsetDateTime::now_utc().to_offset(offset).date()
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().pretty().with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            ),
        )
        .init();
}
