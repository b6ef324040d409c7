//! Validate and price a batch of mortgage records
//!
//! Reads comma-delimited records (amount, rate code, frequency code,
//! amortization) and prints one report block per record: the formatted
//! mortgage details for valid records, the offending line and reason for
//! rejected ones.

use anyhow::Result;
use clap::Parser;
use mortgage_system::ingest::{self, IngestError, RecordOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "process_records",
    about = "Validate mortgage records and report calculated payments"
)]
struct Args {
    /// Path to the comma-delimited mortgage records file
    #[arg(default_value = ingest::DEFAULT_RECORDS_PATH)]
    input: String,
}

const SEPARATOR: &str = "**************************************************";

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let outcomes = match ingest::load_records(&args.input) {
        Ok(outcomes) => outcomes,
        Err(IngestError::SourceNotFound(_)) => {
            println!("The file was not found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", SEPARATOR);
    for outcome in &outcomes {
        match outcome {
            RecordOutcome::Valid(mortgage) => println!("{}", mortgage),
            RecordOutcome::Rejected { raw, error } => {
                println!("Data: {} caused error: {}", raw, error)
            }
        }
        println!("{}", SEPARATOR);
    }

    Ok(())
}
