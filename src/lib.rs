//! Mortgage record validation and payment calculation
//!
//! Validates raw mortgage inputs (loan amount, rate code, payment frequency
//! code, amortization years) against fixed lookup tables and computes the
//! periodic payment with the standard annuity formula.

pub mod error;
pub mod ingest;
pub mod lookup;
pub mod mortgage;

pub use error::MortgageError;
pub use ingest::{load_default_records, load_records, load_records_from_reader, RecordOutcome};
pub use lookup::{is_valid_amortization, MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
pub use mortgage::Mortgage;
