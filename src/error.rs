//! Validation errors for mortgage record construction and mutation

use thiserror::Error;

/// Rejection of a semantically invalid mortgage field
///
/// Every variant is a per-field validation failure. Construction reports the
/// first rule violated, in field order; setters report only their own field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MortgageError {
    /// Loan amount was zero or negative
    #[error("Loan Amount must be positive.")]
    InvalidLoanAmount,

    /// Rate code did not match any known mortgage rate
    #[error("Rate provided is invalid.")]
    InvalidRate,

    /// Frequency code did not match any known payment frequency
    #[error("Frequency provided is invalid.")]
    InvalidFrequency,

    /// Amortization length was not one of the permitted values
    #[error("Amortization provided is invalid.")]
    InvalidAmortization,
}
