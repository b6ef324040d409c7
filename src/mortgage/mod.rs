//! Mortgage record with field validation and payment calculation

use crate::error::MortgageError;
use crate::lookup::{is_valid_amortization, MortgageRate, PaymentFrequency};
use std::fmt;

/// A validated mortgage configuration
///
/// Every live instance holds a positive loan amount, a resolved rate and
/// frequency, and a permitted amortization length. Fields are validated on
/// construction and on every mutation; a failed mutation leaves the prior
/// state intact.
#[derive(Clone, PartialEq)]
pub struct Mortgage {
    loan_amount: f64,
    rate: MortgageRate,
    frequency: PaymentFrequency,
    amortization: u32,
}

impl Mortgage {
    /// Build a mortgage from raw inputs, validating each field
    ///
    /// Checks run in field order: loan amount, rate code, frequency code,
    /// amortization. The first violated rule is reported and no instance is
    /// produced.
    pub fn new(
        loan_amount: f64,
        rate_code: &str,
        frequency_code: &str,
        amortization: u32,
    ) -> Result<Self, MortgageError> {
        if loan_amount <= 0.0 {
            return Err(MortgageError::InvalidLoanAmount);
        }
        let rate = MortgageRate::from_code(rate_code)?;
        let frequency = PaymentFrequency::from_code(frequency_code)?;
        if !is_valid_amortization(amortization) {
            return Err(MortgageError::InvalidAmortization);
        }
        Ok(Self {
            loan_amount,
            rate,
            frequency,
            amortization,
        })
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn rate(&self) -> MortgageRate {
        self.rate
    }

    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    pub fn amortization(&self) -> u32 {
        self.amortization
    }

    /// Replace the loan amount; must be positive
    pub fn set_loan_amount(&mut self, loan_amount: f64) -> Result<(), MortgageError> {
        if loan_amount <= 0.0 {
            return Err(MortgageError::InvalidLoanAmount);
        }
        self.loan_amount = loan_amount;
        Ok(())
    }

    /// Replace the rate by symbolic code
    pub fn set_rate(&mut self, rate_code: &str) -> Result<(), MortgageError> {
        self.rate = MortgageRate::from_code(rate_code)?;
        Ok(())
    }

    /// Replace the payment frequency by symbolic code
    pub fn set_frequency(&mut self, frequency_code: &str) -> Result<(), MortgageError> {
        self.frequency = PaymentFrequency::from_code(frequency_code)?;
        Ok(())
    }

    /// Replace the amortization length; must be a permitted value
    pub fn set_amortization(&mut self, amortization: u32) -> Result<(), MortgageError> {
        if !is_valid_amortization(amortization) {
            return Err(MortgageError::InvalidAmortization);
        }
        self.amortization = amortization;
        Ok(())
    }

    /// Periodic payment from the annuity formula, rounded to cents
    ///
    /// With all fields validated the periodic rate is strictly positive, so
    /// the denominator never reaches zero.
    pub fn calculate_payment(&self) -> f64 {
        let periods = self.frequency.periods_per_year();
        let periodic_rate = self.rate.annual_rate() / periods as f64;
        let total_payments = (periods * self.amortization) as i32;
        let payment =
            periodic_rate * self.loan_amount / (1.0 - (1.0 + periodic_rate).powi(-total_payments));
        (payment * 100.0).round() / 100.0
    }
}

impl fmt::Display for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mortgage Amount: {} Rate: {:.2}% Amortization: {} Frequency: {} \
             -- Calculated Payment: {}",
            format_dollars(self.loan_amount),
            self.rate.annual_rate() * 100.0,
            self.amortization,
            self.frequency.display_name(),
            format_dollars(self.calculate_payment()),
        )
    }
}

impl fmt::Debug for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.loan_amount,
            self.rate.annual_rate(),
            self.amortization,
            self.frequency.periods_per_year(),
        )
    }
}

/// Format a non-negative dollar amount with thousands separators and cents
fn format_dollars(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{}", grouped, cents)
}
