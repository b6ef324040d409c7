//! Lookup tables for valid mortgage rates, payment frequencies, and
//! amortization periods
//!
//! These closed sets are the only values a mortgage record will accept.
//! All lookups are pure; the tables are fixed for the process lifetime.

use crate::error::MortgageError;
use serde::{Deserialize, Serialize};

/// Permitted amortization lengths in years
pub const VALID_AMORTIZATION: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// Check whether an amortization length is permitted
pub fn is_valid_amortization(years: u32) -> bool {
    VALID_AMORTIZATION.contains(&years)
}

/// Annual interest rate selection, keyed by symbolic code
///
/// Three fixed-term and three variable-term rates. The decimal rate values
/// are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MortgageRate {
    #[serde(rename = "FIXED_5")]
    Fixed5,
    #[serde(rename = "FIXED_3")]
    Fixed3,
    #[serde(rename = "FIXED_1")]
    Fixed1,
    #[serde(rename = "VARIABLE_5")]
    Variable5,
    #[serde(rename = "VARIABLE_3")]
    Variable3,
    #[serde(rename = "VARIABLE_1")]
    Variable1,
}

impl MortgageRate {
    /// Resolve a symbolic rate code
    pub fn from_code(code: &str) -> Result<Self, MortgageError> {
        match code {
            "FIXED_5" => Ok(Self::Fixed5),
            "FIXED_3" => Ok(Self::Fixed3),
            "FIXED_1" => Ok(Self::Fixed1),
            "VARIABLE_5" => Ok(Self::Variable5),
            "VARIABLE_3" => Ok(Self::Variable3),
            "VARIABLE_1" => Ok(Self::Variable1),
            _ => Err(MortgageError::InvalidRate),
        }
    }

    /// Annual interest rate as a decimal fraction
    pub fn annual_rate(&self) -> f64 {
        match self {
            Self::Fixed5 => 0.0519,
            Self::Fixed3 => 0.0589,
            Self::Fixed1 => 0.0599,
            Self::Variable5 => 0.0649,
            Self::Variable3 => 0.0669,
            Self::Variable1 => 0.0679,
        }
    }

    /// Symbolic code for this rate
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fixed5 => "FIXED_5",
            Self::Fixed3 => "FIXED_3",
            Self::Fixed1 => "FIXED_1",
            Self::Variable5 => "VARIABLE_5",
            Self::Variable3 => "VARIABLE_3",
            Self::Variable1 => "VARIABLE_1",
        }
    }
}

/// Payment frequency selection, keyed by symbolic code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    /// Resolve a symbolic frequency code
    pub fn from_code(code: &str) -> Result<Self, MortgageError> {
        match code {
            "MONTHLY" => Ok(Self::Monthly),
            "BI_WEEKLY" => Ok(Self::BiWeekly),
            "WEEKLY" => Ok(Self::Weekly),
            _ => Err(MortgageError::InvalidFrequency),
        }
    }

    /// Number of payment periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::BiWeekly => 26,
            Self::Weekly => 52,
        }
    }

    /// Symbolic code for this frequency
    pub fn code(&self) -> &'static str {
        match self {
            Self::Monthly => "MONTHLY",
            Self::BiWeekly => "BI_WEEKLY",
            Self::Weekly => "WEEKLY",
        }
    }

    /// Name as rendered in the mortgage display string
    ///
    /// First letter capitalized, rest lowercased, underscores kept as-is
    /// ("Bi_weekly", not "Bi-Weekly") for output compatibility.
    pub fn display_name(&self) -> String {
        let code = self.code();
        format!("{}{}", &code[..1], code[1..].to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_codes_resolve_to_documented_values() {
        let expected = [
            ("FIXED_5", 0.0519),
            ("FIXED_3", 0.0589),
            ("FIXED_1", 0.0599),
            ("VARIABLE_5", 0.0649),
            ("VARIABLE_3", 0.0669),
            ("VARIABLE_1", 0.0679),
        ];
        for (code, rate) in expected {
            let resolved = MortgageRate::from_code(code).unwrap();
            assert_eq!(resolved.annual_rate(), rate);
            assert_eq!(resolved.code(), code);
        }
    }

    #[test]
    fn test_unknown_rate_code_rejected() {
        assert_eq!(
            MortgageRate::from_code("FIXED_10"),
            Err(MortgageError::InvalidRate)
        );
        assert_eq!(
            MortgageRate::from_code("fixed_5"),
            Err(MortgageError::InvalidRate)
        );
        assert_eq!(MortgageRate::from_code(""), Err(MortgageError::InvalidRate));
    }

    #[test]
    fn test_frequency_codes_resolve_to_periods() {
        assert_eq!(
            PaymentFrequency::from_code("MONTHLY").unwrap().periods_per_year(),
            12
        );
        assert_eq!(
            PaymentFrequency::from_code("BI_WEEKLY").unwrap().periods_per_year(),
            26
        );
        assert_eq!(
            PaymentFrequency::from_code("WEEKLY").unwrap().periods_per_year(),
            52
        );
    }

    #[test]
    fn test_unknown_frequency_code_rejected() {
        assert_eq!(
            PaymentFrequency::from_code("QUARTERLY"),
            Err(MortgageError::InvalidFrequency)
        );
        assert_eq!(
            PaymentFrequency::from_code("monthly"),
            Err(MortgageError::InvalidFrequency)
        );
    }

    #[test]
    fn test_frequency_display_names() {
        assert_eq!(PaymentFrequency::Monthly.display_name(), "Monthly");
        assert_eq!(PaymentFrequency::BiWeekly.display_name(), "Bi_weekly");
        assert_eq!(PaymentFrequency::Weekly.display_name(), "Weekly");
    }

    #[test]
    fn test_amortization_membership() {
        for years in VALID_AMORTIZATION {
            assert!(is_valid_amortization(years));
        }
        for years in [0, 1, 4, 6, 35, 40] {
            assert!(!is_valid_amortization(years));
        }
    }
}
