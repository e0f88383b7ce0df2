//! Parsing boundary for dates and registry codes
//!
//! Everything that arrives as text (docket files, CLI arguments) passes
//! through here before reaching the engine. Invalid input is rejected with
//! a [`ParseError`]; nothing is defaulted.
//!
//! # Examples
//!
//! ```
//! use markflow::parser::{parse_date, parse_filing_basis};
//! use markflow::core::models::FilingBasis;
//!
//! let issued = parse_date("2023-01-10").unwrap();
//! assert_eq!(issued.to_string(), "2023-01-10");
//! assert_eq!(parse_filing_basis("66(a)").unwrap(), FilingBasis::MadridProtocol);
//! assert!(parse_date("01/10/2023").is_err());
//! ```

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::models::{DeadlineStatus, DeadlineType, FilingBasis};

/// Calendar date format accepted at the boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while parsing boundary input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Not a valid `YYYY-MM-DD` calendar date
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Filing basis outside the fixed set
    #[error("unknown filing basis '{0}': expected one of 1(a), 1(b), 44(d), 44(e), 66(a)")]
    UnknownFilingBasis(String),

    /// Deadline type outside the fixed set
    #[error("unknown deadline type '{0}'")]
    UnknownDeadlineType(String),

    /// Deadline status other than open/completed
    #[error("unknown deadline status '{0}': expected open or completed")]
    UnknownStatus(String),
}

/// Parse an ISO calendar date with no time-of-day component
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(input.to_string()))
}

/// Parse an optional date field; empty strings count as absent
pub fn parse_optional_date(input: Option<&str>) -> Result<Option<NaiveDate>, ParseError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

/// Parse a filing-basis registry code
pub fn parse_filing_basis(input: &str) -> Result<FilingBasis, ParseError> {
    input.parse().map_err(|_: String| ParseError::UnknownFilingBasis(input.to_string()))
}

/// Parse a deadline type code
pub fn parse_deadline_type(input: &str) -> Result<DeadlineType, ParseError> {
    input.parse().map_err(|_: String| ParseError::UnknownDeadlineType(input.to_string()))
}

/// Parse a deadline status
pub fn parse_status(input: &str) -> Result<DeadlineStatus, ParseError> {
    input.parse().map_err(|_: String| ParseError::UnknownStatus(input.to_string()))
}
