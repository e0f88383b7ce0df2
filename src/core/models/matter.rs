//! Matter model
//!
//! A matter is one trademark application or registration under docket.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::{FilingBasis, StatusCode};

/// Errors raised when a matter would violate its invariants
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MatterError {
    /// Registration date precedes the filing date
    #[error("registration date {registration} is before filing date {filing}")]
    RegistrationBeforeFiling {
        /// Filing date on record
        filing: NaiveDate,
        /// Offending registration date
        registration: NaiveDate,
    },
}

/// A trademark matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matter {
    /// Docket identifier
    pub id: String,

    /// The mark as filed
    pub mark: String,

    /// Application filing date
    pub filing_date: NaiveDate,

    /// Statutory filing basis
    pub filing_basis: FilingBasis,

    /// Current registry status code
    pub status_code: StatusCode,

    /// Registration date, never earlier than `filing_date`
    reg_date: Option<NaiveDate>,

    /// Mailing date of the outstanding office action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_action_date: Option<NaiveDate>,

    /// Whether an extension of time to respond has been filed
    pub office_action_extension_filed: bool,

    /// Publication date in the Official Gazette
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,

    /// Extra days granted on requests to extend the opposition period
    pub opposition_extension_days: u32,

    /// Notice of Allowance date (intent-to-use track)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noa_date: Option<NaiveDate>,

    /// Statement-of-use extensions already filed
    pub sou_extensions_used: u32,
}

impl Matter {
    /// Create an unregistered matter
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        mark: impl Into<String>,
        filing_date: NaiveDate,
        filing_basis: FilingBasis,
        status_code: StatusCode,
    ) -> Self {
        Self {
            id: id.into(),
            mark: mark.into(),
            filing_date,
            filing_basis,
            status_code,
            reg_date: None,
            office_action_date: None,
            office_action_extension_filed: false,
            publication_date: None,
            opposition_extension_days: 0,
            noa_date: None,
            sou_extensions_used: 0,
        }
    }

    /// Record the registration date
    pub fn with_registration(mut self, reg_date: NaiveDate) -> Result<Self, MatterError> {
        self.set_registration(reg_date)?;
        Ok(self)
    }

    /// Set the registration date in place, checking it against the filing date
    pub fn set_registration(&mut self, reg_date: NaiveDate) -> Result<(), MatterError> {
        if reg_date < self.filing_date {
            return Err(MatterError::RegistrationBeforeFiling {
                filing: self.filing_date,
                registration: reg_date,
            });
        }
        self.reg_date = Some(reg_date);
        Ok(())
    }

    /// Registration date, if registered
    #[must_use]
    pub const fn registration_date(&self) -> Option<NaiveDate> {
        self.reg_date
    }

    /// Whether the mark has registered
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.reg_date.is_some()
    }

    /// Record an outstanding office action
    #[must_use]
    pub const fn with_office_action(mut self, issued: NaiveDate, extension_filed: bool) -> Self {
        self.office_action_date = Some(issued);
        self.office_action_extension_filed = extension_filed;
        self
    }

    /// Record the publication date and any granted opposition extension days
    #[must_use]
    pub const fn with_publication(mut self, published: NaiveDate, extension_days: u32) -> Self {
        self.publication_date = Some(published);
        self.opposition_extension_days = extension_days;
        self
    }

    /// Record the Notice of Allowance and extensions used so far
    #[must_use]
    pub const fn with_allowance(mut self, noa_date: NaiveDate, extensions_used: u32) -> Self {
        self.noa_date = Some(noa_date);
        self.sou_extensions_used = extensions_used;
        self
    }
}
