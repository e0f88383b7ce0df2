//! Outcome of a matter-level deadline computation
//!
//! Keeps "not computable" distinct from "computed" so a missing date never
//! turns into a made-up deadline.

use serde::Serialize;

/// A date the engine needs but the matter does not have on file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prerequisite {
    /// Office-action mailing date
    OfficeActionDate,
    /// Registration date
    RegistrationDate,
    /// Publication date
    PublicationDate,
}

impl Prerequisite {
    /// Human description of the missing date
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::OfficeActionDate => "office action issue date",
            Self::RegistrationDate => "registration date",
            Self::PublicationDate => "publication date",
        }
    }
}

impl std::fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Result of asking for one deadline on one matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Computation<T> {
    /// Deadline computed
    Computed(T),
    /// The matter's status or basis does not call for this deadline
    NotApplicable,
    /// The deadline applies but a required date is missing
    MissingPrerequisite(Prerequisite),
}

impl<T> Computation<T> {
    /// The computed value, if any
    #[must_use]
    pub fn computed(self) -> Option<T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::NotApplicable | Self::MissingPrerequisite(_) => None,
        }
    }

    /// Whether a value was computed
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}
