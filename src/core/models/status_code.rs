//! Registry status codes
//!
//! Numeric prosecution status codes as reported by the trademark registry,
//! mapped to a label and a coarse category.

use serde::{Deserialize, Serialize};

/// Coarse grouping of registry status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Filed, not yet examined
    Application,
    /// With an examining attorney
    Examination,
    /// Office action outstanding or answered
    OfficeAction,
    /// Ex parte appeal pending
    Appeal,
    /// Prosecution suspended
    Suspended,
    /// Published for opposition
    Publication,
    /// Before the Trademark Trial and Appeal Board
    Ttab,
    /// Registered
    Registered,
    /// Abandoned
    Abandoned,
    /// Registration cancelled
    Cancelled,
    /// Registration expired
    Expired,
    /// Code not in the table
    Unknown,
}

impl StatusCategory {
    /// Display label for the category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Examination => "Examination",
            Self::OfficeAction => "Office Action",
            Self::Appeal => "Appeal",
            Self::Suspended => "Suspended",
            Self::Publication => "Publication",
            Self::Ttab => "TTAB",
            Self::Registered => "Registered",
            Self::Abandoned => "Abandoned",
            Self::Cancelled => "Cancelled",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const STATUS_TABLE: &[(u16, &str, StatusCategory)] = &[
    (100, "New Application", StatusCategory::Application),
    (150, "New Application - Record Initialized", StatusCategory::Application),
    (200, "Abandoned - Incomplete", StatusCategory::Abandoned),
    (220, "Awaiting Examination", StatusCategory::Application),
    (250, "Intent-to-Use Processing", StatusCategory::Application),
    (400, "Assigned to Examiner", StatusCategory::Examination),
    (500, "Initial Examination", StatusCategory::Examination),
    (600, "Non-Final Action Issued", StatusCategory::OfficeAction),
    (605, "Response After Non-Final Action", StatusCategory::OfficeAction),
    (610, "Final Action Issued", StatusCategory::OfficeAction),
    (615, "Response After Final Action", StatusCategory::OfficeAction),
    (620, "Appeal Pending", StatusCategory::Appeal),
    (630, "Suspended", StatusCategory::Suspended),
    (700, "Registered", StatusCategory::Registered),
    (710, "Registered - Maintenance Due", StatusCategory::Registered),
    (730, "Published for Opposition", StatusCategory::Publication),
    (740, "In Opposition Proceeding", StatusCategory::Ttab),
    (750, "Opposition Period Expired", StatusCategory::Publication),
    (800, "Registered", StatusCategory::Registered),
    (810, "Registered - Section 8 Due", StatusCategory::Registered),
    (820, "Registered - Section 9 Due", StatusCategory::Registered),
    (830, "Registered - Renewal Filed", StatusCategory::Registered),
    (900, "Abandoned - Failure to Respond", StatusCategory::Abandoned),
    (901, "Abandoned - Express Abandonment", StatusCategory::Abandoned),
    (902, "Abandoned - Failure to File Statement of Use", StatusCategory::Abandoned),
    (910, "Cancelled - Section 8", StatusCategory::Cancelled),
    (911, "Cancelled - Section 71", StatusCategory::Cancelled),
    (920, "Expired", StatusCategory::Expired),
];

/// Codes under which an office action awaits a response
const OFFICE_ACTION_PENDING: &[u16] = &[600, 601, 602, 603, 610, 611, 612, 614, 615, 616];

/// A numeric registry status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// The raw numeric code
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    fn lookup(self) -> Option<&'static (u16, &'static str, StatusCategory)> {
        STATUS_TABLE.iter().find(|(code, _, _)| *code == self.0)
    }

    /// Human label, or `Unknown (<code>)` for codes outside the table
    #[must_use]
    pub fn label(self) -> String {
        self.lookup()
            .map_or_else(|| format!("Unknown ({})", self.0), |(_, label, _)| (*label).to_string())
    }

    /// Category of the code
    #[must_use]
    pub fn category(self) -> StatusCategory {
        self.lookup().map_or(StatusCategory::Unknown, |(_, _, category)| *category)
    }

    /// Whether an office action is awaiting a response under this status
    #[must_use]
    pub fn is_office_action_pending(self) -> bool {
        OFFICE_ACTION_PENDING.contains(&self.0)
    }

    /// Whether the code is below the publication/registration range
    #[must_use]
    pub const fn is_pre_publication(self) -> bool {
        self.0 < 700
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}
