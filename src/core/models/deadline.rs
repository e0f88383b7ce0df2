//! Deadline model
//!
//! A single due-date obligation tied to a matter, either computed by the
//! rule engine or entered by hand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of legal deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineType {
    /// Response to an examiner's office action
    #[serde(rename = "office_action")]
    OfficeAction,
    /// Statement of use for an intent-to-use application
    #[serde(rename = "statement_of_use")]
    StatementOfUse,
    /// Section 8 declaration of use
    #[serde(rename = "section_8")]
    Section8,
    /// Combined Section 8 & 15 declaration
    #[serde(rename = "section_8_15")]
    Section8And15,
    /// Section 9 renewal
    #[serde(rename = "section_9")]
    Section9,
    /// Close of the opposition period
    #[serde(rename = "opposition")]
    Opposition,
    /// Answer to a notice of opposition
    #[serde(rename = "response_to_opposition")]
    ResponseToOpposition,
    /// Any other TTAB-scheduled deadline
    #[serde(rename = "ttab_deadline")]
    TtabDeadline,
}

impl DeadlineType {
    /// All deadline types
    pub const ALL: [Self; 8] = [
        Self::OfficeAction,
        Self::StatementOfUse,
        Self::Section8,
        Self::Section8And15,
        Self::Section9,
        Self::Opposition,
        Self::ResponseToOpposition,
        Self::TtabDeadline,
    ];

    /// Stable snake_case code used in docket files
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OfficeAction => "office_action",
            Self::StatementOfUse => "statement_of_use",
            Self::Section8 => "section_8",
            Self::Section8And15 => "section_8_15",
            Self::Section9 => "section_9",
            Self::Opposition => "opposition",
            Self::ResponseToOpposition => "response_to_opposition",
            Self::TtabDeadline => "ttab_deadline",
        }
    }

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OfficeAction => "Office Action Response",
            Self::StatementOfUse => "Statement of Use",
            Self::Section8 => "Section 8 Declaration",
            Self::Section8And15 => "Section 8 & 15 Declaration",
            Self::Section9 => "Section 9 Renewal",
            Self::Opposition => "Opposition Period",
            Self::ResponseToOpposition => "Response to Opposition",
            Self::TtabDeadline => "TTAB Deadline",
        }
    }

    /// Whether this is a post-registration maintenance filing
    #[must_use]
    pub const fn is_maintenance(self) -> bool {
        matches!(self, Self::Section8 | Self::Section8And15 | Self::Section9)
    }
}

impl std::fmt::Display for DeadlineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for DeadlineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.code() == normalized)
            .ok_or_else(|| format!("Invalid deadline type: {s}"))
    }
}

/// Deadline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineStatus {
    /// Still to be met
    #[default]
    Open,
    /// Filed or otherwise satisfied
    Completed,
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for DeadlineStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "completed" | "complete" | "done" => Ok(Self::Completed),
            _ => Err(format!("Invalid status: {s}. Use: open, completed")),
        }
    }
}

/// A due-date obligation on a matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    /// Matter this deadline belongs to
    pub matter_id: String,

    /// What kind of deadline this is
    #[serde(rename = "type")]
    pub deadline_type: DeadlineType,

    /// When it is due
    pub due_date: NaiveDate,

    /// Open or completed
    #[serde(default)]
    pub status: DeadlineStatus,

    /// Whether an extension has been filed against it
    #[serde(default)]
    pub is_extended: bool,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Deadline {
    /// Create an open deadline with no extension or note
    #[must_use]
    pub fn new(matter_id: impl Into<String>, deadline_type: DeadlineType, due_date: NaiveDate) -> Self {
        Self {
            matter_id: matter_id.into(),
            deadline_type,
            due_date,
            status: DeadlineStatus::Open,
            is_extended: false,
            note: None,
        }
    }

    /// Attach a note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Mark as extended
    #[must_use]
    pub const fn extended(mut self) -> Self {
        self.is_extended = true;
        self
    }

    /// Mark the deadline as completed
    pub const fn complete(&mut self) {
        self.status = DeadlineStatus::Completed;
    }

    /// Whether the deadline is still open
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == DeadlineStatus::Open
    }
}
