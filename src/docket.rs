//! Docket file loading
//!
//! A docket file is TOML with `[[matter]]` and `[[deadline]]` tables. Every
//! date and code is parsed at load time, so a docket that loads is one the
//! engine can compute over.
//!
//! Dates may be quoted `YYYY-MM-DD` strings or bare TOML date literals
//! (`filing_date = 2019-03-01`). A literal with a time of day is rejected.
//!
//! ```toml
//! [[matter]]
//! id = "M-1"
//! mark = "ACME"
//! filing_date = "2019-03-01"
//! filing_basis = "1(a)"
//! status_code = 800
//! reg_date = "2020-01-15"
//!
//! [[deadline]]
//! matter_id = "M-1"
//! type = "ttab_deadline"
//! due_date = "2024-09-03"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{Deadline, Matter, MatterError, StatusCode};
use crate::parser::{
    ParseError, parse_date, parse_deadline_type, parse_filing_basis, parse_optional_date,
    parse_status,
};

/// Errors raised while loading a docket
#[derive(Debug, Error)]
pub enum DocketError {
    /// The file could not be read
    #[error("failed to read docket {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for a docket
    #[error("invalid docket file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A matter field failed to parse
    #[error("matter {id}: {source}")]
    MatterField {
        /// Matter identifier
        id: String,
        /// Parse failure
        source: ParseError,
    },

    /// A matter violates its invariants
    #[error("matter {id}: {source}")]
    InvalidMatter {
        /// Matter identifier
        id: String,
        /// Invariant violation
        source: MatterError,
    },

    /// Two matters share an identifier
    #[error("duplicate matter id {0}")]
    DuplicateMatter(String),

    /// A deadline field failed to parse
    #[error("deadline #{index} ({matter_id}): {source}")]
    DeadlineField {
        /// Position of the deadline in the file, from 1
        index: usize,
        /// Matter it claims to belong to
        matter_id: String,
        /// Parse failure
        source: ParseError,
    },

    /// A deadline names a matter not in the file
    #[error("deadline #{index} refers to unknown matter {matter_id}")]
    UnknownMatter {
        /// Position of the deadline in the file, from 1
        index: usize,
        /// Matter identifier that was not found
        matter_id: String,
    },
}

/// On-disk docket layout
#[derive(Debug, Default, Deserialize)]
pub struct DocketFile {
    /// Matter records
    #[serde(default, rename = "matter")]
    pub matters: Vec<MatterEntry>,

    /// Stored deadline records
    #[serde(default, rename = "deadline")]
    pub deadlines: Vec<DeadlineEntry>,
}

/// A date field as written: quoted text or a native TOML date
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "toml::Value")]
pub struct DateText(String);

impl DateText {
    fn text(&self) -> &str {
        &self.0
    }
}

impl From<toml::Value> for DateText {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(text) => Self(text),
            // Native dates render as YYYY-MM-DD; anything else fails to parse later
            other => Self(other.to_string()),
        }
    }
}

/// Matter record as written in the file
#[derive(Debug, Clone, Deserialize)]
pub struct MatterEntry {
    /// Docket identifier
    pub id: String,
    /// The mark
    #[serde(default)]
    pub mark: String,
    /// Filing date (YYYY-MM-DD)
    pub filing_date: DateText,
    /// Filing basis code, e.g. `1(b)`
    pub filing_basis: String,
    /// Registry status code
    pub status_code: u16,
    /// Registration date
    #[serde(default)]
    pub reg_date: Option<DateText>,
    /// Office action mailing date
    #[serde(default)]
    pub office_action_date: Option<DateText>,
    /// Extension of time filed for the office action
    #[serde(default)]
    pub office_action_extension_filed: bool,
    /// Publication date
    #[serde(default)]
    pub publication_date: Option<DateText>,
    /// Opposition extension days granted
    #[serde(default)]
    pub opposition_extension_days: u32,
    /// Notice of Allowance date
    #[serde(default)]
    pub noa_date: Option<DateText>,
    /// Statement-of-use extensions filed
    #[serde(default)]
    pub sou_extensions_used: u32,
}

/// Deadline record as written in the file
#[derive(Debug, Clone, Deserialize)]
pub struct DeadlineEntry {
    /// Owning matter
    pub matter_id: String,
    /// Deadline type code
    #[serde(rename = "type")]
    pub deadline_type: String,
    /// Due date (YYYY-MM-DD)
    pub due_date: DateText,
    /// `open` or `completed`
    #[serde(default = "default_status")]
    pub status: String,
    /// Extension filed
    #[serde(default)]
    pub is_extended: bool,
    /// Free-text note
    #[serde(default)]
    pub note: Option<String>,
}

fn default_status() -> String {
    "open".to_string()
}

impl MatterEntry {
    /// Convert to a validated [`Matter`]
    pub fn to_matter(&self) -> Result<Matter, DocketError> {
        let field = |source| DocketError::MatterField {
            id: self.id.clone(),
            source,
        };

        let optional = |value: Option<&DateText>| {
            parse_optional_date(value.map(DateText::text)).map_err(field)
        };

        let filing_date = parse_date(self.filing_date.text()).map_err(field)?;
        let filing_basis = parse_filing_basis(&self.filing_basis).map_err(field)?;

        let mut matter = Matter::new(
            self.id.clone(),
            self.mark.clone(),
            filing_date,
            filing_basis,
            StatusCode(self.status_code),
        );

        if let Some(reg_date) = optional(self.reg_date.as_ref())? {
            matter.set_registration(reg_date).map_err(|source| DocketError::InvalidMatter {
                id: self.id.clone(),
                source,
            })?;
        }

        if let Some(issued) = optional(self.office_action_date.as_ref())? {
            matter = matter.with_office_action(issued, self.office_action_extension_filed);
        }

        if let Some(published) = optional(self.publication_date.as_ref())? {
            matter = matter.with_publication(published, self.opposition_extension_days);
        }

        if let Some(noa) = optional(self.noa_date.as_ref())? {
            matter = matter.with_allowance(noa, self.sou_extensions_used);
        }

        Ok(matter)
    }
}

impl DeadlineEntry {
    /// Convert to a [`Deadline`]; `index` is the record's 1-based position
    pub fn to_deadline(&self, index: usize) -> Result<Deadline, DocketError> {
        let field = |source| DocketError::DeadlineField {
            index,
            matter_id: self.matter_id.clone(),
            source,
        };

        Ok(Deadline {
            matter_id: self.matter_id.clone(),
            deadline_type: parse_deadline_type(&self.deadline_type).map_err(field)?,
            due_date: parse_date(self.due_date.text()).map_err(field)?,
            status: parse_status(&self.status).map_err(field)?,
            is_extended: self.is_extended,
            note: self.note.clone(),
        })
    }
}

/// A loaded, validated docket
#[derive(Debug, Clone, Default)]
pub struct Docket {
    /// Matters in file order
    pub matters: Vec<Matter>,
    /// Stored deadlines in file order
    pub deadlines: Vec<Deadline>,
}

impl Docket {
    /// Load and validate a docket file
    pub fn load(path: &Path) -> Result<Self, DocketError> {
        let content = fs::read_to_string(path).map_err(|source| DocketError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading docket from {}", path.display());
        Self::parse(&content)
    }

    /// Parse and validate docket TOML
    pub fn parse(content: &str) -> Result<Self, DocketError> {
        let file: DocketFile = toml::from_str(content)?;
        Self::from_file(&file)
    }

    /// Validate a deserialized docket file
    pub fn from_file(file: &DocketFile) -> Result<Self, DocketError> {
        let mut seen = HashSet::new();
        let mut matters = Vec::with_capacity(file.matters.len());
        for entry in &file.matters {
            if !seen.insert(entry.id.as_str()) {
                return Err(DocketError::DuplicateMatter(entry.id.clone()));
            }
            matters.push(entry.to_matter()?);
        }

        let mut deadlines = Vec::with_capacity(file.deadlines.len());
        for (i, entry) in file.deadlines.iter().enumerate() {
            let index = i + 1;
            let Some(matter) = matters.iter().find(|m| m.id == entry.matter_id) else {
                return Err(DocketError::UnknownMatter {
                    index,
                    matter_id: entry.matter_id.clone(),
                });
            };
            let deadline = entry.to_deadline(index)?;
            if matter.is_registered() && deadline.deadline_type.is_maintenance() {
                log::warn!(
                    "deadline #{index}: stored {} for registered matter {} will appear alongside the computed one",
                    deadline.deadline_type,
                    matter.id
                );
            }
            deadlines.push(deadline);
        }

        log::debug!("docket loaded: {} matter(s), {} deadline(s)", matters.len(), deadlines.len());
        Ok(Self { matters, deadlines })
    }

    /// Look up a matter by identifier
    #[must_use]
    pub fn matter(&self, id: &str) -> Option<&Matter> {
        self.matters.iter().find(|m| m.id == id)
    }

    /// Stored deadlines for one matter
    #[must_use]
    pub fn deadlines_for(&self, matter_id: &str) -> Vec<Deadline> {
        self.deadlines.iter().filter(|d| d.matter_id == matter_id).cloned().collect()
    }
}
