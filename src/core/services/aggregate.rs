//! Aggregate docket view
//!
//! Folds a matter and its stored deadlines into one ordered list, and
//! summarizes a whole docket for the dashboard.
//!
//! Maintenance deadlines are computed on read and never persisted, so the
//! aggregate does not try to deduplicate them against stored records.

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::add_days;
use super::engine::maintenance_deadlines;
use super::urgency::{DeadlineAnnotation, annotate};
use crate::core::models::{Deadline, DeadlineStatus, DeadlineType, Matter, UrgencyThresholds};

/// Window used for the dashboard's "urgent deadlines" count
pub const URGENT_WINDOW_DAYS: u64 = 30;

/// Where a docket entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// Computed from the registration date on read
    Synthesized,
    /// A stored deadline record
    Stored,
}

/// One line of a matter's docket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocketEntry {
    /// Owning matter
    pub matter_id: String,
    /// Deadline kind
    #[serde(rename = "type")]
    pub deadline_type: DeadlineType,
    /// Human label
    pub label: &'static str,
    /// Synthesized or stored
    pub source: EntrySource,
    /// Opening of the filing window, for windowed deadlines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start: Option<NaiveDate>,
    /// Operative due date
    pub due_date: NaiveDate,
    /// End of the surcharge grace period, where one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period_end: Option<NaiveDate>,
    /// Open or completed
    pub status: DeadlineStatus,
    /// Whether an extension was filed
    pub is_extended: bool,
    /// Free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Urgency and countdown
    #[serde(flatten)]
    pub annotation: DeadlineAnnotation,
}

/// Every deadline for `matter`: synthesized maintenance deadlines first
/// (Section 8 & 15, then Section 9) when registered, then the matter's stored
/// deadlines in due-date order.
///
/// Records in `stored` that belong to other matters are ignored.
#[must_use]
pub fn compute_docket(
    matter: &Matter,
    stored: &[Deadline],
    as_of: NaiveDate,
    thresholds: &UrgencyThresholds,
) -> Vec<DocketEntry> {
    let mut entries = Vec::new();

    if let Some(reg_date) = matter.registration_date() {
        let maintenance = maintenance_deadlines(reg_date);
        let open = DeadlineStatus::Open;

        entries.push(DocketEntry {
            matter_id: matter.id.clone(),
            deadline_type: DeadlineType::Section8And15,
            label: DeadlineType::Section8And15.label(),
            source: EntrySource::Synthesized,
            window_start: Some(maintenance.section_8_15.window_start),
            due_date: maintenance.section_8_15.window_end,
            grace_period_end: Some(maintenance.section_8_15.grace_period_end),
            status: open,
            is_extended: false,
            note: None,
            annotation: annotate(maintenance.section_8_15.window_end, open, as_of, thresholds),
        });

        entries.push(DocketEntry {
            matter_id: matter.id.clone(),
            deadline_type: DeadlineType::Section9,
            label: DeadlineType::Section9.label(),
            source: EntrySource::Synthesized,
            window_start: None,
            due_date: maintenance.section_9.due_date,
            grace_period_end: Some(maintenance.section_9.grace_period_end),
            status: open,
            is_extended: false,
            note: None,
            annotation: annotate(maintenance.section_9.due_date, open, as_of, thresholds),
        });
    }

    let mut own: Vec<&Deadline> = stored.iter().filter(|d| d.matter_id == matter.id).collect();
    own.sort_by_key(|d| d.due_date);

    entries.extend(own.into_iter().map(|d| DocketEntry {
        matter_id: d.matter_id.clone(),
        deadline_type: d.deadline_type,
        label: d.deadline_type.label(),
        source: EntrySource::Stored,
        window_start: None,
        due_date: d.due_date,
        grace_period_end: None,
        status: d.status,
        is_extended: d.is_extended,
        note: d.note.clone(),
        annotation: annotate(d.due_date, d.status, as_of, thresholds),
    }));

    entries
}

/// Open deadlines due on or before `as_of + within_days` (overdue included),
/// earliest first
#[must_use]
pub fn due_within<'a>(
    deadlines: &'a [Deadline],
    as_of: NaiveDate,
    within_days: u64,
) -> Vec<&'a Deadline> {
    let horizon = add_days(as_of, within_days);
    let mut due: Vec<&Deadline> =
        deadlines.iter().filter(|d| d.is_open() && d.due_date <= horizon).collect();
    due.sort_by_key(|d| d.due_date);
    due
}

/// Headline counts for a docket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DocketSummary {
    /// Matters on docket
    pub total_matters: usize,
    /// Matters with a registration date
    pub registered_marks: usize,
    /// Unregistered matters not yet published
    pub pending_applications: usize,
    /// Open deadlines due within 30 days, overdue included
    pub urgent_deadlines: usize,
}

/// Summarize a docket as of a date
#[must_use]
pub fn summarize(matters: &[Matter], deadlines: &[Deadline], as_of: NaiveDate) -> DocketSummary {
    DocketSummary {
        total_matters: matters.len(),
        registered_marks: matters.iter().filter(|m| m.is_registered()).count(),
        pending_applications: matters
            .iter()
            .filter(|m| !m.is_registered() && m.status_code.is_pre_publication())
            .count(),
        urgent_deadlines: due_within(deadlines, as_of, URGENT_WINDOW_DAYS).len(),
    }
}
