//! Urgency classification
//!
//! Maps days remaining and status to an [`Urgency`] bucket, and builds the
//! display annotation shown next to stored deadlines.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::models::{DeadlineStatus, Urgency, UrgencyThresholds};

/// Classify with the default 7/30-day thresholds.
///
/// Completed deadlines are always [`Urgency::Completed`]. Negative day
/// counts (overdue) fall in the urgent bucket.
#[must_use]
pub fn classify_urgency(days_remaining: i64, status: DeadlineStatus) -> Urgency {
    classify_urgency_with(&UrgencyThresholds::default(), days_remaining, status)
}

/// Classify with explicit thresholds
#[must_use]
pub const fn classify_urgency_with(
    thresholds: &UrgencyThresholds,
    days_remaining: i64,
    status: DeadlineStatus,
) -> Urgency {
    match status {
        DeadlineStatus::Completed => Urgency::Completed,
        DeadlineStatus::Open if days_remaining <= thresholds.urgent_within_days => Urgency::Urgent,
        DeadlineStatus::Open if days_remaining <= thresholds.warning_within_days => {
            Urgency::Warning
        },
        DeadlineStatus::Open => Urgency::Normal,
    }
}

/// Signed whole days from `as_of` to `due` (negative when overdue)
#[must_use]
pub fn days_until(due: NaiveDate, as_of: NaiveDate) -> i64 {
    (due - as_of).num_days()
}

/// Whole days remaining, floored at zero
#[must_use]
pub fn days_remaining(due: NaiveDate, as_of: NaiveDate) -> i64 {
    days_until(due, as_of).max(0)
}

/// Display annotation for a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineAnnotation {
    /// Due date as `MMM d, yyyy` with an open-deadline countdown suffix
    pub formatted: String,
    /// Urgency bucket
    pub urgency: Urgency,
    /// Signed days remaining (negative when overdue)
    pub days_remaining: i64,
}

/// Annotate a due date with urgency and a formatted countdown
#[must_use]
pub fn annotate(
    due: NaiveDate,
    status: DeadlineStatus,
    as_of: NaiveDate,
    thresholds: &UrgencyThresholds,
) -> DeadlineAnnotation {
    let days = days_until(due, as_of);
    let urgency = classify_urgency_with(thresholds, days, status);

    let mut formatted = due.format("%b %-d, %Y").to_string();
    if status == DeadlineStatus::Open {
        match days {
            d if d < 0 => formatted.push_str(&format!(" ({} days overdue)", d.unsigned_abs())),
            0 => formatted.push_str(" (Due today!)"),
            1 => formatted.push_str(" (Tomorrow)"),
            d if d <= 7 => formatted.push_str(&format!(" ({d} days)")),
            _ => {},
        }
    }

    DeadlineAnnotation {
        formatted,
        urgency,
        days_remaining: days,
    }
}
