//! Deadline rule engine
//!
//! Derives legally significant dates from statutory timing rules. Every
//! function is pure: the evaluation date (`as_of`) is always passed in, and
//! every returned due date has been rolled to the next business day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::calendar::{add_days, add_months, add_years, next_business_day};
use super::classifier::is_madrid_protocol;
use super::urgency::days_remaining;
use crate::core::models::{
    Computation, FilingBasis, Matter, Prerequisite, StatusCategory, StatusCode,
};

/// Office actions issued after this date get the 3-month response period
const THREE_MONTH_RULE_EFFECTIVE: (i32, u32, u32) = (2022, 12, 3);

/// Statement-of-use extensions the statute allows
pub const MAX_SOU_EXTENSIONS: u32 = 5;

/// Months per statement-of-use period (initial and each extension)
const SOU_PERIOD_MONTHS: u32 = 6;

/// Days in the standard opposition period
const OPPOSITION_PERIOD_DAYS: u64 = 30;

/// Which response-period regime governed an office action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseRule {
    /// 66(a): fixed six months, no extension
    Madrid,
    /// Issued after 2022-12-03: three months, one three-month extension
    ThreeMonth,
    /// Issued on or before 2022-12-03: fixed six months
    LegacySixMonth,
}

/// Office-action response deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfficeActionDeadline {
    /// Current due date
    pub deadline: NaiveDate,
    /// Whether an extension can still be filed
    pub is_extendable: bool,
    /// Latest date reachable with every available extension
    pub max_deadline: NaiveDate,
    /// Whole days until `deadline`, never negative
    pub days_remaining: i64,
    /// Whether the Madrid regime applied
    pub is_madrid: bool,
    /// Regime that produced the deadline
    pub rule: ResponseRule,
}

/// Combined Section 8 & 15 declaration window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section8Window {
    /// Fifth anniversary of registration
    pub window_start: NaiveDate,
    /// Sixth anniversary of registration
    pub window_end: NaiveDate,
    /// End of the six-month surcharge grace period
    pub grace_period_end: NaiveDate,
}

/// Section 9 renewal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section9Renewal {
    /// Tenth anniversary of registration
    pub due_date: NaiveDate,
    /// End of the six-month grace period
    pub grace_period_end: NaiveDate,
}

/// Post-registration maintenance deadlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaintenanceDeadlines {
    /// Section 8 & 15 declaration
    pub section_8_15: Section8Window,
    /// Section 9 renewal
    pub section_9: Section9Renewal,
}

/// Statement-of-use deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatementOfUseDeadline {
    /// Current due date
    pub deadline: NaiveDate,
    /// Extensions counted, after clamping to the statutory cap
    pub extensions_used: u32,
    /// Extensions still available
    pub extensions_remaining: u32,
    /// Statutory ceiling: 36 months after allowance
    pub max_deadline: NaiveDate,
    /// Whole days until `deadline`, never negative
    pub days_remaining: i64,
}

/// Close of the opposition period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OppositionDeadline {
    /// Last day to oppose
    pub deadline: NaiveDate,
    /// Extension days included in `deadline`
    pub extension_days: u64,
    /// Whole days until `deadline`, never negative
    pub days_remaining: i64,
}

fn uses_three_month_rule(issue: NaiveDate) -> bool {
    (issue.year(), issue.month(), issue.day()) > THREE_MONTH_RULE_EFFECTIVE
}

/// Response deadline for an office action mailed on `issue`.
///
/// Madrid Protocol matters always get six months with no extension. Other
/// matters follow the 3-month rule for actions issued after 2022-12-03 and
/// the legacy fixed 6-month rule otherwise.
#[must_use]
pub fn office_action_deadline(
    issue: NaiveDate,
    basis: FilingBasis,
    extension_filed: bool,
    as_of: NaiveDate,
) -> OfficeActionDeadline {
    if is_madrid_protocol(basis) {
        log::debug!("office action {issue}: Madrid Protocol six-month rule");
        let deadline = next_business_day(add_months(issue, 6));
        return OfficeActionDeadline {
            deadline,
            is_extendable: false,
            max_deadline: deadline,
            days_remaining: days_remaining(deadline, as_of),
            is_madrid: true,
            rule: ResponseRule::Madrid,
        };
    }

    if uses_three_month_rule(issue) {
        log::debug!("office action {issue}: three-month rule, extension filed: {extension_filed}");
        let months = if extension_filed { 6 } else { 3 };
        let deadline = next_business_day(add_months(issue, months));
        OfficeActionDeadline {
            deadline,
            is_extendable: !extension_filed,
            max_deadline: next_business_day(add_months(issue, 6)),
            days_remaining: days_remaining(deadline, as_of),
            is_madrid: false,
            rule: ResponseRule::ThreeMonth,
        }
    } else {
        log::debug!("office action {issue}: legacy six-month rule");
        let deadline = next_business_day(add_months(issue, 6));
        OfficeActionDeadline {
            deadline,
            is_extendable: false,
            max_deadline: deadline,
            days_remaining: days_remaining(deadline, as_of),
            is_madrid: false,
            rule: ResponseRule::LegacySixMonth,
        }
    }
}

/// Section 8 & 15 and Section 9 dates for a registration
#[must_use]
pub fn maintenance_deadlines(reg_date: NaiveDate) -> MaintenanceDeadlines {
    let window_end = add_years(reg_date, 6);
    let renewal_due = add_years(reg_date, 10);

    MaintenanceDeadlines {
        section_8_15: Section8Window {
            window_start: next_business_day(add_years(reg_date, 5)),
            window_end: next_business_day(window_end),
            grace_period_end: next_business_day(add_months(window_end, 6)),
        },
        section_9: Section9Renewal {
            due_date: next_business_day(renewal_due),
            grace_period_end: next_business_day(add_months(renewal_due, 6)),
        },
    }
}

/// Statement-of-use deadline after `extensions_used` six-month extensions.
///
/// Counts above the statutory cap of five are treated as five.
#[must_use]
pub fn statement_of_use_deadline(
    noa_date: NaiveDate,
    extensions_used: u32,
    as_of: NaiveDate,
) -> StatementOfUseDeadline {
    let used = extensions_used.min(MAX_SOU_EXTENSIONS);
    let deadline = next_business_day(add_months(noa_date, SOU_PERIOD_MONTHS * (1 + used)));
    let max_deadline =
        next_business_day(add_months(noa_date, SOU_PERIOD_MONTHS * (1 + MAX_SOU_EXTENSIONS)));

    StatementOfUseDeadline {
        deadline,
        extensions_used: used,
        extensions_remaining: MAX_SOU_EXTENSIONS - used,
        max_deadline,
        days_remaining: days_remaining(deadline, as_of),
    }
}

/// Close of the opposition period: publication + 30 days + granted extension days.
///
/// Negative extension days count as zero.
#[must_use]
pub fn opposition_deadline(
    publication_date: NaiveDate,
    extension_days: i64,
    as_of: NaiveDate,
) -> OppositionDeadline {
    let extension_days = u64::try_from(extension_days).unwrap_or(0);
    let deadline = next_business_day(add_days(
        publication_date,
        OPPOSITION_PERIOD_DAYS.saturating_add(extension_days),
    ));

    OppositionDeadline {
        deadline,
        extension_days,
        days_remaining: days_remaining(deadline, as_of),
    }
}

// === Matter-level entry points ===

/// Office-action deadline for a matter whose status shows an action pending
#[must_use]
pub fn office_action_for(matter: &Matter, as_of: NaiveDate) -> Computation<OfficeActionDeadline> {
    if !matter.status_code.is_office_action_pending() {
        return Computation::NotApplicable;
    }
    matter.office_action_date.map_or(
        Computation::MissingPrerequisite(Prerequisite::OfficeActionDate),
        |issued| {
            Computation::Computed(office_action_deadline(
                issued,
                matter.filing_basis,
                matter.office_action_extension_filed,
                as_of,
            ))
        },
    )
}

/// Maintenance deadlines for a registered matter
#[must_use]
pub fn maintenance_for(matter: &Matter) -> Computation<MaintenanceDeadlines> {
    match matter.registration_date() {
        Some(reg_date) => Computation::Computed(maintenance_deadlines(reg_date)),
        None if is_registered_status(matter.status_code) => {
            Computation::MissingPrerequisite(Prerequisite::RegistrationDate)
        },
        None => Computation::NotApplicable,
    }
}

/// Statement-of-use deadline for an allowed intent-to-use application
#[must_use]
pub fn statement_of_use_for(
    matter: &Matter,
    as_of: NaiveDate,
) -> Computation<StatementOfUseDeadline> {
    if matter.filing_basis != FilingBasis::IntentToUse || matter.is_registered() {
        return Computation::NotApplicable;
    }
    // No allowance yet means the statement-of-use clock has not started
    matter.noa_date.map_or(Computation::NotApplicable, |noa| {
        Computation::Computed(statement_of_use_deadline(noa, matter.sou_extensions_used, as_of))
    })
}

/// Opposition-period deadline for a published, unregistered matter
#[must_use]
pub fn opposition_for(matter: &Matter, as_of: NaiveDate) -> Computation<OppositionDeadline> {
    if matter.is_registered() {
        return Computation::NotApplicable;
    }
    match matter.publication_date {
        Some(published) => Computation::Computed(opposition_deadline(
            published,
            i64::from(matter.opposition_extension_days),
            as_of,
        )),
        None if matter.status_code.category() == StatusCategory::Publication => {
            Computation::MissingPrerequisite(Prerequisite::PublicationDate)
        },
        None => Computation::NotApplicable,
    }
}

fn is_registered_status(code: StatusCode) -> bool {
    code.category() == StatusCategory::Registered
}
