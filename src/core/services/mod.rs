//! Business logic services
//!
//! Pure rule logic that operates on domain models. No service reads the
//! system clock: the evaluation date is always an argument.
//!
//! - [`calendar`] - Federal holidays and business-day rolling
//! - [`classifier`] - Madrid Protocol branch selection
//! - [`engine`] - Deadline rules (office action, maintenance, SOU, opposition)
//! - [`urgency`] - Urgency buckets and countdown annotations
//! - [`aggregate`] - Per-matter docket and dashboard summary

pub mod aggregate;
pub mod calendar;
pub mod classifier;
pub mod engine;
pub mod urgency;

pub use aggregate::{
    DocketEntry, DocketSummary, EntrySource, URGENT_WINDOW_DAYS, compute_docket, due_within,
    summarize,
};
pub use calendar::{
    FederalHoliday, federal_holidays, holiday_calendar, is_business_day, is_federal_holiday,
    next_business_day,
};
pub use classifier::{is_madrid_protocol, is_madrid_protocol_code};
pub use engine::{
    MAX_SOU_EXTENSIONS, MaintenanceDeadlines, OfficeActionDeadline, OppositionDeadline,
    ResponseRule, Section8Window, Section9Renewal, StatementOfUseDeadline, maintenance_deadlines,
    maintenance_for, office_action_deadline, office_action_for, opposition_deadline,
    opposition_for, statement_of_use_deadline, statement_of_use_for,
};
pub use urgency::{
    DeadlineAnnotation, annotate, classify_urgency, classify_urgency_with, days_remaining,
    days_until,
};
