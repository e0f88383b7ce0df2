//! Output formatting for human and JSON modes
//!
//! Every command builds a report struct that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    Computation, Deadline, DeadlineStatus, FilingBasis, StatusCategory, Urgency,
};
use crate::core::services::{
    DocketEntry, DocketSummary, FederalHoliday, MaintenanceDeadlines, OfficeActionDeadline,
    OppositionDeadline, ResponseRule, StatementOfUseDeadline,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A command result that can be printed in either mode
pub trait Report: Serialize {
    /// Print the human-readable form
    fn render_human(&self);

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Format a date as `Mon d, yyyy`
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn urgency_label(urgency: Urgency) -> colored::ColoredString {
    match urgency {
        Urgency::Urgent => "URGENT".red().bold(),
        Urgency::Warning => "DUE SOON".yellow(),
        Urgency::Normal => "normal".green(),
        Urgency::Completed => "completed".dimmed(),
    }
}

fn rule_label(rule: ResponseRule) -> &'static str {
    match rule {
        ResponseRule::Madrid => "Madrid Protocol (6 months, no extension)",
        ResponseRule::ThreeMonth => "3-month rule (extendable to 6 months)",
        ResponseRule::LegacySixMonth => "legacy 6-month rule",
    }
}

/// Office-action deadline result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OfficeActionReport {
    /// Office action mailing date
    pub issue_date: NaiveDate,
    /// Filing basis used for rule selection
    pub filing_basis: FilingBasis,
    /// Computed deadline
    #[serde(flatten)]
    pub result: OfficeActionDeadline,
}

impl Report for OfficeActionReport {
    fn render_human(&self) {
        let r = &self.result;
        println!("Office action issued {} ({})", long_date(self.issue_date), self.filing_basis);
        println!("  Rule:           {}", rule_label(r.rule));
        println!("  Response due:   {}", long_date(r.deadline).bold());
        println!("  Days remaining: {}", r.days_remaining);
        if r.is_extendable {
            println!("  Extension:      available (to {})", long_date(r.max_deadline));
        } else {
            println!("  Extension:      not available");
        }
    }
}

/// Maintenance deadlines result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaintenanceReport {
    /// Registration date
    pub registration_date: NaiveDate,
    /// Computed windows
    #[serde(flatten)]
    pub result: MaintenanceDeadlines,
}

impl Report for MaintenanceReport {
    fn render_human(&self) {
        let s8 = &self.result.section_8_15;
        let s9 = &self.result.section_9;
        println!("Registered {}", long_date(self.registration_date));
        println!("  Section 8 & 15 Declaration");
        println!("    Window:       {} - {}", long_date(s8.window_start), long_date(s8.window_end));
        println!("    Grace ends:   {}", long_date(s8.grace_period_end));
        println!("  Section 9 Renewal");
        println!("    Due:          {}", long_date(s9.due_date));
        println!("    Grace ends:   {}", long_date(s9.grace_period_end));
    }
}

/// Statement-of-use result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatementOfUseReport {
    /// Notice of Allowance date
    pub noa_date: NaiveDate,
    /// Computed deadline
    #[serde(flatten)]
    pub result: StatementOfUseDeadline,
}

impl Report for StatementOfUseReport {
    fn render_human(&self) {
        let r = &self.result;
        println!("Notice of Allowance {}", long_date(self.noa_date));
        println!("  Statement of use due: {}", long_date(r.deadline).bold());
        println!("  Days remaining:       {}", r.days_remaining);
        println!("  Extensions:           {} used, {} remaining", r.extensions_used, r.extensions_remaining);
        println!("  Absolute deadline:    {}", long_date(r.max_deadline));
    }
}

/// Opposition-period result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OppositionReport {
    /// Publication date
    pub publication_date: NaiveDate,
    /// Computed deadline
    #[serde(flatten)]
    pub result: OppositionDeadline,
}

impl Report for OppositionReport {
    fn render_human(&self) {
        let r = &self.result;
        println!("Published {}", long_date(self.publication_date));
        println!("  Opposition period closes: {}", long_date(r.deadline).bold());
        if r.extension_days > 0 {
            println!("  Includes {} extension day(s)", r.extension_days);
        }
        println!("  Days remaining:           {}", r.days_remaining);
    }
}

/// Urgency classification result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UrgencyReport {
    /// Input days remaining
    pub days_remaining: i64,
    /// Input status
    pub status: DeadlineStatus,
    /// Classification
    pub urgency: Urgency,
}

impl Report for UrgencyReport {
    fn render_human(&self) {
        println!("{}", self.urgency);
    }
}

/// One holiday line
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HolidayInfo {
    /// Holiday
    pub holiday: FederalHoliday,
    /// Official name
    pub name: &'static str,
    /// Observed date
    pub date: NaiveDate,
}

/// Federal holidays for a year
#[derive(Debug, Serialize)]
pub struct HolidayReport {
    /// Calendar year
    pub year: i32,
    /// Observed holidays in calendar order
    pub holidays: Vec<HolidayInfo>,
}

impl Report for HolidayReport {
    fn render_human(&self) {
        println!("Federal holidays {}:\n", self.year);
        for h in &self.holidays {
            println!("  {}  {:<3}  {}", h.date, h.date.weekday(), h.name);
        }
    }
}

/// Business-day check result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BusinessDayReport {
    /// Date asked about
    pub date: NaiveDate,
    /// Whether it is a business day
    pub is_business_day: bool,
    /// Whether it is an observed federal holiday
    pub is_federal_holiday: bool,
    /// Date itself or the next business day
    pub next_business_day: NaiveDate,
}

impl Report for BusinessDayReport {
    fn render_human(&self) {
        if self.is_business_day {
            println!("{} ({}) is a business day", self.date, self.date.weekday());
        } else {
            let reason = if self.is_federal_holiday { "federal holiday" } else { "weekend" };
            println!("{} ({}) is not a business day: {reason}", self.date, self.date.weekday());
            println!("Next business day: {} ({})", self.next_business_day, self.next_business_day.weekday());
        }
    }
}

/// Registry status code lookup
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Numeric code
    pub code: u16,
    /// Label
    pub label: String,
    /// Category
    pub category: StatusCategory,
    /// Whether an office action response is pending
    pub office_action_pending: bool,
}

impl Report for StatusReport {
    fn render_human(&self) {
        println!("{} - {} [{}]", self.code, self.label, self.category);
        if self.office_action_pending {
            println!("Office action response pending");
        }
    }
}

/// Full docket for one matter
#[derive(Debug, Serialize)]
pub struct MatterDocketReport {
    /// Matter identifier
    pub matter_id: String,
    /// The mark
    pub mark: String,
    /// Filing basis
    pub filing_basis: FilingBasis,
    /// Evaluation date
    pub as_of: NaiveDate,
    /// Office-action response deadline
    pub office_action: Computation<OfficeActionDeadline>,
    /// Statement-of-use deadline
    pub statement_of_use: Computation<StatementOfUseDeadline>,
    /// Opposition-period deadline
    pub opposition: Computation<OppositionDeadline>,
    /// Maintenance and stored deadlines
    pub entries: Vec<DocketEntry>,
}

fn render_computation<T>(label: &str, computation: &Computation<T>, line: impl Fn(&T) -> String) {
    match computation {
        Computation::Computed(value) => println!("  {label:<20} {}", line(value)),
        Computation::MissingPrerequisite(missing) => {
            println!("  {label:<20} {}", format!("not computable: no {missing} on file").red());
        },
        Computation::NotApplicable => {},
    }
}

impl Report for MatterDocketReport {
    fn render_human(&self) {
        println!("{} {} ({})", self.matter_id.bold(), self.mark, self.filing_basis.label());
        println!("  Basis: {} - {}", self.filing_basis, self.filing_basis.description());

        render_computation("Office action", &self.office_action, |oa| {
            format!("{} ({} days)", long_date(oa.deadline), oa.days_remaining)
        });
        render_computation("Statement of use", &self.statement_of_use, |sou| {
            format!("{} ({} extensions left)", long_date(sou.deadline), sou.extensions_remaining)
        });
        render_computation("Opposition", &self.opposition, |opp| {
            format!("{} ({} days)", long_date(opp.deadline), opp.days_remaining)
        });

        if self.entries.is_empty() {
            println!("  No docketed deadlines.");
            return;
        }
        for e in &self.entries {
            println!("  [{}] {} - {}", urgency_label(e.annotation.urgency), e.label, e.annotation.formatted);
            if let Some(start) = e.window_start {
                println!("          window opens {}", long_date(start));
            }
            if let Some(grace) = e.grace_period_end {
                println!("          grace period ends {}", long_date(grace));
            }
            if let Some(note) = &e.note {
                println!("          {note}");
            }
        }
    }
}

/// Whole-docket listing
#[derive(Debug, Serialize)]
pub struct DocketReport {
    /// Per-matter dockets
    pub matters: Vec<MatterDocketReport>,
}

impl Report for DocketReport {
    fn render_human(&self) {
        if self.matters.is_empty() {
            println!("No matters on docket.");
            return;
        }
        for (i, matter) in self.matters.iter().enumerate() {
            if i > 0 {
                println!();
            }
            matter.render_human();
        }
    }
}

/// Dashboard summary
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// Evaluation date
    pub as_of: NaiveDate,
    /// Headline counts
    #[serde(flatten)]
    pub summary: DocketSummary,
    /// Open deadlines due within 30 days, earliest first
    pub urgent: Vec<Deadline>,
}

impl Report for SummaryReport {
    fn render_human(&self) {
        println!("Docket as of {}\n", long_date(self.as_of));
        println!("  Total marks:          {}", self.summary.total_matters);
        println!("  Registered:           {}", self.summary.registered_marks);
        println!("  Pending applications: {}", self.summary.pending_applications);
        println!("  Urgent deadlines:     {}", self.summary.urgent_deadlines);
        if !self.urgent.is_empty() {
            println!();
            for d in &self.urgent {
                println!("  {}  {:<12} {}", d.due_date, d.matter_id, d.deadline_type.label());
            }
        }
    }
}

/// Config initialization result
#[derive(Debug, Serialize)]
pub struct InitReport {
    /// Config file location
    pub path: PathBuf,
    /// Whether a file was written
    pub created: bool,
}

impl Report for InitReport {
    fn render_human(&self) {
        if self.created {
            println!("Created {}", self.path.display());
        } else {
            println!("Already initialized ({} exists).", self.path.display());
            println!("Use --force to overwrite.");
        }
    }
}

/// Version information
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VersionReport {
    /// Crate version
    pub version: &'static str,
}

impl Report for VersionReport {
    fn render_human(&self) {
        println!("markflow v{}", self.version);
    }
}
