//! Tests for the deadline rule engine

use chrono::NaiveDate;
use markflow::core::models::{Computation, FilingBasis, Matter, Prerequisite, StatusCode};
use markflow::core::services::{
    ResponseRule, maintenance_deadlines, maintenance_for, office_action_deadline,
    office_action_for, opposition_deadline, opposition_for, statement_of_use_deadline,
    statement_of_use_for,
};
use test_case::test_case;

use crate::common::date;

// =============================================================================
// OFFICE ACTION TESTS
// =============================================================================

#[test_case(date(2023, 1, 10), FilingBasis::IntentToUse, false, date(2023, 4, 10), ResponseRule::ThreeMonth ; "three month rule")]
#[test_case(date(2023, 1, 10), FilingBasis::IntentToUse, true, date(2023, 7, 10), ResponseRule::ThreeMonth ; "three month rule extended")]
#[test_case(date(2022, 12, 4), FilingBasis::UseInCommerce, false, date(2023, 3, 6), ResponseRule::ThreeMonth ; "day after cutover rolls off saturday")]
#[test_case(date(2022, 12, 3), FilingBasis::UseInCommerce, false, date(2023, 6, 5), ResponseRule::LegacySixMonth ; "cutover day is legacy")]
#[test_case(date(2023, 1, 10), FilingBasis::MadridProtocol, false, date(2023, 7, 10), ResponseRule::Madrid ; "madrid six months")]
#[test_case(date(2023, 1, 10), FilingBasis::MadridProtocol, true, date(2023, 7, 10), ResponseRule::Madrid ; "madrid ignores extension flag")]
#[test_case(date(2023, 1, 10), FilingBasis::ForeignRegistration, false, date(2023, 4, 10), ResponseRule::ThreeMonth ; "44e is domestic")]
fn test_office_action_deadline(
    issued: NaiveDate,
    basis: FilingBasis,
    extension_filed: bool,
    expected: NaiveDate,
    rule: ResponseRule,
) {
    let oa = office_action_deadline(issued, basis, extension_filed, issued);
    assert_eq!(oa.deadline, expected);
    assert_eq!(oa.rule, rule);
}

#[test]
fn test_office_action_extendable_only_before_extension() {
    let issued = date(2023, 1, 10);
    let open = office_action_deadline(issued, FilingBasis::IntentToUse, false, issued);
    assert!(open.is_extendable);
    assert_eq!(open.max_deadline, date(2023, 7, 10));
    assert_eq!(open.days_remaining, 90);

    let extended = office_action_deadline(issued, FilingBasis::IntentToUse, true, issued);
    assert!(!extended.is_extendable);
    assert_eq!(extended.max_deadline, extended.deadline);
}

#[test]
fn test_madrid_never_extendable() {
    let oa = office_action_deadline(date(2023, 1, 10), FilingBasis::MadridProtocol, false, date(2023, 1, 10));
    assert!(oa.is_madrid);
    assert!(!oa.is_extendable);
    assert_eq!(oa.max_deadline, oa.deadline);
}

#[test]
fn test_days_remaining_floors_at_zero() {
    let oa = office_action_deadline(date(2023, 1, 10), FilingBasis::IntentToUse, false, date(2023, 5, 1));
    assert_eq!(oa.days_remaining, 0);
}

// =============================================================================
// MAINTENANCE TESTS
// =============================================================================

#[test]
fn test_maintenance_deadlines() {
    let m = maintenance_deadlines(date(2020, 1, 15));
    assert_eq!(m.section_8_15.window_start, date(2025, 1, 15));
    assert_eq!(m.section_8_15.window_end, date(2026, 1, 15));
    assert_eq!(m.section_8_15.grace_period_end, date(2026, 7, 15));
    assert_eq!(m.section_9.due_date, date(2030, 1, 15));
    assert_eq!(m.section_9.grace_period_end, date(2030, 7, 15));
}

#[test]
fn test_maintenance_dates_roll_off_christmas() {
    let m = maintenance_deadlines(date(2018, 12, 25));
    assert_eq!(m.section_8_15.window_start, date(2023, 12, 26));
    assert_eq!(m.section_8_15.window_end, date(2024, 12, 26));
    assert_eq!(m.section_8_15.grace_period_end, date(2025, 6, 25));
    assert_eq!(m.section_9.due_date, date(2028, 12, 26));
    assert_eq!(m.section_9.grace_period_end, date(2029, 6, 25));
}

#[test]
fn test_maintenance_from_leap_day() {
    let m = maintenance_deadlines(date(2020, 2, 29));
    assert_eq!(m.section_8_15.window_start, date(2025, 2, 28));
    // Feb 28 2026 is a Saturday
    assert_eq!(m.section_8_15.window_end, date(2026, 3, 2));
    assert_eq!(m.section_8_15.grace_period_end, date(2026, 8, 28));
    assert_eq!(m.section_9.due_date, date(2030, 2, 28));
    assert_eq!(m.section_9.grace_period_end, date(2030, 8, 28));
}

// =============================================================================
// STATEMENT OF USE TESTS
// =============================================================================

#[test]
fn test_statement_of_use_with_two_extensions() {
    let sou = statement_of_use_deadline(date(2023, 1, 1), 2, date(2023, 1, 1));
    assert_eq!(sou.deadline, date(2024, 7, 1));
    assert_eq!(sou.extensions_used, 2);
    assert_eq!(sou.extensions_remaining, 3);
    // Jan 1 2026 is New Year's Day
    assert_eq!(sou.max_deadline, date(2026, 1, 2));
}

#[test]
fn test_statement_of_use_initial_period_rolls() {
    let sou = statement_of_use_deadline(date(2023, 1, 1), 0, date(2023, 1, 1));
    assert_eq!(sou.deadline, date(2023, 7, 3));
    assert_eq!(sou.extensions_remaining, 5);
}

#[test]
fn test_statement_of_use_clamps_extensions() {
    let sou = statement_of_use_deadline(date(2023, 1, 1), 9, date(2023, 1, 1));
    assert_eq!(sou.extensions_used, 5);
    assert_eq!(sou.extensions_remaining, 0);
    assert_eq!(sou.deadline, sou.max_deadline);
}

// =============================================================================
// OPPOSITION TESTS
// =============================================================================

#[test_case(0, date(2023, 2, 9) ; "thirty days")]
#[test_case(30, date(2023, 3, 13) ; "extension lands on saturday")]
#[test_case(-10, date(2023, 2, 9) ; "negative extension ignored")]
fn test_opposition_deadline(extension_days: i64, expected: NaiveDate) {
    let opp = opposition_deadline(date(2023, 1, 10), extension_days, date(2023, 1, 10));
    assert_eq!(opp.deadline, expected);
}

#[test]
fn test_opposition_closing_on_dec31_before_saturday_new_year() {
    let opp = opposition_deadline(date(2027, 12, 1), 0, date(2027, 12, 1));
    assert_eq!(opp.deadline, date(2027, 12, 31));
}

#[test]
fn test_opposition_reports_clamped_extension() {
    let opp = opposition_deadline(date(2023, 1, 10), -10, date(2023, 1, 10));
    assert_eq!(opp.extension_days, 0);
    assert_eq!(opp.days_remaining, 30);
}

// =============================================================================
// MATTER-LEVEL TESTS
// =============================================================================

fn matter(basis: FilingBasis, status: u16) -> Matter {
    Matter::new("M-9", "TEST", date(2022, 1, 3), basis, StatusCode(status))
}

#[test]
fn test_office_action_missing_issue_date() {
    let m = matter(FilingBasis::UseInCommerce, 600);
    assert_eq!(
        office_action_for(&m, date(2023, 1, 10)),
        Computation::MissingPrerequisite(Prerequisite::OfficeActionDate)
    );
}

#[test]
fn test_office_action_not_pending() {
    let m = matter(FilingBasis::UseInCommerce, 500).with_office_action(date(2023, 1, 10), false);
    assert_eq!(office_action_for(&m, date(2023, 1, 10)), Computation::NotApplicable);
}

#[test]
fn test_office_action_for_uses_matter_fields() {
    let m = matter(FilingBasis::IntentToUse, 610).with_office_action(date(2023, 1, 10), true);
    let oa = office_action_for(&m, date(2023, 1, 10)).computed().unwrap();
    assert_eq!(oa.deadline, date(2023, 7, 10));
}

#[test]
fn test_maintenance_missing_registration_date() {
    let m = matter(FilingBasis::UseInCommerce, 800);
    assert_eq!(
        maintenance_for(&m),
        Computation::MissingPrerequisite(Prerequisite::RegistrationDate)
    );
    assert_eq!(maintenance_for(&matter(FilingBasis::UseInCommerce, 600)), Computation::NotApplicable);
}

#[test]
fn test_statement_of_use_only_for_intent_to_use() {
    let m = matter(FilingBasis::UseInCommerce, 750).with_allowance(date(2023, 1, 1), 0);
    assert_eq!(statement_of_use_for(&m, date(2023, 1, 1)), Computation::NotApplicable);

    let itu = matter(FilingBasis::IntentToUse, 750).with_allowance(date(2023, 1, 1), 2);
    assert!(statement_of_use_for(&itu, date(2023, 1, 1)).is_computed());
}

#[test]
fn test_opposition_missing_publication_date() {
    let m = matter(FilingBasis::UseInCommerce, 730);
    assert_eq!(
        opposition_for(&m, date(2023, 1, 10)),
        Computation::MissingPrerequisite(Prerequisite::PublicationDate)
    );
}

#[test]
fn test_opposition_not_applicable_once_registered() {
    let m = matter(FilingBasis::UseInCommerce, 800)
        .with_publication(date(2022, 6, 7), 0)
        .with_registration(date(2022, 8, 23))
        .unwrap();
    assert_eq!(opposition_for(&m, date(2023, 1, 10)), Computation::NotApplicable);
}
