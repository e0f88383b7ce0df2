//! Business calendar service
//!
//! US federal holidays (observed) and business-day rolling. Pure functions of
//! the calendar date; no state and no clock.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;

/// The eleven US federal holidays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FederalHoliday {
    /// January 1
    NewYearsDay,
    /// Third Monday of January
    MartinLutherKingJrDay,
    /// Third Monday of February
    WashingtonsBirthday,
    /// Last Monday of May
    MemorialDay,
    /// June 19
    Juneteenth,
    /// July 4
    IndependenceDay,
    /// First Monday of September
    LaborDay,
    /// Second Monday of October
    ColumbusDay,
    /// November 11
    VeteransDay,
    /// Fourth Thursday of November
    ThanksgivingDay,
    /// December 25
    ChristmasDay,
}

impl FederalHoliday {
    /// Official name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewYearsDay => "New Year's Day",
            Self::MartinLutherKingJrDay => "Birthday of Martin Luther King, Jr.",
            Self::WashingtonsBirthday => "Washington's Birthday",
            Self::MemorialDay => "Memorial Day",
            Self::Juneteenth => "Juneteenth National Independence Day",
            Self::IndependenceDay => "Independence Day",
            Self::LaborDay => "Labor Day",
            Self::ColumbusDay => "Columbus Day",
            Self::VeteransDay => "Veterans Day",
            Self::ThanksgivingDay => "Thanksgiving Day",
            Self::ChristmasDay => "Christmas Day",
        }
    }
}

impl std::fmt::Display for FederalHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named federal holidays for `year`, each on its observed date.
///
/// New Year's Day falling on a Saturday is observed on December 31 of the
/// previous year; that date is still listed under `year`, and only there.
/// Years outside
/// chrono's representable range yield an empty list.
#[must_use]
pub fn holiday_calendar(year: i32) -> Vec<(FederalHoliday, NaiveDate)> {
    let fixed = |month, day| NaiveDate::from_ymd_opt(year, month, day).map(observed);

    [
        (FederalHoliday::NewYearsDay, fixed(1, 1)),
        (FederalHoliday::MartinLutherKingJrDay, nth_weekday_of_month(year, 1, Weekday::Mon, 3)),
        (FederalHoliday::WashingtonsBirthday, nth_weekday_of_month(year, 2, Weekday::Mon, 3)),
        (FederalHoliday::MemorialDay, last_weekday_of_month(year, 5, Weekday::Mon)),
        (FederalHoliday::Juneteenth, fixed(6, 19)),
        (FederalHoliday::IndependenceDay, fixed(7, 4)),
        (FederalHoliday::LaborDay, nth_weekday_of_month(year, 9, Weekday::Mon, 1)),
        (FederalHoliday::ColumbusDay, nth_weekday_of_month(year, 10, Weekday::Mon, 2)),
        (FederalHoliday::VeteransDay, fixed(11, 11)),
        (FederalHoliday::ThanksgivingDay, nth_weekday_of_month(year, 11, Weekday::Thu, 4)),
        (FederalHoliday::ChristmasDay, fixed(12, 25)),
    ]
    .into_iter()
    .filter_map(|(holiday, date)| date.map(|d| (holiday, d)))
    .collect()
}

/// Observed dates of the federal holidays for `year`
#[must_use]
pub fn federal_holidays(year: i32) -> Vec<NaiveDate> {
    holiday_calendar(year).into_iter().map(|(_, date)| date).collect()
}

/// Whether `date` is in its own year's observed holiday set.
///
/// A Friday December 31 carrying the next year's New Year's observance is
/// not in its own year's set, so it counts as a business day here.
#[must_use]
pub fn is_federal_holiday(date: NaiveDate) -> bool {
    federal_holidays(date.year()).contains(&date)
}

/// Whether `date` falls on a weekend
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `date` is neither a weekend day nor a federal holiday
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !is_weekend(date) && !is_federal_holiday(date)
}

/// `date` itself if it is a business day, otherwise the first business day after it
#[must_use]
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let mut current = date;
    while !is_business_day(current) {
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// Add calendar months, clamping to month end (Jan 31 + 1 month = Feb 28/29)
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

/// Add whole years; Feb 29 lands on Feb 28 in non-leap years
#[must_use]
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    add_months(date, years.saturating_mul(12))
}

/// Add calendar days
#[must_use]
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

fn observed(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date.pred_opt().unwrap_or(date),
        Weekday::Sun => date.succ_opt().unwrap_or(date),
        _ => date,
    }
}

/// The `nth` occurrence of `weekday` in a month, counting forward from the 1st
fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, nth: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset =
        (weekday.num_days_from_sunday() + 7 - first.weekday().num_days_from_sunday()) % 7;
    NaiveDate::from_ymd_opt(year, month, 1 + offset + 7 * (nth - 1))
}

/// The last occurrence of `weekday` in a month, counting back from its last day
fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    let offset =
        (last.weekday().num_days_from_sunday() + 7 - weekday.num_days_from_sunday()) % 7;
    last.checked_sub_days(Days::new(u64::from(offset)))
}
