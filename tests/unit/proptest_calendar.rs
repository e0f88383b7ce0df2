//! Property-based tests for the business calendar
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use markflow::core::services::{
    FederalHoliday, federal_holidays, holiday_calendar, is_business_day, next_business_day,
};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..73_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap().checked_add_days(Days::new(offset)).unwrap()
    })
}

proptest! {
    /// Every year has exactly eleven observed holidays
    #[test]
    fn eleven_holidays_per_year(year in 1900i32..2200) {
        prop_assert_eq!(federal_holidays(year).len(), 11);
    }

    /// Observed holidays never fall on a weekend
    #[test]
    fn holidays_fall_on_weekdays(year in 1900i32..2200) {
        for date in federal_holidays(year) {
            prop_assert!(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun), "{}", date);
        }
    }

    /// Holidays fall within their year, except a Saturday New Year's observed on Dec 31
    #[test]
    fn holidays_fall_within_year(year in 1900i32..2200) {
        for (holiday, date) in holiday_calendar(year) {
            if date.year() == year {
                continue;
            }
            prop_assert_eq!(holiday, FederalHoliday::NewYearsDay);
            prop_assert_eq!(date, NaiveDate::from_ymd_opt(year - 1, 12, 31).unwrap());
        }
    }

    /// Rolling never moves a date backwards and always lands on a business day
    #[test]
    fn next_business_day_is_business_day(date in any_date()) {
        let rolled = next_business_day(date);
        prop_assert!(rolled >= date);
        prop_assert!(is_business_day(rolled));
    }

    /// Rolling an already-rolled date changes nothing
    #[test]
    fn next_business_day_is_idempotent(date in any_date()) {
        let rolled = next_business_day(date);
        prop_assert_eq!(next_business_day(rolled), rolled);
    }

    /// No run of non-business days lasts longer than four days
    #[test]
    fn next_business_day_within_four_days(date in any_date()) {
        prop_assert!((next_business_day(date) - date).num_days() <= 4);
    }
}
