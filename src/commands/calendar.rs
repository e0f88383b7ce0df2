//! Business calendar queries

use chrono::{Datelike, NaiveDate};

use markflow::core::services::{
    holiday_calendar, is_business_day, is_federal_holiday, next_business_day,
};
use markflow::output::{BusinessDayReport, HolidayInfo, HolidayReport, Report};

use super::Context;

/// List observed federal holidays for a year
pub fn holidays(ctx: &Context, year: Option<i32>) -> anyhow::Result<()> {
    let year = year.unwrap_or_else(|| ctx.as_of.year());
    let holidays = holiday_calendar(year)
        .into_iter()
        .map(|(holiday, date)| HolidayInfo {
            holiday,
            name: holiday.name(),
            date,
        })
        .collect();

    HolidayReport { year, holidays }.render(ctx.mode);
    Ok(())
}

/// Is `date` a business day, and if not, which one is next
pub fn business_day(ctx: &Context, date: NaiveDate) -> anyhow::Result<()> {
    BusinessDayReport {
        date,
        is_business_day: is_business_day(date),
        is_federal_holiday: is_federal_holiday(date),
        next_business_day: next_business_day(date),
    }
    .render(ctx.mode);
    Ok(())
}
