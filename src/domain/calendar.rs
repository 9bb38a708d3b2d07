//! Date arithmetic shared by the capability defaults.
//!
//! Both capabilities schedule an annual checkup a fixed number of days away
//! from the birth anniversary, anchored at noon UTC, and never return a date
//! earlier than the start of the evaluating day.

use crate::clock::Clock;
use crate::error::{DomainError, Result};
use chrono::{DateTime, Datelike, Days, FixedOffset, Months, Offset, TimeZone, Utc};

/// Hour of day (UTC) every checkup is booked at.
pub const CHECKUP_HOUR_UTC: u32 = 12;

/// Days between the birth anniversary and the checkup.
pub const CHECKUP_OFFSET_DAYS: u64 = 7;

/// Which side of the anniversary a checkup falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnniversaryOffset {
    Before(Days),
    After(Days),
}

/// Builds a UTC instant from calendar components, rejecting impossible dates
/// instead of normalizing them.
pub fn utc_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<DateTime<FixedOffset>> {
    Utc.fix()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| DomainError::invalid_date(year, month, day, hour, minute))
}

/// Midnight at the start of `now`'s calendar day, in `now`'s own offset.
pub fn start_of_day(now: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(*now.offset()).single())
        .ok_or_else(|| DomainError::out_of_range("truncating to midnight"))
}

/// Next annual checkup for an animal born at `birth_date`.
///
/// The candidate sits at noon UTC on this year's anniversary shifted by
/// `offset`. While the candidate is strictly before today it moves forward a
/// year.
pub fn next_checkup<C>(
    clock: &C,
    birth_date: DateTime<FixedOffset>,
    offset: AnniversaryOffset,
) -> Result<DateTime<FixedOffset>>
where
    C: Clock + ?Sized,
{
    let now = clock.now();
    let today = start_of_day(now)?;

    let anniversary = utc_datetime(
        now.year(),
        birth_date.month(),
        birth_date.day(),
        CHECKUP_HOUR_UTC,
        0,
    )?;

    let candidate = match offset {
        AnniversaryOffset::Before(days) => anniversary.checked_sub_days(days),
        AnniversaryOffset::After(days) => anniversary.checked_add_days(days),
    }
    .ok_or_else(|| DomainError::out_of_range("shifting the anniversary"))?;

    // A shift before an early-January anniversary lands in the previous year,
    // so one roll is not always enough.
    let mut checkup = candidate;
    while checkup < today {
        let rolled = checkup
            .checked_add_months(Months::new(12))
            .ok_or_else(|| DomainError::out_of_range("adding one year"))?;
        tracing::debug!(
            passed = %checkup,
            %rolled,
            %today,
            "checkup already passed, rolling forward a year"
        );
        checkup = rolled;
    }

    Ok(checkup)
}
