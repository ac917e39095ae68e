//! Duration and offset computation
//!
//! Computes an end instant from a start instant given a numeric duration and
//! a coded time unit. Fixed units add a scaled clock offset; months and years
//! use calendar-aware addition, never a fixed-length approximation. The
//! recurring-interval unit spreads the duration over a dosing frequency and
//! requires a frequency-per-day figure. Auto-expiry is one second before the
//! raw end instant so the expiry excludes the final dose window.

use chrono::{DateTime, Months, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// Coded time unit of a [`Duration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    /// Clock seconds
    Seconds,
    /// Clock minutes
    Minutes,
    /// Clock hours
    Hours,
    /// Calendar days
    Days,
    /// Calendar weeks
    Weeks,
    /// Calendar months (calendar-aware addition)
    Months,
    /// Calendar years (calendar-aware addition)
    Years,
    /// One interval of a recurring schedule; needs a frequency per day
    RecurringInterval,
}

impl DurationUnit {
    /// Parse a unit code
    ///
    /// Unknown codes fail with an error naming the code; absence of a unit
    /// is the caller's optional case, never encoded as an unknown code.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "seconds" => Ok(Self::Seconds),
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            "days" => Ok(Self::Days),
            "weeks" => Ok(Self::Weeks),
            "months" => Ok(Self::Months),
            "years" => Ok(Self::Years),
            "recurring-interval" => Ok(Self::RecurringInterval),
            other => Err(ModelError::UnknownDurationUnit(other.to_string())),
        }
    }

    /// The canonical code for this unit
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
            Self::RecurringInterval => "recurring-interval",
        }
    }
}

/// A numeric duration with a coded unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    magnitude: i64,
    unit: DurationUnit,
}

impl Duration {
    /// A duration of `magnitude` units
    #[must_use]
    pub const fn new(magnitude: i64, unit: DurationUnit) -> Self {
        Self { magnitude, unit }
    }

    /// A duration parsed from a unit code
    pub fn from_code(magnitude: i64, code: &str) -> Result<Self> {
        Ok(Self::new(magnitude, DurationUnit::from_code(code)?))
    }

    /// A duration in seconds
    #[must_use]
    pub const fn seconds(magnitude: i64) -> Self {
        Self::new(magnitude, DurationUnit::Seconds)
    }

    /// A duration in minutes
    #[must_use]
    pub const fn minutes(magnitude: i64) -> Self {
        Self::new(magnitude, DurationUnit::Minutes)
    }

    /// A duration in hours
    #[must_use]
    pub const fn hours(magnitude: i64) -> Self {
        Self::new(magnitude, DurationUnit::Hours)
    }

    /// A duration in days
    #[must_use]
    pub const fn days(magnitude: i64) -> Self {
        Self::new(magnitude, DurationUnit::Days)
    }

    /// A duration in weeks
    #[must_use]
    pub const fn weeks(magnitude: i64) -> Self {
        Self::new(magnitude, DurationUnit::Weeks)
    }

    /// A duration in months
    #[must_use]
    pub const fn months(magnitude: i64) -> Self {
        Self::new(magnitude, DurationUnit::Months)
    }

    /// A duration in years
    #[must_use]
    pub const fn years(magnitude: i64) -> Self {
        Self::new(magnitude, DurationUnit::Years)
    }

    /// The numeric magnitude
    #[must_use]
    pub const fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// The coded unit
    #[must_use]
    pub const fn unit(&self) -> DurationUnit {
        self.unit
    }

    /// Compute the end instant from a start instant
    ///
    /// `frequency_per_day` is consulted only by the recurring-interval unit;
    /// a recurring interval without a usable (positive) frequency fails with
    /// [`ModelError::MissingFrequency`].
    pub fn add_to_date(
        &self,
        start: DateTime<Utc>,
        frequency_per_day: Option<f64>,
    ) -> Result<DateTime<Utc>> {
        let end = match self.unit {
            DurationUnit::Seconds => add_seconds(start, self.magnitude),
            DurationUnit::Minutes => add_seconds(start, self.magnitude.checked_mul(60)),
            DurationUnit::Hours => add_seconds(start, self.magnitude.checked_mul(3_600)),
            DurationUnit::Days => add_seconds(start, self.magnitude.checked_mul(SECONDS_PER_DAY)),
            DurationUnit::Weeks => {
                add_seconds(start, self.magnitude.checked_mul(7 * SECONDS_PER_DAY))
            }
            DurationUnit::Months => add_months(start, self.magnitude),
            DurationUnit::Years => add_months(start, self.magnitude.checked_mul(12)),
            DurationUnit::RecurringInterval => {
                let frequency = match frequency_per_day {
                    Some(f) if f > 0.0 => f,
                    _ => return Err(ModelError::MissingFrequency),
                };
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
                let seconds =
                    (SECONDS_PER_DAY as f64 * self.magnitude as f64 / frequency).round() as i64;
                add_seconds(start, Some(seconds))
            }
        };
        end.ok_or(ModelError::DurationOutOfRange)
    }

    /// The auto-expiry instant: one second before the raw end instant
    pub fn auto_expire_date(
        &self,
        start: DateTime<Utc>,
        frequency_per_day: Option<f64>,
    ) -> Result<DateTime<Utc>> {
        let end = self.add_to_date(start, frequency_per_day)?;
        end.checked_sub_signed(TimeDelta::seconds(1))
            .ok_or(ModelError::DurationOutOfRange)
    }

    /// Auto-expiry for an optional duration
    ///
    /// Absence of a duration is not an error: an order without a fixed
    /// duration simply never auto-expires.
    pub fn auto_expire_for(
        duration: Option<&Self>,
        start: DateTime<Utc>,
        frequency_per_day: Option<f64>,
    ) -> Result<Option<DateTime<Utc>>> {
        duration
            .map(|d| d.auto_expire_date(start, frequency_per_day))
            .transpose()
    }
}

/// Offset a start instant by a whole number of seconds, None on overflow
fn add_seconds(start: DateTime<Utc>, seconds: impl Into<Option<i64>>) -> Option<DateTime<Utc>> {
    let seconds = seconds.into()?;
    start.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Calendar-aware month offset, handling either sign
fn add_months(start: DateTime<Utc>, months: impl Into<Option<i64>>) -> Option<DateTime<Utc>> {
    let months = months.into()?;
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        start.checked_add_months(Months::new(magnitude))
    } else {
        start.checked_sub_months(Months::new(magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 10, 30, 0).unwrap()
    }

    #[test]
    fn fixed_units_scale_to_seconds() {
        let start = at(2024, 3, 1);
        assert_eq!(
            Duration::minutes(90).add_to_date(start, None).unwrap(),
            start + TimeDelta::seconds(5_400)
        );
        assert_eq!(
            Duration::weeks(2).add_to_date(start, None).unwrap(),
            start + TimeDelta::days(14)
        );
    }

    #[test]
    fn month_addition_respects_calendar() {
        let start = at(2023, 1, 31);
        // Jan 31 + 1 month lands on a valid February date, not 31 days later.
        let end = Duration::months(1).add_to_date(start, None).unwrap();
        assert_eq!(end, at(2023, 2, 28));

        let leap = Duration::months(1).add_to_date(at(2024, 1, 31), None).unwrap();
        assert_eq!(leap, at(2024, 2, 29));
    }

    #[test]
    fn unknown_code_names_the_code() {
        match DurationUnit::from_code("fortnights") {
            Err(ModelError::UnknownDurationUnit(code)) => assert_eq!(code, "fortnights"),
            other => panic!("expected UnknownDurationUnit, got {other:?}"),
        }
    }

    #[test]
    fn code_round_trips() {
        for unit in [
            DurationUnit::Seconds,
            DurationUnit::Days,
            DurationUnit::Months,
            DurationUnit::RecurringInterval,
        ] {
            assert_eq!(DurationUnit::from_code(unit.code()).unwrap(), unit);
        }
    }
}
