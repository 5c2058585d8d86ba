//! Weekly opening hours and pickup-time validation.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Errors raised while building a schedule.
///
/// A malformed schedule is a programming or configuration error and is
/// rejected at construction time, never silently at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// An interval ends before it starts.
    #[error("interval ends at {end} before it starts at {start}")]
    EndBeforeStart {
        /// Interval start.
        start: NaiveTime,
        /// Interval end.
        end: NaiveTime,
    },
    /// A time literal could not be parsed as zero-padded `HH:MM`.
    #[error("invalid time of day: {0:?}")]
    InvalidTime(String),
}

/// One open interval within a day, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenInterval {
    start: NaiveTime,
    end: NaiveTime,
}

impl OpenInterval {
    /// Build an interval, rejecting end-before-start.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EndBeforeStart`] if `end` precedes `start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ScheduleError> {
        if end < start {
            return Err(ScheduleError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse an interval from `("HH:MM", "HH:MM")` literals.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidTime`] for unparseable literals and
    /// [`ScheduleError::EndBeforeStart`] for inverted bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, ScheduleError> {
        Self::new(parse_time(start)?, parse_time(end)?)
    }

    /// Whether `time` falls inside the interval, bounds included.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Interval start.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// Interval end.
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(s.to_owned()))
}

/// Open intervals for each weekday, Sunday first.
///
/// The schedule is data, not logic: the default value carries the shop's
/// standard week, and a different week can be built with
/// [`WeeklySchedule::from_table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [Vec<OpenInterval>; 7],
}

impl Default for WeeklySchedule {
    /// The shop's standard week: closed all Sunday and Thursday afternoon,
    /// early opening on Friday and Saturday.
    fn default() -> Self {
        let iv = |sh, sm, eh, em| OpenInterval {
            start: hm(sh, sm),
            end: hm(eh, em),
        };
        Self {
            days: [
                vec![],                                   // Sunday
                vec![iv(8, 0, 12, 30), iv(17, 0, 20, 0)], // Monday
                vec![iv(8, 0, 13, 0), iv(17, 0, 20, 0)],  // Tuesday
                vec![iv(8, 0, 13, 0), iv(17, 0, 20, 0)],  // Wednesday
                vec![iv(8, 0, 13, 0)],                    // Thursday
                vec![iv(7, 30, 13, 0), iv(16, 30, 20, 0)], // Friday
                vec![iv(7, 30, 13, 0), iv(16, 30, 19, 30)], // Saturday
            ],
        }
    }
}

/// Time-of-day from literal hour/minute values known to be in range.
fn hm(hours: u32, minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hours, minutes, 0).unwrap_or(NaiveTime::MIN)
}

impl WeeklySchedule {
    /// Build a schedule from `"HH:MM"` interval pairs per weekday, Sunday
    /// first. An empty list means the shop is closed that day.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] found in the table.
    pub fn from_table(table: &[&[(&str, &str)]; 7]) -> Result<Self, ScheduleError> {
        let mut days: [Vec<OpenInterval>; 7] = std::array::from_fn(|_| Vec::new());
        for (day, intervals) in days.iter_mut().zip(table.iter()) {
            for (start, end) in intervals.iter() {
                day.push(OpenInterval::parse(start, end)?);
            }
        }
        Ok(Self { days })
    }

    /// Open intervals for the weekday of `date`. Empty on closed days.
    #[must_use]
    pub fn intervals_on(&self, date: NaiveDate) -> &[OpenInterval] {
        let index = date.weekday().num_days_from_sunday() as usize;
        self.days.get(index).map_or(&[], Vec::as_slice)
    }

    /// Whether the shop is open at `time` on `date`'s weekday.
    #[must_use]
    pub fn is_open_at(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.intervals_on(date).iter().any(|iv| iv.contains(time))
    }

    /// Validate a raw pickup slot as submitted by the booking form.
    ///
    /// `date` is an ISO `YYYY-MM-DD` string, `time` is zero-padded `HH:MM`.
    /// The weekday comes straight from the calendar date, so a date-only
    /// string cannot be skewed by the server's local timezone. Closed days
    /// and unparseable input are both simply invalid; this never panics.
    #[must_use]
    pub fn is_valid_pickup_time(&self, date: &str, time: &str) -> bool {
        let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
            return false;
        };
        let Ok(time) = NaiveTime::parse_from_str(time.trim(), "%H:%M") else {
            return false;
        };
        self.is_open_at(date, time)
    }
}
