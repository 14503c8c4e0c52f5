//! Day- and ISO-week arithmetic on the host's local calendar.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::ProgressionError;

/// An ISO-8601 week, rendered as `YYYY-Www`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoWeek {
    pub year: i32,
    pub week: u32,
}

impl IsoWeek {
    /// Week containing `date`: shift to that week's Thursday, whose year owns
    /// the week, then count whole weeks from January 1st.
    pub fn from_date(date: NaiveDate) -> Self {
        let offset = 3 - date.weekday().num_days_from_monday() as i64;
        let thursday = date + Duration::days(offset);
        Self {
            year: thursday.year(),
            week: thursday.ordinal0() / 7 + 1,
        }
    }

    pub fn from_datetime(moment: NaiveDateTime) -> Self {
        Self::from_date(moment.date())
    }

    pub fn monday(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday() + Duration::days(6)
    }

    /// Monday 00:00:00.
    pub fn start(&self) -> NaiveDateTime {
        self.monday().and_time(NaiveTime::MIN)
    }

    /// Sunday 23:59:59, the moment a weekly challenge expires.
    pub fn end(&self) -> NaiveDateTime {
        self.sunday().and_time(end_of_day())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for IsoWeek {
    type Err = ProgressionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ProgressionError::InvalidInput(format!("not an ISO week: `{raw}`"));
        let (year, week) = raw.trim().split_once("-W").ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let week: u32 = week.parse().map_err(|_| invalid())?;
        if NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).is_none() {
            return Err(invalid());
        }
        Ok(Self { year, week })
    }
}

impl TryFrom<String> for IsoWeek {
    type Error = ProgressionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IsoWeek> for String {
    fn from(week: IsoWeek) -> Self {
        week.to_string()
    }
}

pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

/// ISO week of the evaluation moment.
pub fn current_week(now: NaiveDateTime) -> IsoWeek {
    IsoWeek::from_datetime(now)
}

/// Monday 00:00:00 of the week containing `now`.
pub fn week_start(now: NaiveDateTime) -> NaiveDateTime {
    current_week(now).start()
}
