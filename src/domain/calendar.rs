//! Calendar features derivable from a timestamp
//!
//! The menu is closed: adding a feature means adding a variant, and the
//! compiler then points at every `match` that must learn about it.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::RejoinError;
use crate::error::features::unknown_feature;

/// One calendar attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarFeature {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    /// 0 = Monday .. 6 = Sunday
    DayOfWeek,
    /// 1-based ordinal day
    DayOfYear,
    /// ISO-8601 week number; early January can fall in week 52/53 of the previous year
    IsoWeekOfYear,
    Quarter,
}

impl CalendarFeature {
    /// Every feature, in menu order
    pub const ALL: [CalendarFeature; 10] = [
        CalendarFeature::Year,
        CalendarFeature::Month,
        CalendarFeature::Day,
        CalendarFeature::Hour,
        CalendarFeature::Minute,
        CalendarFeature::Second,
        CalendarFeature::DayOfWeek,
        CalendarFeature::DayOfYear,
        CalendarFeature::IsoWeekOfYear,
        CalendarFeature::Quarter,
    ];

    /// Canonical name, also used as the output column suffix
    pub fn name(self) -> &'static str {
        match self {
            CalendarFeature::Year => "year",
            CalendarFeature::Month => "month",
            CalendarFeature::Day => "day",
            CalendarFeature::Hour => "hour",
            CalendarFeature::Minute => "minute",
            CalendarFeature::Second => "second",
            CalendarFeature::DayOfWeek => "day_of_week",
            CalendarFeature::DayOfYear => "day_of_year",
            CalendarFeature::IsoWeekOfYear => "iso_week_of_year",
            CalendarFeature::Quarter => "quarter",
        }
    }

    /// Human-readable label for menus
    pub fn label(self) -> &'static str {
        match self {
            CalendarFeature::Year => "Year",
            CalendarFeature::Month => "Month",
            CalendarFeature::Day => "Day of month",
            CalendarFeature::Hour => "Hour",
            CalendarFeature::Minute => "Minute",
            CalendarFeature::Second => "Second",
            CalendarFeature::DayOfWeek => "Day of week (0=Mon, 6=Sun)",
            CalendarFeature::DayOfYear => "Day of year",
            CalendarFeature::IsoWeekOfYear => "ISO week of year",
            CalendarFeature::Quarter => "Quarter",
        }
    }

    /// Name of the column this feature produces for `datetime_column`
    pub fn column_name(self, datetime_column: &str) -> String {
        format!("{datetime_column}_{}", self.name())
    }

    /// Compute the attribute for one timestamp
    pub fn value(self, ts: &NaiveDateTime) -> i64 {
        match self {
            CalendarFeature::Year => i64::from(ts.year()),
            CalendarFeature::Month => i64::from(ts.month()),
            CalendarFeature::Day => i64::from(ts.day()),
            CalendarFeature::Hour => i64::from(ts.hour()),
            CalendarFeature::Minute => i64::from(ts.minute()),
            CalendarFeature::Second => i64::from(ts.second()),
            CalendarFeature::DayOfWeek => i64::from(ts.weekday().num_days_from_monday()),
            CalendarFeature::DayOfYear => i64::from(ts.ordinal()),
            CalendarFeature::IsoWeekOfYear => i64::from(ts.iso_week().week()),
            CalendarFeature::Quarter => i64::from((ts.month() - 1) / 3 + 1),
        }
    }
}

impl fmt::Display for CalendarFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarFeature {
    type Err = RejoinError;

    /// Accepts canonical names plus the `dayofweek`/`dayofyear`/`weekofyear`
    /// spellings; case-insensitive, `-` treated as `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let feature = match normalized.as_str() {
            "year" => CalendarFeature::Year,
            "month" => CalendarFeature::Month,
            "day" => CalendarFeature::Day,
            "hour" => CalendarFeature::Hour,
            "minute" => CalendarFeature::Minute,
            "second" => CalendarFeature::Second,
            "day_of_week" | "dayofweek" | "weekday" => CalendarFeature::DayOfWeek,
            "day_of_year" | "dayofyear" => CalendarFeature::DayOfYear,
            "iso_week_of_year" | "weekofyear" | "week" | "iso_week" => {
                CalendarFeature::IsoWeekOfYear
            }
            "quarter" => CalendarFeature::Quarter,
            _ => return Err(unknown_feature(s.trim())),
        };
        Ok(feature)
    }
}

/// Requested features, duplicate-free, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet {
    features: Vec<CalendarFeature>,
}

impl FeatureSet {
    pub fn new(features: impl IntoIterator<Item = CalendarFeature>) -> Self {
        let mut set = Self::default();
        for feature in features {
            set.push(feature);
        }
        set
    }

    /// The full menu
    pub fn all() -> Self {
        Self::new(CalendarFeature::ALL)
    }

    /// Parse feature names; the first unknown name fails the whole set
    pub fn parse<I, S>(names: I) -> Result<Self, RejoinError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let features = names
            .into_iter()
            .map(|name| name.as_ref().parse::<CalendarFeature>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(features))
    }

    pub fn push(&mut self, feature: CalendarFeature) {
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CalendarFeature> + '_ {
        self.features.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
