// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::civil::DateTime;

/// The unit of repetition granularity for a recurrence rule.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalUnit {
    /// Does not repeat.
    #[default]
    None,

    /// Every N minutes.
    Minute,

    /// Every N hours.
    Hour,

    /// Every N days.
    Day,

    /// Every N weeks.
    Week,

    /// Every N weeks of the month, e.g. the second Tuesday.
    WeekMonth,

    /// Every N months.
    Month,

    /// Every N years.
    Year,
}

const UNIT_NONE: &str = "NONE";
const UNIT_MINUTE: &str = "MINUTE";
const UNIT_HOUR: &str = "HOUR";
const UNIT_DAY: &str = "DAY";
const UNIT_WEEK: &str = "WEEK";
const UNIT_WEEK_MONTH: &str = "WEEK_MONTH";
const UNIT_MONTH: &str = "MONTH";
const UNIT_YEAR: &str = "YEAR";

impl IntervalUnit {
    /// All units, in the order they are offered as filter options.
    pub const ALL: [IntervalUnit; 8] = [
        IntervalUnit::None,
        IntervalUnit::Minute,
        IntervalUnit::Hour,
        IntervalUnit::Day,
        IntervalUnit::Week,
        IntervalUnit::WeekMonth,
        IntervalUnit::Month,
        IntervalUnit::Year,
    ];
}

impl AsRef<str> for IntervalUnit {
    fn as_ref(&self) -> &str {
        match self {
            IntervalUnit::None => UNIT_NONE,
            IntervalUnit::Minute => UNIT_MINUTE,
            IntervalUnit::Hour => UNIT_HOUR,
            IntervalUnit::Day => UNIT_DAY,
            IntervalUnit::Week => UNIT_WEEK,
            IntervalUnit::WeekMonth => UNIT_WEEK_MONTH,
            IntervalUnit::Month => UNIT_MONTH,
            IntervalUnit::Year => UNIT_YEAR,
        }
    }
}

impl Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for IntervalUnit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            UNIT_NONE => Ok(IntervalUnit::None),
            UNIT_MINUTE => Ok(IntervalUnit::Minute),
            UNIT_HOUR => Ok(IntervalUnit::Hour),
            UNIT_DAY => Ok(IntervalUnit::Day),
            UNIT_WEEK => Ok(IntervalUnit::Week),
            UNIT_WEEK_MONTH => Ok(IntervalUnit::WeekMonth),
            UNIT_MONTH => Ok(IntervalUnit::Month),
            UNIT_YEAR => Ok(IntervalUnit::Year),
            _ => Err(format!("Unknown interval unit: {value}")),
        }
    }
}

/// A repeating schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecurrenceRule {
    /// The first occurrence.
    pub start_time: DateTime,

    /// No instances are produced after this point, if set.
    #[serde(default)]
    pub end_time: Option<DateTime>,

    /// Count of `interval_unit`s between occurrences, `0` with [`IntervalUnit::None`].
    #[serde(default)]
    pub repeat_interval: u32,

    /// The unit of `repeat_interval`.
    #[serde(default)]
    pub interval_unit: IntervalUnit,
}

impl RecurrenceRule {
    /// A rule that fires once at `start_time`.
    pub fn once(start_time: DateTime) -> Self {
        Self {
            start_time,
            end_time: None,
            repeat_interval: 0,
            interval_unit: IntervalUnit::None,
        }
    }

    /// A rule repeating every `repeat_interval` units from `start_time`.
    pub fn every(start_time: DateTime, repeat_interval: u32, interval_unit: IntervalUnit) -> Self {
        Self {
            start_time,
            end_time: None,
            repeat_interval,
            interval_unit,
        }
    }

    /// Whether the rule produces more than one occurrence.
    pub fn repeats(&self) -> bool {
        self.interval_unit != IntervalUnit::None && self.repeat_interval > 0
    }

    /// Human readable repetition, e.g. `Every DAY` or `Every 3 DAYs`.
    pub fn repeat_text(&self) -> String {
        match self.interval_unit {
            IntervalUnit::None => "Does not repeat".to_string(),
            unit if self.repeat_interval == 1 => format!("Every {unit}"),
            unit => format!("Every {} {unit}s", self.repeat_interval),
        }
    }
}
