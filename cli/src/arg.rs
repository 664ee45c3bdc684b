// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::DateTime;
use remindmate_core::{
    IntervalUnit, RecurringReminder, RecurringReminderDraft, ReminderId, parse_datetime,
};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Arguments shared by reminders and recurring templates.
#[derive(Debug, Clone, Copy)]
pub struct ReminderArgs {
    recurring: bool,
}

impl ReminderArgs {
    pub const fn new(recurring: bool) -> Self {
        Self { recurring }
    }

    pub fn id(self) -> Arg {
        let help = format!("The id of the {}", self.kind());
        arg!(id: <ID>)
            .help(help)
            .value_parser(value_parser!(ReminderId))
    }

    pub fn get_id(matches: &ArgMatches) -> ReminderId {
        matches.get_one("id").copied().unwrap_or_default()
    }

    pub fn ids(self) -> Arg {
        let help = format!("The ids of the {}s", self.kind());
        self.id().help(help).num_args(1..)
    }

    /// The given ids in order, each at most once.
    pub fn get_ids(matches: &ArgMatches) -> Vec<ReminderId> {
        let mut ids: Vec<ReminderId> = Vec::new();
        for &id in matches.get_many::<ReminderId>("id").into_iter().flatten() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    pub fn title(self, positional: bool) -> Arg {
        let help = format!("Title of the {}", self.kind());
        if positional {
            arg!(title: <TITLE>).help(help)
        } else {
            arg!(title: -t --title <TITLE>).help(help)
        }
    }

    pub fn description(self) -> Arg {
        let help = format!("Description of the {}", self.kind());
        arg!(-d --description <DESCRIPTION>).help(help)
    }

    pub fn start() -> Arg {
        arg!(-s --start <START> "Start date and time (YYYY-MM-DD HH:MM, HH:MM, tomorrow, 30m, 2h, 3d)")
    }

    pub fn end() -> Arg {
        arg!(--end <END> "End date and time of the recurrence")
    }

    pub fn repeat() -> Arg {
        arg!(-r --repeat <N> "Repeat every N units")
    }

    pub fn unit() -> Arg {
        arg!(-u --unit <UNIT> "Interval unit of the recurrence")
            .value_parser(value_parser!(IntervalUnit))
    }

    fn kind(self) -> &'static str {
        match self.recurring {
            true => "recurring reminder",
            false => "reminder",
        }
    }
}

/// Form fields given on the command line, overlaid on a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub repeat: Option<String>,
    pub unit: Option<IntervalUnit>,
}

impl DraftArgs {
    pub fn from(matches: &ArgMatches) -> Self {
        // Only some commands declare every field
        let get = |id: &str| {
            matches
                .try_get_one::<String>(id)
                .ok()
                .flatten()
                .cloned()
        };
        Self {
            title: get("title"),
            description: get("description"),
            start: get("start"),
            end: get("end"),
            repeat: get("repeat"),
            unit: matches.try_get_one("unit").ok().flatten().copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overlays the given fields on `draft`, parsing times relative to `now`.
    pub fn fill(
        self,
        mut draft: RecurringReminderDraft,
        now: DateTime,
    ) -> Result<RecurringReminderDraft, Box<dyn Error>> {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(start) = self.start {
            draft.start_time = Some(parse_datetime(&start, now)?);
        }
        if let Some(end) = self.end {
            draft.end_time = match end.trim() {
                "" => None,
                end => Some(parse_datetime(end, now)?),
            };
        }
        if let Some(repeat) = self.repeat {
            draft.repeat_value = repeat;
        }
        if let Some(unit) = self.unit {
            draft.interval_unit = unit;
        }
        Ok(draft)
    }
}

/// Submits a draft, reporting every validation problem at once.
pub fn submit_draft(draft: RecurringReminderDraft) -> Result<RecurringReminder, Box<dyn Error>> {
    let errors = draft.validate();
    if !errors.is_empty() {
        let errors: Vec<_> = errors.iter().map(ToString::to_string).collect();
        return Err(errors.join("; ").into());
    }
    Ok(draft.submit()?)
}
