// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use jiff::civil::DateTime;
use remindmate_core::{Reminder, format_datetime};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, truncate_to_width};

const MAX_NAME_WIDTH: usize = 48;

#[derive(Debug)]
pub struct ReminderFormatter {
    columns: Vec<ReminderColumn>,
    format: OutputFormat,
}

impl ReminderFormatter {
    pub fn new(now: DateTime) -> Self {
        Self {
            columns: vec![
                ReminderColumn::Status,
                ReminderColumn::Id,
                ReminderColumn::Due(ReminderColumnDue { now }),
                ReminderColumn::Name,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, reminders: &'a [Reminder]) -> Display<'a> {
        Display {
            reminders,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    reminders: &'a [Reminder],
    formatter: &'a ReminderFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => {
                // Descriptions are only worth the space in machine-readable output
                let columns: Vec<_> = columns
                    .iter()
                    .cloned()
                    .chain([ReminderColumn::Description])
                    .collect();
                let table = Table::new(TableStyleJson::new(), &columns, self.reminders);
                write!(f, "{table}")
            }
            OutputFormat::Table => {
                let table = Table::new(TableStyleBasic::new(), columns, self.reminders);
                write!(f, "{table}")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ReminderColumn {
    Status,
    Id,
    Due(ReminderColumnDue),
    Name,
    Description,
}

impl TableColumn<Reminder> for ReminderColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Status => "status",
            Self::Id => "id",
            Self::Due(_) => "due",
            Self::Name => "name",
            Self::Description => "description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Reminder) -> Cow<'a, str> {
        match self {
            Self::Status if data.is_completed => "[x]".into(),
            Self::Status => "[ ]".into(),
            Self::Id => data.id.to_string().into(),
            Self::Due(_) => format_datetime(data.due).into(),
            Self::Name => truncate_to_width(&data.name, MAX_NAME_WIDTH).into(),
            Self::Description => data.description.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &Reminder) -> Option<Color> {
        match self {
            Self::Due(a) => a.get_color(data),
            Self::Status if data.is_completed => Some(Color::Green),
            Self::Name if data.is_completed => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReminderColumnDue {
    now: DateTime,
}

impl ReminderColumnDue {
    fn get_color(&self, reminder: &Reminder) -> Option<Color> {
        const COLOR_OVERDUE: Option<Color> = Some(Color::Red);
        const COLOR_TODAY: Option<Color> = Some(Color::Yellow);

        if reminder.is_completed {
            None
        } else if reminder.due < self.now {
            COLOR_OVERDUE
        } else if reminder.due.date() == self.now.date() {
            COLOR_TODAY
        } else {
            None
        }
    }
}
