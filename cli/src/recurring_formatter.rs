// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use remindmate_core::{RecurringReminder, format_datetime};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, truncate_to_width};

const MAX_TITLE_WIDTH: usize = 40;

#[derive(Debug)]
pub struct RecurringFormatter {
    columns: Vec<RecurringColumn>,
    format: OutputFormat,
}

impl RecurringFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                RecurringColumn::Id,
                RecurringColumn::Start,
                RecurringColumn::Repeat,
                RecurringColumn::Title,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, templates: &'a [RecurringReminder]) -> Display<'a> {
        Display {
            templates,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    templates: &'a [RecurringReminder],
    formatter: &'a RecurringFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let columns: Vec<_> = self
                    .formatter
                    .columns
                    .iter()
                    .cloned()
                    .chain([RecurringColumn::End, RecurringColumn::Description])
                    .collect();
                let table = Table::new(TableStyleJson::new(), &columns, self.templates);
                write!(f, "{table}")
            }
            OutputFormat::Table => {
                let columns = &self.formatter.columns;
                let table = Table::new(TableStyleBasic::new(), columns, self.templates);
                write!(f, "{table}")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum RecurringColumn {
    Id,
    Start,
    End,
    Repeat,
    Title,
    Description,
}

impl TableColumn<RecurringReminder> for RecurringColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "id",
            Self::Start => "start",
            Self::End => "end",
            Self::Repeat => "repeat",
            Self::Title => "title",
            Self::Description => "description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a RecurringReminder) -> Cow<'a, str> {
        let first = data.first_recurrence();
        match self {
            Self::Id => data.id.to_string().into(),
            Self::Start => first.map_or("".into(), |r| format_datetime(r.start_time).into()),
            Self::End => first
                .and_then(|r| r.end_time)
                .map_or("".into(), |t| format_datetime(t).into()),
            Self::Repeat => first.map_or("".into(), |r| r.repeat_text().into()),
            Self::Title => truncate_to_width(&data.title, MAX_TITLE_WIDTH).into(),
            Self::Description => data.description.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &RecurringReminder) -> Option<Color> {
        match self {
            Self::Repeat if data.first_recurrence().is_some_and(|r| r.repeats()) => {
                Some(Color::Cyan)
            }
            _ => None,
        }
    }
}
