// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use remindmate_core::{
    IntervalUnit, RecurringReminder, RecurringReminderDraft, RecurringReminderEvent, ReminderId,
};

use crate::app::App;
use crate::arg::{CommonArgs, DraftArgs, ReminderArgs, submit_draft};
use crate::recurring_formatter::RecurringFormatter;
use crate::util::OutputFormat;

const ARGS: ReminderArgs = ReminderArgs::new(true);

#[derive(Debug, Clone)]
pub struct CmdRecurringList {
    pub output_format: OutputFormat,
}

impl CmdRecurringList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List recurring reminders matching the filter")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing recurring reminders...");
        let view = app.recurring.view();
        if self.output_format == OutputFormat::Table {
            let filter = view.filter.map_or("all".to_string(), |u| u.to_string());
            println!(
                "🔁 {} {}",
                "Recurring".bold(),
                format!("({filter})").italic()
            );
        }
        print_templates(&view.filtered, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRecurringNew {
    pub fields: DraftArgs,
    pub output_format: OutputFormat,
}

impl CmdRecurringNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new recurring reminder")
            .arg(ARGS.title(true))
            .arg(ReminderArgs::start())
            .arg(ReminderArgs::end())
            .arg(ReminderArgs::repeat())
            .arg(ReminderArgs::unit())
            .arg(ARGS.description())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: DraftArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new recurring reminder...");
        let draft = self.fields.fill(RecurringReminderDraft::new(), app.now())?;
        let template = submit_draft(draft)?;

        let before = app.recurring.templates().len();
        app.recurring.apply(RecurringReminderEvent::Add(template));
        let template = match app.recurring.templates() {
            all if all.len() > before => all.last().cloned(),
            _ => None,
        }
        .ok_or("Recurring reminder was not added")?;

        print_templates(&[template], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRecurringEdit {
    pub id: ReminderId,
    pub fields: DraftArgs,
    pub output_format: OutputFormat,
}

impl CmdRecurringEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a recurring reminder")
            .arg(ARGS.id())
            .arg(ARGS.title(false))
            .arg(ReminderArgs::start())
            .arg(ReminderArgs::end())
            .arg(ReminderArgs::repeat())
            .arg(ReminderArgs::unit())
            .arg(ARGS.description())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: ReminderArgs::get_id(matches),
            fields: DraftArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing recurring reminder...");
        if self.fields.is_empty() {
            return Err("Nothing to edit".into());
        }

        let draft = RecurringReminderDraft::from_template(get_template(app, self.id)?);
        let draft = self.fields.fill(draft, app.now())?;
        let mut template = submit_draft(draft)?;

        // The form edits the first rule only, keep the others
        let rest = get_template(app, self.id)?.recurrences.iter().skip(1).cloned();
        template.recurrences.extend(rest);

        app.recurring.apply(RecurringReminderEvent::Add(template));
        let template = get_template(app, self.id)?.clone();
        print_templates(&[template], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRecurringDelete {
    pub ids: Vec<ReminderId>,
}

impl CmdRecurringDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete recurring reminders")
            .arg(ARGS.ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: ReminderArgs::get_ids(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting recurring reminders...");
        for &id in &self.ids {
            get_template(app, id)?;
        }
        for id in self.ids {
            app.recurring.apply(RecurringReminderEvent::Delete(id));
            println!("Deleted recurring reminder {}", id.to_string().bold());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRecurringFilter {
    pub unit: Option<IntervalUnit>,
}

impl CmdRecurringFilter {
    pub const NAME: &str = "filter";

    pub fn command() -> Command {
        let units: Vec<_> = IntervalUnit::ALL.iter().map(|u| u.as_ref().to_lowercase()).collect();
        Command::new(Self::NAME)
            .about("Only list recurring reminders repeating in a unit")
            .arg(
                arg!(unit: <UNIT>)
                    .help(format!("{} or all", units.join(", ")))
                    .value_parser(parse_filter),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            unit: matches.get_one::<Option<IntervalUnit>>("unit").copied().flatten(),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "filtering recurring reminders...");
        app.recurring.apply(RecurringReminderEvent::SetFilter(self.unit));
        match self.unit {
            Some(unit) => println!("Showing recurring reminders every {}", unit.to_string().bold()),
            None => println!("Showing all recurring reminders"),
        }
        Ok(())
    }
}

fn parse_filter(s: &str) -> Result<Option<IntervalUnit>, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "all" | "any" => Ok(None),
        _ => s.parse().map(Some),
    }
}

fn get_template(app: &App, id: ReminderId) -> Result<&RecurringReminder, Box<dyn Error>> {
    app.recurring
        .get(id)
        .ok_or_else(|| format!("Recurring reminder {id} not found").into())
}

fn print_templates(templates: &[RecurringReminder], output_format: OutputFormat) {
    if templates.is_empty() && output_format == OutputFormat::Table {
        println!("{}", "No recurring reminders".italic());
        return;
    }
    let formatter = RecurringFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(templates));
}
