// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use remindmate_core::{
    RecurringReminderDraft, Reminder, ReminderEvent, ReminderId, format_date, format_datetime,
    minutes_from_now, parse_date, parse_datetime,
};

use crate::app::App;
use crate::arg::{CommonArgs, DraftArgs, ReminderArgs, submit_draft};
use crate::reminder_formatter::ReminderFormatter;
use crate::util::OutputFormat;

const ARGS: ReminderArgs = ReminderArgs::new(false);

#[derive(Debug, Clone)]
pub struct CmdList {
    pub output_format: OutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List reminders, hiding completed ones if toggled off")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing reminders...");
        let view = app.reminders.view();
        if self.output_format == OutputFormat::Table {
            let filter = match view.show_completed {
                true => "all",
                false => "incomplete",
            };
            println!(
                "⏰ {} {}",
                "Reminders".bold(),
                format!("({filter}, {})", format_date(view.selected_date)).italic()
            );
        }
        print_reminders(app, &view.visible, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdOverdue {
    pub output_format: OutputFormat,
}

impl CmdOverdue {
    pub const NAME: &str = "overdue";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List every incomplete reminder")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing overdue reminders...");
        let reminders = app.overdue.overdue_incomplete();
        print_reminders(app, &reminders, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub fields: DraftArgs,
    pub output_format: OutputFormat,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new reminder")
            .arg(ARGS.title(true))
            .arg(ReminderArgs::start())
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
        tracing::debug!(?self, "adding new reminder...");
        let draft = self.fields.fill(RecurringReminderDraft::new(), app.now())?;
        let template = submit_draft(draft)?;

        let before = app.reminders.reminders().len();
        app.reminders
            .apply(ReminderEvent::AddOrUpdateRecurringReminder(template));
        let reminder = match app.reminders.reminders() {
            all if all.len() > before => all.last().cloned(),
            _ => None,
        }
        .ok_or("Reminder was not added")?;

        print_reminders(app, &[reminder], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub id: ReminderId,
    pub fields: DraftArgs,
    pub output_format: OutputFormat,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a reminder; completion is reset")
            .arg(ARGS.id())
            .arg(ARGS.title(false))
            .arg(ReminderArgs::start())
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
        tracing::debug!(?self, "editing reminder...");
        if self.fields.is_empty() {
            return Err("Nothing to edit, give at least one of --title, --start, --description".into());
        }

        let template = get_reminder(app, self.id)?.as_template();
        let draft = RecurringReminderDraft::from_template(&template);
        let draft = self.fields.fill(draft, app.now())?;
        let template = submit_draft(draft)?;

        app.reminders
            .apply(ReminderEvent::AddOrUpdateRecurringReminder(template));
        let reminder = get_reminder(app, self.id)?.clone();
        print_reminders(app, &[reminder], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDone {
    pub ids: Vec<ReminderId>,
    pub output_format: OutputFormat,
}

impl CmdDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("toggle")
            .about("Toggle the completion of reminders")
            .arg(ARGS.ids())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: ReminderArgs::get_ids(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling reminders...");
        ensure_exist(app, &self.ids)?;

        let mut reminders = Vec::with_capacity(self.ids.len());
        for id in self.ids {
            app.reminders.apply(ReminderEvent::MarkCompleted(id));
            reminders.push(get_reminder(app, id)?.clone());
        }
        print_reminders(app, &reminders, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdSnooze {
    pub id: ReminderId,
    pub minutes: Option<u32>,
    pub at: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdSnooze {
    pub const NAME: &str = "snooze";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Move a reminder into the future")
            .arg(ARGS.id())
            .arg(
                arg!(-m --minutes <MINUTES> "Snooze for N minutes, defaults to the configured value")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                arg!(--at <TIME> "Snooze until a specific time, which must be in the future")
                    .conflicts_with("minutes"),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: ReminderArgs::get_id(matches),
            minutes: matches.get_one("minutes").copied(),
            at: matches.get_one("at").cloned(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "snoozing reminder...");
        get_reminder(app, self.id)?;

        let now = app.now();
        let due = match self.at {
            Some(at) => {
                let due = parse_datetime(&at, now)?;
                if due <= now {
                    let due = format_datetime(due);
                    return Err(format!("Snooze time {due} is not in the future").into());
                }
                due
            }
            None => {
                let minutes = self.minutes.unwrap_or(app.config.snooze_minutes);
                minutes_from_now(now, i64::from(minutes))
            }
        };

        app.reminders
            .apply(ReminderEvent::Snooze { id: self.id, due });
        let reminder = get_reminder(app, self.id)?.clone();
        print_reminders(app, &[reminder], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDelete {
    pub ids: Vec<ReminderId>,
}

impl CmdDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete reminders")
            .arg(ARGS.ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: ReminderArgs::get_ids(matches),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting reminders...");
        ensure_exist(app, &self.ids)?;
        for id in self.ids {
            app.reminders.apply(ReminderEvent::Delete(id));
            println!("Deleted reminder {}", id.to_string().bold());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdToggleCompleted;

impl CmdToggleCompleted {
    pub const NAME: &str = "toggle-completed";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show or hide completed reminders")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!("toggling completed filter...");
        app.reminders.apply(ReminderEvent::ToggleShowCompleted);
        match app.reminders.show_completed() {
            true => println!("Completed reminders are shown"),
            false => println!("Completed reminders are hidden"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDate {
    pub date: String,
}

impl CmdDate {
    pub const NAME: &str = "date";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Select a calendar date")
            .arg(arg!(date: <DATE> "YYYY-MM-DD, today, tomorrow or yesterday"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: matches.get_one("date").cloned().unwrap_or_default(),
        }
    }

    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "selecting date...");
        let date = parse_date(&self.date, app.now().date())?;
        app.reminders.apply(ReminderEvent::SelectDate(date));
        println!("Selected date: {}", format_date(date).bold());
        Ok(())
    }
}

fn get_reminder(app: &App, id: ReminderId) -> Result<&Reminder, Box<dyn Error>> {
    app.reminders
        .get(id)
        .ok_or_else(|| format!("Reminder {id} not found").into())
}

fn ensure_exist(app: &App, ids: &[ReminderId]) -> Result<(), Box<dyn Error>> {
    for &id in ids {
        get_reminder(app, id)?;
    }
    Ok(())
}

fn print_reminders(app: &App, reminders: &[Reminder], output_format: OutputFormat) {
    if reminders.is_empty() && output_format == OutputFormat::Table {
        println!("{}", "No reminders".italic());
        return;
    }
    let formatter = ReminderFormatter::new(app.now()).with_output_format(output_format);
    println!("{}", formatter.format(reminders));
}
