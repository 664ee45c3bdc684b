// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use remindmate_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cmd_recurring::{
    CmdRecurringDelete, CmdRecurringEdit, CmdRecurringFilter, CmdRecurringList, CmdRecurringNew,
};
use crate::cmd_reminder::{
    CmdDate, CmdDelete, CmdDone, CmdEdit, CmdList, CmdNew, CmdOverdue, CmdSnooze,
    CmdToggleCompleted,
};
use crate::config::parse_config;
use crate::shell;

const RECURRING: &str = "recurring";

/// Run the RemindMate command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG`, warnings and errors by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to install the log subscriber: {e}");
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute, the interactive shell if none
    pub command: Option<Commands>,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("In-memory reminders with recurring templates")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the shell
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $REMINDMATE_CONFIG, then \
$XDG_CONFIG_HOME/remindmate/config.toml on Linux and MacOS, \
%APPDATA%/remindmate/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommands(Commands::subcommands())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some(_) => Some(Commands::from(matches)?),
            None => None,
        };
        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command, or the shell when there is none
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config).await?;
        let mut app = App::new(config);
        let logger = app.spawn_snapshot_logger();

        let result = match self.command {
            Some(command) => command.run(&mut app),
            None => shell::run(&mut app).await,
        };

        drop(app);
        logger.await?;
        result
    }
}

/// The commands available in the CLI and the shell
#[derive(Debug, Clone)]
pub enum Commands {
    /// List reminders
    List(CmdList),

    /// List incomplete reminders
    Overdue(CmdOverdue),

    /// Add a reminder
    New(CmdNew),

    /// Edit a reminder
    Edit(CmdEdit),

    /// Toggle completion of reminders
    Done(CmdDone),

    /// Move a reminder into the future
    Snooze(CmdSnooze),

    /// Delete reminders
    Delete(CmdDelete),

    /// Show or hide completed reminders
    ToggleCompleted(CmdToggleCompleted),

    /// Select a calendar date
    Date(CmdDate),

    /// List recurring reminders
    RecurringList(CmdRecurringList),

    /// Add a recurring reminder
    RecurringNew(CmdRecurringNew),

    /// Edit a recurring reminder
    RecurringEdit(CmdRecurringEdit),

    /// Delete recurring reminders
    RecurringDelete(CmdRecurringDelete),

    /// Filter recurring reminders by interval unit
    RecurringFilter(CmdRecurringFilter),
}

impl Commands {
    /// The subcommands shared by the CLI and the shell
    pub fn subcommands() -> Vec<Command> {
        vec![
            CmdList::command(),
            CmdOverdue::command(),
            CmdNew::command(),
            CmdEdit::command(),
            CmdDone::command(),
            CmdSnooze::command(),
            CmdDelete::command(),
            CmdToggleCompleted::command(),
            CmdDate::command(),
            Command::new(RECURRING)
                .alias("r")
                .about("Manage your recurring reminders")
                .arg_required_else_help(true)
                .subcommand_required(true)
                .subcommand(CmdRecurringList::command())
                .subcommand(CmdRecurringNew::command())
                .subcommand(CmdRecurringEdit::command())
                .subcommand(CmdRecurringDelete::command())
                .subcommand(CmdRecurringFilter::command()),
        ]
    }

    /// Create a command from the `ArgMatches` of a parent holding the subcommands
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdOverdue::NAME, matches)) => Overdue(CmdOverdue::from(matches)),
            Some((CmdNew::NAME, matches)) => New(CmdNew::from(matches)),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)),
            Some((CmdDone::NAME, matches)) => Done(CmdDone::from(matches)),
            Some((CmdSnooze::NAME, matches)) => Snooze(CmdSnooze::from(matches)),
            Some((CmdDelete::NAME, matches)) => Delete(CmdDelete::from(matches)),
            Some((CmdToggleCompleted::NAME, matches)) => {
                ToggleCompleted(CmdToggleCompleted::from(matches))
            }
            Some((CmdDate::NAME, matches)) => Date(CmdDate::from(matches)),
            Some((RECURRING, matches)) => match matches.subcommand() {
                Some((CmdRecurringList::NAME, matches)) => {
                    RecurringList(CmdRecurringList::from(matches))
                }
                Some((CmdRecurringNew::NAME, matches)) => {
                    RecurringNew(CmdRecurringNew::from(matches))
                }
                Some((CmdRecurringEdit::NAME, matches)) => {
                    RecurringEdit(CmdRecurringEdit::from(matches))
                }
                Some((CmdRecurringDelete::NAME, matches)) => {
                    RecurringDelete(CmdRecurringDelete::from(matches))
                }
                Some((CmdRecurringFilter::NAME, matches)) => {
                    RecurringFilter(CmdRecurringFilter::from(matches))
                }
                _ => return Err("Unknown recurring command".into()),
            },
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };
        Ok(command)
    }

    /// Run the command against the session's stores
    #[rustfmt::skip]
    pub fn run(self, app: &mut App) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            List(a)            => a.run(app),
            Overdue(a)         => a.run(app),
            New(a)             => a.run(app),
            Edit(a)            => a.run(app),
            Done(a)            => a.run(app),
            Snooze(a)          => a.run(app),
            Delete(a)          => a.run(app),
            ToggleCompleted(a) => a.run(app),
            Date(a)            => a.run(app),
            RecurringList(a)   => a.run(app),
            RecurringNew(a)    => a.run(app),
            RecurringEdit(a)   => a.run(app),
            RecurringDelete(a) => a.run(app),
            RecurringFilter(a) => a.run(app),
        }
    }
}
