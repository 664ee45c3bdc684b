// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::Command;
use colored::Colorize;
use remindmate_core::APP_NAME;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::app::App;
use crate::cli::Commands;
use crate::util::split_args;

const EXIT: &str = "exit";

/// One line of shell input.
#[derive(Debug)]
pub enum ShellLine {
    Empty,
    Exit,
    Command(Commands),
}

impl ShellLine {
    fn command() -> Command {
        Command::new(APP_NAME)
            .no_binary_name(true)
            .subcommand_required(true)
            .disable_version_flag(true)
            .subcommands(Commands::subcommands())
            .subcommand(Command::new(EXIT).alias("quit").about("Leave the shell"))
    }

    /// Parses a line with the same command tree as the command line.
    pub fn parse(line: &str) -> Result<Self, Box<dyn Error>> {
        let args = split_args(line)?;
        if args.is_empty() {
            return Ok(Self::Empty);
        }

        let matches = Self::command().try_get_matches_from(args)?;
        match matches.subcommand_name() {
            Some(EXIT) => Ok(Self::Exit),
            _ => Ok(Self::Command(Commands::from(&matches)?)),
        }
    }
}

/// Reads commands from stdin and applies them until `exit` or end of input.
pub async fn run(app: &mut App) -> Result<(), Box<dyn Error>> {
    println!(
        "{} {}",
        APP_NAME.bold(),
        "interactive shell, type `help` for commands or `exit` to leave".italic()
    );

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match ShellLine::parse(&line) {
            Ok(ShellLine::Empty) => {}
            Ok(ShellLine::Exit) => break,
            Ok(ShellLine::Command(command)) => {
                if let Err(e) = command.run(app) {
                    println!("{} {}", "Error:".red(), e);
                }
            }
            Err(e) => match e.downcast::<clap::Error>() {
                // Help and usage errors render themselves
                Ok(e) => e.print()?,
                Err(e) => println!("{} {}", "Error:".red(), e),
            },
        }
    }

    tracing::debug!("leaving shell");
    Ok(())
}
