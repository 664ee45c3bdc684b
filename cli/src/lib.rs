// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface and interactive shell of RemindMate.
//!
//! The stores are constructed once per process and every command, whether
//! given on the command line or typed into the shell, is applied to them.

mod app;
mod arg;
mod cli;
mod cmd_recurring;
mod cmd_reminder;
mod config;
mod recurring_formatter;
mod reminder_formatter;
mod shell;
mod table;
mod util;

pub use crate::app::App;
pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
pub use crate::shell::ShellLine;
pub use crate::util::OutputFormat;
