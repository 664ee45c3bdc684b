// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! RemindMate core: reminder records, recurring templates and the in-memory
//! stores that own them.
//!
//! Every store is a reducer: events go in through a single `apply` entry
//! point and an immutable snapshot of the derived views is published after
//! each change. Readers hold a [`tokio::sync::watch::Receiver`] and always
//! observe the latest snapshot.

mod config;
mod datetime;
mod draft;
mod event;
mod ids;
mod overdue;
mod recurrence;
mod recurring;
mod recurring_store;
mod reminder;
mod reminder_store;
mod sample;

pub use crate::config::{APP_NAME, Config, MAX_SAMPLE_REMINDERS};
pub use crate::datetime::{
    ParseError, format_date, format_datetime, minutes_from_now, now_local, parse_date,
    parse_datetime,
};
pub use crate::draft::{DraftError, RecurringReminderDraft};
pub use crate::event::{RecurringReminderEvent, ReminderEvent};
pub use crate::ids::IdAllocator;
pub use crate::overdue::OverdueView;
pub use crate::recurrence::{IntervalUnit, RecurrenceRule};
pub use crate::recurring::{NEW_ID, RecurringReminder};
pub use crate::recurring_store::{RecurringReminderStore, RecurringView};
pub use crate::reminder::{Reminder, ReminderId};
pub use crate::reminder_store::{ReminderStore, ReminderView};
pub use crate::sample::{sample_recurring_reminders, sample_reminders};
