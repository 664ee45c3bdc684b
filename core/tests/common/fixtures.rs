// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::civil::{Date, DateTime, date};
use remindmate_core::{
    IntervalUnit, NEW_ID, RecurrenceRule, RecurringReminder, RecurringReminderDraft, Reminder,
    ReminderId, ReminderStore,
};

/// The fixed date all fixtures are relative to.
#[must_use]
pub fn today() -> Date {
    date(2023, 8, 23)
}

/// `today()` at the given hour.
#[must_use]
pub fn at(hour: i8) -> DateTime {
    today().at(hour, 0, 0, 0)
}

/// A store holding one incomplete reminder per id, due at 08:00.
///
/// # Example
///
/// ```ignore
/// let store = reminder_store(&[1, 2, 3], false);
/// ```
#[must_use]
pub fn reminder_store(ids: &[ReminderId], show_completed: bool) -> ReminderStore {
    let reminders = ids
        .iter()
        .map(|&id| Reminder::new(id, format!("Reminder {id}"), "", at(8)))
        .collect();
    ReminderStore::new(reminders, show_completed, today())
}

/// A new template repeating every `unit`, starting at `start`.
#[must_use]
pub fn test_template(title: &str, start: DateTime, unit: IntervalUnit) -> RecurringReminder {
    let rule = match unit {
        IntervalUnit::None => RecurrenceRule::once(start),
        unit => RecurrenceRule::every(start, 1, unit),
    };
    RecurringReminder {
        id: NEW_ID,
        title: title.to_string(),
        description: String::new(),
        recurrences: vec![rule],
    }
}

/// A valid create-mode draft.
#[must_use]
pub fn test_draft(title: &str, start: DateTime) -> RecurringReminderDraft {
    RecurringReminderDraft {
        title: title.to_string(),
        start_time: Some(start),
        ..RecurringReminderDraft::new()
    }
}
