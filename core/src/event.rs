// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime};

use crate::recurrence::IntervalUnit;
use crate::recurring::RecurringReminder;
use crate::reminder::ReminderId;

/// Events accepted by [`crate::ReminderStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderEvent {
    /// Adds a reminder materialized from the template when its id is
    /// [`crate::NEW_ID`], otherwise replaces the reminder with the same id.
    AddOrUpdateRecurringReminder(RecurringReminder),

    /// Flips the completion flag.
    MarkCompleted(ReminderId),

    /// Moves the due time.
    Snooze { id: ReminderId, due: DateTime },

    /// Removes the reminder.
    Delete(ReminderId),

    /// Flips whether completed reminders are visible.
    ToggleShowCompleted,

    /// Sets the selected calendar date.
    SelectDate(Date),
}

/// Events accepted by [`crate::RecurringReminderStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringReminderEvent {
    /// Appends the template when its id is [`crate::NEW_ID`], otherwise
    /// replaces the template with the same id.
    Add(RecurringReminder),

    /// Removes the template.
    Delete(ReminderId),

    /// Replaces the interval unit filter, `None` shows all templates.
    SetFilter(Option<IntervalUnit>),
}
