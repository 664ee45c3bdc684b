// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;

use crate::recurrence::{IntervalUnit, RecurrenceRule};
use crate::recurring::RecurringReminder;

/// Identifier of a reminder or a recurring template, assigned by the owning store.
pub type ReminderId = u32;

/// A single actionable task with a due time and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Reminder {
    /// Unique within the store holding it, stable for the reminder's lifetime.
    pub id: ReminderId,

    /// Short name shown in lists.
    pub name: String,

    /// Free-form description, may be empty.
    #[serde(default)]
    pub description: String,

    /// Local date and time the reminder is due.
    pub due: DateTime,

    /// Whether the reminder has been completed.
    #[serde(default)]
    pub is_completed: bool,
}

impl Reminder {
    /// Creates an incomplete reminder.
    pub fn new(
        id: ReminderId,
        name: impl Into<String>,
        description: impl Into<String>,
        due: DateTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            due,
            is_completed: false,
        }
    }

    /// Converts the reminder into a one-shot template for the edit form.
    ///
    /// The template keeps the reminder's id so that submitting it updates the
    /// reminder in place.
    pub fn as_template(&self) -> RecurringReminder {
        RecurringReminder {
            id: self.id,
            title: self.name.clone(),
            description: self.description.clone(),
            recurrences: vec![RecurrenceRule {
                start_time: self.due,
                end_time: None,
                repeat_interval: 0,
                interval_unit: IntervalUnit::None,
            }],
        }
    }
}
