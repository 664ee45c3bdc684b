// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;

use crate::recurrence::{IntervalUnit, RecurrenceRule};
use crate::recurring::{NEW_ID, RecurringReminder};
use crate::reminder::ReminderId;

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The title is empty or whitespace.
    #[error("Title must not be blank")]
    BlankTitle,

    /// No start time was chosen.
    #[error("Start time is required")]
    MissingStartTime,

    /// The repeat value contains something other than digits.
    #[error("Repeat value must be a non-negative number")]
    InvalidRepeatValue,
}

/// Editable, non-authoritative copy of a recurring reminder.
///
/// Validation happens here before an event is ever sent to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringReminderDraft {
    /// [`NEW_ID`] when creating, the edited template's id otherwise.
    pub id: ReminderId,
    pub title: String,
    pub description: String,
    pub start_time: Option<DateTime>,
    /// `None` when the recurrence has no end.
    pub end_time: Option<DateTime>,
    /// Raw repeat count as typed, parsed on submit.
    pub repeat_value: String,
    pub interval_unit: IntervalUnit,
}

impl RecurringReminderDraft {
    /// An empty draft for creating a new template.
    pub fn new() -> Self {
        Self {
            id: NEW_ID,
            title: String::new(),
            description: String::new(),
            start_time: None,
            end_time: None,
            repeat_value: "0".to_string(),
            interval_unit: IntervalUnit::None,
        }
    }

    /// A draft populated from an existing template; only its first
    /// recurrence rule is editable.
    pub fn from_template(template: &RecurringReminder) -> Self {
        let first = template.first_recurrence();
        Self {
            id: template.id,
            title: template.title.clone(),
            description: template.description.clone(),
            start_time: first.map(|r| r.start_time),
            end_time: first.and_then(|r| r.end_time),
            repeat_value: first.map_or(0, |r| r.repeat_interval).to_string(),
            interval_unit: first.map(|r| r.interval_unit).unwrap_or_default(),
        }
    }

    /// Whether this draft creates a new template.
    pub fn is_new(&self) -> bool {
        self.id == NEW_ID
    }

    /// All problems preventing submission, empty when the draft is valid.
    pub fn validate(&self) -> Vec<DraftError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(DraftError::BlankTitle);
        }
        if self.start_time.is_none() {
            errors.push(DraftError::MissingStartTime);
        }
        if !self.repeat_value.chars().all(|c| c.is_ascii_digit()) {
            errors.push(DraftError::InvalidRepeatValue);
        }
        errors
    }

    /// Builds the template to send to a store.
    ///
    /// Title and description are trimmed. The repeat interval is `0` for
    /// [`IntervalUnit::None`], otherwise the typed value, `1` if it is empty.
    pub fn submit(self) -> Result<RecurringReminder, DraftError> {
        if let Some(err) = self.validate().into_iter().next() {
            return Err(err);
        }
        let start_time = self.start_time.ok_or(DraftError::MissingStartTime)?;

        let repeat_interval = match self.interval_unit {
            IntervalUnit::None => 0,
            _ => self.repeat_value.parse().unwrap_or(1),
        };

        Ok(RecurringReminder {
            id: self.id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            recurrences: vec![RecurrenceRule {
                start_time,
                end_time: self.end_time,
                repeat_interval,
                interval_unit: self.interval_unit,
            }],
        })
    }
}

impl Default for RecurringReminderDraft {
    fn default() -> Self {
        Self::new()
    }
}
