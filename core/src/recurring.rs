// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::recurrence::RecurrenceRule;
use crate::reminder::{Reminder, ReminderId};

/// Id carried by a template that has not been stored yet.
pub const NEW_ID: ReminderId = 0;

/// A template describing one or more recurrence rules.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecurringReminder {
    /// [`NEW_ID`] for a template that is about to be added.
    pub id: ReminderId,

    /// Title of the template, copied into the materialized reminder's name.
    pub title: String,

    /// Free-form description, may be empty.
    #[serde(default)]
    pub description: String,

    /// Ordered recurrence rules; only the first one is consulted when
    /// materializing.
    pub recurrences: Vec<RecurrenceRule>,
}

impl RecurringReminder {
    /// Whether this template has not been assigned an id yet.
    pub fn is_new(&self) -> bool {
        self.id == NEW_ID
    }

    /// The first recurrence rule, if any.
    pub fn first_recurrence(&self) -> Option<&RecurrenceRule> {
        self.recurrences.first()
    }

    /// Derives a concrete, incomplete reminder from the first recurrence rule.
    ///
    /// Returns `None` when the template has no recurrence rules.
    pub fn materialize(&self, id: ReminderId) -> Option<Reminder> {
        let rule = self.first_recurrence()?;
        Some(Reminder::new(
            id,
            self.title.clone(),
            self.description.clone(),
            rule.start_time,
        ))
    }

    /// Copy of the template with the given id.
    pub(crate) fn with_id(&self, id: ReminderId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::recurrence::IntervalUnit;

    fn template(recurrences: Vec<RecurrenceRule>) -> RecurringReminder {
        RecurringReminder {
            id: NEW_ID,
            title: "Pay Rent".to_string(),
            description: "Monthly bill".to_string(),
            recurrences,
        }
    }

    #[test]
    fn materializes_from_first_recurrence_only() {
        let first = date(2025, 2, 1).at(10, 0, 0, 0);
        let second = date(2025, 3, 1).at(10, 0, 0, 0);
        let t = template(vec![
            RecurrenceRule::every(first, 1, IntervalUnit::Month),
            RecurrenceRule::every(second, 1, IntervalUnit::Month),
        ]);

        let reminder = t.materialize(4).unwrap();
        assert_eq!(reminder.id, 4);
        assert_eq!(reminder.name, "Pay Rent");
        assert_eq!(reminder.description, "Monthly bill");
        assert_eq!(reminder.due, first);
        assert!(!reminder.is_completed);
    }

    #[test]
    fn cannot_materialize_without_recurrences() {
        assert!(template(vec![]).materialize(1).is_none());
    }

    #[test]
    fn new_template_uses_sentinel_id() {
        let t = template(vec![]);
        assert!(t.is_new());
        assert!(!t.with_id(3).is_new());
        assert_eq!(t.with_id(3).title, t.title);
    }
}
