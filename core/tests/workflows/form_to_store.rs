// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Form submission workflow tests.
//!
//! A draft is validated, submitted and forwarded to a store, like the edit
//! form of a presentation layer.

use remindmate_core::{
    DraftError, IntervalUnit, RecurringReminderDraft, RecurringReminderEvent,
    RecurringReminderStore, ReminderEvent, ReminderStore,
};

use crate::common::{at, reminder_store, test_draft, today};

#[test]
fn form_to_store_create_reminder() {
    // Arrange
    let mut store = ReminderStore::new(Vec::new(), true, today());
    let draft = RecurringReminderDraft {
        description: "  bring the invoice  ".to_string(),
        ..test_draft("  Dentist  ", at(11))
    };

    // Act
    let template = draft.submit().unwrap();
    store.apply(ReminderEvent::AddOrUpdateRecurringReminder(template));

    // Assert
    let reminder = store.get(1).unwrap();
    assert_eq!(reminder.name, "Dentist");
    assert_eq!(reminder.description, "bring the invoice");
    assert_eq!(reminder.due, at(11));
}

#[test]
fn form_to_store_edit_existing_reminder() {
    // Arrange
    let mut store = reminder_store(&[1, 2], true);
    let template = store.get(2).unwrap().as_template();
    let mut draft = RecurringReminderDraft::from_template(&template);
    assert!(!draft.is_new());

    // Act
    draft.title = "Renamed".to_string();
    draft.start_time = Some(at(20));
    store.apply(ReminderEvent::AddOrUpdateRecurringReminder(
        draft.submit().unwrap(),
    ));

    // Assert
    let ids: Vec<_> = store.reminders().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(store.get(2).unwrap().name, "Renamed");
    assert_eq!(store.get(2).unwrap().due, at(20));
}

#[test]
fn form_to_store_invalid_draft_never_reaches_store() {
    // Arrange
    let draft = RecurringReminderDraft {
        repeat_value: "two".to_string(),
        interval_unit: IntervalUnit::Day,
        ..RecurringReminderDraft::new()
    };

    // Act
    let errors = draft.validate();
    let result = draft.submit();

    // Assert
    assert_eq!(
        errors,
        [
            DraftError::BlankTitle,
            DraftError::MissingStartTime,
            DraftError::InvalidRepeatValue
        ]
    );
    assert_eq!(result, Err(DraftError::BlankTitle));
}

#[test]
fn form_to_store_recurring_template() {
    // Arrange
    let mut store = RecurringReminderStore::new(Vec::new());
    let draft = RecurringReminderDraft {
        repeat_value: "3".to_string(),
        interval_unit: IntervalUnit::Day,
        ..test_draft("Water plants", at(7))
    };

    // Act
    store.apply(RecurringReminderEvent::Add(draft.submit().unwrap()));

    // Assert
    let template = store.get(1).unwrap();
    assert_eq!(template.recurrences.len(), 1);
    assert_eq!(template.recurrences[0].repeat_interval, 3);
    assert_eq!(template.recurrences[0].repeat_text(), "Every 3 DAYs");
}
