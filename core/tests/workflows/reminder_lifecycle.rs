// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reminder lifecycle workflow tests.
//!
//! Tests the complete lifecycle of a reminder: create, edit, complete,
//! snooze, and delete, as seen through the reminder store.

use remindmate_core::{
    IntervalUnit, OverdueView, ReminderEvent, ReminderStore, sample_reminders,
};

use crate::common::{
    assert_ids, assert_unique_ids, assert_visible_consistent, at, reminder_store, test_template,
    today,
};

#[test]
fn reminder_lifecycle_create_edit_complete_delete() {
    // Arrange
    let mut store = ReminderStore::new(Vec::new(), true, today());

    // Act - create
    store.apply(ReminderEvent::AddOrUpdateRecurringReminder(test_template(
        "Call the plumber",
        at(10),
        IntervalUnit::None,
    )));

    // Assert - created
    assert_ids(&store, &[1]);
    let created = store.get(1).unwrap();
    assert_eq!(created.name, "Call the plumber");
    assert_eq!(created.due, at(10));
    assert!(!created.is_completed);

    // Act - edit through the template path
    let mut template = created.as_template();
    template.title = "Call the electrician".to_string();
    template.recurrences[0].start_time = at(14);
    store.apply(ReminderEvent::AddOrUpdateRecurringReminder(template));

    // Assert - edited in place
    assert_ids(&store, &[1]);
    let edited = store.get(1).unwrap();
    assert_eq!(edited.name, "Call the electrician");
    assert_eq!(edited.due, at(14));

    // Act - complete
    store.apply(ReminderEvent::MarkCompleted(1));
    assert!(store.get(1).unwrap().is_completed);

    // Act - delete
    store.apply(ReminderEvent::Delete(1));

    // Assert - gone
    assert!(store.reminders().is_empty());
    assert_visible_consistent(&store);
}

#[test]
fn reminder_lifecycle_ids_are_not_reused_after_delete() {
    // Arrange
    let mut store = reminder_store(&[1, 2, 3], true);

    // Act
    store.apply(ReminderEvent::Delete(3));
    store.apply(ReminderEvent::AddOrUpdateRecurringReminder(test_template(
        "Fresh",
        at(9),
        IntervalUnit::None,
    )));

    // Assert
    assert_ids(&store, &[1, 2, 4]);
}

#[test]
fn reminder_lifecycle_edit_resets_completion() {
    // Arrange
    let mut store = reminder_store(&[1], true);
    store.apply(ReminderEvent::MarkCompleted(1));
    let template = store.get(1).unwrap().as_template();

    // Act
    store.apply(ReminderEvent::AddOrUpdateRecurringReminder(template));

    // Assert
    assert!(!store.get(1).unwrap().is_completed);
}

#[test]
fn reminder_lifecycle_snooze_only_moves_due() {
    // Arrange
    let mut store = reminder_store(&[1, 2], true);
    let before = store.get(1).unwrap().clone();

    // Act
    store.apply(ReminderEvent::Snooze { id: 1, due: at(18) });

    // Assert
    let after = store.get(1).unwrap();
    assert_eq!(after.due, at(18));
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.description, before.description);
    assert_eq!(after.is_completed, before.is_completed);
    assert_eq!(store.get(2).unwrap().due, at(8));
}

#[test]
fn reminder_lifecycle_hiding_completed_reminders() {
    // Arrange
    let mut store = reminder_store(&[1, 2, 3], true);

    // Act
    store.apply(ReminderEvent::MarkCompleted(3));
    store.apply(ReminderEvent::ToggleShowCompleted);

    // Assert
    let visible: Vec<_> = store.visible_reminders().iter().map(|r| r.id).collect();
    assert_eq!(visible, [1, 2]);
    assert_eq!(store.reminders().len(), 3);
    assert_visible_consistent(&store);

    // Act - show them again
    store.apply(ReminderEvent::ToggleShowCompleted);
    assert_eq!(store.visible_reminders().len(), 3);
}

#[test]
fn reminder_lifecycle_select_date_leaves_list_untouched() {
    // Arrange
    let mut store = reminder_store(&[1, 2], false);
    let date = today().tomorrow().unwrap();

    // Act
    store.apply(ReminderEvent::SelectDate(date));

    // Assert
    assert_eq!(store.selected_date(), date);
    assert_eq!(store.view().selected_date, date);
    assert_eq!(store.visible_reminders().len(), 2);
}

#[test]
fn reminder_lifecycle_overdue_tracks_completion() {
    // Arrange
    let mut store = ReminderStore::new(sample_reminders(5), false, today());
    let overdue = OverdueView::new(&store);
    assert_eq!(overdue.overdue_incomplete().len(), 5);

    // Act
    store.apply(ReminderEvent::MarkCompleted(2));
    store.apply(ReminderEvent::MarkCompleted(4));
    store.apply(ReminderEvent::Delete(5));

    // Assert
    let ids: Vec<_> = overdue.overdue_incomplete().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 3]);
    assert_unique_ids(&store);
}
