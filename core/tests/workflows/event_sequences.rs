// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Invariants that must hold after arbitrary event sequences.

use remindmate_core::{IntervalUnit, OverdueView, ReminderEvent, ReminderStore};

use crate::common::{
    assert_unique_ids, assert_visible_consistent, at, reminder_store, test_template, today,
};

/// A mixed sequence touching every event kind, including unknown ids.
fn mixed_events() -> Vec<ReminderEvent> {
    let add = |title: &str| {
        ReminderEvent::AddOrUpdateRecurringReminder(test_template(title, at(9), IntervalUnit::None))
    };
    vec![
        add("a"),
        ReminderEvent::MarkCompleted(2),
        ReminderEvent::Delete(1),
        add("b"),
        ReminderEvent::ToggleShowCompleted,
        ReminderEvent::Snooze { id: 4, due: at(21) },
        ReminderEvent::MarkCompleted(4),
        ReminderEvent::Delete(42),
        ReminderEvent::MarkCompleted(42),
        add("c"),
        ReminderEvent::Delete(4),
        add("   "),
        ReminderEvent::SelectDate(today().yesterday().unwrap()),
        ReminderEvent::ToggleShowCompleted,
        ReminderEvent::MarkCompleted(6),
    ]
}

#[test]
fn event_sequences_keep_ids_unique_and_views_consistent() {
    // Arrange
    let mut store = reminder_store(&[1, 2, 3], true);

    // Act / Assert after every step
    for event in mixed_events() {
        store.apply(event);
        assert_unique_ids(&store);
        assert_visible_consistent(&store);
    }

    // Assert - 1 and 4 deleted, blank title rejected
    let ids: Vec<_> = store.reminders().iter().map(|r| r.id).collect();
    assert_eq!(ids, [2, 3, 5, 6]);
}

#[test]
fn event_sequences_double_completion_is_identity() {
    // Arrange
    let mut store = reminder_store(&[1, 2, 3], false);
    let before = store.reminders().to_vec();

    // Act
    for id in [1, 2, 3] {
        store.apply(ReminderEvent::MarkCompleted(id));
        store.apply(ReminderEvent::MarkCompleted(id));
    }

    // Assert
    assert_eq!(store.reminders(), before.as_slice());
}

#[test]
fn event_sequences_deleted_id_stays_dead() {
    // Arrange
    let mut store = reminder_store(&[1, 2], true);
    store.apply(ReminderEvent::Delete(2));
    let after_delete = store.reminders().to_vec();

    // Act
    store.apply(ReminderEvent::MarkCompleted(2));
    store.apply(ReminderEvent::Snooze { id: 2, due: at(12) });
    store.apply(ReminderEvent::Delete(2));
    let mut stale = test_template("zombie", at(12), IntervalUnit::None);
    stale.id = 2;
    store.apply(ReminderEvent::AddOrUpdateRecurringReminder(stale));

    // Assert
    assert_eq!(store.reminders(), after_delete.as_slice());
}

#[tokio::test]
async fn event_sequences_subscribers_see_latest_snapshot() {
    // Arrange
    let mut store = ReminderStore::new(Vec::new(), false, today());
    let mut rx = store.subscribe();
    let mut overdue = OverdueView::new(&store);

    // Act
    for title in ["a", "b", "c"] {
        store.apply(ReminderEvent::AddOrUpdateRecurringReminder(test_template(
            title,
            at(9),
            IntervalUnit::None,
        )));
    }
    store.apply(ReminderEvent::MarkCompleted(2));

    // Assert - only the latest value is observed
    rx.changed().await.unwrap();
    let view = rx.borrow_and_update().clone();
    let visible: Vec<_> = view.visible.iter().map(|r| r.id).collect();
    assert_eq!(visible, [1, 3]);
    assert!(!rx.has_changed().unwrap());

    assert!(overdue.changed().await);
    assert_eq!(overdue.overdue_incomplete().len(), 2);

    // Assert - late subscribers start from the current value
    let late = store.subscribe();
    assert_eq!(late.borrow().reminders.len(), 3);
}

#[tokio::test]
async fn event_sequences_noop_does_not_notify() {
    // Arrange
    let mut store = reminder_store(&[1], true);
    let rx = store.subscribe();

    // Act
    store.apply(ReminderEvent::Delete(99));
    store.apply(ReminderEvent::SelectDate(today()));

    // Assert
    assert!(!rx.has_changed().unwrap());
}
