// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::collections::HashSet;

use remindmate_core::{ReminderId, ReminderStore};

/// Asserts the store holds exactly `expected` ids, in order.
pub fn assert_ids(store: &ReminderStore, expected: &[ReminderId]) {
    let ids: Vec<_> = store.reminders().iter().map(|r| r.id).collect();
    assert_eq!(ids, expected, "Reminder ids mismatch");
}

/// Asserts no two reminders share an id.
pub fn assert_unique_ids(store: &ReminderStore) {
    let mut seen = HashSet::new();
    for reminder in store.reminders() {
        assert!(seen.insert(reminder.id), "Duplicate id {}", reminder.id);
    }
}

/// Asserts the published view agrees with the store's state.
///
/// # Panics
///
/// Panics if the snapshot is stale, if `visible` holds anything outside the
/// full list, or a completed reminder while completed ones are hidden.
pub fn assert_visible_consistent(store: &ReminderStore) {
    let view = store.view();
    assert_eq!(&*view.reminders, store.reminders(), "Snapshot is stale");
    assert_eq!(view.show_completed, store.show_completed());

    for reminder in view.visible.iter() {
        assert!(
            view.reminders.contains(reminder),
            "Visible reminder {} missing from the full list",
            reminder.id
        );
        if !view.show_completed {
            assert!(
                !reminder.is_completed,
                "Completed reminder {} is visible",
                reminder.id
            );
        }
    }

    let expected = if view.show_completed {
        view.reminders.len()
    } else {
        view.reminders.iter().filter(|r| !r.is_completed).count()
    };
    assert_eq!(view.visible.len(), expected);
}
