// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurring reminder lifecycle workflow tests.

use remindmate_core::{
    IntervalUnit, RecurringReminderEvent, RecurringReminderStore, ReminderEvent, ReminderStore,
};

use crate::common::{at, test_template, today};

#[test]
fn recurring_lifecycle_add_filter_edit_delete() {
    // Arrange
    let mut store = RecurringReminderStore::new(Vec::new());

    // Act - add
    store.apply(RecurringReminderEvent::Add(test_template(
        "Stand-up",
        at(9),
        IntervalUnit::Day,
    )));
    store.apply(RecurringReminderEvent::Add(test_template(
        "Rent",
        at(9),
        IntervalUnit::Month,
    )));
    store.apply(RecurringReminderEvent::Add(test_template(
        "Retro",
        at(15),
        IntervalUnit::Day,
    )));

    // Assert - ids assigned in order
    let ids: Vec<_> = store.templates().iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2, 3]);

    // Act - filter
    store.apply(RecurringReminderEvent::SetFilter(Some(IntervalUnit::Day)));

    // Assert - filtered
    let titles: Vec<_> = store.filtered().iter().map(|t| t.title.clone()).collect();
    assert_eq!(titles, ["Stand-up", "Retro"]);

    // Act - edit the retro to weekly
    let mut retro = store.get(3).unwrap().clone();
    retro.recurrences[0].interval_unit = IntervalUnit::Week;
    store.apply(RecurringReminderEvent::Add(retro));

    // Assert - leaves the filter
    assert_eq!(store.filtered().len(), 1);
    assert_eq!(store.templates().len(), 3);

    // Act - delete and clear the filter
    store.apply(RecurringReminderEvent::Delete(1));
    store.apply(RecurringReminderEvent::SetFilter(None));

    // Assert
    let ids: Vec<_> = store.filtered().iter().map(|t| t.id).collect();
    assert_eq!(ids, [2, 3]);
}

#[test]
fn recurring_lifecycle_samples_filter_by_unit() {
    // Arrange
    let mut store = RecurringReminderStore::with_samples(at(8));
    assert_eq!(store.templates().len(), 8);

    // Act
    store.apply(RecurringReminderEvent::SetFilter(Some(IntervalUnit::Week)));

    // Assert
    let view = store.view();
    assert_eq!(view.filter, Some(IntervalUnit::Week));
    assert!(!view.filtered.is_empty());
    assert!(view.filtered.iter().all(|t| {
        t.recurrences
            .iter()
            .any(|r| r.interval_unit == IntervalUnit::Week)
    }));
}

#[test]
fn recurring_lifecycle_stores_are_independent() {
    // Arrange
    let mut reminders = ReminderStore::new(Vec::new(), true, today());
    let mut recurring = RecurringReminderStore::new(Vec::new());
    let template = test_template("Water plants", at(7), IntervalUnit::Day);

    // Act
    recurring.apply(RecurringReminderEvent::Add(template.clone()));
    reminders.apply(ReminderEvent::AddOrUpdateRecurringReminder(template));
    recurring.apply(RecurringReminderEvent::Delete(1));

    // Assert - deleting the template leaves the materialized reminder
    assert!(recurring.templates().is_empty());
    assert_eq!(reminders.reminders().len(), 1);
    assert_eq!(reminders.reminders()[0].name, "Water plants");
}
