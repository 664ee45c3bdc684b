// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::sync::Arc;

use jiff::civil::Date;
use tokio::sync::watch;

use crate::config::Config;
use crate::event::ReminderEvent;
use crate::ids::IdAllocator;
use crate::recurring::{NEW_ID, RecurringReminder};
use crate::reminder::{Reminder, ReminderId};
use crate::sample::sample_reminders;

/// Owns the authoritative list of reminders and publishes its derived views.
#[derive(Debug)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
    show_completed: bool,
    selected_date: Date,
    ids: IdAllocator,
    tx: watch::Sender<ReminderView>,
}

impl ReminderStore {
    /// Creates a store holding `reminders` in the given order.
    ///
    /// A reminder with the unset id [`NEW_ID`], or whose id is already taken
    /// by an earlier one, is dropped.
    pub fn new(reminders: Vec<Reminder>, show_completed: bool, selected_date: Date) -> Self {
        let mut seen = HashSet::with_capacity(reminders.len());
        let reminders: Vec<_> = reminders
            .into_iter()
            .filter(|r| {
                let fresh = r.id != NEW_ID && seen.insert(r.id);
                if !fresh {
                    tracing::warn!(id = r.id, "dropping reminder with duplicate or unset id");
                }
                fresh
            })
            .collect();

        let ids = IdAllocator::after(reminders.iter().map(|r| r.id));
        let view = ReminderView::derive(&reminders, show_completed, selected_date);
        let (tx, _) = watch::channel(view);
        Self {
            reminders,
            show_completed,
            selected_date,
            ids,
            tx,
        }
    }

    /// Creates a store seeded with sample reminders as configured.
    pub fn with_config(config: &Config, today: Date) -> Self {
        tracing::debug!(
            size = config.sample_reminders,
            "seeding reminder store with sample data"
        );
        Self::new(
            sample_reminders(config.sample_reminders),
            config.show_completed,
            today,
        )
    }

    /// Applies an event and publishes a new snapshot if anything changed.
    pub fn apply(&mut self, event: ReminderEvent) {
        tracing::debug!(?event, "applying reminder event");
        if self.reduce(event) {
            self.publish();
        }
    }

    /// Subscribes to snapshots; the receiver starts at the latest one.
    pub fn subscribe(&self) -> watch::Receiver<ReminderView> {
        self.tx.subscribe()
    }

    /// The latest published snapshot.
    pub fn view(&self) -> ReminderView {
        self.tx.borrow().clone()
    }

    /// Reminders visible under the current completed filter.
    pub fn visible_reminders(&self) -> Arc<[Reminder]> {
        self.tx.borrow().visible.clone()
    }

    /// All reminders in insertion order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Looks up a reminder by id.
    pub fn get(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    /// Whether completed reminders are visible.
    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    /// The selected calendar date.
    pub fn selected_date(&self) -> Date {
        self.selected_date
    }

    fn reduce(&mut self, event: ReminderEvent) -> bool {
        match event {
            ReminderEvent::AddOrUpdateRecurringReminder(template) => self.add_or_update(template),
            ReminderEvent::MarkCompleted(id) => self.update(id, |r| {
                r.is_completed = !r.is_completed;
                tracing::debug!(id, completed = r.is_completed, "toggled completion");
            }),
            ReminderEvent::Snooze { id, due } => self.update(id, |r| {
                tracing::debug!(id, %due, "snoozing reminder");
                r.due = due;
            }),
            ReminderEvent::Delete(id) => {
                let before = self.reminders.len();
                self.reminders.retain(|r| r.id != id);
                let deleted = self.reminders.len() != before;
                if !deleted {
                    tracing::debug!(id, "no reminder to delete");
                }
                deleted
            }
            ReminderEvent::ToggleShowCompleted => {
                self.show_completed = !self.show_completed;
                true
            }
            ReminderEvent::SelectDate(date) => {
                let changed = self.selected_date != date;
                self.selected_date = date;
                changed
            }
        }
    }

    fn add_or_update(&mut self, template: RecurringReminder) -> bool {
        if template.title.trim().is_empty() {
            tracing::warn!(id = template.id, "ignoring template with a blank title");
            return false;
        }

        if template.is_new() {
            let Some(id) = self.ids.peek() else {
                tracing::warn!(title = %template.title, "no reminder ids left");
                return false;
            };
            let Some(reminder) = template.materialize(id) else {
                tracing::warn!(title = %template.title, "ignoring template without recurrence");
                return false;
            };
            self.ids.allocate();
            tracing::debug!(id = reminder.id, "adding reminder");
            self.reminders.push(reminder);
            return true;
        }

        let Some(slot) = self.reminders.iter_mut().find(|r| r.id == template.id) else {
            tracing::debug!(id = template.id, "no reminder to update");
            return false;
        };
        match template.materialize(template.id) {
            Some(reminder) => {
                tracing::debug!(id = reminder.id, "updating reminder");
                *slot = reminder;
                true
            }
            None => {
                tracing::warn!(id = template.id, "ignoring template without recurrence");
                false
            }
        }
    }

    fn update(&mut self, id: ReminderId, f: impl FnOnce(&mut Reminder)) -> bool {
        match self.reminders.iter_mut().find(|r| r.id == id) {
            Some(reminder) => {
                f(reminder);
                true
            }
            None => {
                tracing::debug!(id, "no reminder with this id");
                false
            }
        }
    }

    fn publish(&self) {
        let view = ReminderView::derive(&self.reminders, self.show_completed, self.selected_date);
        self.tx.send_replace(view);
    }
}

/// An immutable snapshot of a [`ReminderStore`].
///
/// `visible` is derived from `reminders` and `show_completed` of the same
/// snapshot, so the two never disagree.
#[derive(Debug, Clone)]
pub struct ReminderView {
    /// All reminders in insertion order.
    pub reminders: Arc<[Reminder]>,

    /// `reminders` without the completed ones unless `show_completed` is set.
    pub visible: Arc<[Reminder]>,

    /// Whether completed reminders are visible.
    pub show_completed: bool,

    /// The selected calendar date, display only.
    pub selected_date: Date,
}

impl ReminderView {
    fn derive(reminders: &[Reminder], show_completed: bool, selected_date: Date) -> Self {
        let all: Arc<[Reminder]> = reminders.into();
        let visible = if show_completed {
            all.clone()
        } else {
            reminders
                .iter()
                .filter(|r| !r.is_completed)
                .cloned()
                .collect()
        };
        Self {
            reminders: all,
            visible,
            show_completed,
            selected_date,
        }
    }

    /// Looks up a reminder by id among all reminders.
    pub fn find(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }
}
