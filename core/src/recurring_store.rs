// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::sync::Arc;

use jiff::civil::DateTime;
use tokio::sync::watch;

use crate::event::RecurringReminderEvent;
use crate::ids::IdAllocator;
use crate::recurrence::IntervalUnit;
use crate::recurring::RecurringReminder;
use crate::reminder::ReminderId;
use crate::sample::sample_recurring_reminders;

/// Owns the recurring reminder templates and publishes the filtered view.
///
/// Independent of [`crate::ReminderStore`]: adding a template here does not
/// create a reminder there.
#[derive(Debug)]
pub struct RecurringReminderStore {
    templates: Vec<RecurringReminder>,
    filter: Option<IntervalUnit>,
    ids: IdAllocator,
    tx: watch::Sender<RecurringView>,
}

impl RecurringReminderStore {
    /// Creates a store holding `templates`, with no filter.
    pub fn new(templates: Vec<RecurringReminder>) -> Self {
        let mut seen = HashSet::with_capacity(templates.len());
        let templates: Vec<_> = templates
            .into_iter()
            .filter(|t| {
                let fresh = !t.is_new() && seen.insert(t.id);
                if !fresh {
                    tracing::warn!(id = t.id, "dropping template with duplicate or unset id");
                }
                fresh
            })
            .collect();

        let ids = IdAllocator::after(templates.iter().map(|t| t.id));
        let view = RecurringView::derive(&templates, None);
        let (tx, _) = watch::channel(view);
        Self {
            templates,
            filter: None,
            ids,
            tx,
        }
    }

    /// Creates a store seeded with the sample templates relative to `now`.
    pub fn with_samples(now: DateTime) -> Self {
        Self::new(sample_recurring_reminders(now))
    }

    /// Applies an event and publishes a new snapshot if anything changed.
    pub fn apply(&mut self, event: RecurringReminderEvent) {
        tracing::debug!(?event, "applying recurring reminder event");
        let changed = match event {
            RecurringReminderEvent::Add(template) => self.add(template),
            RecurringReminderEvent::Delete(id) => {
                let before = self.templates.len();
                self.templates.retain(|t| t.id != id);
                let deleted = self.templates.len() != before;
                if !deleted {
                    tracing::debug!(id, "no template to delete");
                }
                deleted
            }
            RecurringReminderEvent::SetFilter(filter) => {
                let changed = self.filter != filter;
                self.filter = filter;
                changed
            }
        };

        if changed {
            let view = RecurringView::derive(&self.templates, self.filter);
            self.tx.send_replace(view);
        }
    }

    /// Subscribes to snapshots; the receiver starts at the latest one.
    pub fn subscribe(&self) -> watch::Receiver<RecurringView> {
        self.tx.subscribe()
    }

    /// The latest published snapshot.
    pub fn view(&self) -> RecurringView {
        self.tx.borrow().clone()
    }

    /// Templates matching the current filter.
    pub fn filtered(&self) -> Arc<[RecurringReminder]> {
        self.tx.borrow().filtered.clone()
    }

    /// All templates in insertion order.
    pub fn templates(&self) -> &[RecurringReminder] {
        &self.templates
    }

    /// Looks up a template by id.
    pub fn get(&self, id: ReminderId) -> Option<&RecurringReminder> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// The active interval unit filter.
    pub fn filter(&self) -> Option<IntervalUnit> {
        self.filter
    }

    fn add(&mut self, template: RecurringReminder) -> bool {
        if template.title.trim().is_empty() {
            tracing::warn!(id = template.id, "ignoring template with a blank title");
            return false;
        }

        if template.is_new() {
            let Some(id) = self.ids.allocate() else {
                tracing::warn!(title = %template.title, "no template ids left");
                return false;
            };
            let template = template.with_id(id);
            tracing::debug!(id = template.id, "adding template");
            self.templates.push(template);
            return true;
        }

        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => {
                tracing::debug!(id = template.id, "updating template");
                *slot = template;
                true
            }
            None => {
                tracing::debug!(id = template.id, "no template to update");
                false
            }
        }
    }
}

/// An immutable snapshot of a [`RecurringReminderStore`].
#[derive(Debug, Clone)]
pub struct RecurringView {
    /// All templates in insertion order.
    pub templates: Arc<[RecurringReminder]>,

    /// Templates with any recurrence in the `filter` unit, or all of them.
    pub filtered: Arc<[RecurringReminder]>,

    /// The active interval unit filter.
    pub filter: Option<IntervalUnit>,
}

impl RecurringView {
    fn derive(templates: &[RecurringReminder], filter: Option<IntervalUnit>) -> Self {
        let all: Arc<[RecurringReminder]> = templates.into();
        let filtered = match filter {
            None => all.clone(),
            Some(unit) => templates
                .iter()
                .filter(|t| t.recurrences.iter().any(|r| r.interval_unit == unit))
                .cloned()
                .collect(),
        };
        Self {
            templates: all,
            filtered,
            filter,
        }
    }
}
