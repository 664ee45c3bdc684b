// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tokio::sync::watch;

use crate::reminder::Reminder;
use crate::reminder_store::{ReminderStore, ReminderView};

/// Read-only projection of the incomplete reminders of a [`ReminderStore`].
///
/// NOTE: no comparison against the current time is made, every incomplete
/// reminder is listed regardless of its due time.
#[derive(Debug, Clone)]
pub struct OverdueView {
    rx: watch::Receiver<ReminderView>,
}

impl OverdueView {
    /// Follows the snapshots published by `store`.
    pub fn new(store: &ReminderStore) -> Self {
        Self {
            rx: store.subscribe(),
        }
    }

    /// Incomplete reminders of the latest snapshot, in insertion order.
    ///
    /// Unaffected by the store's completed filter.
    pub fn overdue_incomplete(&self) -> Vec<Reminder> {
        self.rx
            .borrow()
            .reminders
            .iter()
            .filter(|r| !r.is_completed)
            .cloned()
            .collect()
    }

    /// Waits for the store to publish a new snapshot.
    ///
    /// Returns `false` once the store has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
