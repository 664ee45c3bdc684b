// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;
use remindmate_core::{
    Config, OverdueView, RecurringReminderStore, ReminderStore, ReminderView, now_local,
};
use tokio::{sync::watch, task::JoinHandle};

/// The stores of a session, constructed once and shared by every command.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub reminders: ReminderStore,
    pub recurring: RecurringReminderStore,
    pub overdue: OverdueView,
    pinned_now: Option<DateTime>,
}

impl App {
    /// Seeds the stores from the configuration.
    pub fn new(config: Config) -> Self {
        let now = now_local();
        let reminders = ReminderStore::with_config(&config, now.date());
        let recurring = RecurringReminderStore::with_samples(now);
        let overdue = OverdueView::new(&reminders);
        Self {
            config,
            reminders,
            recurring,
            overdue,
            pinned_now: None,
        }
    }

    /// Freezes the clock, for deterministic output.
    pub fn with_now(mut self, now: DateTime) -> Self {
        self.pinned_now = Some(now);
        self
    }

    /// The current local time.
    pub fn now(&self) -> DateTime {
        self.pinned_now.unwrap_or_else(now_local)
    }

    /// Logs every snapshot the reminder store publishes until it is dropped.
    pub fn spawn_snapshot_logger(&self) -> JoinHandle<()> {
        let rx = self.reminders.subscribe();
        tokio::spawn(log_snapshots(rx))
    }
}

async fn log_snapshots(mut rx: watch::Receiver<ReminderView>) {
    while rx.changed().await.is_ok() {
        let view = rx.borrow_and_update().clone();
        tracing::debug!(
            total = view.reminders.len(),
            visible = view.visible.len(),
            show_completed = view.show_completed,
            selected_date = %view.selected_date,
            "reminder snapshot published"
        );
    }
    tracing::debug!("reminder store closed");
}
