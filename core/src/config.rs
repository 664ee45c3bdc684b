// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// The name of the RemindMate application.
pub const APP_NAME: &str = "remindmate";

/// Upper bound of the sample reminders a store is seeded with.
pub const MAX_SAMPLE_REMINDERS: usize = 20;

const MIN_SAMPLE_REMINDERS: usize = 1;

/// Configuration for the RemindMate core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of sample reminders the reminder store starts with.
    pub sample_reminders: usize,

    /// Whether completed reminders are visible initially.
    pub show_completed: bool,

    /// Minutes a quick snooze moves a reminder into the future.
    pub snooze_minutes: u32,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) {
        let clamped = self
            .sample_reminders
            .clamp(MIN_SAMPLE_REMINDERS, MAX_SAMPLE_REMINDERS);
        if clamped != self.sample_reminders {
            tracing::warn!(
                requested = self.sample_reminders,
                clamped,
                "sample_reminders out of range"
            );
            self.sample_reminders = clamped;
        }

        if self.snooze_minutes == 0 {
            tracing::warn!("snooze_minutes must be positive, using the default");
            self.snooze_minutes = Self::default().snooze_minutes;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_reminders: 5,
            show_completed: true,
            snooze_minutes: 30,
        }
    }
}
