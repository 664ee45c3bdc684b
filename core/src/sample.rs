// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{DateTime, date};

use crate::datetime::minutes_from_now;
use crate::recurrence::{IntervalUnit, RecurrenceRule};
use crate::recurring::RecurringReminder;
use crate::reminder::{Reminder, ReminderId};

const SEEDS: [(&str, &str, i8); 5] = [
    ("Drink 2 glasses of water", "", 8),
    ("Walk the dog", "Take Leo for a walk", 9),
    ("Buy groceries", "", 10),
    ("Read a book", "Read Lord Of The Rings", 11),
    ("Exercise", "Do strength training", 12),
];

/// Deterministic sample reminders with ids `1..=target_size`, cycling through
/// five seeds due on 2023-08-23.
pub fn sample_reminders(target_size: usize) -> Vec<Reminder> {
    (0..target_size)
        .map(|index| {
            let (name, description, hour) = SEEDS[index % SEEDS.len()];
            let id = ReminderId::try_from(index + 1).unwrap_or(ReminderId::MAX);
            Reminder::new(id, name, description, date(2023, 8, 23).at(hour, 0, 0, 0))
        })
        .collect()
}

/// The eight sample recurring templates, starting relative to `now`.
pub fn sample_recurring_reminders(now: DateTime) -> Vec<RecurringReminder> {
    const HOUR: i64 = 60;
    const DAY: i64 = 24 * HOUR;

    #[rustfmt::skip]
    let rows: [(&str, &str, i64, u32, IntervalUnit); 8] = [
        ("Take out the trash", "Weekly chore",                    HOUR,         1,  IntervalUnit::Week),
        ("Daily Stand-up",     "Team meeting",                    30,           1,  IntervalUnit::Day),
        ("Pay Rent",           "Monthly bill",                    5 * DAY,      1,  IntervalUnit::Month),
        ("Water Plants",       "Keep the office green",           2 * HOUR,     3,  IntervalUnit::Day),
        ("Annual Review",      "Performance review with manager", 6 * 30 * DAY, 1,  IntervalUnit::Year),
        ("Check Emails",       "Every 30 minutes",                0,            30, IntervalUnit::Minute),
        ("Project Sync",       "Another weekly meeting",          2 * DAY,      1,  IntervalUnit::Week),
        ("One-off Task",       "No repeat",                       DAY,          0,  IntervalUnit::None),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((title, description, offset, interval, unit), id)| RecurringReminder {
            id,
            title: title.to_string(),
            description: description.to_string(),
            recurrences: vec![RecurrenceRule::every(
                minutes_from_now(now, offset),
                interval,
                unit,
            )],
        })
        .collect()
}
