// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the remindmate-core crate.
//!
//! These tests drive the stores through multi-step event sequences the way
//! a presentation layer does, and check the published snapshots.

mod event_sequences;
mod form_to_store;
mod recurring_lifecycle;
mod reminder_lifecycle;
