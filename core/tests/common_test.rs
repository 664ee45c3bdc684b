// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration test for the common module.
//!
//! Verifies that common test utilities work correctly.

mod common;

use remindmate_core::IntervalUnit;

use common::{at, reminder_store, test_draft, test_template};

#[test]
fn common_module_store_fixture_works() {
    let store = reminder_store(&[1, 2], false);
    common::assert_ids(&store, &[1, 2]);
    common::assert_unique_ids(&store);
    common::assert_visible_consistent(&store);
}

#[test]
fn common_module_template_fixture_works() {
    let template = test_template("Stand-up", at(9), IntervalUnit::Day);
    assert!(template.is_new());
    assert_eq!(template.recurrences[0].interval_unit, IntervalUnit::Day);

    let once = test_template("Dentist", at(9), IntervalUnit::None);
    assert!(!once.recurrences[0].repeats());
}

#[test]
fn common_module_draft_fixture_works() {
    let draft = test_draft("Walk the dog", at(9));
    assert!(draft.is_new());
    assert!(draft.validate().is_empty());
}
