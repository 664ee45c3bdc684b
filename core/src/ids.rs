// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::reminder::ReminderId;

/// Hands out ids for new records in a store.
///
/// Ids increase monotonically and are never reused, even after the record
/// holding one is deleted. Once [`ReminderId::MAX`] has been handed out (or
/// is already taken) the allocator is exhausted and yields nothing.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Option<ReminderId>,
}

impl IdAllocator {
    /// Starts after the largest existing id, or at `1` when there is none.
    pub fn after(existing: impl IntoIterator<Item = ReminderId>) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }

    /// The id the next call to [`IdAllocator::allocate`] returns.
    pub fn peek(&self) -> Option<ReminderId> {
        self.next
    }

    /// Takes the next free id, `None` once ids have run out.
    pub fn allocate(&mut self) -> Option<ReminderId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::after([])
    }
}
