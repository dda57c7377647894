// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reminders_core::{Page, Reminder, ReminderId};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Reminders per page handed out by the canonical sources.
pub const PAGE_SIZE: u64 = 4;

#[must_use]
pub fn reminder(id: u64) -> Reminder {
    Reminder::new(id, format!("Reminder {id}"))
}

#[must_use]
pub fn page_of(ids: RangeInclusive<u64>) -> Page {
    ids.map(reminder).collect()
}

/// `[r1..r4]`, `[r5..r8]`, `[r9..r12]`
#[must_use]
pub fn canonical_pages() -> Vec<Page> {
    vec![page_of(1..=4), page_of(5..=8), page_of(9..=12)]
}

/// `{r1..r12}`
#[must_use]
pub fn canonical_ids() -> BTreeSet<ReminderId> {
    (1..=12).map(ReminderId).collect()
}
