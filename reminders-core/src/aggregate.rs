// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Reminder, ReminderId};
use std::collections::BTreeSet;

/// The merged union of every page fetched for one aggregation request.
///
/// Order follows page arrival and carries no meaning; compare with [`AggregateResult::ids`]
/// when set semantics are wanted. Only a [`PageAccumulator`](crate::PageAccumulator) that has
/// merged every page can produce one, so holding an `AggregateResult` means the aggregation
/// completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateResult {
    reminders: Vec<Reminder>,
}

impl AggregateResult {
    pub(crate) const fn new(reminders: Vec<Reminder>) -> Self {
        Self { reminders }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    #[must_use]
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// The identities contained in this result, as a set.
    #[must_use]
    pub fn ids(&self) -> BTreeSet<ReminderId> {
        self.reminders.iter().map(Reminder::id).collect()
    }

    #[must_use]
    pub fn into_reminders(self) -> Vec<Reminder> {
        self.reminders
    }
}

impl IntoIterator for AggregateResult {
    type Item = Reminder;
    type IntoIter = std::vec::IntoIter<Reminder>;

    fn into_iter(self) -> Self::IntoIter {
        self.reminders.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregateResult {
    type Item = &'a Reminder;
    type IntoIter = std::slice::Iter<'a, Reminder>;

    fn into_iter(self) -> Self::IntoIter {
        self.reminders.iter()
    }
}
