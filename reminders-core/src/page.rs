// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Reminder;

/// One batch of reminders produced by exactly one data source fetch.
///
/// Pages are independent of each other; nothing is deduplicated when they are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    reminders: Vec<Reminder>,
}

impl Page {
    #[must_use]
    pub const fn new(reminders: Vec<Reminder>) -> Self {
        Self { reminders }
    }

    /// The page a slot degrades to when its fetch cannot run.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            reminders: Vec::new(),
        }
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

    #[must_use]
    pub fn into_reminders(self) -> Vec<Reminder> {
        self.reminders
    }
}

impl From<Vec<Reminder>> for Page {
    fn from(reminders: Vec<Reminder>) -> Self {
        Self::new(reminders)
    }
}

impl FromIterator<Reminder> for Page {
    fn from_iter<I: IntoIterator<Item = Reminder>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Page {
    type Item = Reminder;
    type IntoIter = std::vec::IntoIter<Reminder>;

    fn into_iter(self) -> Self::IntoIter {
        self.reminders.into_iter()
    }
}
