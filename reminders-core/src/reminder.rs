// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// Identity of a reminder. Unique across every page a data source hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderId(pub u64);

impl Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A single reminder as returned by a data source.
///
/// Aggregation only relies on [`Reminder::id`]; the title is payload.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
}

impl Reminder {
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ReminderId(id),
            title: title.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ReminderId {
        self.id
    }
}

impl Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reminder[id={}, title={}]", self.id, self.title)
    }
}
