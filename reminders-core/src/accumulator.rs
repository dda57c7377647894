// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The merge kernel shared by every aggregation entry point.
//!
//! A [`PageAccumulator`] knows how many pages a request fans out to, merges each page as it
//! arrives and refuses to hand out a result before every page is in. It does no locking of
//! its own: each entry point wraps it in that paradigm's serialization point (a mutex, the
//! exclusive state of a stream combinator, or the single task draining a task group).
//!
//! # Example
//!
//! ```
//! use reminders_core::{Page, PageAccumulator, MergeProgress, Reminder};
//! use std::num::NonZeroUsize;
//!
//! let mut accumulator = PageAccumulator::started(NonZeroUsize::new(2).unwrap());
//!
//! let progress = accumulator.merge(Page::new(vec![Reminder::new(1, "one")])).unwrap();
//! assert_eq!(progress, MergeProgress::Pending { remaining: 1 });
//! assert!(accumulator.deliver().is_err());
//!
//! let progress = accumulator.merge(Page::new(vec![Reminder::new(2, "two")])).unwrap();
//! assert_eq!(progress, MergeProgress::Complete);
//! assert_eq!(accumulator.deliver().unwrap().len(), 2);
//! ```

use crate::{AggregateResult, AggregationPhase, Page, Reminder};
use reminders_error::{ReminderError, Result};
use std::mem;
use std::num::NonZeroUsize;

/// Outcome of merging one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeProgress {
    /// More pages are still in flight.
    Pending { remaining: usize },
    /// This page was the last one; the aggregate can be delivered.
    Complete,
}

/// Accumulates the pages of one aggregation request.
#[derive(Debug)]
pub struct PageAccumulator {
    expected: usize,
    merged: usize,
    phase: AggregationPhase,
    reminders: Vec<Reminder>,
}

impl PageAccumulator {
    /// Create an idle accumulator expecting `fan_out` pages.
    #[must_use]
    pub const fn new(fan_out: NonZeroUsize) -> Self {
        Self {
            expected: fan_out.get(),
            merged: 0,
            phase: AggregationPhase::Idle,
            reminders: Vec::new(),
        }
    }

    /// Create an accumulator whose fetches have already been issued.
    #[must_use]
    pub fn started(fan_out: NonZeroUsize) -> Self {
        let expected = fan_out.get();
        Self {
            expected,
            merged: 0,
            phase: AggregationPhase::InFlight { expected },
            reminders: Vec::new(),
        }
    }

    /// Mark every fetch as issued.
    ///
    /// # Errors
    /// Returns `InvalidTransition` if the accumulator was already started.
    pub fn start(&mut self) -> Result<()> {
        self.phase = self.phase.start(self.expected)?;
        Ok(())
    }

    /// Merge one page into the aggregate.
    ///
    /// # Errors
    /// Returns `PageAfterCompletion` when every expected page was already merged; the page is
    /// discarded and the aggregate is left untouched.
    pub fn merge(&mut self, page: Page) -> Result<MergeProgress> {
        if self.is_complete() {
            return Err(ReminderError::PageAfterCompletion {
                expected: self.expected,
            });
        }

        self.phase = self.phase.record_merge()?;
        self.merged += 1;
        self.reminders.extend(page);

        debug!(
            "merged page {}/{} ({} reminders so far)",
            self.merged,
            self.expected,
            self.reminders.len()
        );

        Ok(if self.is_complete() {
            MergeProgress::Complete
        } else {
            MergeProgress::Pending {
                remaining: self.expected - self.merged,
            }
        })
    }

    /// Hand out the aggregate. Succeeds exactly once, after the last page was merged.
    ///
    /// # Errors
    /// Returns `IncompleteAggregate` while pages are outstanding and `InvalidTransition` if the
    /// aggregate was already delivered.
    pub fn deliver(&mut self) -> Result<AggregateResult> {
        if !self.is_complete() {
            return Err(ReminderError::incomplete(self.expected, self.merged));
        }

        self.phase = self.phase.deliver()?;
        Ok(AggregateResult::new(mem::take(&mut self.reminders)))
    }

    /// Whether every expected page has been merged.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(
            self.phase,
            AggregationPhase::AllMerged | AggregationPhase::Delivered
        )
    }

    #[must_use]
    pub const fn phase(&self) -> AggregationPhase {
        self.phase
    }

    #[must_use]
    pub const fn expected(&self) -> usize {
        self.expected
    }

    #[must_use]
    pub const fn merged(&self) -> usize {
        self.merged
    }
}
