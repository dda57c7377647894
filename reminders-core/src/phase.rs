// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reminders_error::{ReminderError, Result};
use std::fmt::{self, Display};

/// Lifecycle of a single aggregation request.
///
/// ```text
/// Idle -> InFlight -> (PartialMerge)* -> AllMerged -> Delivered
/// ```
///
/// `Delivered` is terminal. A new request always starts from a fresh `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationPhase {
    Idle,
    InFlight { expected: usize },
    PartialMerge { merged: usize, expected: usize },
    AllMerged,
    Delivered,
}

impl AggregationPhase {
    /// Every fetch has been issued.
    ///
    /// # Errors
    /// Returns `InvalidTransition` unless the phase is `Idle`.
    pub fn start(self, expected: usize) -> Result<Self> {
        match self {
            Self::Idle => Ok(Self::InFlight { expected }),
            other => Err(ReminderError::invalid_transition(other, "InFlight")),
        }
    }

    /// One more page has been merged.
    ///
    /// # Errors
    /// Returns `InvalidTransition` when nothing was started or every page is already merged.
    pub fn record_merge(self) -> Result<Self> {
        let (merged, expected) = match self {
            Self::InFlight { expected } => (1, expected),
            Self::PartialMerge { merged, expected } => (merged + 1, expected),
            Self::Idle | Self::AllMerged | Self::Delivered => {
                return Err(ReminderError::invalid_transition(self, "PartialMerge"))
            }
        };

        if merged >= expected {
            Ok(Self::AllMerged)
        } else {
            Ok(Self::PartialMerge { merged, expected })
        }
    }

    /// The merged result has been handed to the consumer.
    ///
    /// # Errors
    /// Returns `InvalidTransition` unless the phase is `AllMerged`.
    pub fn deliver(self) -> Result<Self> {
        match self {
            Self::AllMerged => Ok(Self::Delivered),
            other => Err(ReminderError::invalid_transition(other, "Delivered")),
        }
    }

    /// Pages merged so far, when the phase still tracks a count.
    #[must_use]
    pub const fn merged(self) -> Option<usize> {
        match self {
            Self::InFlight { .. } => Some(0),
            Self::PartialMerge { merged, .. } => Some(merged),
            Self::Idle | Self::AllMerged | Self::Delivered => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl Display for AggregationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::InFlight { expected } => write!(f, "InFlight({expected})"),
            Self::PartialMerge { merged, expected } => {
                write!(f, "PartialMerge({merged}/{expected})")
            }
            Self::AllMerged => write!(f, "AllMerged"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}
