// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reminders_error::{ReminderError, Result};
use std::num::NonZeroUsize;

/// Number of pages one aggregation request fetches unless configured otherwise.
pub const DEFAULT_FAN_OUT: usize = 3;

/// Settings shared by every aggregation entry point of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationConfig {
    fan_out: NonZeroUsize,
}

impl AggregationConfig {
    /// Fetch `fan_out` pages per request.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when `fan_out` is zero.
    pub fn with_fan_out(fan_out: usize) -> Result<Self> {
        NonZeroUsize::new(fan_out)
            .map(|fan_out| Self { fan_out })
            .ok_or_else(|| ReminderError::invalid_config("fan-out must be at least 1"))
    }

    #[must_use]
    pub const fn fan_out(&self) -> NonZeroUsize {
        self.fan_out
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            fan_out: NonZeroUsize::new(DEFAULT_FAN_OUT).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
