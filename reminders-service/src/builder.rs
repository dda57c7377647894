// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::DefaultReminderService;
use reminders_core::{AggregationConfig, ReminderDataSource, Result, DEFAULT_FAN_OUT};
use reminders_runtime::{Dispatcher, InlineDispatcher, ThreadDispatcher};
use std::sync::Arc;

/// Configures a [`DefaultReminderService`].
///
/// ```rust
/// use reminders_runtime::SerialDispatcher;
/// use reminders_service::DefaultReminderService;
/// use reminders_test_utils::ScriptedDataSource;
/// use std::sync::Arc;
///
/// # fn main() -> reminders_core::Result<()> {
/// let service = DefaultReminderService::builder(Arc::new(ScriptedDataSource::canonical()))
///     .fan_out(4)
///     .delivery(SerialDispatcher::new("reminders.main")?)
///     .build()?;
///
/// assert_eq!(service.config().fan_out().get(), 4);
/// # Ok(())
/// # }
/// ```
pub struct ReminderServiceBuilder {
    source: Arc<dyn ReminderDataSource>,
    fan_out: usize,
    workers: Option<Arc<dyn Dispatcher>>,
    delivery: Option<Arc<dyn Dispatcher>>,
}

impl ReminderServiceBuilder {
    #[must_use]
    pub fn new(source: Arc<dyn ReminderDataSource>) -> Self {
        Self {
            source,
            fan_out: DEFAULT_FAN_OUT,
            workers: None,
            delivery: None,
        }
    }

    /// Pages fetched per request. Must be at least 1.
    #[must_use]
    pub const fn fan_out(mut self, fan_out: usize) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Where the handler entry point issues its fetches. Defaults to one thread per fetch.
    #[must_use]
    pub fn workers(mut self, workers: impl Dispatcher) -> Self {
        self.workers = Some(Arc::new(workers));
        self
    }

    /// Where the handler entry point invokes completions. Defaults to the thread that merged
    /// the last page.
    #[must_use]
    pub fn delivery(mut self, delivery: impl Dispatcher) -> Self {
        self.delivery = Some(Arc::new(delivery));
        self
    }

    /// # Errors
    /// Returns `InvalidConfig` when the fan-out is zero.
    pub fn build(self) -> Result<DefaultReminderService> {
        let config = AggregationConfig::with_fan_out(self.fan_out)?;
        let workers = self
            .workers
            .unwrap_or_else(|| Arc::new(ThreadDispatcher::default()));
        let delivery = self.delivery.unwrap_or_else(|| Arc::new(InlineDispatcher));

        Ok(DefaultReminderService::from_parts(
            self.source,
            config,
            workers,
            delivery,
        ))
    }
}
