// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The standard [`ReminderService`].
//!
//! Each entry point lives in its own module and uses only its own paradigm's primitives:
//!
//! - `handler`: dispatchers, a mutex and a [`CountDownGate`](reminders_core::CountDownGate)
//! - `stream`: [`page_stream`](reminders_stream::page_stream) joined with
//!   [`JoinPagesExt`](reminders_stream::JoinPagesExt)
//! - `suspend`: a tokio `JoinSet` drained by the awaiting task

mod handler;
mod stream;
mod suspend;

use crate::{Completion, ReminderService, ReminderServiceBuilder};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use reminders_core::{
    AggregateResult, AggregationConfig, Page, PageCallback, ReminderDataSource, ReminderError,
};
use reminders_runtime::{Dispatcher, InlineDispatcher, ThreadDispatcher};
use std::fmt;
use std::sync::Arc;

/// Aggregates pages from one data source.
///
/// # Example
///
/// ```rust
/// use reminders_service::{DefaultReminderService, ReminderService};
/// use reminders_test_utils::ScriptedDataSource;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let service = DefaultReminderService::new(Arc::new(ScriptedDataSource::canonical()));
///
/// let reminders = service.fetch_reminders_async().await;
///
/// assert_eq!(reminders.len(), 12);
/// # }
/// ```
///
/// The stream and async entry points only hold the service weakly while their work is in
/// flight. Dropping the service turns every fetch that has not started yet into an empty
/// page; the aggregation still completes.
pub struct DefaultReminderService {
    shared: Arc<ServiceShared>,
    config: AggregationConfig,
    workers: Arc<dyn Dispatcher>,
    delivery: Arc<dyn Dispatcher>,
}

/// State reachable from in-flight work.
pub(crate) struct ServiceShared {
    source: Arc<dyn ReminderDataSource>,
}

impl DefaultReminderService {
    /// Fan out to three pages, fetch from fresh threads and deliver handler results on the
    /// thread that merged the last page.
    #[must_use]
    pub fn new(source: Arc<dyn ReminderDataSource>) -> Self {
        Self::from_parts(
            source,
            AggregationConfig::default(),
            Arc::new(ThreadDispatcher::default()),
            Arc::new(InlineDispatcher),
        )
    }

    #[must_use]
    pub fn builder(source: Arc<dyn ReminderDataSource>) -> ReminderServiceBuilder {
        ReminderServiceBuilder::new(source)
    }

    pub(crate) fn from_parts(
        source: Arc<dyn ReminderDataSource>,
        config: AggregationConfig,
        workers: Arc<dyn Dispatcher>,
        delivery: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            shared: Arc::new(ServiceShared { source }),
            config,
            workers,
            delivery,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AggregationConfig {
        &self.config
    }
}

impl ReminderService for DefaultReminderService {
    fn fetch_reminders(&self, completion: Completion) {
        handler::fetch_reminders(self, completion);
    }

    fn reminders_stream(&self) -> BoxStream<'static, AggregateResult> {
        stream::reminders_stream(self)
    }

    fn fetch_reminders_async(&self) -> BoxFuture<'static, AggregateResult> {
        suspend::fetch_reminders_async(self)
    }
}

impl fmt::Debug for DefaultReminderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultReminderService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Log a fault raised inside an aggregation. Contract violations are degraded by the caller, so
/// they only warrant a warning.
fn report(context: &str, e: &ReminderError) {
    if e.is_contract_violation() {
        warn!("{}: {}", context, e);
    } else {
        error!("{}: {}", context, e);
    }
}

#[async_trait]
impl ReminderDataSource for ServiceShared {
    fn fetch_page(&self, on_complete: PageCallback) {
        self.source.fetch_page(on_complete);
    }

    async fn fetch_page_async(&self) -> Page {
        self.source.fetch_page_async().await
    }
}
