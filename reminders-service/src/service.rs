// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use reminders_core::AggregateResult;

/// Completion handler for [`ReminderService::fetch_reminders`].
pub type Completion = Box<dyn FnOnce(AggregateResult) + Send + 'static>;

/// Aggregates the pages of a data source through three equivalent calling conventions.
///
/// Every entry point fetches all pages concurrently, merges every reminder of every page and
/// delivers the aggregate exactly once, after the last page was merged. None of them can fail.
pub trait ReminderService: Send + Sync {
    /// Start an aggregation and return immediately; `completion` receives the aggregate.
    fn fetch_reminders(&self, completion: Completion);

    /// A stream that, once polled, emits the aggregate and ends.
    fn reminders_stream(&self) -> BoxStream<'static, AggregateResult>;

    /// A future that resolves to the aggregate.
    fn fetch_reminders_async(&self) -> BoxFuture<'static, AggregateResult>;
}
