// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::DefaultReminderService;
use futures::stream::{BoxStream, StreamExt};
use reminders_core::{AggregateResult, BackRef};
use reminders_stream::{page_stream, JoinPagesExt};

/// One lazy single-page stream per slot, joined into a single emission.
///
/// Nothing is fetched until the returned stream is polled; its first poll starts every fetch.
pub(super) fn reminders_stream(
    service: &DefaultReminderService,
) -> BoxStream<'static, AggregateResult> {
    let back_ref = BackRef::new(&service.shared);
    let others = (1..service.config.fan_out().get())
        .map(|_| page_stream(back_ref.clone()))
        .collect();

    page_stream(back_ref).join_pages(others).boxed()
}
