// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{report, DefaultReminderService};
use futures::future::{BoxFuture, FutureExt};
use reminders_core::{AggregateResult, BackRef, Page, PageAccumulator, ReminderDataSource};
use tokio::task::JoinSet;

/// Spawn one child task per slot and drain them in completion order.
///
/// Only the awaiting task touches the accumulator, so no lock is needed. The returned future
/// must be polled inside a tokio runtime.
pub(super) fn fetch_reminders_async(
    service: &DefaultReminderService,
) -> BoxFuture<'static, AggregateResult> {
    let fan_out = service.config.fan_out();
    let back_ref = BackRef::new(&service.shared);

    async move {
        let mut accumulator = PageAccumulator::started(fan_out);
        let mut group = JoinSet::new();

        if back_ref.is_live() {
            for _ in 0..fan_out.get() {
                let back_ref = back_ref.clone();
                group.spawn(async move {
                    match back_ref.lookup() {
                        Some(shared) => shared.fetch_page_async().await,
                        None => {
                            debug!("fetch_reminders_async: service released, slot is empty");
                            Page::empty()
                        }
                    }
                });
            }
        } else {
            debug!("fetch_reminders_async: service released before start, every slot is empty");
            for _ in 0..fan_out.get() {
                if let Err(e) = accumulator.merge(Page::empty()) {
                    report("fetch_reminders_async", &e);
                }
            }
        }

        while let Some(joined) = group.join_next().await {
            let page = joined.unwrap_or_else(|e| {
                warn!("fetch_reminders_async: child task failed: {}", e);
                Page::empty()
            });
            if let Err(e) = accumulator.merge(page) {
                report("fetch_reminders_async", &e);
            }
        }

        accumulator.deliver().unwrap_or_else(|e| {
            report("fetch_reminders_async", &e);
            AggregateResult::default()
        })
    }
    .boxed()
}
