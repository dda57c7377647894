// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scripted_source::FetchRecord;
use futures::stream::StreamExt;
use futures::Stream;
use reminders_core::AggregateResult;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected emission, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Take the one aggregate a stream emits and check nothing follows it.
pub async fn expect_single_emission<S>(stream: &mut S) -> AggregateResult
where
    S: Stream<Item = AggregateResult> + Unpin,
{
    let result = stream.next().await.expect("expected one aggregate");
    assert!(
        stream.next().await.is_none(),
        "stream emitted more than one aggregate"
    );
    result
}

/// Every fetch must have started within `window` of the first one.
pub fn assert_started_together(records: &[FetchRecord], window: Duration) {
    let first = records.iter().map(|r| r.started).min().expect("no fetches recorded");
    let last = records.iter().map(|r| r.started).max().expect("no fetches recorded");
    let spread = last.duration_since(first);
    assert!(
        spread <= window,
        "fetches started {spread:?} apart, expected at most {window:?}"
    );
}
