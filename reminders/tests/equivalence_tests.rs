// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use reminders::prelude::*;
use reminders::ReminderId;
use reminders_test_utils::{canonical_pages, ScriptedDataSource};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

async fn via_handler(service: &DefaultReminderService) -> anyhow::Result<AggregateResult> {
    let (tx, rx) = oneshot::channel();
    service.fetch_reminders(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    Ok(tokio::time::timeout(Duration::from_secs(5), rx).await??)
}

async fn via_stream(service: &DefaultReminderService) -> anyhow::Result<AggregateResult> {
    service
        .reminders_stream()
        .next()
        .await
        .ok_or_else(|| anyhow::anyhow!("stream ended without an aggregate"))
}

fn fixed_service() -> DefaultReminderService {
    DefaultReminderService::new(Arc::new(ScriptedDataSource::from_pages(canonical_pages())))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_all_entry_points_agree_on_the_same_pages() -> anyhow::Result<()> {
    // Arrange
    let expected: BTreeSet<ReminderId> = (1..=12).map(ReminderId).collect();

    // Act
    let handled = via_handler(&fixed_service()).await?;
    let streamed = via_stream(&fixed_service()).await?;
    let awaited = fixed_service().fetch_reminders_async().await;

    // Assert
    assert_eq!(handled.ids(), expected);
    assert_eq!(streamed.ids(), expected);
    assert_eq!(awaited.ids(), expected);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_entry_points_can_run_side_by_side() -> anyhow::Result<()> {
    // Arrange
    let source = Arc::new(ScriptedDataSource::canonical().with_latency(Duration::from_millis(30)));
    let service = DefaultReminderService::new(source.clone());

    // Act
    let (handled, streamed, awaited) = tokio::join!(
        via_handler(&service),
        via_stream(&service),
        service.fetch_reminders_async()
    );
    let (handled, streamed) = (handled?, streamed?);

    // Assert
    assert_eq!(source.calls(), 9);
    assert_eq!(handled.len(), 12);
    assert_eq!(streamed.len(), 12);
    assert_eq!(awaited.len(), 12);

    let mut all = handled.ids();
    all.extend(streamed.ids());
    all.extend(awaited.ids());
    assert_eq!(all.len(), 36, "each page belongs to exactly one aggregate");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_reminders_across_pages_are_kept() -> anyhow::Result<()> {
    // Arrange
    let page = Page::from(vec![Reminder::new(1, "Water plants")]);
    let service = || {
        DefaultReminderService::new(Arc::new(ScriptedDataSource::from_pages(vec![
            page.clone(),
            page.clone(),
            page.clone(),
        ])))
    };

    // Act
    let handled = via_handler(&service()).await?;
    let streamed = via_stream(&service()).await?;
    let awaited = service().fetch_reminders_async().await;

    // Assert
    assert_eq!(handled.len(), 3);
    assert_eq!(streamed.len(), 3);
    assert_eq!(awaited.len(), 3);
    assert_eq!(handled.ids().len(), 1);
    assert_eq!(awaited.ids().len(), 1);
    Ok(())
}
