// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reminders_core::ReminderDataSource;
use reminders_test_utils::{
    canonical_pages, page_of, FetchPath, GatedDataSource, ScriptedDataSource,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

#[tokio::test]
async fn test_canonical_pages_follow_call_order() {
    let source = ScriptedDataSource::canonical();

    let pages = vec![
        source.fetch_page_async().await,
        source.fetch_page_async().await,
        source.fetch_page_async().await,
    ];

    assert_eq!(pages, canonical_pages());
}

#[tokio::test]
async fn test_fixed_script_runs_out_into_empty_pages() {
    let source = ScriptedDataSource::from_pages(vec![page_of(1..=2)]);

    assert_eq!(source.fetch_page_async().await.len(), 2);
    assert!(source.fetch_page_async().await.is_empty());
}

#[test]
fn test_callback_fetch_completes_off_thread_and_is_recorded() -> anyhow::Result<()> {
    // Arrange
    let source = ScriptedDataSource::canonical().with_latency(Duration::from_millis(5));
    let (tx, rx) = mpsc::channel();

    // Act
    source.fetch_page(Box::new(move |page| {
        tx.send((page, std::thread::current().id())).unwrap();
    }));
    let (page, thread) = rx.recv_timeout(Duration::from_secs(5))?;

    // Assert
    assert_eq!(page, page_of(1..=4));
    assert_ne!(thread, std::thread::current().id());
    let records = source.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, FetchPath::Callback);
    assert_eq!(records[0].call, 1);
    Ok(())
}

#[tokio::test]
async fn test_hook_sees_every_call_number() {
    let seen = Arc::new(AtomicUsize::new(0));
    let source = ScriptedDataSource::canonical().with_hook({
        let seen = seen.clone();
        move |call| {
            seen.fetch_add(call, Ordering::SeqCst);
        }
    });

    for _ in 0..3 {
        source.fetch_page_async().await;
    }

    assert_eq!(seen.load(Ordering::SeqCst), 1 + 2 + 3);
    assert_eq!(source.calls(), 3);
}

#[tokio::test]
async fn test_gated_source_holds_pages_until_released() -> anyhow::Result<()> {
    // Arrange
    let source = Arc::new(GatedDataSource::new());
    let fetch = tokio::spawn({
        let source = source.clone();
        async move { source.fetch_page_async().await }
    });

    // Act
    assert!(source.wait_for_started(1, Duration::from_secs(5)).await);
    assert_eq!(source.waiting(), 1);
    assert!(source.release_next());

    // Assert
    assert_eq!(fetch.await?, page_of(1..=4));
    assert!(!source.release_next());
    Ok(())
}
