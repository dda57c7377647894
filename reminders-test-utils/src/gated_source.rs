// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fixtures::{page_of, PAGE_SIZE};
use async_trait::async_trait;
use parking_lot::Mutex;
use reminders_core::{Page, PageCallback, ReminderDataSource};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

enum Waiter {
    Callback(PageCallback),
    Async(oneshot::Sender<Page>),
}

/// A data source whose fetches only complete when the test releases them.
///
/// Call `n` (1-based, in start order) carries the canonical page `n`. Releases happen in
/// start order; callback fetches complete on the releasing thread.
#[derive(Default)]
pub struct GatedDataSource {
    calls: AtomicUsize,
    waiting: Mutex<VecDeque<(usize, Waiter)>>,
}

impl GatedDataSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches started so far.
    #[must_use]
    pub fn started(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Fetches started but not yet released.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.waiting.lock().len()
    }

    /// Complete the oldest waiting fetch. Returns `false` if nothing was waiting.
    pub fn release_next(&self) -> bool {
        let next = self.waiting.lock().pop_front();
        let Some((call, waiter)) = next else {
            return false;
        };

        let first = (call as u64 - 1) * PAGE_SIZE + 1;
        let page = page_of(first..=first + PAGE_SIZE - 1);
        match waiter {
            Waiter::Callback(on_complete) => on_complete(page),
            Waiter::Async(tx) => {
                let _ = tx.send(page);
            }
        }
        true
    }

    pub fn release_all(&self) {
        while self.release_next() {}
    }

    /// Poll until `count` fetches have started or `timeout` passes.
    pub async fn wait_for_started(&self, count: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.started() < count {
            if Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        true
    }

    fn park(&self, waiter: Waiter) {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.waiting.lock().push_back((call, waiter));
    }
}

#[async_trait]
impl ReminderDataSource for GatedDataSource {
    fn fetch_page(&self, on_complete: PageCallback) {
        self.park(Waiter::Callback(on_complete));
    }

    async fn fetch_page_async(&self) -> Page {
        let (tx, rx) = oneshot::channel();
        self.park(Waiter::Async(tx));
        rx.await.unwrap_or_default()
    }
}
