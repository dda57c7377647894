// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fixtures::{page_of, PAGE_SIZE};
use async_trait::async_trait;
use parking_lot::Mutex;
use reminders_core::{Page, PageCallback, ReminderDataSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Which data source entry point a fetch came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPath {
    Callback,
    Async,
}

/// One observed fetch.
#[derive(Debug, Clone)]
pub struct FetchRecord {
    /// 1-based call number, in the order fetches started.
    pub call: usize,
    pub path: FetchPath,
    pub started: Instant,
}

type FetchHook = Box<dyn Fn(usize) + Send + Sync>;

enum Script {
    /// Call `n` returns ids `(n-1)*PAGE_SIZE+1 ..= n*PAGE_SIZE`.
    Generated,
    /// Call `n` returns the `n`th page, then empty pages.
    Fixed(Vec<Page>),
}

/// A data source with predictable pages and full call instrumentation.
///
/// Pages are assigned by call number when the fetch starts, so which page a fetch returns
/// does not depend on completion order. Callback fetches complete on a fresh thread, like a
/// network client would; async fetches complete on the awaiting task.
pub struct ScriptedDataSource {
    script: Script,
    calls: AtomicUsize,
    records: Mutex<Vec<FetchRecord>>,
    latency: Duration,
    jitter: Duration,
    hook: Option<FetchHook>,
}

impl ScriptedDataSource {
    /// Pages of four fresh reminders per call: `[r1..r4]`, `[r5..r8]`, `[r9..r12]`, ...
    #[must_use]
    pub fn canonical() -> Self {
        Self::with_script(Script::Generated)
    }

    /// Hand out `pages` in call order, then empty pages.
    #[must_use]
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self::with_script(Script::Fixed(pages))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            records: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
            jitter: Duration::ZERO,
            hook: None,
        }
    }

    /// Every fetch takes at least `latency` to complete.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Add a random delay of up to `jitter` per fetch, shuffling completion order.
    #[must_use]
    pub const fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Run `hook` with the call number at the start of every fetch, before it is scheduled.
    #[must_use]
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Number of fetches started so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every fetch started so far, in start order.
    #[must_use]
    pub fn records(&self) -> Vec<FetchRecord> {
        let mut records = self.records.lock().clone();
        records.sort_by_key(|record| record.call);
        records
    }

    fn begin(&self, path: FetchPath) -> (Page, Duration) {
        let started = Instant::now();
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.records.lock().push(FetchRecord {
            call,
            path,
            started,
        });

        if let Some(hook) = &self.hook {
            hook(call);
        }

        (self.page_for(call), self.delay())
    }

    fn page_for(&self, call: usize) -> Page {
        match &self.script {
            Script::Generated => {
                let first = (call as u64 - 1) * PAGE_SIZE + 1;
                page_of(first..=first + PAGE_SIZE - 1)
            }
            Script::Fixed(pages) => pages.get(call - 1).cloned().unwrap_or_default(),
        }
    }

    fn delay(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.latency;
        }
        let max_jitter = u64::try_from(self.jitter.as_micros()).unwrap_or(u64::MAX);
        self.latency + Duration::from_micros(fastrand::u64(0..=max_jitter))
    }
}

#[async_trait]
impl ReminderDataSource for ScriptedDataSource {
    fn fetch_page(&self, on_complete: PageCallback) {
        let (page, delay) = self.begin(FetchPath::Callback);
        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            on_complete(page);
        });
    }

    async fn fetch_page_async(&self) -> Page {
        let (page, delay) = self.begin(FetchPath::Async);
        // No suspension point without a delay: the fetch completes within its first poll.
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        page
    }
}
