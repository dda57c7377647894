// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use reminders_core::{Page, PageCallback, ReminderDataSource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A misbehaving data source that drops every callback without calling it.
///
/// The async entry point answers with an empty page.
#[derive(Debug, Default)]
pub struct DroppingDataSource {
    calls: AtomicUsize,
}

impl DroppingDataSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReminderDataSource for DroppingDataSource {
    fn fetch_page(&self, on_complete: PageCallback) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        drop(on_complete);
    }

    async fn fetch_page_async(&self) -> Page {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Page::empty()
    }
}
