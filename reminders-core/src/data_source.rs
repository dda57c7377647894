// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The contract every page provider fulfils.
//!
//! A data source hands out one [`Page`] per call through either of two equivalent entry
//! points. Fetches cannot fail; a provider with nothing to return answers with
//! [`Page::empty`].

use crate::Page;
use async_trait::async_trait;
use std::sync::Arc;

/// Completion handler for [`ReminderDataSource::fetch_page`].
///
/// Being `FnOnce` means a page can be delivered at most once per fetch.
pub type PageCallback = Box<dyn FnOnce(Page) + Send + 'static>;

/// Supplies one page of reminders per invocation.
///
/// Implementations must tolerate concurrent calls from several threads; aggregation issues
/// all of its fetches at once.
#[async_trait]
pub trait ReminderDataSource: Send + Sync {
    /// Start a fetch and invoke `on_complete` with its page once it is available.
    ///
    /// The callback may run on any thread, including the caller's.
    fn fetch_page(&self, on_complete: PageCallback);

    /// Fetch one page, suspending until it is available.
    async fn fetch_page_async(&self) -> Page;
}

#[async_trait]
impl<T> ReminderDataSource for Arc<T>
where
    T: ReminderDataSource + ?Sized,
{
    fn fetch_page(&self, on_complete: PageCallback) {
        self.as_ref().fetch_page(on_complete);
    }

    async fn fetch_page_async(&self) -> Page {
        self.as_ref().fetch_page_async().await
    }
}
