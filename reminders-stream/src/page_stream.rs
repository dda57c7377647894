// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use futures::stream::FusedStream;
use futures_channel::oneshot;
use reminders_core::{BackRef, Page, ReminderDataSource};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream that performs one callback-style fetch and emits its page.
///
/// The fetch starts on the first poll, not on construction. The data source is reached
/// through a [`BackRef`]; if it is gone by then the stream emits an empty page instead. A
/// fetch whose callback is dropped without being called also yields an empty page, so the
/// stream always emits exactly once before ending.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use reminders_core::BackRef;
/// use reminders_stream::page_stream;
/// use reminders_test_utils::ScriptedDataSource;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = Arc::new(ScriptedDataSource::canonical());
/// let mut pages = page_stream(BackRef::new(&source));
///
/// assert_eq!(pages.next().await.map(|page| page.len()), Some(4));
/// assert!(pages.next().await.is_none());
/// # }
/// ```
pub fn page_stream<D>(source: BackRef<D>) -> PageStream<D>
where
    D: ReminderDataSource + ?Sized,
{
    PageStream {
        source,
        state: FetchState::Idle,
    }
}

pub struct PageStream<D: ?Sized> {
    source: BackRef<D>,
    state: FetchState,
}

enum FetchState {
    Idle,
    Waiting(oneshot::Receiver<Page>),
    Done,
}

impl<D> Stream for PageStream<D>
where
    D: ReminderDataSource + ?Sized,
{
    type Item = Page;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            match &mut this.state {
                FetchState::Idle => {
                    let Some(source) = this.source.lookup() else {
                        debug!("page stream: aggregator released, emitting empty page");
                        this.state = FetchState::Done;
                        return Poll::Ready(Some(Page::empty()));
                    };

                    let (tx, rx) = oneshot::channel();
                    source.fetch_page(Box::new(move |page| {
                        // The receiver is gone only if the stream was dropped mid-fetch.
                        let _ = tx.send(page);
                    }));
                    this.state = FetchState::Waiting(rx);
                }
                FetchState::Waiting(rx) => {
                    let page = match Pin::new(rx).poll(cx) {
                        Poll::Pending => return Poll::Pending,
                        Poll::Ready(Ok(page)) => page,
                        Poll::Ready(Err(oneshot::Canceled)) => {
                            warn!("page stream: fetch callback dropped without a page");
                            Page::empty()
                        }
                    };
                    this.state = FetchState::Done;
                    return Poll::Ready(Some(page));
                }
                FetchState::Done => return Poll::Ready(None),
            }
        }
    }
}

impl<D> FusedStream for PageStream<D>
where
    D: ReminderDataSource + ?Sized,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, FetchState::Done)
    }
}
