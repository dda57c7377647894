// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use futures::stream::FusedStream;
use reminders_core::{AggregateResult, Page, PageAccumulator, ReminderError};
use std::num::NonZeroUsize;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait joining page streams into a single aggregate emission.
pub trait JoinPagesExt: Stream<Item = Page> + Unpin + Sized {
    /// Wait for one page from `self` and from each of `others`, then emit their union once.
    ///
    /// # Behavior
    ///
    /// - Every input is polled from the very first poll, so all fetches are in flight together
    /// - Only the first page of each input is used; the input is dropped afterwards
    /// - An input that ends without a page contributes an empty page
    /// - Emits exactly one [`AggregateResult`] and then ends; there is no partial emission
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::{stream, StreamExt};
    /// use reminders_core::{Page, Reminder};
    /// use reminders_stream::JoinPagesExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let page = |id| stream::iter(vec![Page::new(vec![Reminder::new(id, "r")])]);
    ///
    /// let mut joined = page(1).join_pages(vec![page(2), page(3)]);
    ///
    /// assert_eq!(joined.next().await.map(|result| result.len()), Some(3));
    /// assert!(joined.next().await.is_none());
    /// # }
    /// ```
    fn join_pages(self, others: Vec<Self>) -> JoinPages<Self>;
}

impl<S> JoinPagesExt for S
where
    S: Stream<Item = Page> + Unpin,
{
    fn join_pages(self, others: Vec<Self>) -> JoinPages<Self> {
        let mut slots = Vec::with_capacity(others.len() + 1);
        slots.push(Some(self));
        slots.extend(others.into_iter().map(Some));

        let fan_out = NonZeroUsize::MIN.saturating_add(slots.len() - 1);
        JoinPages {
            slots,
            accumulator: PageAccumulator::started(fan_out),
            done: false,
        }
    }
}

/// Stream returned by [`JoinPagesExt::join_pages`].
pub struct JoinPages<S> {
    // `None` once that input has delivered its page.
    slots: Vec<Option<S>>,
    accumulator: PageAccumulator,
    done: bool,
}

impl<S> JoinPages<S> {
    /// Inputs that have not produced their page yet.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn merge(&mut self, page: Page) {
        if let Err(e) = self.accumulator.merge(page) {
            report(&e);
        }
    }
}

impl<S> Stream for JoinPages<S>
where
    S: Stream<Item = Page> + Unpin,
{
    type Item = AggregateResult;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.done {
            return Poll::Ready(None);
        }

        for index in 0..this.slots.len() {
            let Some(stream) = this.slots[index].as_mut() else {
                continue;
            };

            let page = match Pin::new(stream).poll_next(cx) {
                Poll::Pending => continue,
                Poll::Ready(Some(page)) => page,
                Poll::Ready(None) => {
                    warn!("join_pages: input {} ended without a page", index);
                    Page::empty()
                }
            };

            this.slots[index] = None;
            this.merge(page);
        }

        if !this.accumulator.is_complete() {
            return Poll::Pending;
        }

        this.done = true;
        match this.accumulator.deliver() {
            Ok(result) => {
                debug!("join_pages: emitting {} reminders", result.len());
                Poll::Ready(Some(result))
            }
            Err(e) => {
                report(&e);
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(1))
        }
    }
}

fn report(e: &ReminderError) {
    if e.is_contract_violation() {
        warn!("join_pages: {}", e);
    } else {
        error!("join_pages: {}", e);
    }
}

impl<S> FusedStream for JoinPages<S>
where
    S: Stream<Item = Page> + Unpin,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
