// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber holder for a piece of observable state.
//!
//! A [`StatePublisher`] keeps the current value and pushes every replacement to all active
//! subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: subscribers only see values published after they subscribed; use
//!   [`StatePublisher::current`] for the value at subscription time.
//! - **Unbounded**: unbounded channels, no backpressure.
//! - **Thread-safe**: publishing and subscribing work from any thread.
//!
//! ## Example
//!
//! ```
//! use futures::StreamExt;
//! use reminders_service::StatePublisher;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let publisher = StatePublisher::new(0);
//! let mut updates = publisher.subscribe();
//!
//! publisher.publish(1);
//! publisher.publish(2);
//!
//! assert_eq!(updates.next().await, Some(1));
//! assert_eq!(updates.next().await, Some(2));
//! assert_eq!(publisher.current(), 2);
//! # }
//! ```

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use parking_lot::Mutex;

struct PublisherState<T> {
    current: T,
    senders: Vec<UnboundedSender<T>>,
}

pub struct StatePublisher<T: Clone + Send + 'static> {
    state: Mutex<PublisherState<T>>,
}

impl<T: Clone + Send + 'static> StatePublisher<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Mutex::new(PublisherState {
                current: initial,
                senders: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn current(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Receive every value published from now on.
    pub fn subscribe(&self) -> UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded();
        self.state.lock().senders.push(tx);
        rx
    }

    /// Replace the current value and broadcast it. Subscribers that went away are pruned.
    pub fn publish(&self, value: T) {
        let mut state = self.state.lock();
        state
            .senders
            .retain(|tx| tx.unbounded_send(value.clone()).is_ok());
        state.current = value;
    }

    /// Derive the next value from the current one and publish it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let mut state = self.state.lock();
        let value = f(&state.current);
        state
            .senders
            .retain(|tx| tx.unbounded_send(value.clone()).is_ok());
        state.current = value;
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}
