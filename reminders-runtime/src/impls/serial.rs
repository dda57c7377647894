// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Dispatcher, Job};
use async_channel::{unbounded, Sender};
use reminders_error::{ReminderError, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

/// A single dedicated thread that runs jobs one at a time, in submission order.
///
/// This is the stand-in for a UI-owning main queue: results delivered through a
/// `SerialDispatcher` are observed by one thread only. The thread exits once every clone of
/// the dispatcher is dropped and the queue is drained.
#[derive(Debug, Clone)]
pub struct SerialDispatcher {
    name: String,
    sender: Sender<Job>,
}

impl SerialDispatcher {
    /// Start the queue thread.
    ///
    /// # Errors
    /// Returns `DispatchFailed` if the thread cannot be started.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let (sender, receiver) = unbounded::<Job>();

        thread::Builder::new()
            .name(name.clone())
            .spawn({
                let name = name.clone();
                move || {
                    while let Ok(job) = receiver.recv_blocking() {
                        // A panicking job must not take the queue down with it.
                        if catch_unwind(AssertUnwindSafe(job)).is_err() {
                            error!("{}: job panicked", name);
                        }
                    }
                }
            })
            .map_err(|e| ReminderError::dispatch_failed(format!("{name}: {e}")))?;

        Ok(Self { name, sender })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Dispatcher for SerialDispatcher {
    fn dispatch(&self, job: Job) {
        if let Err(rejected) = self.sender.try_send(job) {
            warn!("{}: queue closed, running job inline", self.name);
            (rejected.into_inner())();
        }
    }
}
