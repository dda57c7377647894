// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Dispatcher, Job};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

const DEFAULT_THREAD_NAME: &str = "reminders.worker";

/// Runs each job on its own named OS thread.
///
/// If the OS refuses to start a thread the job runs on the dispatching thread instead.
#[derive(Debug, Clone)]
pub struct ThreadDispatcher {
    name: String,
}

impl ThreadDispatcher {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for ThreadDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THREAD_NAME)
    }
}

impl Dispatcher for ThreadDispatcher {
    fn dispatch(&self, job: Job) {
        // The slot lets us take the job back if the thread never starts.
        let slot = Arc::new(Mutex::new(Some(job)));

        let spawned = thread::Builder::new().name(self.name.clone()).spawn({
            let slot = Arc::clone(&slot);
            move || {
                let job = slot.lock().take();
                if let Some(job) = job {
                    job();
                }
            }
        });

        if let Err(e) = spawned {
            warn!("{}: thread spawn failed ({}), running job inline", self.name, e);
            let job = slot.lock().take();
            if let Some(job) = job {
                job();
            }
        }
    }
}
