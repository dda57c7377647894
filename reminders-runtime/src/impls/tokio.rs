// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Dispatcher, Job};
use reminders_error::{ReminderError, Result};
use tokio::runtime::Handle;

/// Runs jobs on a tokio runtime's blocking pool.
///
/// Jobs are plain closures, so they go to `spawn_blocking` rather than onto the async
/// workers. The handle is captured at construction; dispatching works from any thread
/// afterwards.
#[derive(Debug, Clone)]
pub struct TokioDispatcher {
    handle: Handle,
}

impl TokioDispatcher {
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Capture the runtime the caller is running on.
    ///
    /// # Errors
    /// Returns `NoRuntime` when called outside a tokio runtime.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| ReminderError::no_runtime(format!("tokio dispatcher: {e}")))
    }
}

impl Dispatcher for TokioDispatcher {
    fn dispatch(&self, job: Job) {
        // Detached: completion is reported by the job itself.
        drop(self.handle.spawn_blocking(job));
    }
}
