// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Callback-driven join for work that completes through handlers.
//!
//! A [`CountDownGate`] starts at a fixed count. Every finished unit of work calls
//! [`CountDownGate::arrive`]; the arrival that brings the count to zero runs the gate's
//! `on_open` action on its own thread. Nobody ever blocks waiting for the gate.

use parking_lot::Mutex;
use reminders_error::{ReminderError, Result};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type OpenAction = Box<dyn FnOnce() + Send + 'static>;

/// What an arrival did to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// Other arrivals are still outstanding.
    Waiting { remaining: usize },
    /// This arrival opened the gate and ran its action.
    Opened,
}

/// A count-down latch that fires a one-shot action instead of waking waiters.
///
/// Cheap to clone; all clones share the same count.
#[derive(Clone)]
pub struct CountDownGate {
    inner: Arc<Inner>,
}

struct Inner {
    remaining: AtomicUsize,
    on_open: Mutex<Option<OpenAction>>,
}

impl CountDownGate {
    /// Create a gate that opens after `count` arrivals and then runs `on_open`.
    pub fn new<F>(count: NonZeroUsize, on_open: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                remaining: AtomicUsize::new(count.get()),
                on_open: Mutex::new(Some(Box::new(on_open))),
            }),
        }
    }

    /// Record one finished unit of work.
    ///
    /// The last arrival runs the open action before returning.
    ///
    /// # Errors
    /// Returns `GateAlreadyOpen` if the gate had already reached zero; the action is not run
    /// a second time.
    pub fn arrive(&self) -> Result<GateStatus> {
        // AcqRel: the opening arrival must observe every write made before earlier arrivals.
        let previous = self
            .inner
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .map_err(|_| ReminderError::GateAlreadyOpen)?;

        if previous > 1 {
            return Ok(GateStatus::Waiting {
                remaining: previous - 1,
            });
        }

        let action = self.inner.on_open.lock().take();
        if let Some(action) = action {
            action();
        }
        Ok(GateStatus::Opened)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inner.remaining.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.remaining() == 0
    }
}

impl fmt::Debug for CountDownGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountDownGate")
            .field("remaining", &self.remaining())
            .finish()
    }
}
