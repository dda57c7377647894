// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Execution contexts for handler-style work.
//!
//! The handler entry point never awaits anything. It needs two places to run code: a
//! concurrent context to issue fetches from, and a context to deliver the merged result on.
//! Both are a [`Dispatcher`], so callers can pick threads, a tokio blocking pool, a single
//! "main" queue, or the current thread.

use std::sync::Arc;

/// A unit of work handed to a dispatcher.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs jobs on some execution context.
///
/// `dispatch` must not block waiting for the job to finish (except for
/// [`InlineDispatcher`](crate::InlineDispatcher), which runs it in place) and must never
/// silently drop a job.
pub trait Dispatcher: Send + Sync + 'static {
    fn dispatch(&self, job: Job);
}

impl<D> Dispatcher for Arc<D>
where
    D: Dispatcher + ?Sized,
{
    fn dispatch(&self, job: Job) {
        self.as_ref().dispatch(job);
    }
}
