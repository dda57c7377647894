// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream building blocks for reminder aggregation.
//!
//! - [`page_stream`] wraps one callback-style fetch as a stream that emits a single page.
//! - [`JoinPagesExt::join_pages`] combines several page streams into a stream that emits one
//!   [`AggregateResult`](reminders_core::AggregateResult) after every input has produced its
//!   page, then ends.
//!
//! Both are lazy: nothing is fetched until the joined stream is first polled, and that first
//! poll starts every fetch at once.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod join_pages;
pub mod page_stream;

pub use self::join_pages::{JoinPages, JoinPagesExt};
pub use self::page_stream::{page_stream, PageStream};
