// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the reminders workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `ScriptedDataSource`
//!
//! A data source that hands out predictable pages and records every fetch:
//!
//! ```rust
//! use reminders_core::ReminderDataSource;
//! use reminders_test_utils::ScriptedDataSource;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = ScriptedDataSource::canonical();
//!
//! let first = source.fetch_page_async().await;
//! let second = source.fetch_page_async().await;
//!
//! assert_eq!(first.reminders()[0].id.0, 1);
//! assert_eq!(second.reminders()[0].id.0, 5);
//! assert_eq!(source.records().len(), 2);
//! # }
//! ```
//!
//! Latency, random jitter and a per-call hook can be layered on with the builder methods.
//!
//! ## `GatedDataSource`
//!
//! Parks every fetch until the test releases it, which makes "nothing is delivered before
//! the last page" observable.
//!
//! ## `DroppingDataSource`
//!
//! Drops every callback without calling it, for exercising the empty-page fallbacks.
//!
//! ## Fixtures
//!
//! - `reminder(n)` - the reminder with id `n`
//! - `canonical_pages()` - `[r1..r4]`, `[r5..r8]`, `[r9..r12]`
//! - `canonical_ids()` - `{r1..r12}`

pub mod dropping_source;
pub mod fixtures;
pub mod gated_source;
pub mod helpers;
pub mod scripted_source;

pub use dropping_source::DroppingDataSource;
pub use fixtures::{canonical_ids, canonical_pages, page_of, reminder, PAGE_SIZE};
pub use gated_source::GatedDataSource;
pub use helpers::{assert_no_element_emitted, assert_started_together, expect_single_emission};
pub use scripted_source::{FetchPath, FetchRecord, ScriptedDataSource};
