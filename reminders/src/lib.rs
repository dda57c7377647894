// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Reminders
//!
//! Concurrent reminder aggregation with three interchangeable entry points.
//!
//! ## Overview
//!
//! A [`ReminderService`] fetches a fixed number of pages from a [`ReminderDataSource`] at the
//! same time, merges them in whatever order they finish, and hands back one
//! [`AggregateResult`] per request. The same request can be made three ways:
//!
//! - **Completion handler**: [`ReminderService::fetch_reminders`] returns immediately and calls
//!   the completion exactly once, on the configured delivery dispatcher.
//! - **Stream**: [`ReminderService::reminders_stream`] is lazy, emits one aggregate and ends.
//! - **Async**: [`ReminderService::fetch_reminders_async`] resolves to the aggregate.
//!
//! None of the three entry points shares join machinery with the others.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reminders::prelude::*;
//! use std::sync::Arc;
//!
//! # struct Source;
//! # #[async_trait::async_trait]
//! # impl ReminderDataSource for Source {
//! #     fn fetch_page(&self, on_complete: PageCallback) { on_complete(Page::empty()) }
//! #     async fn fetch_page_async(&self) -> Page { Page::empty() }
//! # }
//! #[tokio::main]
//! async fn main() {
//!     let service = DefaultReminderService::new(Arc::new(Source));
//!
//!     let reminders = service.fetch_reminders_async().await;
//!     println!("{} reminders", reminders.len());
//! }
//! ```

pub use reminders_core::{
    AggregateResult, AggregationConfig, AggregationPhase, BackRef, Page, PageCallback, Reminder,
    ReminderDataSource, ReminderError, ReminderId, Result, DEFAULT_FAN_OUT,
};
pub use reminders_runtime::{Dispatcher, InlineDispatcher, SerialDispatcher, ThreadDispatcher};
#[cfg(feature = "runtime-tokio")]
pub use reminders_runtime::TokioDispatcher;
pub use reminders_service::{
    Completion, DefaultReminderService, ReminderService, ReminderServiceBuilder,
    RemindersViewModel, StatePublisher, ViewState,
};
pub use reminders_stream::{page_stream, JoinPagesExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AggregateResult, DefaultReminderService, Page, PageCallback, Reminder,
        ReminderDataSource, ReminderService, RemindersViewModel,
    };
}
