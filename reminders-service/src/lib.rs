// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent reminder aggregation behind three calling conventions.
//!
//! [`DefaultReminderService`] fetches a fixed number of pages (three by default) from a
//! [`ReminderDataSource`](reminders_core::ReminderDataSource) concurrently and delivers their
//! union exactly once, through whichever entry point the caller picked:
//!
//! | entry point | delivery | serialization point |
//! | --- | --- | --- |
//! | [`fetch_reminders`](ReminderService::fetch_reminders) | completion handler on the delivery dispatcher | mutex + count-down gate |
//! | [`reminders_stream`](ReminderService::reminders_stream) | one stream item, then end | the join combinator's own state |
//! | [`fetch_reminders_async`](ReminderService::fetch_reminders_async) | future output | the task draining the task group |
//!
//! All three share one merge kernel, [`PageAccumulator`](reminders_core::PageAccumulator),
//! and none of them calls another.
//!
//! [`RemindersViewModel`] is a consumer in the style of an application view model: it tracks a
//! loading flag around whichever entry point it is asked to use.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod builder;
pub mod default_service;
pub mod service;
pub mod state_publisher;
pub mod view_model;

pub use self::builder::ReminderServiceBuilder;
pub use self::default_service::DefaultReminderService;
pub use self::service::{Completion, ReminderService};
pub use self::state_publisher::StatePublisher;
pub use self::view_model::{RemindersViewModel, ViewState};
