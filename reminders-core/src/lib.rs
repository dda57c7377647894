// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod accumulator;
pub mod aggregate;
pub mod back_ref;
pub mod config;
pub mod count_down_gate;
pub mod data_source;
pub mod page;
pub mod phase;
pub mod reminder;

pub use self::accumulator::{MergeProgress, PageAccumulator};
pub use self::aggregate::AggregateResult;
pub use self::back_ref::BackRef;
pub use self::config::{AggregationConfig, DEFAULT_FAN_OUT};
pub use self::count_down_gate::{CountDownGate, GateStatus};
pub use self::data_source::{PageCallback, ReminderDataSource};
pub use self::page::Page;
pub use self::phase::AggregationPhase;
pub use self::reminder::{Reminder, ReminderId};
pub use reminders_error::{ReminderError, Result};
