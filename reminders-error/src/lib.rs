#![allow(clippy::multiple_crate_versions)]
//! Error types for the reminders aggregation workspace
//!
//! None of these errors ever reaches a consumer through an aggregation entry point: the
//! data source contract is infallible and every fault inside an aggregation degrades to an
//! empty page. [`ReminderError`] covers configuration mistakes, missing runtimes and internal
//! contract violations that are logged and swallowed at the entry-point boundary.
//!
//! # Examples
//!
//! ```
//! use reminders_error::{ReminderError, Result};
//!
//! fn fan_out(requested: usize) -> Result<usize> {
//!     if requested == 0 {
//!         return Err(ReminderError::invalid_config("fan-out must be at least 1"));
//!     }
//!     Ok(requested)
//! }
//!
//! assert!(fan_out(0).is_err());
//! ```

/// Root error type for all reminders operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReminderError {
    /// A configuration value was rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Why the value was rejected
        message: String,
    },

    /// An operation needed an async runtime but none was running
    #[error("No async runtime available: {context}")]
    NoRuntime {
        /// What was being set up
        context: String,
    },

    /// A page arrived after every slot of the aggregation was already merged
    #[error("Page arrived after all {expected} pages were merged")]
    PageAfterCompletion {
        /// Number of pages the aggregation expected
        expected: usize,
    },

    /// The aggregate was read before every page was merged
    #[error("Aggregate incomplete: expected {expected} pages, merged {merged}")]
    IncompleteAggregate {
        /// Number of pages the aggregation expected
        expected: usize,
        /// Number of pages merged so far
        merged: usize,
    },

    /// A count-down gate received an arrival after it had already opened
    #[error("Count-down gate already open")]
    GateAlreadyOpen,

    /// The aggregation state machine was asked to make an illegal move
    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition {
        /// Phase the aggregation was in
        from: String,
        /// Phase that was requested
        to: String,
    },

    /// A unit of work could not be handed to its execution context
    #[error("Dispatch failed: {context}")]
    DispatchFailed {
        /// Which dispatcher failed and why
        context: String,
    },
}

impl ReminderError {
    /// Create an invalid configuration error with the given message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a missing runtime error with the given context
    pub fn no_runtime(context: impl Into<String>) -> Self {
        Self::NoRuntime {
            context: context.into(),
        }
    }

    /// Create a dispatch failure with the given context
    pub fn dispatch_failed(context: impl Into<String>) -> Self {
        Self::DispatchFailed {
            context: context.into(),
        }
    }

    /// Create an invalid phase transition error
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an incomplete aggregate error
    #[must_use]
    pub const fn incomplete(expected: usize, merged: usize) -> Self {
        Self::IncompleteAggregate { expected, merged }
    }

    /// Check if this error is a broken internal invariant rather than a setup problem
    ///
    /// Contract violations are logged and degraded inside an aggregation; setup errors are
    /// returned to whoever built the service.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::PageAfterCompletion { .. }
                | Self::IncompleteAggregate { .. }
                | Self::GateAlreadyOpen
                | Self::InvalidTransition { .. }
        )
    }
}

/// Specialized Result type for reminders operations
///
/// ```
/// use reminders_error::Result;
///
/// fn build() -> Result<u8> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReminderError>;
