// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ReminderService, StatePublisher};
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use reminders_core::Reminder;
use std::sync::Arc;

/// What a reminders screen renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub is_loading: bool,
    pub reminders: Vec<Reminder>,
}

/// Consumer of a [`ReminderService`] that owns the loading flag.
///
/// Each `load*` method raises `is_loading`, calls exactly one service entry point, then stores
/// the aggregate and lowers the flag in a single state change. The service itself has no notion
/// of loading.
pub struct RemindersViewModel {
    service: Arc<dyn ReminderService>,
    state: Arc<StatePublisher<ViewState>>,
}

impl RemindersViewModel {
    #[must_use]
    pub fn new(service: Arc<dyn ReminderService>) -> Self {
        Self {
            service,
            state: Arc::new(StatePublisher::new(ViewState::default())),
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.current()
    }

    /// Every state change from now on.
    pub fn subscribe(&self) -> UnboundedReceiver<ViewState> {
        self.state.subscribe()
    }

    /// Load through the completion handler; returns before the reminders arrive.
    pub fn load_with_handler(&self) {
        self.start_loading();
        let state = Arc::clone(&self.state);
        self.service.fetch_reminders(Box::new(move |result| {
            state.publish(ViewState {
                is_loading: false,
                reminders: result.into_reminders(),
            });
        }));
    }

    /// Load through the stream entry point.
    pub async fn load_from_stream(&self) {
        self.start_loading();
        let reminders = self
            .service
            .reminders_stream()
            .next()
            .await
            .map(|result| result.into_reminders())
            .unwrap_or_default();
        self.finish_loading(reminders);
    }

    /// Load through the async entry point.
    pub async fn load(&self) {
        self.start_loading();
        let result = self.service.fetch_reminders_async().await;
        self.finish_loading(result.into_reminders());
    }

    fn start_loading(&self) {
        self.state.update(|current| ViewState {
            is_loading: true,
            reminders: current.reminders.clone(),
        });
    }

    fn finish_loading(&self, reminders: Vec<Reminder>) {
        self.state.publish(ViewState {
            is_loading: false,
            reminders,
        });
    }
}
