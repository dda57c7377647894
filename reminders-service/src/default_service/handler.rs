// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{report, DefaultReminderService};
use crate::Completion;
use parking_lot::Mutex;
use reminders_core::{CountDownGate, Page, PageAccumulator, ReminderDataSource};
use std::sync::Arc;

/// Fan out on the worker dispatcher, merge under the accumulator lock, and let the last
/// arrival at the gate hand the aggregate to the delivery dispatcher.
pub(super) fn fetch_reminders(service: &DefaultReminderService, completion: Completion) {
    let fan_out = service.config.fan_out();
    let mut accumulator = PageAccumulator::new(fan_out);
    // Pages may merge as soon as the first fetch is dispatched.
    if let Err(e) = accumulator.start() {
        report("fetch_reminders", &e);
    }
    let accumulator = Arc::new(Mutex::new(accumulator));
    debug!("fetch_reminders: dispatching {} fetches", fan_out);

    let gate = CountDownGate::new(fan_out, {
        let accumulator = Arc::clone(&accumulator);
        let delivery = Arc::clone(&service.delivery);
        move || {
            // Read under the same lock the merges took; every merge is already in.
            let delivered = accumulator.lock().deliver();
            match delivered {
                Ok(result) => {
                    debug!("fetch_reminders: delivering {} reminders", result.len());
                    delivery.dispatch(Box::new(move || completion(result)));
                }
                Err(e) => report("fetch_reminders", &e),
            }
        }
    });

    for slot in 0..fan_out.get() {
        let shared = Arc::clone(&service.shared);
        let completion = SlotCompletion {
            slot,
            accumulator: Arc::clone(&accumulator),
            gate: gate.clone(),
            finished: false,
        };

        service.workers.dispatch(Box::new(move || {
            shared.fetch_page(Box::new(move |page| completion.complete(page)));
        }));
    }
}

/// One slot's share of the join: merge its page, then arrive at the gate.
///
/// A slot whose callback is dropped without ever being called merges an empty page instead,
/// so the gate still opens.
struct SlotCompletion {
    slot: usize,
    accumulator: Arc<Mutex<PageAccumulator>>,
    gate: CountDownGate,
    finished: bool,
}

impl SlotCompletion {
    fn complete(mut self, page: Page) {
        self.finish(page);
    }

    fn finish(&mut self, page: Page) {
        self.finished = true;

        let merged = self.accumulator.lock().merge(page);
        if let Err(e) = merged {
            report(&format!("fetch_reminders: slot {} page dropped", self.slot), &e);
            return;
        }
        if let Err(e) = self.gate.arrive() {
            report(&format!("fetch_reminders: slot {}", self.slot), &e);
        }
    }
}

impl Drop for SlotCompletion {
    fn drop(&mut self) {
        if !self.finished {
            warn!(
                "fetch_reminders: slot {} callback dropped without a page",
                self.slot
            );
            self.finish(Page::empty());
        }
    }
}
