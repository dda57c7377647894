// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reminders_core::{
    AggregationPhase, MergeProgress, Page, PageAccumulator, Reminder, ReminderError, ReminderId,
};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

fn page(ids: std::ops::RangeInclusive<u64>) -> Page {
    ids.map(|id| Reminder::new(id, format!("Reminder {id}")))
        .collect()
}

fn three() -> NonZeroUsize {
    NonZeroUsize::new(3).unwrap()
}

#[test]
fn test_merges_three_pages_into_twelve_reminders() {
    // Arrange
    let mut accumulator = PageAccumulator::started(three());

    // Act
    let first = accumulator.merge(page(1..=4)).unwrap();
    let second = accumulator.merge(page(5..=8)).unwrap();
    let third = accumulator.merge(page(9..=12)).unwrap();
    let result = accumulator.deliver().unwrap();

    // Assert
    assert_eq!(first, MergeProgress::Pending { remaining: 2 });
    assert_eq!(second, MergeProgress::Pending { remaining: 1 });
    assert_eq!(third, MergeProgress::Complete);
    assert_eq!(result.len(), 12);
    assert_eq!(result.ids(), (1..=12).map(ReminderId).collect::<BTreeSet<_>>());
}

#[test]
fn test_arrival_order_does_not_change_contents() {
    let mut forward = PageAccumulator::started(three());
    let mut reverse = PageAccumulator::started(three());

    for ids in [1..=4, 5..=8, 9..=12] {
        forward.merge(page(ids)).unwrap();
    }
    for ids in [9..=12, 5..=8, 1..=4] {
        reverse.merge(page(ids)).unwrap();
    }

    assert_eq!(
        forward.deliver().unwrap().ids(),
        reverse.deliver().unwrap().ids()
    );
}

#[test]
fn test_refuses_partial_delivery() {
    // Arrange
    let mut accumulator = PageAccumulator::started(three());
    accumulator.merge(page(1..=4)).unwrap();
    accumulator.merge(page(5..=8)).unwrap();

    // Act
    let result = accumulator.deliver();

    // Assert
    assert_eq!(result, Err(ReminderError::incomplete(3, 2)));
    assert_eq!(
        accumulator.phase(),
        AggregationPhase::PartialMerge {
            merged: 2,
            expected: 3
        }
    );
}

#[test]
fn test_delivers_exactly_once() {
    let mut accumulator = PageAccumulator::started(NonZeroUsize::MIN);
    accumulator.merge(page(1..=4)).unwrap();

    assert_eq!(accumulator.deliver().unwrap().len(), 4);
    assert!(matches!(
        accumulator.deliver(),
        Err(ReminderError::InvalidTransition { .. })
    ));
    assert_eq!(accumulator.phase(), AggregationPhase::Delivered);
}

#[test]
fn test_rejects_page_after_completion() {
    // Arrange
    let mut accumulator = PageAccumulator::started(NonZeroUsize::MIN);
    accumulator.merge(page(1..=4)).unwrap();

    // Act
    let late = accumulator.merge(page(5..=8));

    // Assert
    assert_eq!(late, Err(ReminderError::PageAfterCompletion { expected: 1 }));
    assert_eq!(accumulator.merged(), 1);
    assert_eq!(accumulator.deliver().unwrap().len(), 4);
}

#[test]
fn test_empty_pages_count_towards_completion() {
    let mut accumulator = PageAccumulator::started(three());

    accumulator.merge(Page::empty()).unwrap();
    accumulator.merge(page(1..=4)).unwrap();
    let progress = accumulator.merge(Page::empty()).unwrap();

    assert_eq!(progress, MergeProgress::Complete);
    assert_eq!(accumulator.deliver().unwrap().len(), 4);
}

#[test]
fn test_duplicates_across_pages_are_kept() {
    let mut accumulator = PageAccumulator::started(NonZeroUsize::new(2).unwrap());

    accumulator.merge(page(1..=2)).unwrap();
    accumulator.merge(page(2..=3)).unwrap();

    let result = accumulator.deliver().unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(result.ids().len(), 3);
}

#[test]
fn test_idle_accumulator_must_be_started() {
    // Arrange
    let mut accumulator = PageAccumulator::new(three());

    // Act
    let early = accumulator.merge(page(1..=4));
    accumulator.start().unwrap();
    let started = accumulator.merge(page(1..=4));

    // Assert
    assert!(matches!(early, Err(ReminderError::InvalidTransition { .. })));
    assert_eq!(started, Ok(MergeProgress::Pending { remaining: 2 }));
    assert!(accumulator.start().is_err());
}
