// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reminders_core::AggregationPhase;

#[test]
fn test_walks_the_full_lifecycle() {
    let phase = AggregationPhase::Idle;

    let phase = phase.start(3).unwrap();
    assert_eq!(phase, AggregationPhase::InFlight { expected: 3 });

    let phase = phase.record_merge().unwrap();
    assert_eq!(
        phase,
        AggregationPhase::PartialMerge {
            merged: 1,
            expected: 3
        }
    );

    let phase = phase.record_merge().unwrap().record_merge().unwrap();
    assert_eq!(phase, AggregationPhase::AllMerged);

    let phase = phase.deliver().unwrap();
    assert!(phase.is_terminal());
}

#[test]
fn test_single_page_goes_straight_to_all_merged() {
    let phase = AggregationPhase::Idle.start(1).unwrap();

    assert_eq!(phase.record_merge().unwrap(), AggregationPhase::AllMerged);
}

#[test]
fn test_illegal_transitions_are_rejected() {
    assert!(AggregationPhase::Idle.record_merge().is_err());
    assert!(AggregationPhase::Idle.deliver().is_err());
    assert!(AggregationPhase::InFlight { expected: 3 }.deliver().is_err());
    assert!(AggregationPhase::AllMerged.record_merge().is_err());
    assert!(AggregationPhase::Delivered.start(3).is_err());
    assert!(AggregationPhase::Delivered.deliver().is_err());
}

#[test]
fn test_merged_counts() {
    assert_eq!(AggregationPhase::InFlight { expected: 3 }.merged(), Some(0));
    assert_eq!(
        AggregationPhase::PartialMerge {
            merged: 2,
            expected: 3
        }
        .merged(),
        Some(2)
    );
    assert_eq!(AggregationPhase::Delivered.merged(), None);
}

#[test]
fn test_display() {
    assert_eq!(AggregationPhase::Idle.to_string(), "Idle");
    assert_eq!(
        AggregationPhase::PartialMerge {
            merged: 1,
            expected: 3
        }
        .to_string(),
        "PartialMerge(1/3)"
    );
}
