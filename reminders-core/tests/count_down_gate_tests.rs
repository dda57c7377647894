// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reminders_core::{CountDownGate, GateStatus, ReminderError};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

fn count(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_opens_on_last_arrival() {
    // Arrange
    let opened = Arc::new(AtomicUsize::new(0));
    let gate = CountDownGate::new(count(3), {
        let opened = opened.clone();
        move || {
            opened.fetch_add(1, Ordering::SeqCst);
        }
    });

    // Act & Assert
    assert_eq!(gate.arrive().unwrap(), GateStatus::Waiting { remaining: 2 });
    assert_eq!(gate.arrive().unwrap(), GateStatus::Waiting { remaining: 1 });
    assert_eq!(opened.load(Ordering::SeqCst), 0);
    assert_eq!(gate.arrive().unwrap(), GateStatus::Opened);
    assert_eq!(opened.load(Ordering::SeqCst), 1);
    assert!(gate.is_open());
}

#[test]
fn test_extra_arrival_is_rejected() {
    let opened = Arc::new(AtomicUsize::new(0));
    let gate = CountDownGate::new(count(1), {
        let opened = opened.clone();
        move || {
            opened.fetch_add(1, Ordering::SeqCst);
        }
    });

    gate.arrive().unwrap();

    assert_eq!(gate.arrive(), Err(ReminderError::GateAlreadyOpen));
    assert_eq!(opened.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_arrivals_open_exactly_once() {
    // Arrange
    const ARRIVALS: usize = 64;
    let opened = Arc::new(AtomicUsize::new(0));
    let gate = CountDownGate::new(count(ARRIVALS), {
        let opened = opened.clone();
        move || {
            opened.fetch_add(1, Ordering::SeqCst);
        }
    });

    // Act
    let handles: Vec<_> = (0..ARRIVALS)
        .map(|_| {
            let gate = gate.clone();
            thread::spawn(move || gate.arrive().unwrap())
        })
        .collect();
    let statuses: Vec<GateStatus> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // Assert
    assert_eq!(
        statuses
            .iter()
            .filter(|status| **status == GateStatus::Opened)
            .count(),
        1
    );
    assert_eq!(opened.load(Ordering::SeqCst), 1);
    assert_eq!(gate.remaining(), 0);
}

#[test]
fn test_open_action_sees_writes_made_before_arrivals() {
    // Arrange
    let total = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(AtomicUsize::new(0));
    let gate = CountDownGate::new(count(3), {
        let total = total.clone();
        let seen = seen.clone();
        move || seen.store(total.load(Ordering::Relaxed), Ordering::SeqCst)
    });

    // Act
    let handles: Vec<_> = (1..=3)
        .map(|n| {
            let gate = gate.clone();
            let total = total.clone();
            thread::spawn(move || {
                total.fetch_add(n, Ordering::Relaxed);
                gate.arrive().unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Assert
    assert_eq!(seen.load(Ordering::SeqCst), 6);
}
