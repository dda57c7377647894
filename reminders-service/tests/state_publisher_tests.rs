// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use reminders_service::StatePublisher;

#[tokio::test]
async fn test_subscribers_only_see_later_values() {
    // Arrange
    let publisher = StatePublisher::new(1);
    publisher.publish(2);

    // Act
    let mut updates = publisher.subscribe();
    publisher.publish(3);

    // Assert
    assert_eq!(updates.next().await, Some(3));
    assert_eq!(publisher.current(), 3);
}

#[tokio::test]
async fn test_every_subscriber_receives_each_value() {
    let publisher = StatePublisher::new(String::new());
    let mut first = publisher.subscribe();
    let mut second = publisher.subscribe();

    publisher.publish("loaded".to_owned());

    assert_eq!(first.next().await.as_deref(), Some("loaded"));
    assert_eq!(second.next().await.as_deref(), Some("loaded"));
}

#[test]
fn test_dropped_subscribers_are_pruned_on_publish() {
    // Arrange
    let publisher = StatePublisher::new(0u32);
    let kept = publisher.subscribe();
    let dropped = publisher.subscribe();
    assert_eq!(publisher.subscriber_count(), 2);

    // Act
    drop(dropped);
    publisher.publish(1);

    // Assert
    assert_eq!(publisher.subscriber_count(), 1);
    drop(kept);
}

#[tokio::test]
async fn test_update_derives_from_current_value() {
    let publisher = StatePublisher::new(10);
    let mut updates = publisher.subscribe();

    publisher.update(|n| n + 5);

    assert_eq!(updates.next().await, Some(15));
    assert_eq!(publisher.current(), 15);
}
