//! Event publication for committed registry writes.

use tokio::sync::broadcast;
use vouch_core::RegistryEvent;

/// Default buffer for slow subscribers
const DEFAULT_CAPACITY: usize = 256;

/// Broadcast bus for registry events.
///
/// Publishing succeeds whether or not anyone is listening; subscribers
/// that fall behind see a `Lagged` error from their receiver rather than
/// blocking the registry.
pub struct EventBus {
    sender: broadcast::Sender<RegistryEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event (no-op when there are no subscribers)
    pub fn publish(&self, event: RegistryEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_core::{CredentialTypeDef, Identity};

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let def = CredentialTypeDef::new("Umpire", Identity::from_bytes([1u8; 20]));
        bus.publish(RegistryEvent::type_registered(&def));

        match rx.recv().await.unwrap() {
            RegistryEvent::TypeRegistered { type_id, .. } => assert_eq!(type_id, def.id),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::default();
        let def = CredentialTypeDef::new("Umpire", Identity::from_bytes([1u8; 20]));
        bus.publish(RegistryEvent::type_registered(&def));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
