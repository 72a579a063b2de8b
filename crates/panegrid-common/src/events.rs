use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::SlotIndex;

/// Status changes a single pane reports upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PaneEvent {
    DestinationChanged(String),
    TitleChanged(String),
    /// Load progress, 0-100.
    LoadProgress(u8),
    LoadFinished(bool),
    FullscreenRequested,
    CloseRequested,
}

/// Events the pool publishes to the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PoolEvent {
    /// The grid was rebuilt with this many visible panes.
    LayoutChanged(usize),
    /// A slot became visible in the grid.
    PaneAdded(SlotIndex),
    /// A slot was hidden from the grid.
    PaneRemoved(SlotIndex),
    FullscreenRequested(SlotIndex),
    CloseRequested(SlotIndex),
    /// Fired after an assignment pass finished its structural changes.
    AllPanesReady,
    /// Any other per-pane status change.
    Pane { slot: SlotIndex, event: PaneEvent },
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PoolEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PoolEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: PoolEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(PoolEvent::LayoutChanged(3));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, PoolEvent::LayoutChanged(3));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(PoolEvent::AllPanesReady);

        assert_eq!(rx1.recv().await.unwrap(), PoolEvent::AllPanesReady);
        assert_eq!(rx2.recv().await.unwrap(), PoolEvent::AllPanesReady);
    }

    #[test]
    fn publish_without_subscribers_returns_zero() {
        let bus = EventBus::new(4);
        assert_eq!(bus.publish(PoolEvent::LayoutChanged(0)), 0);
    }

    #[test]
    fn try_recv_drains_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        bus.publish(PoolEvent::PaneAdded(SlotIndex(1)));
        bus.publish(PoolEvent::Pane {
            slot: SlotIndex(1),
            event: PaneEvent::LoadProgress(40),
        });

        assert_eq!(rx.try_recv().unwrap(), PoolEvent::PaneAdded(SlotIndex(1)));
        assert!(matches!(
            rx.try_recv().unwrap(),
            PoolEvent::Pane {
                event: PaneEvent::LoadProgress(40),
                ..
            }
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn pane_event_serializes_tagged() {
        let json = serde_json::to_string(&PaneEvent::LoadFinished(true)).unwrap();
        assert_eq!(json, r#"{"type":"LoadFinished","data":true}"#);
    }
}
