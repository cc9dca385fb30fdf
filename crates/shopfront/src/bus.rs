//! Broadcast bus connecting the core to any number of observers.

use tokio::sync::broadcast;

use crate::event::HomeEvent;

/// Default number of events buffered per subscriber.
pub const DEFAULT_EVENTS_CAPACITY: usize = 32;

/// Cloneable handle to the event broadcast channel.
///
/// Publishing never blocks and never fails: with no subscribers the
/// event is simply dropped, and slow subscribers observe a lag error
/// on their receiver rather than backpressure here.
#[derive(Debug, Clone)]
pub struct Bus {
    sender: broadcast::Sender<HomeEvent>,
}

impl Bus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn publish(&self, event: HomeEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HomeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENTS_CAPACITY)
    }
}
