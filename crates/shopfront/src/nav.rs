//! Navigation seam between the core and the embedding frontend.
//!
//! The core never routes. Picking a category hands the target to a
//! [`Navigator`], and the default implementation just publishes a
//! [`HomeEvent::NavigationRequested`] for the frontend to act on.

use std::sync::Arc;

use crate::bus::Bus;
use crate::event::{HomeEvent, NavigationRequestedPayload};

pub trait Navigator: Send + Sync {
    fn navigate_to_category(&self, category_id: &str);
}

pub type SharedNavigator = Arc<dyn Navigator>;

/// Navigator that forwards requests onto the event bus.
#[derive(Debug, Clone)]
pub struct BusNavigator {
    bus: Bus,
}

impl BusNavigator {
    pub fn new(bus: Bus) -> Self {
        Self { bus }
    }
}

impl Navigator for BusNavigator {
    fn navigate_to_category(&self, category_id: &str) {
        self.bus.publish(HomeEvent::NavigationRequested(
            NavigationRequestedPayload {
                category_id: category_id.to_string(),
            },
        ));
    }
}
