//! Events published by the core for frontends to observe.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::home::{HomeAction, HomeViewState};

/// A state snapshot together with the action that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateChangedPayload {
    pub revision: u64,
    pub action: HomeAction,
    pub state: HomeViewState,
}

/// Request for the embedding frontend to route somewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequestedPayload {
    pub category_id: String,
}

/// Core event stream. Serialized as `{ "type": ..., "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum HomeEvent {
    /// View state changed through a dispatch.
    StateChanged(StateChangedPayload),
    /// The user picked a category; the frontend owns the routing.
    NavigationRequested(NavigationRequestedPayload),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_and_payload() {
        let event = HomeEvent::NavigationRequested(NavigationRequestedPayload {
            category_id: "c-1".to_string(),
        });
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["type"], "navigationRequested");
        assert_eq!(json["payload"]["categoryId"], "c-1");
    }

    #[test]
    fn state_changed_carries_action_and_snapshot() {
        let mut state = HomeViewState::default();
        let action = HomeAction::SetLoading(true);
        state.apply(&action);
        state.revision = 1;
        let event = HomeEvent::StateChanged(StateChangedPayload {
            revision: 1,
            action,
            state,
        });
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["type"], "stateChanged");
        assert_eq!(json["payload"]["revision"], 1);
        assert_eq!(json["payload"]["action"]["kind"], "setLoading");
        assert_eq!(json["payload"]["state"]["loading"], true);
    }
}
