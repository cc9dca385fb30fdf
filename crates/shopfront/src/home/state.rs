//! Shared view state for the home panel and the actions that mutate it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::Product;

/// Snapshot of the home panel's shared view state.
///
/// Every mutation bumps `revision`, so consumers can order snapshots
/// received over different channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeViewState {
    /// Products currently shown in the grid.
    pub products: Vec<Product>,
    /// Whether a search pass is in flight.
    pub loading: bool,
    /// Whether the category dropdown is expanded.
    pub category_list_open: bool,
    /// Whether the price filter panel is expanded.
    pub filter_list_open: bool,
    /// Whether the search bar is expanded.
    pub search_open: bool,
    /// Monotonic mutation counter, starting at zero.
    pub revision: u64,
}

impl Default for HomeViewState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: false,
            category_list_open: false,
            filter_list_open: false,
            search_open: false,
            revision: 0,
        }
    }
}

/// An action dispatched against [`HomeViewState`].
///
/// Actions are the only way view state changes. They serialize as
/// `{ "kind": "...", "value": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum HomeAction {
    /// Marks a search pass as started or finished.
    SetLoading(bool),
    /// Replaces the product grid.
    SetProducts(Vec<Product>),
    /// Expands or collapses the category dropdown.
    ShowCategoryList(bool),
    /// Expands or collapses the price filter panel.
    ShowFilterList(bool),
    /// Expands or collapses the search bar.
    ShowSearchBar(bool),
}

impl HomeViewState {
    /// Applies `action` in place. Infallible: every action is total
    /// over the state.
    pub fn apply(&mut self, action: &HomeAction) {
        match action {
            HomeAction::SetLoading(value) => self.loading = *value,
            HomeAction::SetProducts(products) => self.products = products.clone(),
            HomeAction::ShowCategoryList(value) => self.category_list_open = *value,
            HomeAction::ShowFilterList(value) => self.filter_list_open = *value,
            HomeAction::ShowSearchBar(value) => self.search_open = *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_and_idle() {
        let state = HomeViewState::default();
        assert!(state.products.is_empty());
        assert!(!state.loading);
        assert!(!state.category_list_open);
        assert_eq!(state.revision, 0);
    }

    #[test]
    fn set_loading_toggles_flag() {
        let mut state = HomeViewState::default();
        state.apply(&HomeAction::SetLoading(true));
        assert!(state.loading);
        state.apply(&HomeAction::SetLoading(false));
        assert!(!state.loading);
    }

    #[test]
    fn set_products_replaces_grid() {
        let mut state = HomeViewState::default();
        let products = vec![Product {
            id: "p-1".to_string(),
            name: "Shoe".to_string(),
            price: 50.0,
        }];
        state.apply(&HomeAction::SetProducts(products.clone()));
        assert_eq!(state.products, products);
        state.apply(&HomeAction::SetProducts(Vec::new()));
        assert!(state.products.is_empty());
    }

    #[test]
    fn actions_serialize_with_kind_and_value() {
        let json = serde_json::to_value(HomeAction::SetLoading(true)).expect("serialize");
        assert_eq!(json["kind"], "setLoading");
        assert_eq!(json["value"], true);

        let json = serde_json::to_value(HomeAction::SetProducts(Vec::new())).expect("serialize");
        assert_eq!(json["kind"], "setProducts");
        assert!(json["value"].as_array().expect("array").is_empty());
    }

    #[test]
    fn actions_round_trip_from_wire_shape() {
        let action: HomeAction =
            serde_json::from_str(r#"{ "kind": "setLoading", "value": false }"#).expect("decode");
        assert_eq!(action, HomeAction::SetLoading(false));

        let action: HomeAction =
            serde_json::from_str(r#"{ "kind": "showSearchBar", "value": true }"#).expect("decode");
        assert_eq!(action, HomeAction::ShowSearchBar(true));
    }
}
