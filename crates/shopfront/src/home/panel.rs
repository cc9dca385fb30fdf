//! The home panel: category dropdown, product filter, and search.
//!
//! Owns the category list and the filter criteria, and drives every
//! product search through the dispatch store. Collaborator failures
//! never surface to callers; they are logged and the panel keeps its
//! previous state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::catalog::{Category, SharedCategoryApi, SharedProductApi};
use crate::error::{CoreError, CoreResult};
use crate::nav::SharedNavigator;

use super::filter::FilterCriteria;
use super::state::{HomeAction, HomeViewState};
use super::store::HomeStore;

pub struct HomePanel {
    categories: RwLock<Vec<Category>>,
    filter: RwLock<FilterCriteria>,
    store: Arc<HomeStore>,
    category_api: SharedCategoryApi,
    product_api: SharedProductApi,
    navigator: SharedNavigator,
    search_generation: AtomicU64,
}

impl HomePanel {
    pub fn new(
        store: Arc<HomeStore>,
        category_api: SharedCategoryApi,
        product_api: SharedProductApi,
        navigator: SharedNavigator,
    ) -> Self {
        Self {
            categories: RwLock::new(Vec::new()),
            filter: RwLock::new(FilterCriteria::default()),
            store,
            category_api,
            product_api,
            navigator,
            search_generation: AtomicU64::new(0),
        }
    }

    /// One-shot category load, run once when the panel mounts.
    ///
    /// Only a successful, non-empty response replaces the list. An
    /// empty response or a fetch error leaves the dropdown empty and
    /// is logged. There is no retry.
    pub async fn initialize(&self) {
        match self.category_api.fetch_categories().await {
            Ok(categories) if categories.is_empty() => {
                debug!("category list is empty, dropdown stays empty");
            }
            Ok(categories) => {
                debug!(count = categories.len(), "loaded categories");
                *self.categories.write() = categories;
            }
            Err(error) => {
                warn!("category fetch failed, dropdown stays empty: {error}");
            }
        }
    }

    /// Loaded categories, in upstream order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.read().clone()
    }

    pub fn category(&self, category_id: &str) -> Option<Category> {
        self.categories
            .read()
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
    }

    /// Hands a category pick to the navigator. The panel itself does
    /// not route anywhere.
    pub fn open_category(&self, category_id: &str) -> CoreResult<Category> {
        let category = self.category(category_id).ok_or_else(|| {
            CoreError::InvalidInput(format!("unknown category: {category_id}"))
        })?;
        self.navigator.navigate_to_category(&category.id);
        Ok(category)
    }

    /// Current filter criteria snapshot.
    pub fn filter(&self) -> FilterCriteria {
        self.filter.read().clone()
    }

    /// Sets the price cap. Pure state mutation; nothing is fetched or
    /// filtered until a search is triggered.
    pub fn set_price_range(&self, price_range: f64) -> FilterCriteria {
        let mut filter = self.filter.write();
        filter.price_range = price_range;
        filter.clone()
    }

    /// Sets the search text. Pure state mutation, like
    /// [`HomePanel::set_price_range`].
    pub fn set_search_text(&self, search_text: impl Into<String>) -> FilterCriteria {
        let mut filter = self.filter.write();
        filter.search_text = search_text.into();
        filter.clone()
    }

    /// Expands or collapses the panel's sections. `None` leaves a
    /// section as it was.
    pub fn set_panels(
        &self,
        category_list: Option<bool>,
        filter_list: Option<bool>,
        search: Option<bool>,
    ) -> HomeViewState {
        if let Some(open) = category_list {
            self.store.dispatch(HomeAction::ShowCategoryList(open));
        }
        if let Some(open) = filter_list {
            self.store.dispatch(HomeAction::ShowFilterList(open));
        }
        if let Some(open) = search {
            self.store.dispatch(HomeAction::ShowSearchBar(open));
        }
        self.store.snapshot()
    }

    /// Current view state snapshot.
    pub fn state(&self) -> HomeViewState {
        self.store.snapshot()
    }

    /// Starts a search pass in the background and returns its
    /// generation. A newer trigger supersedes the pass; superseded
    /// results are discarded.
    pub fn trigger_search(self: &Arc<Self>) -> u64 {
        let generation = self.next_generation();
        let panel = Arc::clone(self);
        tokio::spawn(async move {
            panel.run_search(generation).await;
        });
        generation
    }

    /// Runs a search pass to completion and returns its generation.
    pub async fn apply_filter_and_search(&self) -> u64 {
        let generation = self.next_generation();
        self.run_search(generation).await;
        generation
    }

    fn next_generation(&self) -> u64 {
        self.search_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn run_search(&self, generation: u64) {
        let criteria = self.filter();
        self.store.dispatch(HomeAction::SetLoading(true));
        match self.product_api.fetch_all_products().await {
            Ok(products) => {
                let filtered = criteria.apply(&products);
                let kept = filtered.len();
                let published = self.store.dispatch_if(
                    || self.search_generation.load(Ordering::SeqCst) == generation,
                    HomeAction::SetProducts(filtered),
                );
                if published.is_some() {
                    debug!(total = products.len(), kept, "search pass finished");
                } else {
                    debug!(generation, "discarding results of superseded search");
                }
            }
            Err(error) => {
                warn!("product fetch failed, keeping current grid: {error}");
            }
        }
        self.store.dispatch(HomeAction::SetLoading(false));
    }
}
