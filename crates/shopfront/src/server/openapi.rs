use utoipa::OpenApi;

use crate::catalog::{Category, Product};
use crate::event::{HomeEvent, NavigationRequestedPayload, StateChangedPayload};
use crate::home::journal::DispatchRecord;
use crate::home::{FilterCriteria, HomeAction, HomeViewState};
use crate::server::error::{ApiErrorBody, ApiErrorResponse};
use crate::server::home::{
    CategoriesResponse, CategoryInfo, FilterResponse, JournalResponse, OpenCategoryResponse,
    SearchResponse, UpdateFilterRequest, UpdatePanelsRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopfront API",
        version = "0.1.0",
        description = "Storefront home panel core"
    ),
    paths(
        crate::server::home::get_state,
        crate::server::home::list_categories,
        crate::server::home::open_category,
        crate::server::home::get_filter,
        crate::server::home::update_filter,
        crate::server::home::trigger_search,
        crate::server::home::update_panels,
        crate::server::home::get_journal,
        crate::server::events::stream_events,
    ),
    components(schemas(
        // Error
        ApiErrorResponse,
        ApiErrorBody,
        // Catalog
        Category,
        Product,
        // Home state
        HomeViewState,
        HomeAction,
        FilterCriteria,
        DispatchRecord,
        // Requests / responses
        CategoriesResponse,
        CategoryInfo,
        OpenCategoryResponse,
        FilterResponse,
        UpdateFilterRequest,
        SearchResponse,
        UpdatePanelsRequest,
        JournalResponse,
        // Events
        HomeEvent,
        StateChangedPayload,
        NavigationRequestedPayload,
    )),
    tags(
        (name = "home", description = "Home panel state, filter, and search"),
        (name = "events", description = "Server-sent events"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_serializes_and_lists_routes() {
        let spec = ApiDoc::openapi().to_pretty_json().expect("serialize spec");
        assert!(spec.contains("/home/state"));
        assert!(spec.contains("/home/categories/{id}/open"));
        assert!(spec.contains("/home/events"));
        assert!(spec.contains("HomeViewState"));
    }
}
