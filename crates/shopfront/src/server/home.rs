use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::category_image_url;
use crate::error::CoreError;
use crate::home::{
    DispatchRecord, FilterCriteria, HomeViewState, PRICE_RANGE_MAX, PRICE_RANGE_MIN,
    PRICE_RANGE_STEP,
};
use crate::server::error::{ApiError, ApiErrorResponse};
use crate::server::ServerState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Resolved URL of the category image on the asset host.
    pub image_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenCategoryResponse {
    pub status: String,
    pub category_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub filter: FilterCriteria,
    pub price_range_min: f64,
    pub price_range_max: f64,
    pub price_range_step: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilterRequest {
    #[serde(default)]
    pub price_range: Option<f64>,
    #[serde(default)]
    pub search_text: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: String,
    pub generation: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePanelsRequest {
    #[serde(default)]
    pub category_list_open: Option<bool>,
    #[serde(default)]
    pub filter_list_open: Option<bool>,
    #[serde(default)]
    pub search_open: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalResponse {
    pub records: Vec<DispatchRecord>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/home/state",
    tag = "home",
    responses(
        (status = 200, body = HomeViewState),
    )
)]
pub(crate) async fn get_state(State(state): State<Arc<ServerState>>) -> Json<HomeViewState> {
    Json(state.store.snapshot())
}

#[utoipa::path(
    get,
    path = "/home/categories",
    tag = "home",
    responses(
        (status = 200, body = CategoriesResponse),
    )
)]
pub(crate) async fn list_categories(
    State(state): State<Arc<ServerState>>,
) -> Json<CategoriesResponse> {
    let categories = state
        .panel
        .categories()
        .into_iter()
        .map(|category| CategoryInfo {
            image_url: category_image_url(&state.config.asset_base_url, &category.image),
            id: category.id,
            name: category.name,
            image: category.image,
        })
        .collect::<Vec<_>>();
    Json(CategoriesResponse {
        count: categories.len(),
        categories,
    })
}

#[utoipa::path(
    post,
    path = "/home/categories/{id}/open",
    tag = "home",
    params(
        ("id" = String, Path, description = "Category id"),
    ),
    responses(
        (status = 200, body = OpenCategoryResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn open_category(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<OpenCategoryResponse>, ApiError> {
    let category = state.panel.open_category(&id).map_err(|error| match error {
        CoreError::InvalidInput(message) => ApiError::not_found(message),
        other => ApiError::from(other),
    })?;
    Ok(Json(OpenCategoryResponse {
        status: "ok".to_string(),
        category_id: category.id,
    }))
}

#[utoipa::path(
    get,
    path = "/home/filter",
    tag = "home",
    responses(
        (status = 200, body = FilterResponse),
    )
)]
pub(crate) async fn get_filter(State(state): State<Arc<ServerState>>) -> Json<FilterResponse> {
    Json(filter_response(state.panel.filter()))
}

#[utoipa::path(
    put,
    path = "/home/filter",
    tag = "home",
    request_body = UpdateFilterRequest,
    responses(
        (status = 200, body = FilterResponse),
    )
)]
pub(crate) async fn update_filter(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<UpdateFilterRequest>,
) -> Json<FilterResponse> {
    if let Some(price_range) = payload.price_range {
        state.panel.set_price_range(price_range);
    }
    if let Some(search_text) = payload.search_text {
        state.panel.set_search_text(search_text);
    }
    Json(filter_response(state.panel.filter()))
}

#[utoipa::path(
    post,
    path = "/home/search",
    tag = "home",
    responses(
        (status = 200, body = SearchResponse),
    )
)]
pub(crate) async fn trigger_search(State(state): State<Arc<ServerState>>) -> Json<SearchResponse> {
    let generation = state.panel.trigger_search();
    Json(SearchResponse {
        status: "ok".to_string(),
        generation,
    })
}

#[utoipa::path(
    put,
    path = "/home/panels",
    tag = "home",
    request_body = UpdatePanelsRequest,
    responses(
        (status = 200, body = HomeViewState),
    )
)]
pub(crate) async fn update_panels(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<UpdatePanelsRequest>,
) -> Json<HomeViewState> {
    Json(state.panel.set_panels(
        payload.category_list_open,
        payload.filter_list_open,
        payload.search_open,
    ))
}

#[utoipa::path(
    get,
    path = "/home/journal",
    tag = "home",
    responses(
        (status = 200, body = JournalResponse),
    )
)]
pub(crate) async fn get_journal(State(state): State<Arc<ServerState>>) -> Json<JournalResponse> {
    let records = state.store.journal();
    Json(JournalResponse {
        count: records.len(),
        records,
    })
}

fn filter_response(filter: FilterCriteria) -> FilterResponse {
    FilterResponse {
        filter,
        price_range_min: PRICE_RANGE_MIN,
        price_range_max: PRICE_RANGE_MAX,
        price_range_step: PRICE_RANGE_STEP,
    }
}
