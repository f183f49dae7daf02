use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::serializer::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRestaurantRequest {
    /// Name of the restaurant
    pub name: Option<String>,
    /// Street address of the restaurant
    pub address: Option<String>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = [RestaurantResponse]),
        (status = 500, description = "Internal server error", body = ApiErrorsResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    let restaurants = state.store.list_restaurants()?;
    Ok(Json(restaurants.iter().map(serialize_restaurant).collect()))
}

#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created successfully", body = RestaurantResponse),
        (status = 400, description = "Name or address missing", body = ApiErrorsResponse),
        (status = 500, description = "Internal server error", body = ApiErrorsResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn create_restaurant(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantResponse>), ApiError> {
    let Json(payload) = payload?;

    let restaurant = state
        .store
        .create_restaurant(payload.name, payload.address)?;
    info!(id = restaurant.id, "restaurant created");

    Ok((StatusCode::CREATED, Json(serialize_restaurant(&restaurant))))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with the pizzas it offers", body = RestaurantDetailResponse),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantDetailResponse>, ApiError> {
    let Path(id) = id?;

    let (restaurant, offerings) = state.store.get_restaurant(id)?;

    Ok(Json(serialize_restaurant_details(&restaurant, &offerings)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its pizza offerings deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    state.store.delete_restaurant(id)?;
    info!(id, "restaurant deleted");

    Ok(StatusCode::NO_CONTENT)
}
