use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
    routing::{delete, get},
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
        .route(
            "/restaurant_pizzas",
            get(list_restaurant_pizzas).post(create_restaurant_pizza),
        )
        .route("/restaurant_pizzas/{id}", delete(delete_restaurant_pizza))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRestaurantPizzaRequest {
    /// Price between 1 and 30, inclusive
    pub price: Option<i64>,
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/restaurant_pizzas",
    responses(
        (status = 200, description = "Every pizza offering with its pizza and restaurant", body = [RestaurantPizzaResponse]),
        (status = 500, description = "Internal server error", body = ApiErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn list_restaurant_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantPizzaResponse>>, ApiError> {
    let results = state.store.list_restaurant_pizzas()?;
    Ok(Json(
        results
            .iter()
            .map(|(rp, pizza, restaurant)| serialize_restaurant_pizza(rp, pizza, restaurant))
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Pizza offered at the restaurant", body = RestaurantPizzaResponse),
        (status = 400, description = "Price out of range, or unknown pizza or restaurant", body = ApiErrorsResponse),
        (status = 500, description = "Internal server error", body = ApiErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    let Json(payload) = payload?;

    let (restaurant_pizza, pizza, restaurant) = state.store.create_restaurant_pizza(
        payload.price,
        payload.pizza_id,
        payload.restaurant_id,
    )?;
    info!(id = restaurant_pizza.id, "restaurant pizza created");

    Ok((
        StatusCode::CREATED,
        Json(serialize_restaurant_pizza(
            &restaurant_pizza,
            &pizza,
            &restaurant,
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/restaurant_pizzas/{id}",
    responses(
        (status = 204, description = "Restaurant pizza deleted"),
        (status = 404, description = "Restaurant pizza not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "RestaurantPizza ID")
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant_pizza(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    state.store.delete_restaurant_pizza(id)?;
    info!(id, "restaurant pizza deleted");

    Ok(StatusCode::NO_CONTENT)
}
