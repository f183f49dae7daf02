pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use axum::{response::Html, response::Json, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// Full HTTP surface with its middleware, ready to serve.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api-docs/openapi.json", get(openapi))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html("<h1>Pizza Restaurant API</h1>")
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::create_restaurant,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::list_restaurant_pizzas,
        restaurant_pizza::create_restaurant_pizza,
        restaurant_pizza::delete_restaurant_pizza,
    ),
    components(
        schemas(
            restaurant::CreateRestaurantRequest,
            restaurant_pizza::CreateRestaurantPizzaRequest,
            crate::serializer::RestaurantResponse,
            crate::serializer::RestaurantDetailResponse,
            crate::serializer::MenuEntryResponse,
            crate::serializer::PizzaResponse,
            crate::serializer::RestaurantPizzaResponse,
            crate::serializer::ApiErrorResponse,
            crate::serializer::ApiErrorsResponse,
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant management endpoints"),
        (name = "pizzas", description = "Pizza catalog endpoints"),
        (name = "restaurant_pizzas", description = "Pizzas offered by restaurants, with prices")
    ),
    info(
        title = "Pizza Restaurant API",
        description = "Restaurants, pizzas, and what each restaurant charges for them",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
