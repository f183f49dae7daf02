use axum::{extract::State, response::Json, routing::get, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::serializer::{serialize_pizza, ApiErrorsResponse, PizzaResponse};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [PizzaResponse]),
        (status = 500, description = "Internal server error", body = ApiErrorsResponse),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    let pizzas = state.store.list_pizzas()?;
    Ok(Json(pizzas.iter().map(serialize_pizza).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::seed::seed;
    use crate::testing::{send, setup_app};

    #[tokio::test]
    async fn test_list_pizzas() {
        let (_dir, store, router) = setup_app();

        let (status, body) = send(&router, Method::GET, "/pizzas", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        seed(&store).unwrap();
        let (status, body) = send(&router, Method::GET, "/pizzas", None).await;
        assert_eq!(status, StatusCode::OK);
        let pizzas = body.as_array().unwrap();
        assert_eq!(pizzas.len(), 3);
        assert_eq!(pizzas[0]["name"], "Cheese");
        assert_eq!(pizzas[0]["ingredients"], "Cheese, Tomato Sauce, Dough");
        let mut keys: Vec<_> = pizzas[0].as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["id", "ingredients", "name"]);
    }

    #[tokio::test]
    async fn test_pizzas_cannot_be_deleted() {
        let (_dir, store, router) = setup_app();
        seed(&store).unwrap();
        let pizza_id = store.list_pizzas().unwrap()[0].id;

        let (status, _) = send(&router, Method::DELETE, &format!("/pizzas/{pizza_id}"), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.list_pizzas().unwrap().len(), 3);
    }
}
