use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::container::Container;
use super::controller::{
    create_repository, delete_repository, like_repository, list_repositories, update_repository,
};
use super::middleware::{log_requests, validate_repository_id};

/// Builds the HTTP routes over `container`.
///
/// Routes carrying an `{id}` are wrapped in the id validator. The request
/// logger wraps every route; CORS, when enabled, sits outside the logger so
/// preflight requests are answered before reaching it.
pub fn build_router(container: Arc<Container>, cors: bool) -> Router {
    let by_id = Router::new()
        .route(
            "/repositories/{id}",
            put(update_repository).delete(delete_repository),
        )
        .route("/repositories/{id}/like", post(like_repository))
        .route_layer(middleware::from_fn(validate_repository_id));

    let mut router = Router::new()
        .route(
            "/repositories",
            get(list_repositories).post(create_repository),
        )
        .merge(by_id)
        .with_state(container)
        .layer(middleware::from_fn(log_requests));

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
