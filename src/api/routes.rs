use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{self, AppState};
use crate::store::DocumentStore;

/// Build the application router. Resource segments resolve against the
/// registry inside the handlers, so the whole surface is one parameterized
/// route pair plus the health check.
pub fn create_router<S: DocumentStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/:resource",
            get(handlers::list_resources::<S>).post(handlers::create_resource::<S>),
        )
        .route(
            "/:resource/:id",
            get(handlers::get_resource::<S>)
                .put(handlers::update_resource::<S>)
                .delete(handlers::delete_resource::<S>),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
