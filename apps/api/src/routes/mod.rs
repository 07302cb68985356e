pub mod health;

use axum::{middleware, routing::get, Router};

use crate::auth::middleware::auth_middleware;
use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::preferences::handlers as preferences;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Everything that reads or writes a caller's own data sits behind the
    // auth middleware; the catalog is public.
    let protected = Router::new()
        .route("/api/v1/matches", get(matching::handle_get_matches))
        .route(
            "/api/v1/preferences",
            get(preferences::handle_get_preferences).put(preferences::handle_put_preferences),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/career-fields", get(catalog::handle_list_fields))
        .route(
            "/api/v1/career-fields/:field_id",
            get(catalog::handle_get_field),
        )
        .merge(protected)
        .with_state(state)
}
