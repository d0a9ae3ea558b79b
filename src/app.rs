use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/day/:date",
            get(handlers::get_day).put(handlers::save_day),
        )
        .route("/api/dates", get(handlers::list_dates))
        .route(
            "/api/whiteboard/:date",
            get(handlers::get_whiteboard).put(handlers::put_whiteboard),
        )
        .route(
            "/api/whiteboard/:date/download",
            get(handlers::download_whiteboard),
        )
        .with_state(state)
}
