use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/info", get(handlers::service_info))
        .route("/portfolio", get(handlers::get_portfolio))
        .route("/portfolio/profile", get(handlers::get_profile))
        .route("/portfolio/education", get(handlers::get_education))
        .route("/portfolio/projects", get(handlers::get_projects))
        .route("/skills", get(handlers::get_section))
        .route("/skills/legend", get(handlers::get_legend))
        .route("/skills/groups", get(handlers::get_groups))
        .route("/skills/group", post(handlers::group_skills))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
