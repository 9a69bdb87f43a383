use crate::skills::{SkillCategory, SkillLevel};
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
    pub skills: usize,
    pub loaded_at: DateTime<Utc>,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        uptime: state.uptime_secs(),
        skills: state.portfolio.skillset.len(),
        loaded_at: state.loaded_at,
    })
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub hostname: String,
    pub portfolio_path: String,
    pub categories: Vec<&'static str>,
    pub levels: Vec<&'static str>,
}

pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    let hostname = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".into());

    Json(ServiceInfo {
        hostname,
        portfolio_path: state.config.portfolio_path.clone(),
        categories: SkillCategory::ALL.iter().map(|c| c.label()).collect(),
        levels: SkillLevel::ALL.iter().map(|l| l.label()).collect(),
    })
}
