use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::portfolio::{Education, Portfolio, Profile, Project};
use crate::state::AppState;

// GET /portfolio
pub async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<Portfolio> {
    Json(state.portfolio.clone())
}

// GET /portfolio/profile
pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<Profile> {
    Json(state.portfolio.profile.clone())
}

// GET /portfolio/education
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    pub educational_backgrounds: Vec<Education>,
}

pub async fn get_education(State(state): State<Arc<AppState>>) -> Json<EducationResponse> {
    Json(EducationResponse {
        educational_backgrounds: state.portfolio.educational_backgrounds.clone(),
    })
}

// GET /portfolio/projects - most recently updated first
#[derive(Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

pub async fn get_projects(State(state): State<Arc<AppState>>) -> Json<ProjectsResponse> {
    Json(ProjectsResponse {
        projects: state.portfolio.projects_by_recency(),
    })
}
