use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::skills::{
    group_and_sort, parse_skillset, LegendEntry, RawSkill, SkillGroup, SkillsSection,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SectionQuery {
    #[serde(default)]
    pub skip_empty: bool,
}

// GET /skills - Skills section for the loaded portfolio
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SectionQuery>,
) -> Json<SkillsSection> {
    let groups = group_and_sort(&state.portfolio.skillset);
    Json(SkillsSection::build(&groups, &state.palette, query.skip_empty))
}

// GET /skills/legend
#[derive(Serialize)]
pub struct LegendResponse {
    pub legend: Vec<LegendEntry>,
}

pub async fn get_legend(State(state): State<Arc<AppState>>) -> Json<LegendResponse> {
    Json(LegendResponse {
        legend: state.palette.legend(),
    })
}

// GET /skills/groups - Grouping without colors
#[derive(Serialize)]
pub struct GroupsResponse {
    pub groups: Vec<SkillGroup>,
}

pub async fn get_groups(State(state): State<Arc<AppState>>) -> Json<GroupsResponse> {
    let groups = group_and_sort(&state.portfolio.skillset);
    Json(GroupsResponse {
        groups: groups.into_groups(),
    })
}

// POST /skills/group - Group an arbitrary skillset
#[derive(Debug, Deserialize)]
pub struct GroupSkillsRequest {
    pub skills: Vec<RawSkill>,
    #[serde(default)]
    pub skip_empty: bool,
}

pub async fn group_skills(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GroupSkillsRequest>, JsonRejection>,
) -> Result<Json<SkillsSection>> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let skills = parse_skillset(req.skills)?;
    tracing::debug!(count = skills.len(), "grouping posted skillset");

    let groups = group_and_sort(&skills);
    Ok(Json(SkillsSection::build(&groups, &state.palette, req.skip_empty)))
}
