use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::display::{count_in_month, count_in_week, month_name, today};
use crate::errors::AppError;
use crate::models::JobStatus;
use crate::state::AppState;
use crate::tracker::validation::validate_target;
use crate::tracker::JobTracker;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: JobStatus,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub target_job_count: u32,
    pub applied_job_count: u32,
    /// Length of the stored list. May differ from `applied_job_count`.
    pub list_count: usize,
    pub progress_percentage: f64,
    pub rounded_percentage: u32,
    pub summary: String,
    pub status_counts: Vec<StatusCount>,
    pub applied_this_week: usize,
    pub current_month: String,
    pub applied_this_month: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRequest {
    pub target_job_count: i64,
}

pub fn dashboard(tracker: &JobTracker) -> DashboardResponse {
    let state = tracker.state();
    let today = today();
    let progress = tracker.progress_percentage();
    DashboardResponse {
        target_job_count: state.target_job_count,
        applied_job_count: state.applied_job_count,
        list_count: state.applications.len(),
        progress_percentage: progress,
        rounded_percentage: progress.round() as u32,
        summary: tracker.progress_summary(),
        status_counts: tracker
            .status_counts()
            .into_iter()
            .map(|(status, count)| StatusCount {
                status,
                label: status.label(),
                count,
            })
            .collect(),
        applied_this_week: count_in_week(&state.applications, today),
        current_month: month_name(today),
        applied_this_month: count_in_month(&state.applications, today),
    }
}

/// GET /api/v1/tracker
pub async fn handle_get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let session = state.session.lock().await;
    Json(dashboard(&session.tracker))
}

/// PUT /api/v1/tracker/target
pub async fn handle_set_target(
    State(state): State<AppState>,
    Json(req): Json<TargetRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let count = validate_target(req.target_job_count)?;
    let mut session = state.session.lock().await;
    session.tracker.set_target_job_count(count);
    Ok(Json(dashboard(&session.tracker)))
}

/// POST /api/v1/tracker/applied/increment
pub async fn handle_increment(State(state): State<AppState>) -> Json<DashboardResponse> {
    let mut session = state.session.lock().await;
    session.tracker.increment_applied_count();
    Json(dashboard(&session.tracker))
}

/// POST /api/v1/tracker/applied/decrement
pub async fn handle_decrement(State(state): State<AppState>) -> Json<DashboardResponse> {
    let mut session = state.session.lock().await;
    session.tracker.decrement_applied_count();
    Json(dashboard(&session.tracker))
}
