use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::display::{today, ApplicationRow};
use crate::errors::AppError;
use crate::listing::{ListView, PageSize, SortDirection, SortField};
use crate::models::NewApplication;
use crate::session::editor::EditorMode;
use crate::session::ManagerSession;
use crate::state::AppState;
use crate::tracker::validation::{
    parse_status, validate_form, validate_patch, ApplicationForm, ApplicationPatchForm,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub items: Vec<ApplicationRow>,
    pub page: usize,
    pub page_size: PageSize,
    pub total: usize,
    pub total_pages: usize,
    pub showing_from: usize,
    pub showing_to: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub view: ListView,
    pub details_open: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetail {
    #[serde(flatten)]
    pub row: ApplicationRow,
    pub details_open: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorResponse {
    #[serde(flatten)]
    pub mode: EditorMode,
    pub details_open: Option<String>,
    /// Initial values for the open form, if any.
    pub form: Option<NewApplication>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub application: Option<ApplicationRow>,
    pub page: PageResponse,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    pub sort_field: Option<String>,
    pub sort_direction: Option<String>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    pub page: usize,
}

fn page_response(session: &mut ManagerSession) -> PageResponse {
    let page = session.current_page();
    let today = today();
    PageResponse {
        items: page
            .items
            .into_iter()
            .map(|app| ApplicationRow::new(app, today))
            .collect(),
        page: page.page,
        page_size: page.page_size,
        total: page.total,
        total_pages: page.total_pages,
        showing_from: page.showing_from,
        showing_to: page.showing_to,
        has_previous: page.has_previous,
        has_next: page.has_next,
        view: session.view,
        details_open: session.editor.details_open().map(str::to_string),
    }
}

fn editor_response(session: &ManagerSession) -> EditorResponse {
    EditorResponse {
        mode: session.editor.mode().clone(),
        details_open: session.editor.details_open().map(str::to_string),
        form: session.editor.form_values(today()),
    }
}

fn parse_sort_field(raw: &str) -> Result<SortField, AppError> {
    raw.parse::<SortField>().map_err(AppError::Validation)
}

fn parse_sort_direction(raw: &str) -> Result<SortDirection, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        _ => Err(AppError::Validation(format!(
            "sortDirection '{raw}' must be 'asc' or 'desc'"
        ))),
    }
}

// ── Applications ───────────────────────────────────────────────────────────

/// GET /api/v1/applications
pub async fn handle_list(State(state): State<AppState>) -> Json<PageResponse> {
    let mut session = state.session.lock().await;
    Json(page_response(&mut session))
}

/// POST /api/v1/applications
pub async fn handle_create(
    State(state): State<AppState>,
    Json(form): Json<ApplicationForm>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let today = today();
    let data = validate_form(form, today)?;
    let mut session = state.session.lock().await;
    let application = session.tracker.add_application(data);
    Ok((StatusCode::CREATED, Json(ApplicationRow::new(application, today))))
}

/// GET /api/v1/applications/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationDetail>, AppError> {
    let session = state.session.lock().await;
    let application = session
        .tracker
        .application(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Json(ApplicationDetail {
        row: ApplicationRow::new(application, today()),
        details_open: session.editor.details_open() == Some(id.as_str()),
    }))
}

/// PATCH /api/v1/applications/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<ApplicationPatchForm>,
) -> Result<Json<PageResponse>, AppError> {
    let patch = validate_patch(form)?;
    let mut session = state.session.lock().await;
    session.tracker.update_application(&id, &patch);
    Ok(Json(page_response(&mut session)))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<PageResponse> {
    let mut session = state.session.lock().await;
    session.delete(&id);
    Json(page_response(&mut session))
}

/// PUT /api/v1/applications/:id/status
pub async fn handle_set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> Result<Json<PageResponse>, AppError> {
    let status = parse_status(&req.status)?;
    let mut session = state.session.lock().await;
    session.tracker.update_status(&id, status);
    Ok(Json(page_response(&mut session)))
}

/// POST /api/v1/applications/:id/details
pub async fn handle_toggle_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<PageResponse> {
    let mut session = state.session.lock().await;
    session.editor.toggle_details(&id);
    Json(page_response(&mut session))
}

// ── List view ──────────────────────────────────────────────────────────────

/// GET /api/v1/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ListView> {
    let session = state.session.lock().await;
    Json(session.view)
}

/// PUT /api/v1/view
pub async fn handle_set_view(
    State(state): State<AppState>,
    Json(req): Json<ViewRequest>,
) -> Result<Json<PageResponse>, AppError> {
    let field = req.sort_field.as_deref().map(parse_sort_field).transpose()?;
    let direction = req
        .sort_direction
        .as_deref()
        .map(parse_sort_direction)
        .transpose()?;
    let page_size = req
        .page_size
        .map(PageSize::try_from)
        .transpose()
        .map_err(AppError::Validation)?;

    let mut session = state.session.lock().await;
    if field.is_some() || direction.is_some() {
        let field = field.unwrap_or(session.view.sort_field);
        let direction = direction.unwrap_or(session.view.sort_direction);
        session.view.set_sort(field, direction);
    }
    if let Some(page_size) = page_size {
        session.view.set_page_size(page_size);
    }
    Ok(Json(page_response(&mut session)))
}

/// POST /api/v1/view/sort/:field
pub async fn handle_sort_by(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<PageResponse>, AppError> {
    let field = parse_sort_field(&field)?;
    let mut session = state.session.lock().await;
    session.view.sort_by(field);
    Ok(Json(page_response(&mut session)))
}

/// PUT /api/v1/view/page
/// Pages outside the current range are ignored.
pub async fn handle_go_to_page(
    State(state): State<AppState>,
    Json(req): Json<PageRequest>,
) -> Json<PageResponse> {
    let mut session = state.session.lock().await;
    session.go_to_page(req.page);
    Json(page_response(&mut session))
}

// ── Editor ─────────────────────────────────────────────────────────────────

/// GET /api/v1/editor
pub async fn handle_get_editor(State(state): State<AppState>) -> Json<EditorResponse> {
    let session = state.session.lock().await;
    Json(editor_response(&session))
}

/// POST /api/v1/editor/add
pub async fn handle_begin_add(
    State(state): State<AppState>,
) -> Result<Json<EditorResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.editor.begin_add()?;
    Ok(Json(editor_response(&session)))
}

/// POST /api/v1/editor/edit/:id
pub async fn handle_begin_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditorResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.begin_edit(&id)?;
    Ok(Json(editor_response(&session)))
}

/// POST /api/v1/editor/cancel
pub async fn handle_cancel(State(state): State<AppState>) -> Json<EditorResponse> {
    let mut session = state.session.lock().await;
    session.editor.cancel();
    Json(editor_response(&session))
}

/// POST /api/v1/editor/submit
/// The form is validated before the editor closes, so a rejected form stays open.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(form): Json<ApplicationForm>,
) -> Result<Json<SubmitResponse>, AppError> {
    let today = today();
    let data = validate_form(form, today)?;
    let mut session = state.session.lock().await;
    let application = session.submit(data)?;
    Ok(Json(SubmitResponse {
        application: application.map(|app| ApplicationRow::new(app, today)),
        page: page_response(&mut session),
    }))
}
