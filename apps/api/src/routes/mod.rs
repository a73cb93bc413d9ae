pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::session::handlers as session;
use crate::state::AppState;
use crate::tracker::handlers as tracker;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard
        .route("/api/v1/tracker", get(tracker::handle_get_dashboard))
        .route("/api/v1/tracker/target", put(tracker::handle_set_target))
        .route(
            "/api/v1/tracker/applied/increment",
            post(tracker::handle_increment),
        )
        .route(
            "/api/v1/tracker/applied/decrement",
            post(tracker::handle_decrement),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(session::handle_list).post(session::handle_create),
        )
        .route(
            "/api/v1/applications/:id",
            get(session::handle_get)
                .patch(session::handle_update)
                .delete(session::handle_delete),
        )
        .route(
            "/api/v1/applications/:id/status",
            put(session::handle_set_status),
        )
        .route(
            "/api/v1/applications/:id/details",
            post(session::handle_toggle_details),
        )
        // List view
        .route(
            "/api/v1/view",
            get(session::handle_get_view).put(session::handle_set_view),
        )
        .route("/api/v1/view/sort/:field", post(session::handle_sort_by))
        .route("/api/v1/view/page", put(session::handle_go_to_page))
        // Editor
        .route("/api/v1/editor", get(session::handle_get_editor))
        .route("/api/v1/editor/add", post(session::handle_begin_add))
        .route("/api/v1/editor/edit/:id", post(session::handle_begin_edit))
        .route("/api/v1/editor/cancel", post(session::handle_cancel))
        .route("/api/v1/editor/submit", post(session::handle_submit))
        .with_state(state)
}
