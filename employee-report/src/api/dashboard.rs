//! Dashboard pages and the htmx fragments behind the filter form

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use employee_events::EntityKind;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::components::{Component, RenderContext};
use crate::html;
use crate::AppState;

/// Entity shown at `/`
const DEFAULT_EMPLOYEE_ID: &str = "1";

async fn render_page(state: &AppState, kind: EntityKind, id: &str) -> Html<String> {
    let ctx = RenderContext::new(&state.store, kind, Some(id));
    let body = state.report.render(&ctx).await;
    debug!(kind = %kind, id, bytes = body.len(), "Rendered dashboard");
    Html(html::page(&format!("{} Performance", kind), &body))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    render_page(&state, EntityKind::Employee, DEFAULT_EMPLOYEE_ID).await
}

/// GET /employee/:id
pub async fn employee_page(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    render_page(&state, EntityKind::Employee, &id).await
}

/// GET /team/:id
pub async fn team_page(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    render_page(&state, EntityKind::Team, &id).await
}

#[derive(Debug, Deserialize)]
pub struct DropdownQuery {
    pub profile_type: EntityKind,
}

/// GET /update_dropdown?profile_type=Team
///
/// Dropdown of every entity of the requested kind, nothing selected.
pub async fn update_dropdown(
    State(state): State<AppState>,
    Query(query): Query<DropdownQuery>,
) -> Html<String> {
    let ctx = RenderContext::new(&state.store, query.profile_type, None);
    Html(state.dropdown.render(&ctx).await)
}

#[derive(Debug, Deserialize)]
pub struct UpdateData {
    pub profile_type: EntityKind,
    #[serde(rename = "user-selection")]
    pub user_selection: String,
}

/// Ids travel into a path segment; only plain tokens are accepted
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// POST /update_data
///
/// Redirects (303) to the page of the selected entity.
pub async fn update_data(Form(form): Form<UpdateData>) -> Response {
    let id = form.user_selection.trim();
    if !is_valid_id(id) {
        warn!("Rejected selection {:?}", form.user_selection);
        return (StatusCode::BAD_REQUEST, "Invalid selection").into_response();
    }

    let target = form.profile_type.route(id);
    info!("Selection changed: {}", target);
    Redirect::to(&target).into_response()
}
