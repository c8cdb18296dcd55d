//! employee-report library - performance dashboard for employees and teams
//!
//! Serves one HTML page per employee or team, built from the employee events
//! database and an exported recruitment-risk model.

use std::sync::Arc;

use axum::Router;
use employee_events::{RiskModel, Store};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod charts;
pub mod components;
pub mod config;
pub mod html;

use components::{Composite, ReportDropdown};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Employee events database (read-only)
    pub store: Store,
    /// Full page component tree, built once
    pub report: Arc<Composite>,
    /// Dropdown served on its own by `/update_dropdown`
    pub dropdown: ReportDropdown,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Store, model: Arc<dyn RiskModel>) -> Self {
        let dropdown = ReportDropdown::default();
        let report = Arc::new(components::report(model, dropdown.clone()));
        Self {
            store,
            report,
            dropdown,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::index))
        .route("/employee/:id", get(api::employee_page))
        .route("/team/:id", get(api::team_page))
        .route("/update_dropdown", get(api::update_dropdown))
        .route("/update_data", post(api::update_data))
        .merge(api::health_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
