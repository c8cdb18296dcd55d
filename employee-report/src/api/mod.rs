//! HTTP handlers for employee-report

pub mod dashboard;
pub mod health;

pub use dashboard::{employee_page, index, team_page, update_data, update_dropdown};
pub use health::health_routes;
