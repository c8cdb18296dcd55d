//! Fixture database and app builders for dashboard tests

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use employee_events::{FeatureRow, RiskModel, Store};
use employee_report::{build_router, AppState};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{Connection, SqliteConnection};
use tempfile::TempDir;

const FIXTURE: &str = r#"
CREATE TABLE team (team_id INTEGER PRIMARY KEY, team_name TEXT, shift TEXT, manager_name TEXT);
CREATE TABLE employee (employee_id INTEGER PRIMARY KEY, first_name TEXT, last_name TEXT, team_id INTEGER);
CREATE TABLE employee_events (event_date TEXT, employee_id INTEGER, team_id INTEGER, positive_events INTEGER, negative_events INTEGER);
CREATE TABLE notes (employee_id INTEGER, team_id INTEGER, note TEXT, note_date TEXT);

INSERT INTO team VALUES (1, 'Team Alpha', 'Day', 'Ann Manager');
INSERT INTO team VALUES (2, 'Team Beta', 'Night', 'Bob Boss');

INSERT INTO employee VALUES (1, 'Ada', 'Lovelace', 1);
INSERT INTO employee VALUES (2, 'Grace', 'Hopper', 1);
INSERT INTO employee VALUES (3, 'Quinn', 'Quiet', 2);

INSERT INTO employee_events VALUES ('2023-01-01', 1, 1, 1, 0);
INSERT INTO employee_events VALUES ('2023-01-01', 1, 1, 2, 1);
INSERT INTO employee_events VALUES ('2023-01-05', 1, 1, 0, 2);
INSERT INTO employee_events VALUES ('2023-01-03', 2, 1, 4, 0);

INSERT INTO notes VALUES (1, 1, 'Great start', '2023-01-02');
INSERT INTO notes VALUES (1, 1, 'Needs support on <project X>', '2023-02-10');
INSERT INTO notes VALUES (NULL, 2, 'Team offsite', '2023-03-01');
"#;

/// Probability of a row is a tenth of its positive events
pub struct TenthOfPositives;

impl RiskModel for TenthOfPositives {
    fn predict_proba(&self, rows: &[FeatureRow]) -> Vec<f64> {
        rows.iter()
            .map(|row| (row.positive_events / 10.0).clamp(0.0, 1.0))
            .collect()
    }
}

/// Seeded fixture database
///
/// Returns (TempDir, path) - TempDir must be kept alive for duration of test
pub async fn seeded_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Should create temp dir");
    let path = dir.path().join("employee_events.db");
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);

    let mut conn = SqliteConnection::connect_with(&options)
        .await
        .expect("Should create fixture database");
    sqlx::raw_sql(FIXTURE)
        .execute(&mut conn)
        .await
        .expect("Should apply fixture script");
    conn.close().await.expect("Should close fixture connection");

    (dir, path)
}

/// App over the seeded database with the [`TenthOfPositives`] model
pub async fn setup_app() -> (TempDir, axum::Router) {
    let (dir, path) = seeded_db().await;
    let store = Store::open_readonly(&path).expect("Should open fixture store");
    let state = AppState::new(store, Arc::new(TenthOfPositives));
    (dir, build_router(state))
}

/// App over a zero-byte database file: it opens, but holds no tables
pub fn setup_app_without_tables() -> (TempDir, axum::Router) {
    let dir = TempDir::new().expect("Should create temp dir");
    let path = dir.path().join("empty.db");
    std::fs::write(&path, b"").expect("Should create empty database file");
    let store = Store::open_readonly(&path).expect("Should open empty store");
    let state = AppState::new(store, Arc::new(TenthOfPositives));
    (dir, build_router(state))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}
