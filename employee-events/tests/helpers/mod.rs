//! Fixture database builder for store tests

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{Connection, SqliteConnection};
use tempfile::TempDir;

pub const SCHEMA: &str = r#"
CREATE TABLE team (
    team_id INTEGER PRIMARY KEY,
    team_name TEXT,
    shift TEXT,
    manager_name TEXT
);

CREATE TABLE employee (
    employee_id INTEGER PRIMARY KEY,
    first_name TEXT,
    last_name TEXT,
    team_id INTEGER
);

CREATE TABLE employee_events (
    event_date TEXT,
    employee_id INTEGER,
    team_id INTEGER,
    positive_events INTEGER,
    negative_events INTEGER
);

CREATE TABLE notes (
    employee_id INTEGER,
    team_id INTEGER,
    note TEXT,
    note_date TEXT
);
"#;

/// Two teams with two employees each.
///
/// - Ada (1) has two rows on 2023-01-01 that aggregate to (3, 1) and one on 2023-01-05
/// - Grace (2) has one row on 2023-01-03
/// - Alan (3) has a row with a NULL negative count
/// - Quinn (4) has no events and no notes
/// - Team Gamma (3) has no members
pub const SEED: &str = r#"
INSERT INTO team VALUES (1, 'Team Alpha', 'Day', 'Ann Manager');
INSERT INTO team VALUES (2, 'Team Beta', 'Night', 'Bob Boss');
INSERT INTO team VALUES (3, 'Team Gamma', 'Day', 'Cy Chief');

INSERT INTO employee VALUES (1, 'Ada', 'Lovelace', 1);
INSERT INTO employee VALUES (2, 'Grace', 'Hopper', 1);
INSERT INTO employee VALUES (3, 'Alan', 'Turing', 2);
INSERT INTO employee VALUES (4, 'Quinn', 'Quiet', 2);

INSERT INTO employee_events VALUES ('2023-01-05', 1, 1, 0, 2);
INSERT INTO employee_events VALUES ('2023-01-01', 1, 1, 1, 0);
INSERT INTO employee_events VALUES ('2023-01-01', 1, 1, 2, 1);
INSERT INTO employee_events VALUES ('2023-01-03', 2, 1, 4, 0);
INSERT INTO employee_events VALUES ('2023-01-02', 3, 2, 1, 1);
INSERT INTO employee_events VALUES ('2023-01-04', 3, 2, 2, NULL);

INSERT INTO notes VALUES (1, 1, 'Great start', '2023-01-02');
INSERT INTO notes VALUES (1, 1, 'Needs support on project X', '2023-02-10');
INSERT INTO notes VALUES (1, 1, 'Mid-quarter review', '2023-01-20');
INSERT INTO notes VALUES (NULL, 2, 'Team offsite', '2023-03-01');
"#;

/// Create a database file under `dir` from the given SQL script
pub async fn create_db(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);

    let mut conn = SqliteConnection::connect_with(&options)
        .await
        .expect("Should create fixture database");
    sqlx::raw_sql(script)
        .execute(&mut conn)
        .await
        .expect("Should apply fixture script");
    conn.close().await.expect("Should close fixture connection");

    path
}

/// Fully seeded fixture database
///
/// Returns (TempDir, path) - TempDir must be kept alive for duration of test
pub async fn seeded_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Should create temp dir");
    let script = format!("{}{}", SCHEMA, SEED);
    let path = create_db(dir.path(), "employee_events.db", &script).await;
    (dir, path)
}
