//! Read-only access to the employee events database
//!
//! Every query opens its own connection, runs, and closes the connection
//! before returning. There is no pool and nothing is written.
//!
//! Each query comes in two forms:
//! - `try_*` returns the store error to the caller
//! - the plain form logs the error and returns an empty result, so rendering
//!   code only ever sees "no data"

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{ConnectOptions, Connection, FromRow, SqliteConnection};
use tracing::{debug, error};

use crate::query::QueryTemplate;
use crate::{EntityKind, EntityOption, Error, EventCountRow, FeatureRow, NoteRow, Result};

/// Tables read by at least one query template
const REQUIRED_TABLES: [&str; 4] = ["employee", "team", "employee_events", "notes"];

/// Handle on the employee events database file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Store {
    /// Open a handle on an existing database in read-only mode
    ///
    /// Fails if the file does not exist. No connection is held open.
    pub fn open_readonly(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Database not found: {}",
                path.display()
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .create_if_missing(false)
            .disable_statement_logging();

        Ok(Self { path, options })
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqliteConnection> {
        Ok(self.options.connect().await?)
    }

    /// Run one template for `kind`, binding `id` when the template is scoped
    async fn fetch<T>(&self, template: QueryTemplate, kind: EntityKind, id: Option<&str>) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let sql = template.build(kind);
        let mut conn = self.connect().await?;

        let mut query = sqlx::query_as::<_, T>(&sql);
        if template.is_scoped() {
            let id = id.ok_or_else(|| {
                Error::InvalidInput(format!("{} requires an entity id", template.name()))
            })?;
            query = query.bind(id.to_string());
        }

        let rows = query.fetch_all(&mut conn).await?;
        conn.close().await?;

        debug!(
            query = template.name(),
            kind = %kind,
            id = id.unwrap_or(""),
            rows = rows.len(),
            "Query complete"
        );

        Ok(rows)
    }

    /// All entities of `kind` as `(label, id)` pairs, ordered by id
    pub async fn try_names(&self, kind: EntityKind) -> Result<Vec<EntityOption>> {
        self.fetch(QueryTemplate::Names, kind, None).await
    }

    /// Display label of one entity; `None` when the id is unknown
    pub async fn try_display_name(&self, kind: EntityKind, id: &str) -> Result<Option<String>> {
        let labels: Vec<(String,)> = self.fetch(QueryTemplate::DisplayName, kind, Some(id)).await?;
        Ok(labels.into_iter().next().map(|(label,)| label))
    }

    /// Event totals per date for one entity, ordered by date
    pub async fn try_event_counts(&self, kind: EntityKind, id: &str) -> Result<Vec<EventCountRow>> {
        self.fetch(QueryTemplate::EventCounts, kind, Some(id)).await
    }

    /// Notes attached to one entity
    pub async fn try_notes(&self, kind: EntityKind, id: &str) -> Result<Vec<NoteRow>> {
        self.fetch(QueryTemplate::Notes, kind, Some(id)).await
    }

    /// Risk model input rows: one per employee with events under this entity
    pub async fn try_model_data(&self, kind: EntityKind, id: &str) -> Result<Vec<FeatureRow>> {
        self.fetch(QueryTemplate::ModelData, kind, Some(id)).await
    }

    /// Confirm the database opens and every table the dashboard reads exists
    pub async fn check(&self) -> Result<()> {
        let mut conn = self.connect().await?;
        for table in REQUIRED_TABLES {
            sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
                .fetch_optional(&mut conn)
                .await?;
        }
        conn.close().await?;
        Ok(())
    }

    pub async fn names(&self, kind: EntityKind) -> Vec<EntityOption> {
        or_empty(self.try_names(kind).await, QueryTemplate::Names, kind, None)
    }

    pub async fn display_name(&self, kind: EntityKind, id: &str) -> Option<String> {
        or_empty(
            self.try_display_name(kind, id).await,
            QueryTemplate::DisplayName,
            kind,
            Some(id),
        )
    }

    pub async fn event_counts(&self, kind: EntityKind, id: &str) -> Vec<EventCountRow> {
        or_empty(
            self.try_event_counts(kind, id).await,
            QueryTemplate::EventCounts,
            kind,
            Some(id),
        )
    }

    pub async fn notes(&self, kind: EntityKind, id: &str) -> Vec<NoteRow> {
        or_empty(self.try_notes(kind, id).await, QueryTemplate::Notes, kind, Some(id))
    }

    pub async fn model_data(&self, kind: EntityKind, id: &str) -> Vec<FeatureRow> {
        or_empty(
            self.try_model_data(kind, id).await,
            QueryTemplate::ModelData,
            kind,
            Some(id),
        )
    }
}

/// Log a failed query and fall back to the empty value
fn or_empty<T: Default>(
    result: Result<T>,
    template: QueryTemplate,
    kind: EntityKind,
    id: Option<&str>,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(
                query = template.name(),
                kind = %kind,
                id = id.unwrap_or(""),
                "Database query failed, returning empty result: {}",
                e
            );
            T::default()
        }
    }
}
