//! SQL templates for the employee events store
//!
//! Each template is filled in with the table and join-key names of an
//! [`EntityKind`]. Those names come from a closed enum; the entity id is always
//! left as a `?` placeholder for the caller to bind.

use crate::EntityKind;

/// The fixed query shapes the dashboard runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTemplate {
    /// Every entity of a kind as `(label, id)`, ordered by id
    Names,
    /// Label of one entity
    DisplayName,
    /// Positive/negative event totals per date for one entity
    EventCounts,
    /// Notes attached to one entity, newest first
    Notes,
    /// Summed event counts per employee belonging to one entity
    ModelData,
}

impl QueryTemplate {
    /// Short name used in log lines
    pub fn name(self) -> &'static str {
        match self {
            QueryTemplate::Names => "names",
            QueryTemplate::DisplayName => "display_name",
            QueryTemplate::EventCounts => "event_counts",
            QueryTemplate::Notes => "notes",
            QueryTemplate::ModelData => "model_data",
        }
    }

    /// Whether the template takes an entity id parameter
    pub fn is_scoped(self) -> bool {
        !matches!(self, QueryTemplate::Names)
    }

    /// Build the SQL text for `kind`
    pub fn build(self, kind: EntityKind) -> String {
        let table = kind.table();
        let id = kind.id_column();
        let label = label_expression(kind);

        match self {
            QueryTemplate::Names => format!(
                "SELECT {label} AS label, CAST({table}.{id} AS TEXT) AS id
                 FROM {table}
                 ORDER BY {table}.{id}"
            ),
            QueryTemplate::DisplayName => format!(
                "SELECT {label} AS label
                 FROM {table}
                 WHERE {table}.{id} = ?"
            ),
            QueryTemplate::EventCounts => format!(
                "SELECT event_date,
                        COALESCE(SUM(positive_events), 0) AS positive_events,
                        COALESCE(SUM(negative_events), 0) AS negative_events
                 FROM {table}
                 JOIN employee_events ON {table}.{id} = employee_events.{id}
                 WHERE {table}.{id} = ?
                 GROUP BY event_date
                 ORDER BY event_date"
            ),
            QueryTemplate::Notes => format!(
                "SELECT note_date, note
                 FROM {table}
                 JOIN notes ON {table}.{id} = notes.{id}
                 WHERE {table}.{id} = ?
                 ORDER BY note_date DESC"
            ),
            QueryTemplate::ModelData => format!(
                "SELECT CAST(COALESCE(SUM(positive_events), 0) AS REAL) AS positive_events,
                        CAST(COALESCE(SUM(negative_events), 0) AS REAL) AS negative_events
                 FROM {table}
                 JOIN employee_events ON {table}.{id} = employee_events.{id}
                 WHERE {table}.{id} = ?
                 GROUP BY employee_events.employee_id
                 ORDER BY employee_events.employee_id"
            ),
        }
    }
}

/// Expression producing an entity's display label
fn label_expression(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Employee => "employee.first_name || ' ' || employee.last_name",
        EntityKind::Team => "team.team_name",
    }
}
