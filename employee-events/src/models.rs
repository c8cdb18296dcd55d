//! Row models returned by the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Positive and negative event totals for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EventCountRow {
    pub event_date: NaiveDate,
    pub positive_events: i64,
    pub negative_events: i64,
}

/// Free-text note attached to an employee or team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NoteRow {
    pub note_date: NaiveDate,
    pub note: String,
}

/// One selectable entity: display label and id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EntityOption {
    pub label: String,
    pub id: String,
}

/// Summed event counts of a single employee, as fed to the risk model
///
/// Column order matches the exported model coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FeatureRow {
    pub positive_events: f64,
    pub negative_events: f64,
}

impl FeatureRow {
    pub fn as_array(&self) -> [f64; 2] {
        [self.positive_events, self.negative_events]
    }
}
