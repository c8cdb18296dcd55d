//! # Employee Events
//!
//! Read-only access to the employee events store:
//! - Entity kinds (Employee, Team) and the table/column names they map to
//! - SQL templates built per entity kind
//! - Store access with one short-lived connection per query
//! - Row models returned to the report components
//! - Recruitment risk model loaded from exported parameters

pub mod entity;
pub mod error;
pub mod models;
pub mod predictor;
pub mod query;
pub mod store;

pub use entity::EntityKind;
pub use error::{Error, Result};
pub use models::{EntityOption, EventCountRow, FeatureRow, NoteRow};
pub use predictor::{LogisticRegression, RiskModel};
pub use store::Store;
