//! Entity kinds reported on by the dashboard
//!
//! The set of kinds is closed. Every table and column name that reaches a SQL
//! string comes from the `&'static str` values returned here, never from
//! request input.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of entity a dashboard page describes
///
/// Deserializes through [`FromStr`], so form and query input may use any
/// letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EntityKind {
    Employee,
    Team,
}

impl EntityKind {
    /// All kinds, in the order they are offered in the profile selector
    pub const ALL: [EntityKind; 2] = [EntityKind::Employee, EntityKind::Team];

    /// Column-name prefix; also the name of the kind's own table
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Employee => "employee",
            EntityKind::Team => "team",
        }
    }

    /// Table holding one row per entity of this kind
    pub fn table(self) -> &'static str {
        self.prefix()
    }

    /// Join key shared by the entity table, `employee_events` and `notes`
    pub fn id_column(self) -> &'static str {
        match self {
            EntityKind::Employee => "employee_id",
            EntityKind::Team => "team_id",
        }
    }

    /// Human-readable name ("Employee", "Team")
    pub fn display_name(self) -> &'static str {
        match self {
            EntityKind::Employee => "Employee",
            EntityKind::Team => "Team",
        }
    }

    /// Path segment of the dashboard route for this kind
    pub fn route(self, id: &str) -> String {
        format!("/{}/{}", self.prefix(), id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                s.eq_ignore_ascii_case(kind.display_name()) || s == kind.prefix()
            })
            .ok_or_else(|| Error::InvalidInput(format!("unknown profile type: {}", s)))
    }
}

impl TryFrom<String> for EntityKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_join_names() {
        assert_eq!(EntityKind::Employee.table(), "employee");
        assert_eq!(EntityKind::Employee.id_column(), "employee_id");
        assert_eq!(EntityKind::Team.table(), "team");
        assert_eq!(EntityKind::Team.id_column(), "team_id");
    }

    #[test]
    fn test_parse_display_and_prefix_forms() {
        assert_eq!("Employee".parse::<EntityKind>().unwrap(), EntityKind::Employee);
        assert_eq!("team".parse::<EntityKind>().unwrap(), EntityKind::Team);
        assert_eq!("TEAM".parse::<EntityKind>().unwrap(), EntityKind::Team);
        assert!("manager".parse::<EntityKind>().is_err());
        assert!("".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let kind: EntityKind = serde_json::from_str("\"Team\"").unwrap();
        assert_eq!(kind, EntityKind::Team);
        assert_eq!(serde_json::to_string(&EntityKind::Employee).unwrap(), "\"Employee\"");
    }

    #[test]
    fn test_deserialize_ignores_case() {
        let kind: EntityKind = serde_json::from_str("\"team\"").unwrap();
        assert_eq!(kind, EntityKind::Team);
        let kind: EntityKind = serde_json::from_str("\"EMPLOYEE\"").unwrap();
        assert_eq!(kind, EntityKind::Employee);
        assert!(serde_json::from_str::<EntityKind>("\"manager\"").is_err());
    }

    #[test]
    fn test_route() {
        assert_eq!(EntityKind::Team.route("7"), "/team/7");
        assert_eq!(EntityKind::Employee.route("12"), "/employee/12");
    }
}
