//! Sport model (sub-resource of an event)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sport_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SportLevel {
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for SportLevel {
    fn default() -> Self {
        SportLevel::All
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sport {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub rules: String,
    pub cost: Option<f64>,
    pub level: SportLevel,
    pub created_at: DateTime<Utc>,
    pub event_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSportRequest {
    pub title: String,
    pub description: String,
    pub rules: String,
    pub cost: Option<f64>,
    #[serde(default)]
    pub level: SportLevel,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSportRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub cost: Option<f64>,
    pub level: Option<SportLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_defaults_to_all() {
        let request: CreateSportRequest = serde_json::from_str(
            r#"{"title": "Futsal", "description": "5-a-side", "rules": "FIFA futsal rules"}"#,
        )
        .unwrap();
        assert_eq!(request.level, SportLevel::All);
    }

    #[test]
    fn test_level_serde_lowercase() {
        let level: SportLevel = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(level, SportLevel::Intermediate);
        assert_eq!(serde_json::to_string(&SportLevel::All).unwrap(), "\"all\"");
    }
}
