use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MatchId;

/// One timestamped commentary entry attached to a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commentary {
    pub id: i64,
    pub match_id: MatchId,
    pub minute: u32,
    pub sequence: u32,
    pub period: String,
    pub event_type: String,
    pub actor: String,
    pub team: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /matches/:id/commentary`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentary {
    pub minute: u32,
    pub sequence: u32,
    pub period: String,
    pub event_type: String,
    pub actor: String,
    pub team: String,
    pub message: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl NewCommentary {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut details = Vec::new();
        for (value, name) in [
            (&self.period, "period"),
            (&self.event_type, "eventType"),
            (&self.actor, "actor"),
            (&self.team, "team"),
            (&self.message, "message"),
        ] {
            if value.trim().is_empty() {
                details.push(format!("{name} is required and cannot be empty"));
            }
        }
        if let Some(metadata) = &self.metadata {
            if !metadata.is_object() {
                details.push("metadata must be an object".to_string());
            }
        }
        if details.is_empty() { Ok(()) } else { Err(details) }
    }
}
