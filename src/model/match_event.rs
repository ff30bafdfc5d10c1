use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MatchId;

/// Lifecycle phase of a match, derived from its scheduled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

/// Derives the status of a match at a given instant.
pub fn match_status_at(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> MatchStatus {
    if now < start_time {
        MatchStatus::Scheduled
    } else if now < end_time {
        MatchStatus::Live
    } else {
        MatchStatus::Finished
    }
}

/// A stored match record, as served over HTTP and broadcast to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /matches`, before the store assigns id, status and
/// timestamps.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

impl NewMatch {
    /// Field-level checks; returns every failing field, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut details = Vec::new();
        if self.sport.trim().is_empty() {
            details.push("sport is required".to_string());
        }
        if self.home_team.trim().is_empty() {
            details.push("homeTeam is required".to_string());
        }
        if self.away_team.trim().is_empty() {
            details.push("awayTeam is required".to_string());
        }
        if self.end_time <= self.start_time {
            details.push("endTime must be after startTime".to_string());
        }
        if details.is_empty() { Ok(()) } else { Err(details) }
    }
}
