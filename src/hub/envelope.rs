use axum::extract::ws::Message;
use serde::Serialize;
use tracing::error;

use crate::model::{Commentary, Match, MatchId};

/// Server-to-client event envelope.
///
/// Every outbound frame carries exactly one `type` tag; clients dispatch on
/// it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    #[serde(rename = "welcome")]
    Welcome,
    #[serde(rename = "match_created")]
    MatchCreated { data: Match },
    #[serde(rename = "commentary")]
    Commentary { data: Commentary },
    #[serde(rename = "subscribed")]
    Subscribed {
        #[serde(rename = "matchId")]
        match_id: MatchId,
    },
    #[serde(rename = "unsubscribed")]
    Unsubscribed {
        #[serde(rename = "matchId")]
        match_id: MatchId,
    },
    #[serde(rename = "error")]
    Error { message: String },
}

impl ServerEvent {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Encodes to a websocket text frame; a serialization failure drops the
    /// frame and logs the cause.
    pub fn to_frame(&self) -> Option<Message> {
        match serde_json::to_string(self) {
            Ok(json) => Some(Message::Text(json)),
            Err(e) => {
                error!("failed to serialize event: {e}");
                None
            }
        }
    }
}
