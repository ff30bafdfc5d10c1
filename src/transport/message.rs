use serde::Deserialize;

use crate::model::MatchId;

/// Inbound client frame, decoded from one JSON text message.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientFrame {
    #[serde(rename = "subscribe")]
    Subscribe {
        #[serde(rename = "matchId")]
        match_id: MatchIdValue,
    },

    #[serde(rename = "unsubscribe")]
    Unsubscribe {
        #[serde(rename = "matchId")]
        match_id: MatchIdValue,
    },
}

/// Wire form of a match id: clients send both `7` and `"7"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MatchIdValue {
    Int(i64),
    Text(String),
}

impl MatchIdValue {
    /// Coerces to a match id; `None` when the text form is not a plain
    /// integer.
    pub fn coerce(&self) -> Option<MatchId> {
        match self {
            Self::Int(id) => Some(*id),
            Self::Text(raw) => raw.trim().parse().ok(),
        }
    }
}
