//! Domain records for the feed: matches and the commentary attached to them.

pub mod commentary;
pub mod match_event;

pub use commentary::{Commentary, NewCommentary};
pub use match_event::{match_status_at, Match, MatchStatus, NewMatch};

/// Identifies a match; doubles as the topic key in the fan-out hub.
pub type MatchId = i64;
