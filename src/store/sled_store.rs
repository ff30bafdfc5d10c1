use chrono::Utc;
use sled::{Db, Tree};

use super::StoreError;
use crate::model::{match_status_at, Commentary, Match, MatchId, NewCommentary, NewMatch};

const MATCHES_TREE: &str = "matches";

/// Sled-backed store of matches and commentary.
///
/// Matches live in one tree keyed by big-endian id; each match gets its own
/// commentary tree, so a per-match listing is a plain scan.
#[derive(Clone)]
pub struct MatchStore {
    db: Db,
}

impl MatchStore {
    pub fn open(path: &str) -> Result<Self, StoreError> {
        Ok(Self {
            db: sled::open(path)?,
        })
    }

    // generate_id is monotonic and starts at zero; shift so ids stay positive.
    fn next_id(&self) -> Result<i64, StoreError> {
        Ok((self.db.generate_id()? + 1) as i64)
    }

    fn matches(&self) -> Result<Tree, StoreError> {
        Ok(self.db.open_tree(MATCHES_TREE)?)
    }

    fn commentary(&self, match_id: MatchId) -> Result<Tree, StoreError> {
        Ok(self.db.open_tree(format!("commentary_{match_id}"))?)
    }

    /// Persists a validated match, assigning id, status and creation time.
    pub fn insert_match(&self, new: NewMatch) -> Result<Match, StoreError> {
        let now = Utc::now();
        let record = Match {
            id: self.next_id()?,
            status: match_status_at(new.start_time, new.end_time, now),
            sport: new.sport,
            home_team: new.home_team,
            away_team: new.away_team,
            start_time: new.start_time,
            end_time: new.end_time,
            home_score: new.home_score.unwrap_or(0),
            away_score: new.away_score.unwrap_or(0),
            created_at: now,
        };
        self.matches()?
            .insert(record.id.to_be_bytes(), serde_json::to_vec(&record)?)?;
        Ok(record)
    }

    pub fn get_match(&self, id: MatchId) -> Result<Option<Match>, StoreError> {
        match self.matches()?.get(id.to_be_bytes())? {
            Some(raw) => Ok(Some(serde_json::from_slice(&raw)?)),
            None => Ok(None),
        }
    }

    /// Newest-first listing; ids are assigned monotonically, so a reverse id
    /// scan is reverse creation order.
    pub fn list_matches(&self, limit: usize) -> Result<Vec<Match>, StoreError> {
        let mut events = Vec::new();
        for entry in self.matches()?.iter().rev().take(limit) {
            let (_, raw) = entry?;
            events.push(serde_json::from_slice(&raw)?);
        }
        Ok(events)
    }

    /// Persists a validated commentary entry under its match.
    pub fn insert_commentary(
        &self,
        match_id: MatchId,
        new: NewCommentary,
    ) -> Result<Commentary, StoreError> {
        let record = Commentary {
            id: self.next_id()?,
            match_id,
            minute: new.minute,
            sequence: new.sequence,
            period: new.period,
            event_type: new.event_type,
            actor: new.actor,
            team: new.team,
            message: new.message,
            metadata: new.metadata,
            tags: new.tags,
            created_at: Utc::now(),
        };
        self.commentary(match_id)?
            .insert(record.id.to_be_bytes(), serde_json::to_vec(&record)?)?;
        Ok(record)
    }

    pub fn list_commentary(
        &self,
        match_id: MatchId,
        limit: usize,
    ) -> Result<Vec<Commentary>, StoreError> {
        let mut entries = Vec::new();
        for entry in self.commentary(match_id)?.iter().take(limit) {
            let (_, raw) = entry?;
            entries.push(serde_json::from_slice(&raw)?);
        }
        Ok(entries)
    }
}

impl std::fmt::Debug for MatchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchStore").field("db", &"sled::Db").finish()
    }
}
