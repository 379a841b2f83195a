use uuid::Uuid;

use crate::Database;
use crate::error::{PickemError, Result};
use crate::models::ScoreEntry;
use crate::services::scoring;

pub struct ScoreRepository<'a> {
    db: &'a Database,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn find_by_pick(&self, pick_id: Uuid) -> Result<ScoreEntry> {
        let tables = self.db.read().await;
        tables.scores.get(&pick_id).cloned().ok_or(PickemError::NotFound)
    }

    /// Entries for one game; empty until the game is final.
    pub async fn list_for_game(&self, game_id: &str) -> Result<Vec<ScoreEntry>> {
        let tables = self.db.read().await;
        tables.game(game_id)?;

        let mut entries: Vec<ScoreEntry> = tables
            .scores
            .values()
            .filter(|s| s.game_id == game_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        Ok(entries)
    }

    pub async fn list_for_user(&self, user_id: &str, week: Option<u32>) -> Result<Vec<ScoreEntry>> {
        let tables = self.db.read().await;
        let mut entries: Vec<ScoreEntry> = tables
            .scores
            .values()
            .filter(|s| s.user_id == user_id && week.is_none_or(|w| s.week == w))
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.week.cmp(&b.week).then_with(|| a.game_id.cmp(&b.game_id)));

        Ok(entries)
    }

    /// Score a game again from its picks. Safe to repeat.
    pub async fn rescore_game(&self, game_id: &str) -> Result<Vec<ScoreEntry>> {
        let policy = self.db.config().scoring_policy;
        let mut tables = self.db.write().await;
        scoring::score_game(&mut tables, game_id, policy)
    }
}
