use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::config::PickemConfig;
use crate::error::{PickemError, Result};
use crate::models::{Game, Pick, ScoreEntry, Team};

/// Shared handle over the pick'em tables.
///
/// Cloning is cheap; all clones see the same data. Commands take the write
/// lock once for their whole unit of work, queries take the read lock, so a
/// reader never observes a game that is only partly scored.
#[derive(Clone)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
    config: PickemConfig,
}

impl Database {
    pub fn new(config: PickemConfig) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            config,
        }
    }

    pub fn config(&self) -> &PickemConfig {
        &self.config
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub teams: HashMap<String, Team>,
    pub games: HashMap<String, Game>,
    pub picks: HashMap<Uuid, Pick>,
    /// (user, game) -> pick
    pub pick_keys: HashMap<(String, String), Uuid>,
    /// (user, week) -> confidence weights already taken
    pub confidence_used: HashMap<(String, u32), BTreeSet<u32>>,
    /// Derived from picks and final games; rebuilt per game, never accumulated.
    pub scores: HashMap<Uuid, ScoreEntry>,
}

impl Tables {
    pub fn game(&self, game_id: &str) -> Result<&Game> {
        self.games.get(game_id).ok_or(PickemError::NotFound)
    }

    pub fn team(&self, team_id: &str) -> Result<&Team> {
        self.teams.get(team_id).ok_or(PickemError::NotFound)
    }

    pub fn picks_for_game<'a>(&'a self, game_id: &'a str) -> impl Iterator<Item = &'a Pick> + 'a {
        self.picks.values().filter(move |p| p.game_id == game_id)
    }

    /// Games of the week that can still be played or are final.
    pub fn games_in_week(&self, week: u32) -> usize {
        self.games
            .values()
            .filter(|g| g.week == week && !g.is_cancelled())
            .count()
    }

    pub fn reserve_confidence(&mut self, user_id: &str, week: u32, confidence: u32) {
        self.confidence_used
            .entry((user_id.to_string(), week))
            .or_default()
            .insert(confidence);
    }

    pub fn release_confidence(&mut self, user_id: &str, week: u32, confidence: u32) {
        let key = (user_id.to_string(), week);
        if let Some(used) = self.confidence_used.get_mut(&key) {
            used.remove(&confidence);
            if used.is_empty() {
                self.confidence_used.remove(&key);
            }
        }
    }

    pub fn confidence_taken(&self, user_id: &str, week: u32, confidence: u32) -> bool {
        self.confidence_used
            .get(&(user_id.to_string(), week))
            .is_some_and(|used| used.contains(&confidence))
    }
}
