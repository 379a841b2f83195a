pub mod game;
pub mod pick;
pub mod score_entry;
pub mod scoring_policy;
pub mod standings;
pub mod team;

pub use game::{FinalScore, Game, GameStatus};
pub use pick::{Pick, TotalPick};
pub use score_entry::ScoreEntry;
pub use scoring_policy::ScoringPolicy;
pub use standings::StandingsRow;
pub use team::{MAX_POLL_RANK, TOP_TEN_CUTOFF, Team, is_top_ten};
