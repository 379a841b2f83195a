pub mod eligibility;
pub mod leaderboard;
pub mod scoring;
