use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::database::Tables;
use crate::error::Result;
use crate::models::{Game, Pick, ScoreEntry, ScoringPolicy, TotalPick};

/// Score one pick against its game.
///
/// Returns `None` until the game is final, so cancelled and unplayed games
/// never produce an entry.
pub fn score_pick(pick: &Pick, game: &Game, policy: ScoringPolicy) -> Option<ScoreEntry> {
    let winner = game.winner()?;
    let correct = pick.chosen_team_id == winner;

    let points = match (correct, policy) {
        (false, _) => 0,
        (true, ScoringPolicy::Straight) => 1,
        // Picks stored before the policy switched to confidence count as weight 1.
        (true, ScoringPolicy::Confidence) => pick.confidence.unwrap_or(1),
    };

    Some(ScoreEntry {
        pick_id: pick.pick_id,
        user_id: pick.user_id.clone(),
        game_id: game.game_id.clone(),
        week: game.week,
        correct,
        points,
        over_under_points: over_under_points(pick, game),
        opponent_rank: game.opponent_rank(&pick.chosen_team_id),
    })
}

/// One bonus point for calling the total against the line captured at pick time.
/// A push scores nothing.
pub fn over_under_points(pick: &Pick, game: &Game) -> u32 {
    let (Some(total_pick), Some(line), Some(score)) =
        (pick.total_pick, pick.line_at_pick, game.final_score)
    else {
        return 0;
    };

    let total = Decimal::from(score.total());
    let hit = match total_pick {
        TotalPick::Over => total > line,
        TotalPick::Under => total < line,
    };

    u32::from(hit)
}

/// Rebuild the score entries of every pick on `game_id`.
///
/// Entries are keyed by pick id and replaced, so running this twice yields the
/// same rows. A game that is not final ends up with no entries at all.
pub(crate) fn score_game(
    tables: &mut Tables,
    game_id: &str,
    policy: ScoringPolicy,
) -> Result<Vec<ScoreEntry>> {
    let game = tables.game(game_id)?.clone();

    if !game.is_final() {
        let stale: Vec<Uuid> = tables.picks_for_game(game_id).map(|p| p.pick_id).collect();
        for pick_id in stale {
            tables.scores.remove(&pick_id);
        }
        return Ok(Vec::new());
    }

    let mut entries: Vec<ScoreEntry> = tables
        .picks_for_game(game_id)
        .filter_map(|pick| score_pick(pick, &game, policy))
        .collect();
    entries.sort_by(|a, b| a.user_id.cmp(&b.user_id));

    for entry in &entries {
        tables.scores.insert(entry.pick_id, entry.clone());
    }

    debug!(game_id, entries = entries.len(), %policy, "Scored game");

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinalScore, GameStatus};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 30, 19, 30, 0).unwrap()
    }

    fn final_game(winner: &str) -> Game {
        Game {
            game_id: "g1".into(),
            week: 1,
            home_team_id: "a".into(),
            away_team_id: "b".into(),
            home_rank: Some(3),
            away_rank: Some(7),
            kickoff: kickoff(),
            status: GameStatus::Final,
            winner_team_id: Some(winner.into()),
            final_score: Some(FinalScore {
                home_points: 28,
                away_points: 24,
            }),
            over_under: Some(Decimal::new(515, 1)),
            updated_at: kickoff() + Duration::hours(4),
        }
    }

    fn pick(user: &str, team: &str, confidence: Option<u32>) -> Pick {
        Pick {
            pick_id: Uuid::new_v4(),
            user_id: user.into(),
            game_id: "g1".into(),
            week: 1,
            chosen_team_id: team.into(),
            confidence,
            total_pick: None,
            line_at_pick: None,
            version: 1,
            created_at: kickoff() - Duration::days(2),
            submitted_at: kickoff() - Duration::days(2),
        }
    }

    #[test]
    fn test_straight_scoring() {
        let game = final_game("a");
        let right = score_pick(&pick("u1", "a", Some(5)), &game, ScoringPolicy::Straight).unwrap();
        let wrong = score_pick(&pick("u2", "b", Some(5)), &game, ScoringPolicy::Straight).unwrap();

        assert!(right.correct);
        assert_eq!(right.points, 1);
        assert!(!wrong.correct);
        assert_eq!(wrong.points, 0);
    }

    #[test]
    fn test_confidence_scoring() {
        let game = final_game("a");
        let u1 = score_pick(&pick("U1", "a", Some(3)), &game, ScoringPolicy::Confidence).unwrap();
        let u2 = score_pick(&pick("U2", "b", Some(5)), &game, ScoringPolicy::Confidence).unwrap();

        assert_eq!(u1.points, 3);
        assert_eq!(u2.points, 0);
    }

    #[test]
    fn test_opponent_rank_recorded() {
        let game = final_game("a");
        let entry = score_pick(&pick("u1", "a", None), &game, ScoringPolicy::Straight).unwrap();
        assert_eq!(entry.opponent_rank, Some(7));
        assert!(entry.beat_top_ten());
    }

    #[test]
    fn test_no_entry_unless_final() {
        let mut game = final_game("a");
        game.status = GameStatus::Cancelled;
        game.winner_team_id = None;
        assert!(score_pick(&pick("u1", "a", None), &game, ScoringPolicy::Straight).is_none());

        game.status = GameStatus::Scheduled;
        assert!(score_pick(&pick("u1", "a", None), &game, ScoringPolicy::Straight).is_none());
    }

    #[test]
    fn test_over_under_against_captured_line() {
        // 28 + 24 = 52 against a 51.5 line
        let game = final_game("b");
        let mut over = pick("u1", "a", None);
        over.total_pick = Some(TotalPick::Over);
        over.line_at_pick = Some(Decimal::new(515, 1));

        let mut under = over.clone();
        under.total_pick = Some(TotalPick::Under);

        let entry = score_pick(&over, &game, ScoringPolicy::Straight).unwrap();
        assert_eq!(entry.points, 0);
        assert_eq!(entry.over_under_points, 1);
        assert_eq!(entry.total(), 1);
        assert_eq!(over_under_points(&under, &game), 0);
    }

    #[test]
    fn test_over_under_push_and_missing_line() {
        let game = final_game("a");
        let mut p = pick("u1", "a", None);
        p.total_pick = Some(TotalPick::Over);
        assert_eq!(over_under_points(&p, &game), 0);

        p.line_at_pick = Some(Decimal::from(52));
        assert_eq!(over_under_points(&p, &game), 0);
        p.total_pick = Some(TotalPick::Under);
        assert_eq!(over_under_points(&p, &game), 0);
    }

    #[test]
    fn test_score_game_is_idempotent() {
        let mut tables = Tables::default();
        let game = final_game("a");
        tables.games.insert(game.game_id.clone(), game);
        for p in [pick("u1", "a", Some(3)), pick("u2", "b", Some(5))] {
            tables.picks.insert(p.pick_id, p);
        }

        let first = score_game(&mut tables, "g1", ScoringPolicy::Confidence).unwrap();
        let second = score_game(&mut tables, "g1", ScoringPolicy::Confidence).unwrap();

        assert_eq!(first, second);
        assert_eq!(tables.scores.len(), 2);
        let total: u32 = tables.scores.values().map(ScoreEntry::total).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_score_game_clears_entries_when_not_final() {
        let mut tables = Tables::default();
        let game = final_game("a");
        tables.games.insert(game.game_id.clone(), game);
        let p = pick("u1", "a", None);
        tables.picks.insert(p.pick_id, p);
        score_game(&mut tables, "g1", ScoringPolicy::Straight).unwrap();
        assert_eq!(tables.scores.len(), 1);

        if let Some(g) = tables.games.get_mut("g1") {
            g.status = GameStatus::Cancelled;
        }
        let entries = score_game(&mut tables, "g1", ScoringPolicy::Straight).unwrap();
        assert!(entries.is_empty());
        assert!(tables.scores.is_empty());
    }
}
