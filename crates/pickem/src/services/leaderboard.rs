use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::database::Tables;
use crate::models::{ScoringPolicy, StandingsRow};

/// Per-user sums feeding one standings row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub total_points: u32,
    pub correct_picks: u32,
    pub top_ten_wins: u32,
    pub picks_submitted: u32,
}

/// Ordering of two tallies by points and tie-breaks, best first.
///
/// `Equal` means the two rows share a rank; the caller still orders them by
/// user id so the output is total.
pub fn compare_tallies(a: &Tally, b: &Tally, policy: ScoringPolicy) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| b.top_ten_wins.cmp(&a.top_ten_wins))
        .then_with(|| {
            if policy.is_weighted() {
                a.picks_submitted.cmp(&b.picks_submitted)
            } else {
                Ordering::Equal
            }
        })
}

/// Sort tallies best first and assign competition ranks (1, 1, 3, ...).
pub fn rank_tallies(tallies: HashMap<String, Tally>, policy: ScoringPolicy) -> Vec<StandingsRow> {
    let mut sorted: Vec<(String, Tally)> = tallies.into_iter().collect();
    sorted.sort_by(|(user_a, a), (user_b, b)| {
        compare_tallies(a, b, policy).then_with(|| user_a.cmp(user_b))
    });

    let mut rows: Vec<StandingsRow> = Vec::with_capacity(sorted.len());
    for (position, (user_id, tally)) in sorted.iter().enumerate() {
        let rank = match position.checked_sub(1).map(|prev| &sorted[prev].1) {
            Some(prev) if compare_tallies(prev, tally, policy) == Ordering::Equal => {
                rows[position - 1].rank
            }
            _ => position as u32 + 1,
        };

        rows.push(StandingsRow {
            rank,
            user_id: user_id.clone(),
            total_points: tally.total_points,
            correct_picks: tally.correct_picks,
            top_ten_wins: tally.top_ten_wins,
            picks_submitted: tally.picks_submitted,
            previous_rank: None,
        });
    }

    rows
}

/// Sum every user's picks on games up to and including `through_week`.
///
/// Picks on cancelled games are skipped entirely. Picks on games without a
/// result count as submitted but add no points.
pub(crate) fn tally_through(tables: &Tables, through_week: u32) -> HashMap<String, Tally> {
    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for pick in tables.picks.values() {
        let Some(game) = tables.games.get(&pick.game_id) else {
            continue;
        };
        if game.week > through_week || game.is_cancelled() {
            continue;
        }

        let tally = tallies.entry(pick.user_id.clone()).or_default();
        tally.picks_submitted += 1;

        if !game.is_final() {
            continue;
        }
        if let Some(entry) = tables.scores.get(&pick.pick_id) {
            tally.total_points += entry.total();
            tally.correct_picks += u32::from(entry.correct);
            tally.top_ten_wins += u32::from(entry.beat_top_ten());
        }
    }

    tallies
}

/// Latest week with a game that has kicked off, else the earliest week on file.
pub(crate) fn current_week(tables: &Tables, now: DateTime<Utc>) -> Option<u32> {
    tables
        .games
        .values()
        .filter(|g| g.kickoff <= now)
        .map(|g| g.week)
        .max()
        .or_else(|| tables.games.values().map(|g| g.week).min())
}

pub(crate) fn compute_standings(
    tables: &Tables,
    through_week: u32,
    policy: ScoringPolicy,
) -> Vec<StandingsRow> {
    let mut rows = rank_tallies(tally_through(tables, through_week), policy);

    if through_week > 1 {
        let previous: HashMap<String, u32> =
            rank_tallies(tally_through(tables, through_week - 1), policy)
                .into_iter()
                .map(|row| (row.user_id, row.rank))
                .collect();

        for row in &mut rows {
            row.previous_rank = previous.get(&row.user_id).copied();
        }
    }

    rows
}
