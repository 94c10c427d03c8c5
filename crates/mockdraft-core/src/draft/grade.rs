// Roster grading.
//
// A roster's grade comes from its best `top_n` players by overall rank:
// score = 1000 / (1 + sum of their ranks), rounded to two decimals. Better
// (lower) ranks give a higher score, bounded by 1000 for an empty roster.

use super::player::Player;

const SCALE: f64 = 1000.0;

/// Sum of the ranks of the `top_n` best-ranked players (all of them if the
/// roster is shorter).
pub fn top_rank_sum(players: &[Player], top_n: usize) -> u64 {
    let mut ranks: Vec<u32> = players.iter().map(|p| p.rank).collect();
    ranks.sort_unstable();
    ranks.iter().take(top_n).map(|&r| u64::from(r)).sum()
}

/// Score for a rank sum, rounded to two decimals. Exact halves go to the
/// even neighbour.
pub fn score_for_rank_sum(rank_sum: u64) -> f64 {
    let raw = SCALE / (1.0 + rank_sum as f64);
    (raw * 100.0).round_ties_even() / 100.0
}

pub fn grade(players: &[Player], top_n: usize) -> f64 {
    score_for_rank_sum(top_rank_sum(players, top_n))
}
