// Plain-text rendering of draft results.
//
// Ranks, ADPs and grades are printed at full precision ("14.0", "12.25").

use mockdraft_core::draft::engine::{DraftResult, PickOutcome, PickRecord};
use mockdraft_core::draft::grade::grade;
use mockdraft_core::draft::player::Player;
use mockdraft_core::draft::strategy::Strategy;

/// Layout differences between the two reports.
struct LineStyle {
    round_width: usize,
    adp_separator: &'static str,
}

const DRAFT_STYLE: LineStyle = LineStyle {
    round_width: 1,
    adp_separator: "/",
};

const STRATEGY_STYLE: LineStyle = LineStyle {
    round_width: 2,
    adp_separator: "|",
};

fn pick_line(record: &PickRecord, style: &LineStyle) -> String {
    let round = record.round + 1;
    let width = style.round_width;
    match &record.outcome {
        PickOutcome::Picked(p) => format!(
            "  Round {round:>width$}: {} ({}) - Rank: {} {} ADP: {:?}\n",
            p.name, p.position, p.rank, style.adp_separator, p.adp
        ),
        PickOutcome::Skipped => format!("  Round {round:>width$}: (no eligible player)\n"),
    }
}

fn team_picks(result: &DraftResult, team: usize) -> impl Iterator<Item = &PickRecord> + '_ {
    result.picks.iter().filter(move |p| p.team == team)
}

fn team_grade(result: &DraftResult, team: usize, top_n: usize) -> f64 {
    let players: &[Player] = result
        .roster(team)
        .map(|r| r.players.as_slice())
        .unwrap_or(&[]);
    grade(players, top_n)
}

/// Every team's picks round by round, each followed by its grade.
pub fn render_draft(result: &DraftResult, top_n: usize) -> String {
    let mut out = String::from("\n=== Draft Results ===\n\n");

    for team in 0..result.rosters.len() {
        let you = if team == result.designated_team { " (You)" } else { "" };
        out.push_str(&format!("Team {}{}:\n", team + 1, you));
        for record in team_picks(result, team) {
            out.push_str(&pick_line(record, &DRAFT_STYLE));
        }
        out.push_str(&format!(
            "  ➤ Grade Score: {:?}\n\n",
            team_grade(result, team, top_n)
        ));
    }

    out
}

/// The designated team's draft under one strategy.
pub fn render_strategy(strategy: Strategy, result: &DraftResult, top_n: usize) -> String {
    let mut out = format!("\n--- Strategy: {strategy} ---\n");
    for record in team_picks(result, result.designated_team) {
        out.push_str(&pick_line(record, &STRATEGY_STYLE));
    }
    out.push_str(&format!(
        "➤ Grade Score: {:?}\n",
        team_grade(result, result.designated_team, top_n)
    ));
    out
}
