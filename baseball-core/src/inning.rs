use tracing::debug;

use baseball_types::{Game, HitterHistory, Inning, PitcherHistory, ScoreHistory, TeamSide};

/// Build the opening inning for a game. The away side bats first, so the
/// score history is scoped to the away team, the hitter history to the away
/// leadoff member, and the pitcher history to the home starter.
///
/// Returns `None` when either side is missing or a needed roster is empty;
/// callers surface that as a not-found condition rather than defaulting.
pub fn open_inning(game: &Game) -> Option<Inning> {
    let away = game.team_by_side(TeamSide::Away)?;
    let home = game.team_by_side(TeamSide::Home)?;
    let hitter = away.first_member()?;
    let pitcher = home.first_member()?;

    debug!(
        "opening inning {} for game {}",
        game.innings.len() + 1,
        game.id
    );

    Some(Inning {
        round: game.innings.len() as i32 + 1,
        strike: 0,
        ball: 0,
        out: 0,
        first_base: false,
        second_base: false,
        third_base: false,
        score_history: ScoreHistory::opening(&away.name),
        hitter_history: HitterHistory::opening(hitter),
        pitcher_history: PitcherHistory::opening(pitcher),
        events: Vec::new(),
    })
}
