use baseball_types::{
    DefenseTeam, Game, GameSnapshot, HitterCard, Inning, OffenceTeam, PitcherCard, RoundInfo,
    TeamSide,
};

pub fn round_info(inning: &Inning) -> RoundInfo {
    RoundInfo {
        round: inning.round,
        strike: inning.strike,
        ball: inning.ball,
        out: inning.out,
        first_base: inning.first_base,
        second_base: inning.second_base,
        third_base: inning.third_base,
    }
}

/// Compose the response snapshot for a game and its latest inning. Offense
/// is always the away side and defense the home side, regardless of which
/// team the caller picked; `playTeam` carries the picked side.
///
/// Returns `None` when the game is missing one of its sides.
pub fn compose_snapshot(game: &Game, inning: &Inning) -> Option<GameSnapshot> {
    let away = game.team_by_side(TeamSide::Away)?;
    let home = game.team_by_side(TeamSide::Home)?;
    let hitter = &inning.hitter_history;
    let pitcher = &inning.pitcher_history;

    Some(GameSnapshot {
        play_team: game
            .choice_team
            .clone()
            .unwrap_or_else(|| away.name.clone()),
        round_info: round_info(inning),
        offence_team: OffenceTeam {
            team_name: away.name.clone(),
            score: game.total_score(&away.name),
            hitter: HitterCard {
                name: hitter.member_name.clone(),
                tpa: hitter.tpa,
                hits: hitter.hits,
                out: hitter.outs,
            },
        },
        defense_team: DefenseTeam {
            team_name: home.name.clone(),
            score: game.total_score(&home.name),
            pitcher: PitcherCard {
                name: pitcher.member_name.clone(),
                pitches: pitcher.pitches,
            },
        },
        story: game.recent_story(),
    })
}
