use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::team::{Team, TeamSide};

/// Runs recorded for the batting side of one inning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreHistory {
    pub team_name: String,
    pub score: i32,
}

impl ScoreHistory {
    /// Opening record for the batting side, before any runs.
    pub fn opening(team_name: &str) -> Self {
        Self {
            team_name: team_name.to_string(),
            score: 0,
        }
    }
}

/// Plate record of the member currently at bat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HitterHistory {
    pub member_id: i32,
    pub member_name: String,
    pub tpa: i32,
    pub hits: i32,
    pub outs: i32,
}

impl HitterHistory {
    pub fn opening(member: &crate::Member) -> Self {
        Self {
            member_id: member.id,
            member_name: member.name.clone(),
            tpa: 0,
            hits: 0,
            outs: 0,
        }
    }
}

/// Mound record of the member currently pitching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PitcherHistory {
    pub member_id: i32,
    pub member_name: String,
    pub pitches: i32,
}

impl PitcherHistory {
    pub fn opening(member: &crate::Member) -> Self {
        Self {
            member_id: member.id,
            member_name: member.name.clone(),
            pitches: 0,
        }
    }
}

/// One unit of game progression pairing an offense and a defense side.
/// Innings are append-only on a game; past innings are never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Inning {
    pub round: i32,
    pub strike: i32,
    pub ball: i32,
    pub out: i32,
    pub first_base: bool,
    pub second_base: bool,
    pub third_base: bool,
    pub score_history: ScoreHistory,
    pub hitter_history: HitterHistory,
    pub pitcher_history: PitcherHistory,
    /// Narrative strike/ball/out lines of the round, in play order.
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Game {
    pub id: i32,
    /// Name of the side picked when the game was started, if any.
    pub choice_team: Option<String>,
    pub teams: Vec<Team>,
    pub innings: Vec<Inning>,
}

impl Game {
    pub fn team_by_side(&self, side: TeamSide) -> Option<&Team> {
        self.teams.iter().find(|team| team.side == side)
    }

    pub fn has_team(&self, name: &str) -> bool {
        self.teams.iter().any(|team| team.matches_name(name))
    }

    pub fn choose_team(&mut self, name: &str) {
        self.choice_team = Some(name.to_string());
    }

    pub fn add_inning(&mut self, inning: Inning) {
        self.innings.push(inning);
    }

    pub fn current_inning(&self) -> Option<&Inning> {
        self.innings.last()
    }

    /// Event lines of the most recent inning, for the snapshot story feed.
    pub fn recent_story(&self) -> Vec<String> {
        self.current_inning()
            .map(|inning| inning.events.clone())
            .unwrap_or_default()
    }

    /// Runs batted in by the named team across all recorded innings.
    pub fn total_score(&self, team_name: &str) -> i32 {
        self.innings
            .iter()
            .filter(|inning| inning.score_history.team_name == team_name)
            .map(|inning| inning.score_history.score)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Member;

    fn game_with_innings() -> Game {
        let hitter = Member {
            id: 1,
            name: "Lead Off".to_string(),
        };
        let pitcher = Member {
            id: 2,
            name: "Starter".to_string(),
        };

        let inning = |round: i32, score: i32, events: &[&str]| Inning {
            round,
            strike: 0,
            ball: 0,
            out: 0,
            first_base: false,
            second_base: false,
            third_base: false,
            score_history: ScoreHistory {
                team_name: "Captin".to_string(),
                score,
            },
            hitter_history: HitterHistory::opening(&hitter),
            pitcher_history: PitcherHistory::opening(&pitcher),
            events: events.iter().map(|line| line.to_string()).collect(),
        };

        Game {
            id: 1,
            choice_team: None,
            teams: Vec::new(),
            innings: vec![inning(1, 2, &[]), inning(2, 1, &["1S 0B 0O"])],
        }
    }

    #[test]
    fn test_total_score_sums_matching_innings() {
        let game = game_with_innings();
        assert_eq!(game.total_score("Captin"), 3);
        assert_eq!(game.total_score("Marvel"), 0);
    }

    #[test]
    fn test_recent_story_comes_from_last_inning() {
        let game = game_with_innings();
        assert_eq!(game.recent_story(), vec!["1S 0B 0O".to_string()]);

        let empty = Game {
            id: 2,
            choice_team: None,
            teams: Vec::new(),
            innings: Vec::new(),
        };
        assert!(empty.recent_story().is_empty());
    }
}
