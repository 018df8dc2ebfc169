//! Wire-facing response shapes. Field names follow the contract the mobile
//! client was built against, hence the camelCase renames.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the game list: the two team names of a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSummary {
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MemberSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub round: i32,
    pub strike: i32,
    pub ball: i32,
    pub out: i32,
    pub first_base: bool,
    pub second_base: bool,
    pub third_base: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HitterCard {
    pub name: String,
    pub tpa: i32,
    pub hits: i32,
    pub out: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PitcherCard {
    pub name: String,
    pub pitches: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OffenceTeam {
    pub team_name: String,
    pub score: i32,
    pub hitter: HitterCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DefenseTeam {
    pub team_name: String,
    pub score: i32,
    pub pitcher: PitcherCard,
}

/// Full game state returned by the start and pitch endpoints. The offence
/// side is always the away team and the defense side always the home team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub play_team: String,
    pub round_info: RoundInfo,
    pub offence_team: OffenceTeam,
    pub defense_team: DefenseTeam,
    pub story: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TeamScores {
    pub team_name: String,
    pub scores: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBoard {
    pub home_team: TeamScores,
    pub away_team: TeamScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MemberScore {
    pub id: i32,
    pub name: String,
    pub tpa: i32,
    pub hits: i32,
    pub out: i32,
}
