use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which half of the matchup a team plays. The away side always bats first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "HOME",
            TeamSide::Away => "AWAY",
        }
    }

    pub fn parse(value: &str) -> Option<TeamSide> {
        match value {
            "HOME" => Some(TeamSide::Home),
            "AWAY" => Some(TeamSide::Away),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Member {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub side: TeamSide,
    pub members: Vec<Member>,
}

impl Team {
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Leadoff batter or starting pitcher, depending on the side.
    /// Rosters keep storage order, so "first" is well-defined.
    pub fn first_member(&self) -> Option<&Member> {
        self.members.first()
    }
}
