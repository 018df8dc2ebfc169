use baseball_types::{Game, Member, Team, TeamSide};

/// Creates a test member with a given id and name
pub fn create_member(id: i32, name: &str) -> Member {
    Member {
        id,
        name: name.to_string(),
    }
}

/// Creates a team with members numbered off the team id
pub fn create_team(id: i32, name: &str, side: TeamSide, roster: &[&str]) -> Team {
    Team {
        id,
        name: name.to_string(),
        side,
        members: roster
            .iter()
            .enumerate()
            .map(|(index, member)| create_member(id * 100 + index as i32 + 1, member))
            .collect(),
    }
}

/// Creates a standard two-team matchup with three members per side
pub fn create_standard_game() -> Game {
    Game {
        id: 1,
        choice_team: None,
        teams: vec![
            create_team(1, "Marvel", TeamSide::Home, &["Ace", "Reliever", "Closer"]),
            create_team(2, "Captin", TeamSide::Away, &["Leadoff", "Cleanup", "Slugger"]),
        ],
        innings: Vec::new(),
    }
}

/// Creates a matchup whose away side has an empty roster
pub fn create_rosterless_game() -> Game {
    Game {
        id: 2,
        choice_team: None,
        teams: vec![
            create_team(3, "Twins", TeamSide::Home, &["Starter"]),
            create_team(4, "Rockets", TeamSide::Away, &[]),
        ],
        innings: Vec::new(),
    }
}

/// Creates a two-game league in storage order
pub fn create_league() -> Vec<Game> {
    let second = Game {
        id: 2,
        choice_team: None,
        teams: vec![
            create_team(3, "Twins", TeamSide::Home, &["Starter", "Setup"]),
            create_team(4, "Rockets", TeamSide::Away, &["Sparkplug", "Slugger"]),
        ],
        innings: Vec::new(),
    };

    vec![create_standard_game(), second]
}
