use baseball_types::{Game, Team};

/// Find a team by name across every stored game's team pairs, in storage
/// order. Team names are unique across the league, so the first match is
/// the only match.
pub fn find_team<'a>(games: &'a [Game], team_name: &str) -> Option<&'a Team> {
    games
        .iter()
        .flat_map(|game| game.teams.iter())
        .find(|team| team.matches_name(team_name))
}

/// Find the game a named team plays in.
pub fn find_game_by_team<'a>(games: &'a [Game], team_name: &str) -> Option<&'a Game> {
    games.iter().find(|game| game.has_team(team_name))
}
