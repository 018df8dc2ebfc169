use std::sync::Arc;

use tracing::info;

use baseball_core::{compose_snapshot, find_team, open_inning, sample_member_scores, sample_score_board};
use baseball_persistence::repositories::GameRepository;
use baseball_types::{GameSnapshot, GameSummary, MemberScore, MemberSummary, ScoreBoard, TeamSide};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Orchestrates game lookup, side selection and per-inning state on top of
/// the game repository. One read-then-write per operation, no locks.
pub struct GameService {
    repository: Arc<GameRepository>,
}

impl GameService {
    pub fn new(repository: Arc<GameRepository>) -> Self {
        Self { repository }
    }

    /// One summary per stored game, in storage order.
    pub async fn list_games(&self) -> Result<Vec<GameSummary>, ServiceError> {
        let games = self.repository.find_all().await?;

        games
            .iter()
            .map(|game| {
                let home = game
                    .team_by_side(TeamSide::Home)
                    .ok_or_else(|| ServiceError::NotFound(format!("home team of game {}", game.id)))?;
                let away = game
                    .team_by_side(TeamSide::Away)
                    .ok_or_else(|| ServiceError::NotFound(format!("away team of game {}", game.id)))?;

                Ok(GameSummary {
                    home: home.name.clone(),
                    away: away.name.clone(),
                })
            })
            .collect()
    }

    /// Roster of the named team, in storage order.
    pub async fn list_members(&self, team_name: &str) -> Result<Vec<MemberSummary>, ServiceError> {
        let games = self.repository.find_all().await?;
        let team = find_team(&games, team_name)
            .ok_or_else(|| ServiceError::NotFound(format!("team {team_name}")))?;

        Ok(team
            .members
            .iter()
            .map(|member| MemberSummary {
                id: member.id,
                name: member.name.clone(),
            })
            .collect())
    }

    /// Pick a side, open a fresh inning, persist, and return the snapshot.
    /// Offense is always the away team; away bats first by rule.
    pub async fn start_game(&self, team_name: &str) -> Result<GameSnapshot, ServiceError> {
        let games = self.repository.find_all().await?;
        if find_team(&games, team_name).is_none() {
            return Err(ServiceError::NotFound(format!("team {team_name}")));
        }

        let mut game = games
            .into_iter()
            .find(|game| game.has_team(team_name))
            .ok_or_else(|| ServiceError::NotFound(format!("game for team {team_name}")))?;

        game.choose_team(team_name);

        let inning = open_inning(&game)
            .ok_or_else(|| ServiceError::NotFound(format!("starting lineup for game {}", game.id)))?;
        game.add_inning(inning);

        let game = self.repository.save(game).await?;
        info!("game {} started by team {}", game.id, team_name);

        let inning = game
            .current_inning()
            .ok_or_else(|| ServiceError::NotFound(format!("opening inning of game {}", game.id)))?;

        compose_snapshot(&game, inning)
            .ok_or_else(|| ServiceError::NotFound(format!("teams of game {}", game.id)))
    }

    /// Pitch resolution is not simulated yet: the submitted state is echoed
    /// back to the caller unchanged.
    pub fn advance_pitch(&self, snapshot: GameSnapshot) -> GameSnapshot {
        snapshot
    }

    /// Fixed sample payload; see `baseball_core::scoreboard`.
    pub fn score_board(&self) -> ScoreBoard {
        sample_score_board()
    }

    /// Fixed sample payload, independent of the requested team for now.
    pub fn member_scores(&self, _team_name: &str) -> Vec<MemberScore> {
        sample_member_scores()
    }
}
