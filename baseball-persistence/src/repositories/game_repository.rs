use std::collections::HashMap;

use anyhow::Result;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::{prelude::*, *};
use baseball_types::{Game, HitterHistory, Inning, Member, PitcherHistory, ScoreHistory, Team, TeamSide};

/// The sole persistence boundary of the game service: read every game,
/// persist one game.
pub struct GameRepository {
    db: DatabaseConnection,
}

impl GameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load every stored game with its full aggregate, in primary-key order.
    pub async fn find_all(&self) -> Result<Vec<Game>> {
        self.load_games(None).await
    }

    pub async fn find_by_id(&self, game_id: i32) -> Result<Option<Game>> {
        Ok(self.load_games(Some(game_id)).await?.into_iter().next())
    }

    /// Persist the chosen-team marker and any innings appended since the game
    /// was loaded, then return the reloaded aggregate. Innings are append-only
    /// so previously stored rounds are never rewritten.
    pub async fn save(&self, game: Game) -> Result<Game> {
        let stored = Games::find_by_id(game.id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("game {} is not persisted", game.id))?;

        let mut active: games::ActiveModel = stored.into();
        active.choice_team = Set(game.choice_team.clone());
        Games::update(active).exec(&self.db).await?;

        let persisted_innings = Innings::find()
            .filter(innings::Column::GameId.eq(game.id))
            .count(&self.db)
            .await? as usize;

        for inning in game.innings.iter().skip(persisted_innings) {
            self.insert_inning(game.id, inning).await?;
        }

        self.find_by_id(game.id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("game {} vanished during save", game.id))
    }

    async fn insert_inning(&self, game_id: i32, inning: &Inning) -> Result<()> {
        let inning_id = Innings::insert(innings::ActiveModel {
            game_id: Set(game_id),
            round: Set(inning.round),
            strike: Set(inning.strike),
            ball: Set(inning.ball),
            out: Set(inning.out),
            first_base: Set(inning.first_base),
            second_base: Set(inning.second_base),
            third_base: Set(inning.third_base),
            ..Default::default()
        })
        .exec(&self.db)
        .await?
        .last_insert_id;

        ScoreHistories::insert(score_histories::ActiveModel {
            inning_id: Set(inning_id),
            team_name: Set(inning.score_history.team_name.clone()),
            score: Set(inning.score_history.score),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        HitterHistories::insert(hitter_histories::ActiveModel {
            inning_id: Set(inning_id),
            member_id: Set(inning.hitter_history.member_id),
            member_name: Set(inning.hitter_history.member_name.clone()),
            tpa: Set(inning.hitter_history.tpa),
            hits: Set(inning.hitter_history.hits),
            outs: Set(inning.hitter_history.outs),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        PitcherHistories::insert(pitcher_histories::ActiveModel {
            inning_id: Set(inning_id),
            member_id: Set(inning.pitcher_history.member_id),
            member_name: Set(inning.pitcher_history.member_name.clone()),
            pitches: Set(inning.pitcher_history.pitches),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        for (seq, message) in inning.events.iter().enumerate() {
            InningEvents::insert(inning_events::ActiveModel {
                inning_id: Set(inning_id),
                seq: Set(seq as i32),
                message: Set(message.clone()),
                ..Default::default()
            })
            .exec(&self.db)
            .await?;
        }

        Ok(())
    }

    async fn load_games(&self, game_id: Option<i32>) -> Result<Vec<Game>> {
        let mut game_query = Games::find().order_by_asc(games::Column::Id);
        if let Some(id) = game_id {
            game_query = game_query.filter(games::Column::Id.eq(id));
        }
        let game_rows = game_query.all(&self.db).await?;

        let team_rows = Teams::find()
            .order_by_asc(teams::Column::Id)
            .all(&self.db)
            .await?;
        let member_rows = Members::find()
            .order_by_asc(members::Column::Id)
            .all(&self.db)
            .await?;
        let inning_rows = Innings::find()
            .order_by_asc(innings::Column::Id)
            .all(&self.db)
            .await?;
        let score_rows = ScoreHistories::find().all(&self.db).await?;
        let hitter_rows = HitterHistories::find().all(&self.db).await?;
        let pitcher_rows = PitcherHistories::find().all(&self.db).await?;
        let event_rows = InningEvents::find()
            .order_by_asc(inning_events::Column::InningId)
            .order_by_asc(inning_events::Column::Seq)
            .all(&self.db)
            .await?;

        let mut members_by_team: HashMap<i32, Vec<Member>> = HashMap::new();
        for row in member_rows {
            members_by_team.entry(row.team_id).or_default().push(Member {
                id: row.id,
                name: row.name,
            });
        }

        let mut teams_by_game: HashMap<i32, Vec<Team>> = HashMap::new();
        for row in team_rows {
            let side = TeamSide::parse(&row.side).ok_or_else(|| {
                anyhow::anyhow!("unknown side {:?} stored for team {}", row.side, row.id)
            })?;
            teams_by_game.entry(row.game_id).or_default().push(Team {
                id: row.id,
                name: row.name,
                side,
                members: members_by_team.remove(&row.id).unwrap_or_default(),
            });
        }

        let mut scores_by_inning: HashMap<i32, ScoreHistory> = score_rows
            .into_iter()
            .map(|row| {
                (
                    row.inning_id,
                    ScoreHistory {
                        team_name: row.team_name,
                        score: row.score,
                    },
                )
            })
            .collect();
        let mut hitters_by_inning: HashMap<i32, HitterHistory> = hitter_rows
            .into_iter()
            .map(|row| {
                (
                    row.inning_id,
                    HitterHistory {
                        member_id: row.member_id,
                        member_name: row.member_name,
                        tpa: row.tpa,
                        hits: row.hits,
                        outs: row.outs,
                    },
                )
            })
            .collect();
        let mut pitchers_by_inning: HashMap<i32, PitcherHistory> = pitcher_rows
            .into_iter()
            .map(|row| {
                (
                    row.inning_id,
                    PitcherHistory {
                        member_id: row.member_id,
                        member_name: row.member_name,
                        pitches: row.pitches,
                    },
                )
            })
            .collect();

        let mut events_by_inning: HashMap<i32, Vec<String>> = HashMap::new();
        for row in event_rows {
            events_by_inning
                .entry(row.inning_id)
                .or_default()
                .push(row.message);
        }

        let mut innings_by_game: HashMap<i32, Vec<Inning>> = HashMap::new();
        for row in inning_rows {
            let score_history = scores_by_inning
                .remove(&row.id)
                .ok_or_else(|| anyhow::anyhow!("inning {} has no score history", row.id))?;
            let hitter_history = hitters_by_inning
                .remove(&row.id)
                .ok_or_else(|| anyhow::anyhow!("inning {} has no hitter history", row.id))?;
            let pitcher_history = pitchers_by_inning
                .remove(&row.id)
                .ok_or_else(|| anyhow::anyhow!("inning {} has no pitcher history", row.id))?;

            innings_by_game.entry(row.game_id).or_default().push(Inning {
                round: row.round,
                strike: row.strike,
                ball: row.ball,
                out: row.out,
                first_base: row.first_base,
                second_base: row.second_base,
                third_base: row.third_base,
                score_history,
                hitter_history,
                pitcher_history,
                events: events_by_inning.remove(&row.id).unwrap_or_default(),
            });
        }

        Ok(game_rows
            .into_iter()
            .map(|row| Game {
                id: row.id,
                choice_team: row.choice_team,
                teams: teams_by_game.remove(&row.id).unwrap_or_default(),
                innings: innings_by_game.remove(&row.id).unwrap_or_default(),
            })
            .collect())
    }
}
