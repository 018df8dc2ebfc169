pub mod games;
pub mod hitter_histories;
pub mod inning_events;
pub mod innings;
pub mod members;
pub mod pitcher_histories;
pub mod score_histories;
pub mod teams;

pub mod prelude {
    pub use super::games::Entity as Games;
    pub use super::hitter_histories::Entity as HitterHistories;
    pub use super::inning_events::Entity as InningEvents;
    pub use super::innings::Entity as Innings;
    pub use super::members::Entity as Members;
    pub use super::pitcher_histories::Entity as PitcherHistories;
    pub use super::score_histories::Entity as ScoreHistories;
    pub use super::teams::Entity as Teams;
}
