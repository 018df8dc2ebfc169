pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_games_table;
mod m20240101_000002_create_teams_table;
mod m20240101_000003_create_members_table;
mod m20240101_000004_create_innings_table;
mod m20240101_000005_create_history_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_games_table::Migration),
            Box::new(m20240101_000002_create_teams_table::Migration),
            Box::new(m20240101_000003_create_members_table::Migration),
            Box::new(m20240101_000004_create_innings_table::Migration),
            Box::new(m20240101_000005_create_history_tables::Migration),
        ]
    }
}
