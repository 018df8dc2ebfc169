use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teams::GameId).integer().not_null())
                    .col(ColumnDef::new(Teams::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Teams::Side).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Teams are looked up by game when assembling aggregates
        manager
            .create_index(
                Index::create()
                    .name("idx_teams_game_id")
                    .table(Teams::Table)
                    .col(Teams::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    GameId,
    Name,
    Side,
}
