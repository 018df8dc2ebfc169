use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Innings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Innings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Innings::GameId).integer().not_null())
                    .col(ColumnDef::new(Innings::Round).integer().not_null())
                    .col(
                        ColumnDef::new(Innings::Strike)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Innings::Ball)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Innings::Out)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Innings::FirstBase)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Innings::SecondBase)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Innings::ThirdBase)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_innings_game_id")
                    .table(Innings::Table)
                    .col(Innings::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Innings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Innings {
    Table,
    Id,
    GameId,
    Round,
    Strike,
    Ball,
    Out,
    FirstBase,
    SecondBase,
    ThirdBase,
}
