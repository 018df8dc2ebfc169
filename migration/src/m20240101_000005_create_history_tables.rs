use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScoreHistories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScoreHistories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScoreHistories::InningId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScoreHistories::TeamName).string().not_null())
                    .col(
                        ColumnDef::new(ScoreHistories::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HitterHistories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HitterHistories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HitterHistories::InningId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HitterHistories::MemberId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HitterHistories::MemberName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HitterHistories::Tpa)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HitterHistories::Hits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HitterHistories::Outs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PitcherHistories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PitcherHistories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PitcherHistories::InningId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PitcherHistories::MemberId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PitcherHistories::MemberName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PitcherHistories::Pitches)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InningEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InningEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InningEvents::InningId).integer().not_null())
                    .col(ColumnDef::new(InningEvents::Seq).integer().not_null())
                    .col(ColumnDef::new(InningEvents::Message).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InningEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PitcherHistories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HitterHistories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScoreHistories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScoreHistories {
    Table,
    Id,
    InningId,
    TeamName,
    Score,
}

#[derive(DeriveIden)]
enum HitterHistories {
    Table,
    Id,
    InningId,
    MemberId,
    MemberName,
    Tpa,
    Hits,
    Outs,
}

#[derive(DeriveIden)]
enum PitcherHistories {
    Table,
    Id,
    InningId,
    MemberId,
    MemberName,
    Pitches,
}

#[derive(DeriveIden)]
enum InningEvents {
    Table,
    Id,
    InningId,
    Seq,
    Message,
}
