use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pitcher_histories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inning_id: i32,
    pub member_id: i32,
    pub member_name: String,
    pub pitches: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
