use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hitter_histories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inning_id: i32,
    pub member_id: i32,
    pub member_name: String,
    pub tpa: i32,
    pub hits: i32,
    pub outs: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
