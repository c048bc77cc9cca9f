use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Onibus")]
#[sea_orm(table_name = "onibus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub placa: String,
    pub modelo: String,
    pub capacidade: i32,
    pub ano_fabricacao: i16,
    /// free form label, not a closed enum like motorista/monitor status
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::viagem::Entity")]
    Viagem,
}

impl Related<super::viagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Viagem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
