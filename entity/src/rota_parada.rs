use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Association of a parada to a rota, carrying the explicit visit
/// order and the estimated time of day at the parada
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "RotaParada")]
#[sea_orm(table_name = "rota_parada")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub rota_id: i32,
    pub parada_id: i32,
    pub ordem: i32,
    pub horario_estimado: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rota::Entity",
        from = "Column::RotaId",
        to = "super::rota::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Rota,
    #[sea_orm(
        belongs_to = "super::parada::Entity",
        from = "Column::ParadaId",
        to = "super::parada::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Parada,
}

impl Related<super::rota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rota.def()
    }
}

impl Related<super::parada::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parada.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
