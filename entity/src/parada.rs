use crate::enums::TipoParada;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Parada")]
#[sea_orm(table_name = "paradas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub nome: String,
    pub endereco: String,
    pub ponto_referencia: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tipo: TipoParada,
    pub status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rota_parada::Entity")]
    RotaParada,
}

impl Related<super::rota_parada::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RotaParada.def()
    }
}

impl Related<super::rota::Entity> for Entity {
    fn to() -> RelationDef {
        super::rota_parada::Relation::Rota.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::rota_parada::Relation::Parada.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
