use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Rota")]
#[sea_orm(table_name = "rotas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub nome: String,
    pub descricao: Option<String>,
    pub tipo: String,
    pub origem: Option<String>,
    pub destino: Option<String>,
    /// nominal start of the rota in zero padded `HH:MM`
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
    pub distancia_km: Option<f64>,
    pub tempo_estimado_minutos: Option<i32>,
    pub status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::horario::Entity")]
    Horario,
    #[sea_orm(has_many = "super::viagem::Entity")]
    Viagem,
    #[sea_orm(has_many = "super::rota_parada::Entity")]
    RotaParada,
}

impl Related<super::horario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Horario.def()
    }
}

impl Related<super::viagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Viagem.def()
    }
}

impl Related<super::parada::Entity> for Entity {
    fn to() -> RelationDef {
        super::rota_parada::Relation::Parada.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::rota_parada::Relation::Rota.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
