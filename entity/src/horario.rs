use crate::enums::TipoHorario;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Recurring time window template a rota can follow
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Horario")]
#[sea_orm(table_name = "horarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub rota_id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    /// zero padded `HH:MM`
    pub hora_inicio: String,
    /// zero padded `HH:MM`, always >= hora_inicio
    pub hora_fim: String,
    /// json array of weekday numbers, 0 (sunday) to 6
    pub dias_semana: Json,
    pub tipo: TipoHorario,
    pub status: bool,
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
    #[sea_orm(has_many = "super::viagem::Entity")]
    Viagem,
}

impl Related<super::rota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rota.def()
    }
}

impl Related<super::viagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Viagem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
