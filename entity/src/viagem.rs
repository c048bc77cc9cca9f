use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A single run of a onibus along a rota on a specific date, either
/// following a horario template or ad hoc (horario_id null)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Viagem")]
#[sea_orm(table_name = "viagens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub rota_id: i32,
    pub onibus_id: i32,
    pub motorista_id: i32,
    pub monitor_id: Option<i32>,
    pub horario_id: Option<i32>,
    pub data_viagem: Date,
    pub hora_saida_prevista: String,
    pub hora_chegada_prevista: Option<String>,
    /// filled in after the fact
    pub hora_saida_real: Option<String>,
    pub hora_chegada_real: Option<String>,
    pub observacoes: Option<String>,
    pub status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rota::Entity",
        from = "Column::RotaId",
        to = "super::rota::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Rota,
    #[sea_orm(
        belongs_to = "super::onibus::Entity",
        from = "Column::OnibusId",
        to = "super::onibus::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Onibus,
    #[sea_orm(
        belongs_to = "super::motorista::Entity",
        from = "Column::MotoristaId",
        to = "super::motorista::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Motorista,
    #[sea_orm(
        belongs_to = "super::monitor::Entity",
        from = "Column::MonitorId",
        to = "super::monitor::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Monitor,
    #[sea_orm(
        belongs_to = "super::horario::Entity",
        from = "Column::HorarioId",
        to = "super::horario::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Horario,
    #[sea_orm(has_many = "super::presenca::Entity")]
    Presenca,
}

impl Related<super::rota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rota.def()
    }
}

impl Related<super::onibus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Onibus.def()
    }
}

impl Related<super::motorista::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motorista.def()
    }
}

impl Related<super::monitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Monitor.def()
    }
}

impl Related<super::horario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Horario.def()
    }
}

impl Related<super::presenca::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presenca.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
