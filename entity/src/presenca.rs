use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Record of whether a aluno boarded a specific viagem
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Presenca")]
#[sea_orm(table_name = "presencas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub viagem_id: i32,
    pub aluno_id: i32,
    pub presente: bool,
    pub hora_embarque: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::viagem::Entity",
        from = "Column::ViagemId",
        to = "super::viagem::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Viagem,
    #[sea_orm(
        belongs_to = "super::aluno::Entity",
        from = "Column::AlunoId",
        to = "super::aluno::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Aluno,
}

impl Related<super::viagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Viagem.def()
    }
}

impl Related<super::aluno::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluno.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
