use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Aluno")]
#[sea_orm(table_name = "alunos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub nome: String,
    pub descricao: Option<String>,
    pub data_nascimento: Date,
    pub responsavel: String,
    pub telefone_responsavel: String,
    pub endereco: String,
    pub ponto_referencia: Option<String>,
    pub status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::presenca::Entity")]
    Presenca,
}

impl Related<super::presenca::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presenca.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
