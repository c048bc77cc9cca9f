use crate::enums::{CargoFuncionario, StatusFuncionario};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(title = "Motorista")]
#[sea_orm(table_name = "motoristas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub nome: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub cnh: String,
    pub categoria_cnh: String,
    pub validade_cnh: Date,
    pub telefone: String,
    pub endereco: String,
    pub data_contratacao: Date,
    pub status: StatusFuncionario,
    pub cargo: CargoFuncionario,
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
