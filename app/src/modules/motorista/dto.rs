use chrono::NaiveDate;
use entity::enums::StatusInput;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListMotoristasDto {
    /// Search by name
    pub nome: Option<String>,

    /// Search by CPF
    pub cpf: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMotoristaDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: String,

    #[validate(length(min = 11, max = 14))]
    pub cpf: String,

    #[validate(length(min = 1, max = 20))]
    pub cnh: String,

    #[validate(length(min = 1, max = 5))]
    pub categoria_cnh: String,

    pub validade_cnh: NaiveDate,

    #[validate(length(min = 1, max = 50))]
    pub telefone: String,

    #[validate(length(min = 1, max = 255))]
    pub endereco: String,

    pub data_contratacao: NaiveDate,

    /// employment status, accepts booleans, numbers and synonym strings,
    /// anything unrecognized becomes Ativo
    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,

    /// contractual category, one of Efetivo / ACT / Temporário,
    /// anything else becomes Efetivo
    pub cargo: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMotoristaDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: Option<String>,

    #[validate(length(min = 11, max = 14))]
    pub cpf: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub cnh: Option<String>,

    #[validate(length(min = 1, max = 5))]
    pub categoria_cnh: Option<String>,

    pub validade_cnh: Option<NaiveDate>,

    #[validate(length(min = 1, max = 50))]
    pub telefone: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub endereco: Option<String>,

    pub data_contratacao: Option<NaiveDate>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,

    pub cargo: Option<String>,
}
