use chrono::NaiveDate;
use entity::enums::StatusInput;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListAlunosDto {
    /// Search by name
    pub nome: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlunoDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: String,

    pub descricao: Option<String>,

    pub data_nascimento: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub responsavel: String,

    #[validate(length(min = 1, max = 50))]
    pub telefone_responsavel: String,

    #[validate(length(min = 1, max = 255))]
    pub endereco: String,

    pub ponto_referencia: Option<String>,

    /// active flag, accepts booleans, numbers and the status synonym strings
    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}

#[derive(Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlunoDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub descricao: Option<Option<String>>,

    pub data_nascimento: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255))]
    pub responsavel: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub telefone_responsavel: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub endereco: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub ponto_referencia: Option<Option<String>>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}
