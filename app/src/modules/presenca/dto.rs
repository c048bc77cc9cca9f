use crate::modules::common::validators::{validate_time_of_day, REGEX_TIME_OF_DAY};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePresencaDto {
    pub viagem_id: i32,

    pub aluno_id: i32,

    pub presente: bool,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_embarque must be a HH:MM time of day"
    ))]
    pub hora_embarque: Option<String>,

    pub observacoes: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePresencaDto {
    pub presente: Option<bool>,

    #[validate(custom = "validate_time_of_day")]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub hora_embarque: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub observacoes: Option<Option<String>>,
}
