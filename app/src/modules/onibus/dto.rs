use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListOnibusDto {
    /// Search by plate
    pub placa: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOnibusDto {
    #[validate(length(min = 7, max = 8))]
    pub placa: String,

    #[validate(length(min = 1, max = 255))]
    pub modelo: String,

    #[validate(range(min = 1, max = 200))]
    pub capacidade: i32,

    #[validate(range(min = 1950, max = 2100))]
    pub ano_fabricacao: i16,

    /// free form status label, eg: Disponivel / Em manutenção
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOnibusDto {
    #[validate(length(min = 7, max = 8))]
    pub placa: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub modelo: Option<String>,

    #[validate(range(min = 1, max = 200))]
    pub capacidade: Option<i32>,

    #[validate(range(min = 1950, max = 2100))]
    pub ano_fabricacao: Option<i16>,

    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
}
