use entity::enums::{StatusInput, TipoParada};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParadasDto {
    /// Filter by stop kind
    pub tipo: Option<TipoParada>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateParadaDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: String,

    #[validate(length(min = 1, max = 255))]
    pub endereco: String,

    pub ponto_referencia: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    pub tipo: TipoParada,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParadaDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub endereco: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub ponto_referencia: Option<Option<String>>,

    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub latitude: Option<Option<f64>>,

    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub longitude: Option<Option<f64>>,

    pub tipo: Option<TipoParada>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}
