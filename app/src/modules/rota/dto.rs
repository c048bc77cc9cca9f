use crate::modules::common::validators::{validate_time_of_day, REGEX_TIME_OF_DAY};
use entity::{enums::StatusInput, parada};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A parada attached to a rota at a given visit order
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RotaParadaInputDto {
    pub parada_id: i32,

    #[validate(range(min = 1, max = 999))]
    pub ordem: i32,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "horario_estimado must be a HH:MM time of day"
    ))]
    pub horario_estimado: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRotaDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: String,

    pub descricao: Option<String>,

    /// kind of rota, eg: Escolar
    pub tipo: Option<String>,

    pub origem: Option<String>,

    pub destino: Option<String>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "horario_inicio must be a HH:MM time of day"
    ))]
    pub horario_inicio: Option<String>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "horario_fim must be a HH:MM time of day"
    ))]
    pub horario_fim: Option<String>,

    #[validate(range(min = 0.0, max = 10000.0))]
    pub distancia_km: Option<f64>,

    #[validate(range(min = 1, max = 10000))]
    pub tempo_estimado_minutos: Option<i32>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,

    /// paradas of the rota in visit order, replacing any previous set
    #[validate]
    pub paradas: Option<Vec<RotaParadaInputDto>>,
}

#[derive(Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRotaDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub descricao: Option<Option<String>>,

    pub tipo: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub origem: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub destino: Option<Option<String>>,

    #[validate(custom = "validate_time_of_day")]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub horario_inicio: Option<Option<String>>,

    #[validate(custom = "validate_time_of_day")]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub horario_fim: Option<Option<String>>,

    #[validate(range(min = 0.0, max = 10000.0))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub distancia_km: Option<Option<f64>>,

    #[validate(range(min = 1, max = 10000))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub tempo_estimado_minutos: Option<Option<i32>>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,

    /// when present the whole parada set of the rota is replaced
    #[validate]
    pub paradas: Option<Vec<RotaParadaInputDto>>,
}

/// A parada of a rota with its visit order and estimated time
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParadaDaRotaDto {
    pub ordem: i32,

    pub horario_estimado: Option<String>,

    pub parada: parada::Model,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_horarios_must_be_a_time_of_day() {
        let dto: UpdateRotaDto =
            serde_json::from_value(serde_json::json!({ "horarioInicio": "25:99" })).unwrap();
        assert!(dto.validate().is_err());

        let dto: UpdateRotaDto =
            serde_json::from_value(serde_json::json!({ "horarioFim": "7:30" })).unwrap();
        assert!(dto.validate().is_ok());

        // a explicit null clears the column and skips the time check
        let dto: UpdateRotaDto =
            serde_json::from_value(serde_json::json!({ "horarioInicio": null })).unwrap();
        assert_eq!(dto.horario_inicio, Some(None));
        assert!(dto.validate().is_ok());
    }
}
