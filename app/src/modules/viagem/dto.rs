use crate::modules::common::validators::{validate_time_of_day, REGEX_TIME_OF_DAY};
use chrono::NaiveDate;
use entity::enums::StatusInput;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListViagensDto {
    /// Start of the date range, inclusive
    pub data_inicio: Option<NaiveDate>,

    /// End of the date range, inclusive
    pub data_fim: Option<NaiveDate>,

    /// Filter by rota
    pub rota_id: Option<i32>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateViagemDto {
    pub rota_id: i32,

    pub onibus_id: i32,

    pub motorista_id: i32,

    pub monitor_id: Option<i32>,

    /// a unknown horario is tolerated and stored as none
    pub horario_id: Option<i32>,

    pub data_viagem: NaiveDate,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_saida_prevista must be a HH:MM time of day"
    ))]
    pub hora_saida_prevista: String,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_chegada_prevista must be a HH:MM time of day"
    ))]
    pub hora_chegada_prevista: Option<String>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_saida_real must be a HH:MM time of day"
    ))]
    pub hora_saida_real: Option<String>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_chegada_real must be a HH:MM time of day"
    ))]
    pub hora_chegada_real: Option<String>,

    pub observacoes: Option<String>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}

#[derive(Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateViagemDto {
    pub rota_id: Option<i32>,

    pub onibus_id: Option<i32>,

    pub motorista_id: Option<i32>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub monitor_id: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub horario_id: Option<Option<i32>>,

    pub data_viagem: Option<NaiveDate>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_saida_prevista must be a HH:MM time of day"
    ))]
    pub hora_saida_prevista: Option<String>,

    #[validate(custom = "validate_time_of_day")]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub hora_chegada_prevista: Option<Option<String>>,

    #[validate(custom = "validate_time_of_day")]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub hora_saida_real: Option<Option<String>>,

    #[validate(custom = "validate_time_of_day")]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub hora_chegada_real: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub observacoes: Option<Option<String>>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_times_must_be_a_time_of_day() {
        let dto = UpdateViagemDto {
            hora_saida_real: Some(Some(String::from("whenever"))),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = UpdateViagemDto {
            hora_chegada_prevista: Some(Some(String::from("7:30"))),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_times_can_be_cleared() {
        // a explicit null clears the column and skips the time check
        let dto = UpdateViagemDto {
            hora_chegada_real: Some(None),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
