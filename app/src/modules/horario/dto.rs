use crate::modules::common::validators::REGEX_TIME_OF_DAY;
use crate::utils::time::pad_time;
use entity::enums::{StatusInput, TipoHorario};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListHorariosDto {
    /// Filter by rota
    pub rota_id: Option<i32>,
}

fn validate_dias_semana(dias: &[u8]) -> Result<(), ValidationError> {
    if dias.iter().any(|d| *d > 6) {
        return Err(ValidationError::new("invalid_dia_semana"));
    }

    Ok(())
}

/// padded `HH:MM` strings compare correctly as plain strings
fn hora_fim_before_inicio(hora_inicio: &str, hora_fim: &str) -> bool {
    pad_time(hora_fim) < pad_time(hora_inicio)
}

fn validate_horario_range(dto: &CreateHorarioDto) -> Result<(), ValidationError> {
    if hora_fim_before_inicio(&dto.hora_inicio, &dto.hora_fim) {
        return Err(ValidationError::new("hora_fim_before_hora_inicio"));
    }

    Ok(())
}

fn validate_horario_range_update(dto: &UpdateHorarioDto) -> Result<(), ValidationError> {
    if let (Some(inicio), Some(fim)) = (&dto.hora_inicio, &dto.hora_fim) {
        if hora_fim_before_inicio(inicio, fim) {
            return Err(ValidationError::new("hora_fim_before_hora_inicio"));
        }
    }

    Ok(())
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_horario_range"))]
pub struct CreateHorarioDto {
    pub rota_id: i32,

    #[validate(length(min = 1, max = 255))]
    pub nome: String,

    pub descricao: Option<String>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_inicio must be a HH:MM time of day"
    ))]
    pub hora_inicio: String,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_fim must be a HH:MM time of day"
    ))]
    pub hora_fim: String,

    /// week days the horario runs on, 0 = sunday .. 6 = saturday
    #[validate(custom = "validate_dias_semana")]
    pub dias_semana: Vec<u8>,

    pub tipo: Option<TipoHorario>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_horario_range_update"))]
pub struct UpdateHorarioDto {
    #[validate(length(min = 1, max = 255))]
    pub nome: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub descricao: Option<Option<String>>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_inicio must be a HH:MM time of day"
    ))]
    pub hora_inicio: Option<String>,

    #[validate(regex(
        path = "REGEX_TIME_OF_DAY",
        message = "hora_fim must be a HH:MM time of day"
    ))]
    pub hora_fim: Option<String>,

    #[validate(custom = "validate_dias_semana")]
    pub dias_semana: Option<Vec<u8>>,

    pub tipo: Option<TipoHorario>,

    #[schema(value_type = Option<String>)]
    pub status: Option<StatusInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(hora_inicio: &str, hora_fim: &str) -> CreateHorarioDto {
        CreateHorarioDto {
            rota_id: 1,
            nome: String::from("Turno da manhã"),
            descricao: None,
            hora_inicio: String::from(hora_inicio),
            hora_fim: String::from(hora_fim),
            dias_semana: vec![1, 2, 3, 4, 5],
            tipo: None,
            status: None,
        }
    }

    #[test]
    fn hora_fim_must_not_precede_hora_inicio() {
        assert!(create_dto("10:00", "08:00").validate().is_err());
        assert!(create_dto("06:30", "07:30").validate().is_ok());
        // an equal start and end is a zero length window, not an inversion
        assert!(create_dto("07:00", "07:00").validate().is_ok());
    }

    #[test]
    fn hora_range_compares_padded_times() {
        // lexically "9:00" > "10:00", padding must happen before comparing
        assert!(create_dto("9:00", "10:00").validate().is_ok());
        assert!(create_dto("10:00", "9:00").validate().is_err());
    }

    #[test]
    fn update_range_is_checked_only_when_both_bounds_are_present() {
        let mut dto = UpdateHorarioDto {
            nome: None,
            descricao: None,
            hora_inicio: Some(String::from("10:00")),
            hora_fim: Some(String::from("08:00")),
            dias_semana: None,
            tipo: None,
            status: None,
        };

        assert!(dto.validate().is_err());

        dto.hora_inicio = None;
        assert!(dto.validate().is_ok());
    }
}
