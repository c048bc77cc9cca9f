use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Filters shared by every report, all optional, echoed back on the
/// generated document
#[derive(Clone, Deserialize, Serialize, IntoParams, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RelatorioFiltrosDto {
    /// Start of the trip date range, inclusive
    pub data_inicio: Option<NaiveDate>,

    /// End of the trip date range, inclusive
    pub data_fim: Option<NaiveDate>,

    pub rota_id: Option<i32>,

    /// canonical cargo token, unrecognized values are ignored
    pub cargo: Option<String>,

    /// canonical status token on the motorista / monitor reports, a
    /// truthy or falsy word on the viagem report, unrecognized values
    /// are ignored
    pub status: Option<String>,

    pub motorista_id: Option<i32>,

    pub monitor_id: Option<i32>,

    pub onibus_id: Option<i32>,
}

/// Parses the truthy / falsy words accepted by the viagem report
/// status filter, `None` for anything unrecognized
pub fn parse_bool_param(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// A motorista or monitor row of the crew reports
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuncionarioRelatorioDto {
    pub id: i32,

    pub nome: String,

    pub cpf: String,

    pub cargo: String,

    pub status: String,

    /// trips under the report filters
    pub total_viagens: u64,

    /// rota names sampled from the most recent trips, up to 5
    pub rotas: Vec<String>,

    /// schedule labels sampled from the most recent trips, up to 5,
    /// eg: `Das 06:30 às 07:30`
    pub horarios: Vec<String>,
}

/// A viagem row of the trip report, with association names inlined
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViagemRelatorioDto {
    pub id: i32,

    pub data_viagem: NaiveDate,

    pub hora_saida_prevista: String,

    pub rota: String,

    pub horario: String,

    pub motorista: String,

    pub monitor: String,

    pub onibus: String,

    /// `Ativa` / `Inativa`
    pub status: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioFuncionariosDto {
    /// generation timestamp, `dd/mm/YYYY HH:MM:SS`
    pub gerado_em: String,

    pub filtros: RelatorioFiltrosDto,

    pub funcionarios: Vec<FuncionarioRelatorioDto>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioViagensDto {
    /// generation timestamp, `dd/mm/YYYY HH:MM:SS`
    pub gerado_em: String,

    pub filtros: RelatorioFiltrosDto,

    pub viagens: Vec<ViagemRelatorioDto>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotaOpcaoDto {
    pub id: i32,
    pub nome: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuncionarioOpcaoDto {
    pub id: i32,
    pub nome: String,
    pub cargo: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnibusOpcaoDto {
    pub id: i32,
    pub placa: String,
    pub modelo: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HorarioOpcaoDto {
    pub id: i32,
    pub hora_inicio: String,
    pub hora_fim: String,
}

/// Lookup lists for building report filter forms
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpcoesRelatorioDto {
    pub rotas: Vec<RotaOpcaoDto>,

    pub motoristas: Vec<FuncionarioOpcaoDto>,

    pub monitores: Vec<FuncionarioOpcaoDto>,

    pub onibus: Vec<OnibusOpcaoDto>,

    pub horarios: Vec<HorarioOpcaoDto>,

    pub cargos: Vec<String>,

    pub status: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_param_accepts_truthy_and_falsy_words() {
        for raw in ["true", "1", "yes", "y", "on", "TRUE", " On "] {
            assert_eq!(parse_bool_param(raw), Some(true), "raw: {}", raw);
        }

        for raw in ["false", "0", "no", "n", "off", "OFF"] {
            assert_eq!(parse_bool_param(raw), Some(false), "raw: {}", raw);
        }
    }

    #[test]
    fn unrecognized_bool_params_are_none() {
        assert_eq!(parse_bool_param("maybe"), None);
        assert_eq!(parse_bool_param(""), None);
        assert_eq!(parse_bool_param("2"), None);
    }
}
