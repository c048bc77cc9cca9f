use sea_orm::DeriveActiveEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use utoipa::ToSchema;

/// A status or active flag as clients actually send it: a boolean, a number
/// or a string in any of the synonym spellings accepted by [`StatusFuncionario::normalize`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatusInput {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl StatusInput {
    /// Coerces the input into a plain active flag for the entities whose
    /// status is a boolean rather than a [`StatusFuncionario`], with the
    /// same Ativo-leaning fallback for unrecognized strings
    pub fn as_bool(&self) -> bool {
        match self {
            StatusInput::Bool(b) => *b,
            StatusInput::Number(n) => *n != 0.0,
            StatusInput::Text(s) => !matches!(
                s.trim().to_lowercase().as_str(),
                "inactive" | "inativo" | "0" | "false"
            ),
        }
    }
}

/// Employment status of a motorista or monitor
///
/// also the native ENUM for the postgres database
#[derive(
    Eq,
    Clone,
    Debug,
    Display,
    EnumIter,
    ToSchema,
    Serialize,
    PartialEq,
    Deserialize,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "status_funcionario")]
pub enum StatusFuncionario {
    #[sea_orm(string_value = "Ativo")]
    Ativo,
    #[sea_orm(string_value = "Inativo")]
    Inativo,
    #[sea_orm(string_value = "Ferias")]
    Ferias,
    #[sea_orm(string_value = "Licenca")]
    Licenca,
}

impl StatusFuncionario {
    /// Coerces any client supplied status representation into a canonical
    /// variant, never failing: booleans and numbers map to Ativo/Inativo,
    /// strings are matched case insensitively against the synonym sets and
    /// anything unrecognized falls back to Ativo
    pub fn normalize(raw: &StatusInput) -> StatusFuncionario {
        match raw {
            StatusInput::Bool(b) => {
                if *b {
                    Self::Ativo
                } else {
                    Self::Inativo
                }
            }
            StatusInput::Number(n) => {
                if *n != 0.0 {
                    Self::Ativo
                } else {
                    Self::Inativo
                }
            }
            StatusInput::Text(s) => match s.trim().to_lowercase().as_str() {
                "active" | "ativo" | "1" | "true" => Self::Ativo,
                "inactive" | "inativo" | "0" | "false" => Self::Inativo,
                "vacation" | "ferias" | "férias" => Self::Ferias,
                "leave" | "licenca" | "licença" => Self::Licenca,
                _ => Self::Ativo,
            },
        }
    }

    /// Creates a string vector containing all the canonical status tokens
    pub fn to_string_vec() -> Vec<String> {
        StatusFuncionario::iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
    }
}

/// Contractual category of a motorista or monitor
#[derive(
    Eq,
    Clone,
    Debug,
    Display,
    EnumIter,
    ToSchema,
    Serialize,
    PartialEq,
    Deserialize,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "cargo_funcionario")]
pub enum CargoFuncionario {
    #[sea_orm(string_value = "Efetivo")]
    Efetivo,
    #[sea_orm(string_value = "ACT")]
    #[serde(rename = "ACT")]
    #[strum(serialize = "ACT")]
    Act,
    #[sea_orm(string_value = "Temporário")]
    #[serde(rename = "Temporário")]
    #[strum(serialize = "Temporário")]
    Temporario,
}

impl CargoFuncionario {
    /// Exact allow list match over the canonical tokens, anything
    /// else falls back to Efetivo
    pub fn normalize(raw: &str) -> CargoFuncionario {
        match raw {
            "Efetivo" => Self::Efetivo,
            "ACT" => Self::Act,
            "Temporário" => Self::Temporario,
            _ => Self::Efetivo,
        }
    }

    /// Parses a canonical token, `None` for anything unrecognized
    ///
    /// unlike [`CargoFuncionario::normalize`] this is meant for report
    /// filters, where a unrecognized token must not silently become Efetivo
    pub fn parse_exact(raw: &str) -> Option<CargoFuncionario> {
        match raw {
            "Efetivo" => Some(Self::Efetivo),
            "ACT" => Some(Self::Act),
            "Temporário" => Some(Self::Temporario),
            _ => None,
        }
    }

    pub fn to_string_vec() -> Vec<String> {
        CargoFuncionario::iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
    }
}

impl StatusFuncionario {
    /// Parses a canonical token, `None` for anything unrecognized, for
    /// report filters where the Ativo fallback would be wrong
    pub fn parse_exact(raw: &str) -> Option<StatusFuncionario> {
        match raw {
            "Ativo" => Some(Self::Ativo),
            "Inativo" => Some(Self::Inativo),
            "Ferias" => Some(Self::Ferias),
            "Licenca" => Some(Self::Licenca),
            _ => None,
        }
    }
}

/// Position of a parada within a rota
#[derive(
    Eq,
    Clone,
    Debug,
    Display,
    EnumIter,
    ToSchema,
    Serialize,
    PartialEq,
    Deserialize,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "tipo_parada")]
pub enum TipoParada {
    #[sea_orm(string_value = "Inicio")]
    Inicio,
    #[sea_orm(string_value = "Intermediaria")]
    Intermediaria,
    #[sea_orm(string_value = "Final")]
    Final,
}

/// Category of a horario template
#[derive(
    Eq,
    Clone,
    Debug,
    Display,
    EnumIter,
    ToSchema,
    Serialize,
    PartialEq,
    Deserialize,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "tipo_horario")]
pub enum TipoHorario {
    #[sea_orm(string_value = "Regular")]
    Regular,
    #[sea_orm(string_value = "Especial")]
    Especial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_and_numbers_map_to_ativo_inativo() {
        assert_eq!(
            StatusFuncionario::normalize(&StatusInput::Bool(true)),
            StatusFuncionario::Ativo
        );
        assert_eq!(
            StatusFuncionario::normalize(&StatusInput::Bool(false)),
            StatusFuncionario::Inativo
        );
        assert_eq!(
            StatusFuncionario::normalize(&StatusInput::Number(1.0)),
            StatusFuncionario::Ativo
        );
        assert_eq!(
            StatusFuncionario::normalize(&StatusInput::Number(0.0)),
            StatusFuncionario::Inativo
        );
    }

    #[test]
    fn string_synonyms_map_to_canonical_tokens() {
        let cases = [
            ("active", StatusFuncionario::Ativo),
            ("Ativo", StatusFuncionario::Ativo),
            ("ATIVO", StatusFuncionario::Ativo),
            ("1", StatusFuncionario::Ativo),
            ("true", StatusFuncionario::Ativo),
            ("inactive", StatusFuncionario::Inativo),
            ("inativo", StatusFuncionario::Inativo),
            ("0", StatusFuncionario::Inativo),
            ("false", StatusFuncionario::Inativo),
            ("vacation", StatusFuncionario::Ferias),
            ("ferias", StatusFuncionario::Ferias),
            ("férias", StatusFuncionario::Ferias),
            ("Ferias", StatusFuncionario::Ferias),
            ("leave", StatusFuncionario::Licenca),
            ("licenca", StatusFuncionario::Licenca),
            ("licença", StatusFuncionario::Licenca),
            ("Licenca", StatusFuncionario::Licenca),
        ];

        for (raw, expected) in cases {
            assert_eq!(
                StatusFuncionario::normalize(&StatusInput::Text(raw.to_string())),
                expected,
                "normalizing {raw:?}"
            );
        }
    }

    #[test]
    fn unrecognized_strings_fall_back_to_ativo() {
        for raw in ["", "whatever", "aposentado", "férias!"] {
            assert_eq!(
                StatusFuncionario::normalize(&StatusInput::Text(raw.to_string())),
                StatusFuncionario::Ativo
            );
        }
    }

    #[test]
    fn cargo_allow_list_is_exact() {
        assert_eq!(
            CargoFuncionario::normalize("ACT"),
            CargoFuncionario::Act
        );
        assert_eq!(
            CargoFuncionario::normalize("Temporário"),
            CargoFuncionario::Temporario
        );
        // case sensitive allow list, everything else falls back
        assert_eq!(
            CargoFuncionario::normalize("act"),
            CargoFuncionario::Efetivo
        );
        assert_eq!(
            CargoFuncionario::normalize("Estagiário"),
            CargoFuncionario::Efetivo
        );
    }

    #[test]
    fn parse_exact_rejects_unknown_tokens() {
        assert_eq!(StatusFuncionario::parse_exact("Ferias"), Some(StatusFuncionario::Ferias));
        assert_eq!(StatusFuncionario::parse_exact("ferias"), None);
        assert_eq!(CargoFuncionario::parse_exact("ACT"), Some(CargoFuncionario::Act));
        assert_eq!(CargoFuncionario::parse_exact("efetivo"), None);
    }

    #[test]
    fn status_input_as_bool_leans_truthy() {
        assert!(StatusInput::Bool(true).as_bool());
        assert!(!StatusInput::Bool(false).as_bool());
        assert!(StatusInput::Number(2.0).as_bool());
        assert!(!StatusInput::Number(0.0).as_bool());
        assert!(StatusInput::Text(String::from("Ativo")).as_bool());
        assert!(!StatusInput::Text(String::from("INATIVO")).as_bool());
        assert!(!StatusInput::Text(String::from("0")).as_bool());
        // unrecognized strings fall back to active
        assert!(StatusInput::Text(String::from("whatever")).as_bool());
    }
}
