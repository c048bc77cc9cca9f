use crate::modules::common::responses::{internal_error_res, SimpleError};
use convert_case::{Case, Casing};
use http::StatusCode;
use sea_orm::{DbErr, SqlErr};

/// Wrapper for seaorm errors.
///
/// This is useful for wrapping database errors and safely returning them from
/// axum route handlers without worrying about leaking sensitive information,
/// as it implements `Into<(StatusCode, SimpleError)>`
#[derive(Debug)]
pub struct DbError(pub DbErr);

impl From<DbErr> for DbError {
    fn from(err: DbErr) -> Self {
        DbError(err)
    }
}

/// Maps a postgres unique constraint name, eg: `motoristas_cpf_unique`,
/// to an api error code, eg: `CPF_IN_USE`
fn unique_constraint_to_error_code(error_message: &str) -> Option<String> {
    let constraint = error_message
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .find(|token| token.ends_with("_unique"))?;

    let column = constraint.strip_suffix("_unique")?.split('_').last()?;

    Some(format!("{}_IN_USE", column.to_case(Case::ScreamingSnake)))
}

impl From<DbError> for (StatusCode, SimpleError) {
    fn from(err: DbError) -> Self {
        if let Some(sql_err) = err.0.sql_err() {
            match sql_err {
                SqlErr::UniqueConstraintViolation(msg) => {
                    let code = unique_constraint_to_error_code(&msg)
                        .unwrap_or_else(|| String::from("UNIQUE_CONSTRAINT_VIOLATION"));

                    return (StatusCode::BAD_REQUEST, SimpleError::from(code));
                }
                SqlErr::ForeignKeyConstraintViolation(_) => {
                    return (
                        StatusCode::CONFLICT,
                        SimpleError::from("record is referenced by other records"),
                    );
                }
                _ => {}
            }
        }

        match err.0 {
            DbErr::RecordNotFound(_) => {
                (StatusCode::NOT_FOUND, SimpleError::from("entity not found"))
            }

            _ => internal_error_res(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_constraint_maps_to_column_in_use() {
        let msg = r#"duplicate key value violates unique constraint "motoristas_cpf_unique""#;
        assert_eq!(
            unique_constraint_to_error_code(msg),
            Some(String::from("CPF_IN_USE"))
        );

        let msg = r#"duplicate key value violates unique constraint "onibus_placa_unique""#;
        assert_eq!(
            unique_constraint_to_error_code(msg),
            Some(String::from("PLACA_IN_USE"))
        );
    }

    #[test]
    fn unrelated_messages_produce_no_error_code() {
        assert_eq!(unique_constraint_to_error_code("syntax error at line 1"), None);
    }
}
