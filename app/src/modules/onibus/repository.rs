use super::dto::{CreateOnibusDto, UpdateOnibusDto};
use crate::database::{error::DbError, helpers::set_if_some};
use chrono::Utc;
use entity::{onibus, viagem};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// Outcome of a delete attempt on a record other rows may depend on
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// deletion refused because this many viagens still reference the record
    BlockedByViagens(u64),
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<onibus::Model>, DbError> {
    Ok(onibus::Entity::find()
        .order_by_asc(onibus::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    onibus_id: i32,
) -> Result<Option<onibus::Model>, DbError> {
    Ok(onibus::Entity::find_by_id(onibus_id).one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    dto: CreateOnibusDto,
) -> Result<onibus::Model, DbError> {
    let created = onibus::ActiveModel {
        placa: Set(dto.placa),
        modelo: Set(dto.modelo),
        capacidade: Set(dto.capacidade),
        ano_fabricacao: Set(dto.ano_fabricacao),
        status: Set(dto.status.unwrap_or_else(|| String::from("Disponivel"))),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    onibus_id: i32,
    dto: UpdateOnibusDto,
) -> Result<Option<onibus::Model>, DbError> {
    let Some(found) = onibus::Entity::find_by_id(onibus_id).one(db).await? else {
        return Ok(None);
    };

    let mut v: onibus::ActiveModel = found.into();

    v.placa = set_if_some(dto.placa);
    v.modelo = set_if_some(dto.modelo);
    v.capacidade = set_if_some(dto.capacidade);
    v.ano_fabricacao = set_if_some(dto.ano_fabricacao);
    v.status = set_if_some(dto.status);

    v.updated_at = Set(Utc::now().into());

    Ok(Some(v.update(db).await?))
}

/// Deletes a onibus unless viagens still reference it, since losing the
/// trip history of a bus by accident is not acceptable
pub async fn delete(db: &DatabaseConnection, onibus_id: i32) -> Result<DeleteOutcome, DbError> {
    let dependent_viagens = viagem::Entity::find()
        .filter(viagem::Column::OnibusId.eq(onibus_id))
        .count(db)
        .await?;

    if dependent_viagens > 0 {
        return Ok(DeleteOutcome::BlockedByViagens(dependent_viagens));
    }

    let res = onibus::Entity::delete_by_id(onibus_id).exec(db).await?;

    if res.rows_affected > 0 {
        Ok(DeleteOutcome::Deleted)
    } else {
        Ok(DeleteOutcome::NotFound)
    }
}

pub async fn viagens_of_onibus(
    db: &DatabaseConnection,
    onibus_id: i32,
) -> Result<Vec<viagem::Model>, DbError> {
    let viagens = viagem::Entity::find()
        .filter(viagem::Column::OnibusId.eq(onibus_id))
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .all(db)
        .await?;

    Ok(viagens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn delete_is_blocked_while_viagens_reference_the_onibus() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(3)]])
            .into_connection();

        let outcome = delete(&db, 1).await.unwrap();

        assert!(matches!(outcome, DeleteOutcome::BlockedByViagens(3)));
    }

    #[tokio::test]
    async fn delete_distinguishes_removed_from_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)], vec![count_row(0)]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        assert!(matches!(delete(&db, 1).await.unwrap(), DeleteOutcome::Deleted));
        assert!(matches!(delete(&db, 2).await.unwrap(), DeleteOutcome::NotFound));
    }
}
