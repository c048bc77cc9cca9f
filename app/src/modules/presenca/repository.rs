use super::dto::{CreatePresencaDto, UpdatePresencaDto};
use crate::database::{error::DbError, helpers::set_if_some};
use crate::utils::time::pad_time_opt;
use chrono::Utc;
use entity::{aluno, presenca, viagem};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

/// Outcome of a presenca write when a referenced record is missing
pub enum PresencaOutcome {
    Ok(presenca::Model),
    NotFound,
    ViagemNotFound,
    AlunoNotFound,
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<presenca::Model>, DbError> {
    Ok(presenca::Entity::find()
        .order_by_desc(presenca::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    presenca_id: i32,
) -> Result<Option<presenca::Model>, DbError> {
    Ok(presenca::Entity::find_by_id(presenca_id).one(db).await?)
}

async fn check_viagem_and_aluno(
    txn: &DatabaseTransaction,
    viagem_id: i32,
    aluno_id: i32,
) -> Result<Option<PresencaOutcome>, DbError> {
    if viagem::Entity::find_by_id(viagem_id).one(txn).await?.is_none() {
        return Ok(Some(PresencaOutcome::ViagemNotFound));
    }

    if aluno::Entity::find_by_id(aluno_id).one(txn).await?.is_none() {
        return Ok(Some(PresencaOutcome::AlunoNotFound));
    }

    Ok(None)
}

/// Registers a presenca, checking the viagem and aluno exist in the
/// same transaction as the insert
pub async fn create(
    db: &DatabaseConnection,
    dto: CreatePresencaDto,
) -> Result<PresencaOutcome, DbError> {
    let txn = db.begin().await?;

    if let Some(missing) = check_viagem_and_aluno(&txn, dto.viagem_id, dto.aluno_id).await? {
        txn.rollback().await?;
        return Ok(missing);
    }

    let created = presenca::ActiveModel {
        viagem_id: Set(dto.viagem_id),
        aluno_id: Set(dto.aluno_id),
        presente: Set(dto.presente),
        hora_embarque: Set(pad_time_opt(dto.hora_embarque)),
        observacoes: Set(dto.observacoes),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(PresencaOutcome::Ok(created))
}

pub async fn update(
    db: &DatabaseConnection,
    presenca_id: i32,
    dto: UpdatePresencaDto,
) -> Result<PresencaOutcome, DbError> {
    let txn = db.begin().await?;

    let Some(found) = presenca::Entity::find_by_id(presenca_id).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(PresencaOutcome::NotFound);
    };

    if let Some(missing) = check_viagem_and_aluno(&txn, found.viagem_id, found.aluno_id).await? {
        txn.rollback().await?;
        return Ok(missing);
    }

    let mut v: presenca::ActiveModel = found.into();

    v.presente = set_if_some(dto.presente);
    v.hora_embarque = set_if_some(dto.hora_embarque.map(pad_time_opt));
    v.observacoes = set_if_some(dto.observacoes);

    v.updated_at = Set(Utc::now().into());

    let updated = v.update(&txn).await?;

    txn.commit().await?;

    Ok(PresencaOutcome::Ok(updated))
}

pub async fn delete(db: &DatabaseConnection, presenca_id: i32) -> Result<bool, DbError> {
    let txn = db.begin().await?;

    let res = presenca::Entity::delete_by_id(presenca_id).exec(&txn).await?;

    txn.commit().await?;

    Ok(res.rows_affected > 0)
}
