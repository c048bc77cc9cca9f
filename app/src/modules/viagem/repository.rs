use super::dto::{CreateViagemDto, UpdateViagemDto};
use crate::database::{error::DbError, helpers::set_if_some};
use crate::utils::time::{pad_time, pad_time_opt};
use chrono::Utc;
use entity::{horario, monitor, motorista, onibus, rota, viagem};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::warn;

/// Outcome of a viagem create/update attempt when a required
/// association is missing
pub enum ViagemOutcome {
    Ok(viagem::Model),
    NotFound,
    /// name of the missing required association, eg: rota
    MissingAssociation(&'static str),
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    viagem_id: i32,
) -> Result<Option<viagem::Model>, DbError> {
    Ok(viagem::Entity::find_by_id(viagem_id).one(db).await?)
}

/// Checks the nullable horario association, a unknown horario is
/// tolerated and degraded to none so a viagem never fails over a
/// stale schedule reference
async fn checked_horario_id(
    db: &DatabaseConnection,
    horario_id: Option<i32>,
) -> Result<Option<i32>, DbError> {
    let Some(id) = horario_id else {
        return Ok(None);
    };

    if horario::Entity::find_by_id(id).one(db).await?.is_some() {
        Ok(Some(id))
    } else {
        warn!("[VIAGEM] horario {} does not exist, storing viagem without horario", id);
        Ok(None)
    }
}

async fn required_associations_missing(
    db: &DatabaseConnection,
    rota_id: Option<i32>,
    onibus_id: Option<i32>,
    motorista_id: Option<i32>,
    monitor_id: Option<i32>,
) -> Result<Option<&'static str>, DbError> {
    if let Some(id) = rota_id {
        if rota::Entity::find_by_id(id).one(db).await?.is_none() {
            return Ok(Some("rota"));
        }
    }

    if let Some(id) = onibus_id {
        if onibus::Entity::find_by_id(id).one(db).await?.is_none() {
            return Ok(Some("onibus"));
        }
    }

    if let Some(id) = motorista_id {
        if motorista::Entity::find_by_id(id).one(db).await?.is_none() {
            return Ok(Some("motorista"));
        }
    }

    if let Some(id) = monitor_id {
        if monitor::Entity::find_by_id(id).one(db).await?.is_none() {
            return Ok(Some("monitor"));
        }
    }

    Ok(None)
}

pub async fn create(
    db: &DatabaseConnection,
    dto: CreateViagemDto,
) -> Result<ViagemOutcome, DbError> {
    let missing = required_associations_missing(
        db,
        Some(dto.rota_id),
        Some(dto.onibus_id),
        Some(dto.motorista_id),
        dto.monitor_id,
    )
    .await?;

    if let Some(name) = missing {
        return Ok(ViagemOutcome::MissingAssociation(name));
    }

    let horario_id = checked_horario_id(db, dto.horario_id).await?;

    let status = dto.status.map(|s| s.as_bool()).unwrap_or(true);

    let created = viagem::ActiveModel {
        rota_id: Set(dto.rota_id),
        onibus_id: Set(dto.onibus_id),
        motorista_id: Set(dto.motorista_id),
        monitor_id: Set(dto.monitor_id),
        horario_id: Set(horario_id),
        data_viagem: Set(dto.data_viagem),
        hora_saida_prevista: Set(pad_time(&dto.hora_saida_prevista)),
        hora_chegada_prevista: Set(pad_time_opt(dto.hora_chegada_prevista)),
        hora_saida_real: Set(pad_time_opt(dto.hora_saida_real)),
        hora_chegada_real: Set(pad_time_opt(dto.hora_chegada_real)),
        observacoes: Set(dto.observacoes),
        status: Set(status),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(ViagemOutcome::Ok(created))
}

pub async fn update(
    db: &DatabaseConnection,
    viagem_id: i32,
    dto: UpdateViagemDto,
) -> Result<ViagemOutcome, DbError> {
    let Some(found) = viagem::Entity::find_by_id(viagem_id).one(db).await? else {
        return Ok(ViagemOutcome::NotFound);
    };

    let missing = required_associations_missing(
        db,
        dto.rota_id,
        dto.onibus_id,
        dto.motorista_id,
        dto.monitor_id.flatten(),
    )
    .await?;

    if let Some(name) = missing {
        return Ok(ViagemOutcome::MissingAssociation(name));
    }

    let mut v: viagem::ActiveModel = found.into();

    v.rota_id = set_if_some(dto.rota_id);
    v.onibus_id = set_if_some(dto.onibus_id);
    v.motorista_id = set_if_some(dto.motorista_id);
    v.monitor_id = set_if_some(dto.monitor_id);
    v.data_viagem = set_if_some(dto.data_viagem);
    v.hora_saida_prevista = set_if_some(dto.hora_saida_prevista.map(|h| pad_time(&h)));
    v.hora_chegada_prevista = set_if_some(dto.hora_chegada_prevista.map(pad_time_opt));
    v.hora_saida_real = set_if_some(dto.hora_saida_real.map(pad_time_opt));
    v.hora_chegada_real = set_if_some(dto.hora_chegada_real.map(pad_time_opt));
    v.observacoes = set_if_some(dto.observacoes);

    if let Some(horario_id) = dto.horario_id {
        v.horario_id = Set(checked_horario_id(db, horario_id).await?);
    }

    if let Some(status) = dto.status {
        v.status = Set(status.as_bool());
    }

    v.updated_at = Set(Utc::now().into());

    Ok(ViagemOutcome::Ok(v.update(db).await?))
}

pub async fn delete(db: &DatabaseConnection, viagem_id: i32) -> Result<bool, DbError> {
    let res = viagem::Entity::delete_by_id(viagem_id).exec(db).await?;

    Ok(res.rows_affected > 0)
}

pub async fn presencas_of_viagem(
    db: &DatabaseConnection,
    viagem_id: i32,
) -> Result<Vec<entity::presenca::Model>, DbError> {
    let presencas = entity::presenca::Entity::find()
        .filter(entity::presenca::Column::ViagemId.eq(viagem_id))
        .order_by_asc(entity::presenca::Column::Id)
        .all(db)
        .await?;

    Ok(presencas)
}
