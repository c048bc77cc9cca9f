use super::dto::{CreateHorarioDto, UpdateHorarioDto};
use crate::database::{error::DbError, helpers::set_if_some};
use crate::utils::time::pad_time;
use chrono::Utc;
use entity::enums::TipoHorario;
use entity::{horario, rota, viagem};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JsonValue, QueryFilter,
    QueryOrder, Set,
};

/// Outcome of a create attempt, since a horario cannot exist
/// without its rota
pub enum CreateOutcome {
    Created(horario::Model),
    RotaNotFound,
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    horario_id: i32,
) -> Result<Option<horario::Model>, DbError> {
    Ok(horario::Entity::find_by_id(horario_id).one(db).await?)
}

fn dias_semana_to_json(dias: Vec<u8>) -> JsonValue {
    JsonValue::from(dias.into_iter().map(i32::from).collect::<Vec<_>>())
}

pub async fn create(
    db: &DatabaseConnection,
    dto: CreateHorarioDto,
) -> Result<CreateOutcome, DbError> {
    let rota_exists = rota::Entity::find_by_id(dto.rota_id).one(db).await?.is_some();

    if !rota_exists {
        return Ok(CreateOutcome::RotaNotFound);
    }

    let status = dto.status.map(|s| s.as_bool()).unwrap_or(true);

    let created = horario::ActiveModel {
        rota_id: Set(dto.rota_id),
        nome: Set(dto.nome),
        descricao: Set(dto.descricao),
        hora_inicio: Set(pad_time(&dto.hora_inicio)),
        hora_fim: Set(pad_time(&dto.hora_fim)),
        dias_semana: Set(dias_semana_to_json(dto.dias_semana)),
        tipo: Set(dto.tipo.unwrap_or(TipoHorario::Regular)),
        status: Set(status),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(CreateOutcome::Created(created))
}

pub async fn update(
    db: &DatabaseConnection,
    horario_id: i32,
    dto: UpdateHorarioDto,
) -> Result<Option<horario::Model>, DbError> {
    let Some(found) = horario::Entity::find_by_id(horario_id).one(db).await? else {
        return Ok(None);
    };

    let mut v: horario::ActiveModel = found.into();

    v.nome = set_if_some(dto.nome);
    v.descricao = set_if_some(dto.descricao);
    v.hora_inicio = set_if_some(dto.hora_inicio.map(|h| pad_time(&h)));
    v.hora_fim = set_if_some(dto.hora_fim.map(|h| pad_time(&h)));
    v.dias_semana = set_if_some(dto.dias_semana.map(dias_semana_to_json));

    if let Some(tipo) = dto.tipo {
        v.tipo = Set(tipo);
    }

    if let Some(status) = dto.status {
        v.status = Set(status.as_bool());
    }

    v.updated_at = Set(Utc::now().into());

    Ok(Some(v.update(db).await?))
}

pub async fn delete(db: &DatabaseConnection, horario_id: i32) -> Result<bool, DbError> {
    let res = horario::Entity::delete_by_id(horario_id).exec(db).await?;

    Ok(res.rows_affected > 0)
}

pub async fn viagens_of_horario(
    db: &DatabaseConnection,
    horario_id: i32,
) -> Result<Vec<viagem::Model>, DbError> {
    let viagens = viagem::Entity::find()
        .filter(viagem::Column::HorarioId.eq(horario_id))
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .all(db)
        .await?;

    Ok(viagens)
}
