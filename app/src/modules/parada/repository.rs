use super::dto::{CreateParadaDto, UpdateParadaDto};
use crate::database::{error::DbError, helpers::set_if_some};
use chrono::Utc;
use entity::parada;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

pub async fn find_by_id(
    db: &DatabaseConnection,
    parada_id: i32,
) -> Result<Option<parada::Model>, DbError> {
    Ok(parada::Entity::find_by_id(parada_id).one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    dto: CreateParadaDto,
) -> Result<parada::Model, DbError> {
    let status = dto.status.map(|s| s.as_bool()).unwrap_or(true);

    let created = parada::ActiveModel {
        nome: Set(dto.nome),
        endereco: Set(dto.endereco),
        ponto_referencia: Set(dto.ponto_referencia),
        latitude: Set(dto.latitude),
        longitude: Set(dto.longitude),
        tipo: Set(dto.tipo),
        status: Set(status),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    parada_id: i32,
    dto: UpdateParadaDto,
) -> Result<Option<parada::Model>, DbError> {
    let Some(found) = parada::Entity::find_by_id(parada_id).one(db).await? else {
        return Ok(None);
    };

    let mut v: parada::ActiveModel = found.into();

    v.nome = set_if_some(dto.nome);
    v.endereco = set_if_some(dto.endereco);
    v.ponto_referencia = set_if_some(dto.ponto_referencia);
    v.latitude = set_if_some(dto.latitude);
    v.longitude = set_if_some(dto.longitude);

    if let Some(tipo) = dto.tipo {
        v.tipo = Set(tipo);
    }

    if let Some(status) = dto.status {
        v.status = Set(status.as_bool());
    }

    v.updated_at = Set(Utc::now().into());

    Ok(Some(v.update(db).await?))
}

pub async fn delete(db: &DatabaseConnection, parada_id: i32) -> Result<bool, DbError> {
    let res = parada::Entity::delete_by_id(parada_id).exec(db).await?;

    Ok(res.rows_affected > 0)
}
