use super::dto::{CreateRotaDto, ParadaDaRotaDto, RotaParadaInputDto, UpdateRotaDto};
use crate::database::{error::DbError, helpers::set_if_some};
use crate::utils::time::pad_time_opt;
use chrono::Utc;
use entity::{rota, rota_parada, viagem};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// Outcome of a delete attempt on a rota
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// deletion refused because this many viagens still reference the rota
    BlockedByViagens(u64),
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<rota::Model>, DbError> {
    Ok(rota::Entity::find()
        .order_by_asc(rota::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    rota_id: i32,
) -> Result<Option<rota::Model>, DbError> {
    Ok(rota::Entity::find_by_id(rota_id).one(db).await?)
}

async fn replace_paradas<C: ConnectionTrait>(
    conn: &C,
    rota_id: i32,
    paradas: Vec<RotaParadaInputDto>,
) -> Result<(), DbError> {
    rota_parada::Entity::delete_many()
        .filter(rota_parada::Column::RotaId.eq(rota_id))
        .exec(conn)
        .await?;

    for p in paradas {
        rota_parada::ActiveModel {
            rota_id: Set(rota_id),
            parada_id: Set(p.parada_id),
            ordem: Set(p.ordem),
            horario_estimado: Set(pad_time_opt(p.horario_estimado)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

pub async fn create(db: &DatabaseConnection, dto: CreateRotaDto) -> Result<rota::Model, DbError> {
    let txn = db.begin().await?;

    let status = dto.status.map(|s| s.as_bool()).unwrap_or(true);

    let created = rota::ActiveModel {
        nome: Set(dto.nome),
        descricao: Set(dto.descricao),
        tipo: Set(dto.tipo.unwrap_or_else(|| String::from("Escolar"))),
        origem: Set(dto.origem),
        destino: Set(dto.destino),
        horario_inicio: Set(pad_time_opt(dto.horario_inicio)),
        horario_fim: Set(pad_time_opt(dto.horario_fim)),
        distancia_km: Set(dto.distancia_km),
        tempo_estimado_minutos: Set(dto.tempo_estimado_minutos),
        status: Set(status),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if let Some(paradas) = dto.paradas {
        replace_paradas(&txn, created.id, paradas).await?;
    }

    txn.commit().await?;

    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    rota_id: i32,
    dto: UpdateRotaDto,
) -> Result<Option<rota::Model>, DbError> {
    let Some(found) = rota::Entity::find_by_id(rota_id).one(db).await? else {
        return Ok(None);
    };

    let txn = db.begin().await?;

    let mut v: rota::ActiveModel = found.into();

    v.nome = set_if_some(dto.nome);
    v.descricao = set_if_some(dto.descricao);
    v.tipo = set_if_some(dto.tipo);
    v.origem = set_if_some(dto.origem);
    v.destino = set_if_some(dto.destino);
    v.horario_inicio = set_if_some(dto.horario_inicio.map(pad_time_opt));
    v.horario_fim = set_if_some(dto.horario_fim.map(pad_time_opt));
    v.distancia_km = set_if_some(dto.distancia_km);
    v.tempo_estimado_minutos = set_if_some(dto.tempo_estimado_minutos);

    if let Some(status) = dto.status {
        v.status = Set(status.as_bool());
    }

    v.updated_at = Set(Utc::now().into());

    let updated = v.update(&txn).await?;

    if let Some(paradas) = dto.paradas {
        replace_paradas(&txn, rota_id, paradas).await?;
    }

    txn.commit().await?;

    Ok(Some(updated))
}

/// Deletes a rota unless viagens still reference it, detaching its
/// paradas first so no orphan associations remain
pub async fn delete(db: &DatabaseConnection, rota_id: i32) -> Result<DeleteOutcome, DbError> {
    let txn = db.begin().await?;

    let dependent_viagens = viagem::Entity::find()
        .filter(viagem::Column::RotaId.eq(rota_id))
        .count(&txn)
        .await?;

    if dependent_viagens > 0 {
        txn.rollback().await?;
        return Ok(DeleteOutcome::BlockedByViagens(dependent_viagens));
    }

    rota_parada::Entity::delete_many()
        .filter(rota_parada::Column::RotaId.eq(rota_id))
        .exec(&txn)
        .await?;

    let res = rota::Entity::delete_by_id(rota_id).exec(&txn).await?;

    txn.commit().await?;

    if res.rows_affected > 0 {
        Ok(DeleteOutcome::Deleted)
    } else {
        Ok(DeleteOutcome::NotFound)
    }
}

/// The paradas of a rota in visit order, with the per stop estimated time
pub async fn paradas_of_rota(
    db: &DatabaseConnection,
    rota_id: i32,
) -> Result<Vec<ParadaDaRotaDto>, DbError> {
    let rows = rota_parada::Entity::find()
        .filter(rota_parada::Column::RotaId.eq(rota_id))
        .find_also_related(entity::parada::Entity)
        .order_by_asc(rota_parada::Column::Ordem)
        .all(db)
        .await?;

    let paradas = rows
        .into_iter()
        .filter_map(|(assoc, parada)| {
            parada.map(|parada| ParadaDaRotaDto {
                ordem: assoc.ordem,
                horario_estimado: assoc.horario_estimado,
                parada,
            })
        })
        .collect();

    Ok(paradas)
}

pub async fn viagens_of_rota(
    db: &DatabaseConnection,
    rota_id: i32,
) -> Result<Vec<viagem::Model>, DbError> {
    let viagens = viagem::Entity::find()
        .filter(viagem::Column::RotaId.eq(rota_id))
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .all(db)
        .await?;

    Ok(viagens)
}
