use super::dto::{CreateMonitorDto, UpdateMonitorDto};
use crate::database::{error::DbError, helpers::set_if_some};
use chrono::Utc;
use entity::enums::{CargoFuncionario, StatusFuncionario};
use entity::{monitor, viagem};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub async fn find_by_id(
    db: &DatabaseConnection,
    monitor_id: i32,
) -> Result<Option<monitor::Model>, DbError> {
    Ok(monitor::Entity::find_by_id(monitor_id).one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    dto: CreateMonitorDto,
) -> Result<monitor::Model, DbError> {
    let status = dto
        .status
        .map(|s| StatusFuncionario::normalize(&s))
        .unwrap_or(StatusFuncionario::Ativo);

    let cargo = dto
        .cargo
        .map(|c| CargoFuncionario::normalize(&c))
        .unwrap_or(CargoFuncionario::Efetivo);

    let created = monitor::ActiveModel {
        nome: Set(dto.nome),
        cpf: Set(dto.cpf),
        telefone: Set(dto.telefone),
        endereco: Set(dto.endereco),
        data_contratacao: Set(dto.data_contratacao),
        status: Set(status),
        cargo: Set(cargo),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    monitor_id: i32,
    dto: UpdateMonitorDto,
) -> Result<Option<monitor::Model>, DbError> {
    let Some(found) = monitor::Entity::find_by_id(monitor_id).one(db).await? else {
        return Ok(None);
    };

    let mut v: monitor::ActiveModel = found.into();

    v.nome = set_if_some(dto.nome);
    v.cpf = set_if_some(dto.cpf);
    v.telefone = set_if_some(dto.telefone);
    v.endereco = set_if_some(dto.endereco);
    v.data_contratacao = set_if_some(dto.data_contratacao);

    if let Some(status) = dto.status {
        v.status = Set(StatusFuncionario::normalize(&status));
    }

    if let Some(cargo) = dto.cargo {
        v.cargo = Set(CargoFuncionario::normalize(&cargo));
    }

    v.updated_at = Set(Utc::now().into());

    Ok(Some(v.update(db).await?))
}

pub async fn delete(db: &DatabaseConnection, monitor_id: i32) -> Result<bool, DbError> {
    let res = monitor::Entity::delete_by_id(monitor_id).exec(db).await?;

    Ok(res.rows_affected > 0)
}

pub async fn viagens_of_monitor(
    db: &DatabaseConnection,
    monitor_id: i32,
) -> Result<Vec<viagem::Model>, DbError> {
    let viagens = viagem::Entity::find()
        .filter(viagem::Column::MonitorId.eq(monitor_id))
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .all(db)
        .await?;

    Ok(viagens)
}
