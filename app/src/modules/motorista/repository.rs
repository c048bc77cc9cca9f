use super::dto::{CreateMotoristaDto, UpdateMotoristaDto};
use crate::database::{error::DbError, helpers::set_if_some};
use chrono::Utc;
use entity::enums::{CargoFuncionario, StatusFuncionario};
use entity::{motorista, viagem};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub async fn find_by_id(
    db: &DatabaseConnection,
    motorista_id: i32,
) -> Result<Option<motorista::Model>, DbError> {
    Ok(motorista::Entity::find_by_id(motorista_id).one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    dto: CreateMotoristaDto,
) -> Result<motorista::Model, DbError> {
    let status = dto
        .status
        .map(|s| StatusFuncionario::normalize(&s))
        .unwrap_or(StatusFuncionario::Ativo);

    let cargo = dto
        .cargo
        .map(|c| CargoFuncionario::normalize(&c))
        .unwrap_or(CargoFuncionario::Efetivo);

    let created = motorista::ActiveModel {
        nome: Set(dto.nome),
        cpf: Set(dto.cpf),
        cnh: Set(dto.cnh),
        categoria_cnh: Set(dto.categoria_cnh),
        validade_cnh: Set(dto.validade_cnh),
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
    motorista_id: i32,
    dto: UpdateMotoristaDto,
) -> Result<Option<motorista::Model>, DbError> {
    let Some(found) = motorista::Entity::find_by_id(motorista_id).one(db).await? else {
        return Ok(None);
    };

    let mut v: motorista::ActiveModel = found.into();

    v.nome = set_if_some(dto.nome);
    v.cpf = set_if_some(dto.cpf);
    v.cnh = set_if_some(dto.cnh);
    v.categoria_cnh = set_if_some(dto.categoria_cnh);
    v.validade_cnh = set_if_some(dto.validade_cnh);
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

pub async fn delete(db: &DatabaseConnection, motorista_id: i32) -> Result<bool, DbError> {
    let res = motorista::Entity::delete_by_id(motorista_id).exec(db).await?;

    Ok(res.rows_affected > 0)
}

pub async fn viagens_of_motorista(
    db: &DatabaseConnection,
    motorista_id: i32,
) -> Result<Vec<viagem::Model>, DbError> {
    let viagens = viagem::Entity::find()
        .filter(viagem::Column::MotoristaId.eq(motorista_id))
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .all(db)
        .await?;

    Ok(viagens)
}
