use super::dto::{CreateMotoristaDto, ListMotoristasDto, UpdateMotoristaDto};
use super::repository;
use crate::{
    database::{self, error::DbError},
    modules::common::{
        dto::{Pagination, PaginationResult},
        extractors::{DbConnection, ValidatedJson, ValidatedQuery},
        responses::SimpleError,
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, get, post, put},
    Json, Router,
};
use entity::{motorista, viagem};
use http::StatusCode;
use migration::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_motoristas))
        .route("/", post(create_motorista))
        .route("/:motorista_id", get(motorista_by_id))
        .route("/:motorista_id", put(update_motorista))
        .route("/:motorista_id", delete(delete_motorista))
        .route("/:motorista_id/viagens", get(list_motorista_viagens))
}

/// Lists motoristas, paginated and optionally filtered by name or CPF
#[utoipa::path(
    get,
    tag = "motorista",
    path = "/motoristas",
    params(Pagination, ListMotoristasDto),
    responses(
        (
            status = OK,
            description = "paginated list of motoristas",
            content_type = "application/json",
            body = PaginatedMotorista,
        ),
    ),
)]
pub async fn list_motoristas(
    ValidatedQuery(pagination): ValidatedQuery<Pagination>,
    ValidatedQuery(filter): ValidatedQuery<ListMotoristasDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<PaginationResult<motorista::Model>>, (StatusCode, SimpleError)> {
    let db_query = motorista::Entity::find()
        .apply_if(filter.nome, |query, nome| {
            if nome.is_empty() {
                query
            } else {
                let col = Expr::col((motorista::Entity, motorista::Column::Nome));
                query.filter(col.ilike(format!("%{}%", nome)))
            }
        })
        .apply_if(filter.cpf, |query, cpf| {
            if cpf.is_empty() {
                query
            } else {
                let col = Expr::col((motorista::Entity, motorista::Column::Cpf));
                query.filter(col.ilike(format!("%{}%", cpf)))
            }
        })
        .order_by_asc(motorista::Column::Id)
        .paginate(db.as_ref(), pagination.page_size);

    let result = database::helpers::paginated_query_to_pagination_result(db_query, pagination)
        .await
        .map_err(DbError::from)?;

    Ok(Json(result))
}

/// Get a motorista by ID
#[utoipa::path(
    get,
    tag = "motorista",
    path = "/motoristas/{motorista_id}",
    params(("motorista_id" = i32, Path, description = "id of the motorista")),
    responses(
        (
            status = OK,
            description = "the motorista",
            content_type = "application/json",
            body = entity::motorista::Model,
        ),
        (status = NOT_FOUND, description = "motorista not found", body = SimpleError),
    ),
)]
pub async fn motorista_by_id(
    Path(motorista_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<motorista::Model>, (StatusCode, SimpleError)> {
    let motorista = repository::find_by_id(&db, motorista_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(motorista))
}

/// Creates a new motorista
///
/// status and cargo accept any of the synonym spellings and are
/// normalized before persistence
#[utoipa::path(
    post,
    tag = "motorista",
    path = "/motoristas",
    request_body = CreateMotoristaDto,
    responses(
        (
            status = OK,
            description = "the created motorista",
            content_type = "application/json",
            body = entity::motorista::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / CPF_IN_USE",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_motorista(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateMotoristaDto>,
) -> Result<Json<motorista::Model>, (StatusCode, SimpleError)> {
    let created = repository::create(&db, dto).await?;

    Ok(Json(created))
}

/// Partially updates a motorista
#[utoipa::path(
    put,
    tag = "motorista",
    path = "/motoristas/{motorista_id}",
    params(("motorista_id" = i32, Path, description = "id of the motorista to update")),
    request_body = UpdateMotoristaDto,
    responses(
        (
            status = OK,
            description = "the updated motorista",
            content_type = "application/json",
            body = entity::motorista::Model,
        ),
        (status = NOT_FOUND, description = "motorista not found", body = SimpleError),
    ),
)]
pub async fn update_motorista(
    Path(motorista_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateMotoristaDto>,
) -> Result<Json<motorista::Model>, (StatusCode, SimpleError)> {
    let updated = repository::update(&db, motorista_id, dto)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(updated))
}

/// Deletes a motorista and, by cascade, its viagens
#[utoipa::path(
    delete,
    tag = "motorista",
    path = "/motoristas/{motorista_id}",
    params(("motorista_id" = i32, Path, description = "id of the motorista to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("motorista deleted successfully"),
        ),
        (status = NOT_FOUND, description = "motorista not found", body = SimpleError),
    ),
)]
pub async fn delete_motorista(
    Path(motorista_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    if repository::delete(&db, motorista_id).await? {
        Ok(Json(String::from("motorista deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
    }
}

/// Lists the viagens of a motorista, most recent date first
#[utoipa::path(
    get,
    tag = "motorista",
    path = "/motoristas/{motorista_id}/viagens",
    params(("motorista_id" = i32, Path, description = "id of the motorista")),
    responses(
        (
            status = OK,
            description = "viagens of the motorista",
            content_type = "application/json",
            body = Vec<entity::viagem::Model>,
        ),
        (status = NOT_FOUND, description = "motorista not found", body = SimpleError),
    ),
)]
pub async fn list_motorista_viagens(
    Path(motorista_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<viagem::Model>>, (StatusCode, SimpleError)> {
    repository::find_by_id(&db, motorista_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let viagens = repository::viagens_of_motorista(&db, motorista_id).await?;

    Ok(Json(viagens))
}
