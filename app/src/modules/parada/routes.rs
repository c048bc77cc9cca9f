use super::dto::{CreateParadaDto, ListParadasDto, UpdateParadaDto};
use super::repository;
use crate::{
    database::error::DbError,
    modules::common::{
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
use entity::parada;
use http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QueryTrait};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_paradas))
        .route("/", post(create_parada))
        .route("/:parada_id", get(parada_by_id))
        .route("/:parada_id", put(update_parada))
        .route("/:parada_id", delete(delete_parada))
}

/// Lists paradas, optionally filtered by stop kind
#[utoipa::path(
    get,
    tag = "parada",
    path = "/paradas",
    params(ListParadasDto),
    responses(
        (
            status = OK,
            description = "list of paradas",
            content_type = "application/json",
            body = Vec<entity::parada::Model>,
        ),
    ),
)]
pub async fn list_paradas(
    ValidatedQuery(filter): ValidatedQuery<ListParadasDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<parada::Model>>, (StatusCode, SimpleError)> {
    let paradas = parada::Entity::find()
        .apply_if(filter.tipo, |query, tipo| {
            query.filter(parada::Column::Tipo.eq(tipo))
        })
        .order_by_asc(parada::Column::Id)
        .all(db.as_ref())
        .await
        .map_err(DbError::from)?;

    Ok(Json(paradas))
}

/// Get a parada by ID
#[utoipa::path(
    get,
    tag = "parada",
    path = "/paradas/{parada_id}",
    params(("parada_id" = i32, Path, description = "id of the parada")),
    responses(
        (
            status = OK,
            description = "the parada",
            content_type = "application/json",
            body = entity::parada::Model,
        ),
        (status = NOT_FOUND, description = "parada not found", body = SimpleError),
    ),
)]
pub async fn parada_by_id(
    Path(parada_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<parada::Model>, (StatusCode, SimpleError)> {
    let parada = repository::find_by_id(&db, parada_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(parada))
}

/// Creates a new parada
#[utoipa::path(
    post,
    tag = "parada",
    path = "/paradas",
    request_body = CreateParadaDto,
    responses(
        (
            status = OK,
            description = "the created parada",
            content_type = "application/json",
            body = entity::parada::Model,
        ),
        (status = BAD_REQUEST, description = "invalid dto error message", body = SimpleError),
    ),
)]
pub async fn create_parada(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateParadaDto>,
) -> Result<Json<parada::Model>, (StatusCode, SimpleError)> {
    let created = repository::create(&db, dto).await?;

    Ok(Json(created))
}

/// Partially updates a parada
#[utoipa::path(
    put,
    tag = "parada",
    path = "/paradas/{parada_id}",
    params(("parada_id" = i32, Path, description = "id of the parada to update")),
    request_body = UpdateParadaDto,
    responses(
        (
            status = OK,
            description = "the updated parada",
            content_type = "application/json",
            body = entity::parada::Model,
        ),
        (status = NOT_FOUND, description = "parada not found", body = SimpleError),
    ),
)]
pub async fn update_parada(
    Path(parada_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateParadaDto>,
) -> Result<Json<parada::Model>, (StatusCode, SimpleError)> {
    let updated = repository::update(&db, parada_id, dto)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(updated))
}

/// Deletes a parada, detaching it from any rotas
#[utoipa::path(
    delete,
    tag = "parada",
    path = "/paradas/{parada_id}",
    params(("parada_id" = i32, Path, description = "id of the parada to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("parada deleted successfully"),
        ),
        (status = NOT_FOUND, description = "parada not found", body = SimpleError),
    ),
)]
pub async fn delete_parada(
    Path(parada_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    if repository::delete(&db, parada_id).await? {
        Ok(Json(String::from("parada deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
    }
}
