use super::dto::{CreateRotaDto, ParadaDaRotaDto, UpdateRotaDto};
use super::repository::{self, DeleteOutcome};
use crate::{
    modules::common::{
        extractors::{DbConnection, ValidatedJson},
        responses::SimpleError,
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, get, post, put},
    Json, Router,
};
use entity::{rota, viagem};
use http::StatusCode;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rotas))
        .route("/", post(create_rota))
        .route("/:rota_id", get(rota_by_id))
        .route("/:rota_id", put(update_rota))
        .route("/:rota_id", delete(delete_rota))
        .route("/:rota_id/paradas", get(list_rota_paradas))
        .route("/:rota_id/viagens", get(list_rota_viagens))
}

/// Lists rotas
#[utoipa::path(
    get,
    tag = "rota",
    path = "/rotas",
    responses(
        (
            status = OK,
            description = "list of rotas",
            content_type = "application/json",
            body = Vec<entity::rota::Model>,
        ),
    ),
)]
pub async fn list_rotas(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<rota::Model>>, (StatusCode, SimpleError)> {
    let rotas = repository::find_all(&db).await?;

    Ok(Json(rotas))
}

/// Get a rota by ID
#[utoipa::path(
    get,
    tag = "rota",
    path = "/rotas/{rota_id}",
    params(("rota_id" = i32, Path, description = "id of the rota")),
    responses(
        (
            status = OK,
            description = "the rota",
            content_type = "application/json",
            body = entity::rota::Model,
        ),
        (status = NOT_FOUND, description = "rota not found", body = SimpleError),
    ),
)]
pub async fn rota_by_id(
    Path(rota_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<rota::Model>, (StatusCode, SimpleError)> {
    let rota = repository::find_by_id(&db, rota_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(rota))
}

/// Creates a new rota, optionally attaching its paradas in visit order
#[utoipa::path(
    post,
    tag = "rota",
    path = "/rotas",
    request_body = CreateRotaDto,
    responses(
        (
            status = OK,
            description = "the created rota",
            content_type = "application/json",
            body = entity::rota::Model,
        ),
        (status = BAD_REQUEST, description = "invalid dto error message", body = SimpleError),
    ),
)]
pub async fn create_rota(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateRotaDto>,
) -> Result<Json<rota::Model>, (StatusCode, SimpleError)> {
    let created = repository::create(&db, dto).await?;

    Ok(Json(created))
}

/// Partially updates a rota
///
/// when the paradas field is present the whole parada set is replaced
#[utoipa::path(
    put,
    tag = "rota",
    path = "/rotas/{rota_id}",
    params(("rota_id" = i32, Path, description = "id of the rota to update")),
    request_body = UpdateRotaDto,
    responses(
        (
            status = OK,
            description = "the updated rota",
            content_type = "application/json",
            body = entity::rota::Model,
        ),
        (status = NOT_FOUND, description = "rota not found", body = SimpleError),
    ),
)]
pub async fn update_rota(
    Path(rota_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateRotaDto>,
) -> Result<Json<rota::Model>, (StatusCode, SimpleError)> {
    let updated = repository::update(&db, rota_id, dto)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(updated))
}

/// Deletes a rota and its parada associations
///
/// refused with CONFLICT while viagens still reference it
#[utoipa::path(
    delete,
    tag = "rota",
    path = "/rotas/{rota_id}",
    params(("rota_id" = i32, Path, description = "id of the rota to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("rota deleted successfully"),
        ),
        (status = NOT_FOUND, description = "rota not found", body = SimpleError),
        (
            status = CONFLICT,
            description = "rota has viagens and cannot be deleted",
            body = SimpleError,
        ),
    ),
)]
pub async fn delete_rota(
    Path(rota_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    match repository::delete(&db, rota_id).await? {
        DeleteOutcome::Deleted => Ok(Json(String::from("rota deleted successfully"))),
        DeleteOutcome::NotFound => Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found())),
        DeleteOutcome::BlockedByViagens(n) => Err((
            StatusCode::CONFLICT,
            SimpleError::from(format!("rota has {} viagens and cannot be deleted", n)),
        )),
    }
}

/// Lists the paradas of a rota in visit order
#[utoipa::path(
    get,
    tag = "rota",
    path = "/rotas/{rota_id}/paradas",
    params(("rota_id" = i32, Path, description = "id of the rota")),
    responses(
        (
            status = OK,
            description = "paradas of the rota in visit order",
            content_type = "application/json",
            body = Vec<ParadaDaRotaDto>,
        ),
        (status = NOT_FOUND, description = "rota not found", body = SimpleError),
    ),
)]
pub async fn list_rota_paradas(
    Path(rota_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<ParadaDaRotaDto>>, (StatusCode, SimpleError)> {
    repository::find_by_id(&db, rota_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let paradas = repository::paradas_of_rota(&db, rota_id).await?;

    Ok(Json(paradas))
}

/// Lists the viagens of a rota, most recent date first
#[utoipa::path(
    get,
    tag = "rota",
    path = "/rotas/{rota_id}/viagens",
    params(("rota_id" = i32, Path, description = "id of the rota")),
    responses(
        (
            status = OK,
            description = "viagens of the rota",
            content_type = "application/json",
            body = Vec<entity::viagem::Model>,
        ),
        (status = NOT_FOUND, description = "rota not found", body = SimpleError),
    ),
)]
pub async fn list_rota_viagens(
    Path(rota_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<viagem::Model>>, (StatusCode, SimpleError)> {
    repository::find_by_id(&db, rota_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let viagens = repository::viagens_of_rota(&db, rota_id).await?;

    Ok(Json(viagens))
}
