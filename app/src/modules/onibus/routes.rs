use super::dto::{CreateOnibusDto, ListOnibusDto, UpdateOnibusDto};
use super::repository::{self, DeleteOutcome};
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
use entity::{onibus, viagem};
use http::StatusCode;
use migration::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, QueryTrait};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_onibus))
        .route("/", post(create_onibus))
        .route("/:onibus_id", get(onibus_by_id))
        .route("/:onibus_id", put(update_onibus))
        .route("/:onibus_id", delete(delete_onibus))
        .route("/:onibus_id/viagens", get(list_onibus_viagens))
}

/// Lists the fleet, optionally filtered by plate
#[utoipa::path(
    get,
    tag = "onibus",
    path = "/onibus",
    params(ListOnibusDto),
    responses(
        (
            status = OK,
            description = "list of onibus",
            content_type = "application/json",
            body = Vec<entity::onibus::Model>,
        ),
    ),
)]
pub async fn list_onibus(
    ValidatedQuery(filter): ValidatedQuery<ListOnibusDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<onibus::Model>>, (StatusCode, SimpleError)> {
    let frota = onibus::Entity::find()
        .apply_if(filter.placa, |query, placa| {
            if placa.is_empty() {
                query
            } else {
                let col = Expr::col((onibus::Entity, onibus::Column::Placa));
                query.filter(col.ilike(format!("%{}%", placa)))
            }
        })
        .order_by_asc(onibus::Column::Id)
        .all(db.as_ref())
        .await
        .map_err(DbError::from)?;

    Ok(Json(frota))
}

/// Get a onibus by ID
#[utoipa::path(
    get,
    tag = "onibus",
    path = "/onibus/{onibus_id}",
    params(("onibus_id" = i32, Path, description = "id of the onibus")),
    responses(
        (
            status = OK,
            description = "the onibus",
            content_type = "application/json",
            body = entity::onibus::Model,
        ),
        (status = NOT_FOUND, description = "onibus not found", body = SimpleError),
    ),
)]
pub async fn onibus_by_id(
    Path(onibus_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<onibus::Model>, (StatusCode, SimpleError)> {
    let onibus = repository::find_by_id(&db, onibus_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(onibus))
}

/// Creates a new onibus
#[utoipa::path(
    post,
    tag = "onibus",
    path = "/onibus",
    request_body = CreateOnibusDto,
    responses(
        (
            status = OK,
            description = "the created onibus",
            content_type = "application/json",
            body = entity::onibus::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / PLACA_IN_USE",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_onibus(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateOnibusDto>,
) -> Result<Json<onibus::Model>, (StatusCode, SimpleError)> {
    let created = repository::create(&db, dto).await?;

    Ok(Json(created))
}

/// Partially updates a onibus
#[utoipa::path(
    put,
    tag = "onibus",
    path = "/onibus/{onibus_id}",
    params(("onibus_id" = i32, Path, description = "id of the onibus to update")),
    request_body = UpdateOnibusDto,
    responses(
        (
            status = OK,
            description = "the updated onibus",
            content_type = "application/json",
            body = entity::onibus::Model,
        ),
        (status = NOT_FOUND, description = "onibus not found", body = SimpleError),
    ),
)]
pub async fn update_onibus(
    Path(onibus_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateOnibusDto>,
) -> Result<Json<onibus::Model>, (StatusCode, SimpleError)> {
    let updated = repository::update(&db, onibus_id, dto)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(updated))
}

/// Deletes a onibus
///
/// refused with CONFLICT while viagens still reference it
#[utoipa::path(
    delete,
    tag = "onibus",
    path = "/onibus/{onibus_id}",
    params(("onibus_id" = i32, Path, description = "id of the onibus to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("onibus deleted successfully"),
        ),
        (status = NOT_FOUND, description = "onibus not found", body = SimpleError),
        (
            status = CONFLICT,
            description = "onibus has viagens and cannot be deleted",
            body = SimpleError,
        ),
    ),
)]
pub async fn delete_onibus(
    Path(onibus_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    match repository::delete(&db, onibus_id).await? {
        DeleteOutcome::Deleted => Ok(Json(String::from("onibus deleted successfully"))),
        DeleteOutcome::NotFound => Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found())),
        DeleteOutcome::BlockedByViagens(n) => Err((
            StatusCode::CONFLICT,
            SimpleError::from(format!("onibus has {} viagens and cannot be deleted", n)),
        )),
    }
}

/// Lists the viagens of a onibus, most recent date first
#[utoipa::path(
    get,
    tag = "onibus",
    path = "/onibus/{onibus_id}/viagens",
    params(("onibus_id" = i32, Path, description = "id of the onibus")),
    responses(
        (
            status = OK,
            description = "viagens of the onibus",
            content_type = "application/json",
            body = Vec<entity::viagem::Model>,
        ),
        (status = NOT_FOUND, description = "onibus not found", body = SimpleError),
    ),
)]
pub async fn list_onibus_viagens(
    Path(onibus_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<viagem::Model>>, (StatusCode, SimpleError)> {
    repository::find_by_id(&db, onibus_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let viagens = repository::viagens_of_onibus(&db, onibus_id).await?;

    Ok(Json(viagens))
}
