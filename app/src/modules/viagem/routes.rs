use super::dto::{CreateViagemDto, ListViagensDto, UpdateViagemDto};
use super::repository::{self, ViagemOutcome};
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
use entity::viagem;
use http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QueryTrait};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_viagens))
        .route("/", post(create_viagem))
        .route("/:viagem_id", get(viagem_by_id))
        .route("/:viagem_id", put(update_viagem))
        .route("/:viagem_id", delete(delete_viagem))
}

/// Lists viagens, most recent date first then by planned departure,
/// optionally filtered by date range and rota
#[utoipa::path(
    get,
    tag = "viagem",
    path = "/viagens",
    params(ListViagensDto),
    responses(
        (
            status = OK,
            description = "list of viagens",
            content_type = "application/json",
            body = Vec<entity::viagem::Model>,
        ),
    ),
)]
pub async fn list_viagens(
    ValidatedQuery(filter): ValidatedQuery<ListViagensDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<viagem::Model>>, (StatusCode, SimpleError)> {
    let viagens = viagem::Entity::find()
        .apply_if(filter.data_inicio, |query, data| {
            query.filter(viagem::Column::DataViagem.gte(data))
        })
        .apply_if(filter.data_fim, |query, data| {
            query.filter(viagem::Column::DataViagem.lte(data))
        })
        .apply_if(filter.rota_id, |query, rota_id| {
            query.filter(viagem::Column::RotaId.eq(rota_id))
        })
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .all(db.as_ref())
        .await
        .map_err(DbError::from)?;

    Ok(Json(viagens))
}

/// Get a viagem by ID
#[utoipa::path(
    get,
    tag = "viagem",
    path = "/viagens/{viagem_id}",
    params(("viagem_id" = i32, Path, description = "id of the viagem")),
    responses(
        (
            status = OK,
            description = "the viagem",
            content_type = "application/json",
            body = entity::viagem::Model,
        ),
        (status = NOT_FOUND, description = "viagem not found", body = SimpleError),
    ),
)]
pub async fn viagem_by_id(
    Path(viagem_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<viagem::Model>, (StatusCode, SimpleError)> {
    let viagem = repository::find_by_id(&db, viagem_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(viagem))
}

/// Creates a new viagem
///
/// rota, onibus, motorista and monitor must exist, an unknown horario
/// is tolerated and stored as none
#[utoipa::path(
    post,
    tag = "viagem",
    path = "/viagens",
    request_body = CreateViagemDto,
    responses(
        (
            status = OK,
            description = "the created viagem",
            content_type = "application/json",
            body = entity::viagem::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / missing association",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_viagem(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateViagemDto>,
) -> Result<Json<viagem::Model>, (StatusCode, SimpleError)> {
    match repository::create(&db, dto).await? {
        ViagemOutcome::Ok(created) => Ok(Json(created)),
        ViagemOutcome::NotFound => Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found())),
        ViagemOutcome::MissingAssociation(name) => Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from(format!("{} not found", name)),
        )),
    }
}

/// Partially updates a viagem
#[utoipa::path(
    put,
    tag = "viagem",
    path = "/viagens/{viagem_id}",
    params(("viagem_id" = i32, Path, description = "id of the viagem to update")),
    request_body = UpdateViagemDto,
    responses(
        (
            status = OK,
            description = "the updated viagem",
            content_type = "application/json",
            body = entity::viagem::Model,
        ),
        (status = NOT_FOUND, description = "viagem not found", body = SimpleError),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / missing association",
            body = SimpleError,
        ),
    ),
)]
pub async fn update_viagem(
    Path(viagem_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateViagemDto>,
) -> Result<Json<viagem::Model>, (StatusCode, SimpleError)> {
    match repository::update(&db, viagem_id, dto).await? {
        ViagemOutcome::Ok(updated) => Ok(Json(updated)),
        ViagemOutcome::NotFound => Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found())),
        ViagemOutcome::MissingAssociation(name) => Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from(format!("{} not found", name)),
        )),
    }
}

/// Deletes a viagem and, by cascade, its presencas
#[utoipa::path(
    delete,
    tag = "viagem",
    path = "/viagens/{viagem_id}",
    params(("viagem_id" = i32, Path, description = "id of the viagem to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("viagem deleted successfully"),
        ),
        (status = NOT_FOUND, description = "viagem not found", body = SimpleError),
    ),
)]
pub async fn delete_viagem(
    Path(viagem_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    if repository::delete(&db, viagem_id).await? {
        Ok(Json(String::from("viagem deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
    }
}
