use super::dto::{CreateHorarioDto, ListHorariosDto, UpdateHorarioDto};
use super::repository::{self, CreateOutcome};
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
use entity::{horario, viagem};
use http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_horarios))
        .route("/", post(create_horario))
        .route("/:horario_id", get(horario_by_id))
        .route("/:horario_id", put(update_horario))
        .route("/:horario_id", delete(delete_horario))
        .route("/:horario_id/viagens", get(list_horario_viagens))
}

/// Lists horarios, paginated and optionally filtered by rota
#[utoipa::path(
    get,
    tag = "horario",
    path = "/horarios",
    params(Pagination, ListHorariosDto),
    responses(
        (
            status = OK,
            description = "paginated list of horarios",
            content_type = "application/json",
            body = PaginatedHorario,
        ),
    ),
)]
pub async fn list_horarios(
    ValidatedQuery(pagination): ValidatedQuery<Pagination>,
    ValidatedQuery(filter): ValidatedQuery<ListHorariosDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<PaginationResult<horario::Model>>, (StatusCode, SimpleError)> {
    let db_query = horario::Entity::find()
        .apply_if(filter.rota_id, |query, rota_id| {
            query.filter(horario::Column::RotaId.eq(rota_id))
        })
        .order_by_asc(horario::Column::Id)
        .paginate(db.as_ref(), pagination.page_size);

    let result = database::helpers::paginated_query_to_pagination_result(db_query, pagination)
        .await
        .map_err(DbError::from)?;

    Ok(Json(result))
}

/// Get a horario by ID
#[utoipa::path(
    get,
    tag = "horario",
    path = "/horarios/{horario_id}",
    params(("horario_id" = i32, Path, description = "id of the horario")),
    responses(
        (
            status = OK,
            description = "the horario",
            content_type = "application/json",
            body = entity::horario::Model,
        ),
        (status = NOT_FOUND, description = "horario not found", body = SimpleError),
    ),
)]
pub async fn horario_by_id(
    Path(horario_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<horario::Model>, (StatusCode, SimpleError)> {
    let horario = repository::find_by_id(&db, horario_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(horario))
}

/// Creates a new horario for a rota
#[utoipa::path(
    post,
    tag = "horario",
    path = "/horarios",
    request_body = CreateHorarioDto,
    responses(
        (
            status = OK,
            description = "the created horario",
            content_type = "application/json",
            body = entity::horario::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / rota not found",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_horario(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateHorarioDto>,
) -> Result<Json<horario::Model>, (StatusCode, SimpleError)> {
    match repository::create(&db, dto).await? {
        CreateOutcome::Created(created) => Ok(Json(created)),
        CreateOutcome::RotaNotFound => Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from("rota not found"),
        )),
    }
}

/// Partially updates a horario
#[utoipa::path(
    put,
    tag = "horario",
    path = "/horarios/{horario_id}",
    params(("horario_id" = i32, Path, description = "id of the horario to update")),
    request_body = UpdateHorarioDto,
    responses(
        (
            status = OK,
            description = "the updated horario",
            content_type = "application/json",
            body = entity::horario::Model,
        ),
        (status = NOT_FOUND, description = "horario not found", body = SimpleError),
    ),
)]
pub async fn update_horario(
    Path(horario_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateHorarioDto>,
) -> Result<Json<horario::Model>, (StatusCode, SimpleError)> {
    let updated = repository::update(&db, horario_id, dto)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(updated))
}

/// Deletes a horario, viagens that referenced it keep running unscheduled
#[utoipa::path(
    delete,
    tag = "horario",
    path = "/horarios/{horario_id}",
    params(("horario_id" = i32, Path, description = "id of the horario to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("horario deleted successfully"),
        ),
        (status = NOT_FOUND, description = "horario not found", body = SimpleError),
    ),
)]
pub async fn delete_horario(
    Path(horario_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    if repository::delete(&db, horario_id).await? {
        Ok(Json(String::from("horario deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
    }
}

/// Lists the viagens of a horario, most recent date first
#[utoipa::path(
    get,
    tag = "horario",
    path = "/horarios/{horario_id}/viagens",
    params(("horario_id" = i32, Path, description = "id of the horario")),
    responses(
        (
            status = OK,
            description = "viagens of the horario",
            content_type = "application/json",
            body = Vec<entity::viagem::Model>,
        ),
        (status = NOT_FOUND, description = "horario not found", body = SimpleError),
    ),
)]
pub async fn list_horario_viagens(
    Path(horario_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<viagem::Model>>, (StatusCode, SimpleError)> {
    repository::find_by_id(&db, horario_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let viagens = repository::viagens_of_horario(&db, horario_id).await?;

    Ok(Json(viagens))
}
