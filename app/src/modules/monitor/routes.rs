use super::dto::{CreateMonitorDto, ListMonitoresDto, UpdateMonitorDto};
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
use entity::{monitor, viagem};
use http::StatusCode;
use migration::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_monitores))
        .route("/", post(create_monitor))
        .route("/:monitor_id", get(monitor_by_id))
        .route("/:monitor_id", put(update_monitor))
        .route("/:monitor_id", delete(delete_monitor))
        .route("/:monitor_id/viagens", get(list_monitor_viagens))
}

/// Lists monitores, paginated and optionally filtered by name or CPF
#[utoipa::path(
    get,
    tag = "monitor",
    path = "/monitores",
    params(Pagination, ListMonitoresDto),
    responses(
        (
            status = OK,
            description = "paginated list of monitores",
            content_type = "application/json",
            body = PaginatedMonitor,
        ),
    ),
)]
pub async fn list_monitores(
    ValidatedQuery(pagination): ValidatedQuery<Pagination>,
    ValidatedQuery(filter): ValidatedQuery<ListMonitoresDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<PaginationResult<monitor::Model>>, (StatusCode, SimpleError)> {
    let db_query = monitor::Entity::find()
        .apply_if(filter.nome, |query, nome| {
            if nome.is_empty() {
                query
            } else {
                let col = Expr::col((monitor::Entity, monitor::Column::Nome));
                query.filter(col.ilike(format!("%{}%", nome)))
            }
        })
        .apply_if(filter.cpf, |query, cpf| {
            if cpf.is_empty() {
                query
            } else {
                let col = Expr::col((monitor::Entity, monitor::Column::Cpf));
                query.filter(col.ilike(format!("%{}%", cpf)))
            }
        })
        .order_by_asc(monitor::Column::Id)
        .paginate(db.as_ref(), pagination.page_size);

    let result = database::helpers::paginated_query_to_pagination_result(db_query, pagination)
        .await
        .map_err(DbError::from)?;

    Ok(Json(result))
}

/// Get a monitor by ID
#[utoipa::path(
    get,
    tag = "monitor",
    path = "/monitores/{monitor_id}",
    params(("monitor_id" = i32, Path, description = "id of the monitor")),
    responses(
        (
            status = OK,
            description = "the monitor",
            content_type = "application/json",
            body = entity::monitor::Model,
        ),
        (status = NOT_FOUND, description = "monitor not found", body = SimpleError),
    ),
)]
pub async fn monitor_by_id(
    Path(monitor_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<monitor::Model>, (StatusCode, SimpleError)> {
    let monitor = repository::find_by_id(&db, monitor_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(monitor))
}

/// Creates a new monitor
///
/// status and cargo accept any of the synonym spellings and are
/// normalized before persistence
#[utoipa::path(
    post,
    tag = "monitor",
    path = "/monitores",
    request_body = CreateMonitorDto,
    responses(
        (
            status = OK,
            description = "the created monitor",
            content_type = "application/json",
            body = entity::monitor::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / CPF_IN_USE",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_monitor(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateMonitorDto>,
) -> Result<Json<monitor::Model>, (StatusCode, SimpleError)> {
    let created = repository::create(&db, dto).await?;

    Ok(Json(created))
}

/// Partially updates a monitor
#[utoipa::path(
    put,
    tag = "monitor",
    path = "/monitores/{monitor_id}",
    params(("monitor_id" = i32, Path, description = "id of the monitor to update")),
    request_body = UpdateMonitorDto,
    responses(
        (
            status = OK,
            description = "the updated monitor",
            content_type = "application/json",
            body = entity::monitor::Model,
        ),
        (status = NOT_FOUND, description = "monitor not found", body = SimpleError),
    ),
)]
pub async fn update_monitor(
    Path(monitor_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateMonitorDto>,
) -> Result<Json<monitor::Model>, (StatusCode, SimpleError)> {
    let updated = repository::update(&db, monitor_id, dto)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(updated))
}

/// Deletes a monitor, its viagens keep running with no monitor assigned
#[utoipa::path(
    delete,
    tag = "monitor",
    path = "/monitores/{monitor_id}",
    params(("monitor_id" = i32, Path, description = "id of the monitor to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("monitor deleted successfully"),
        ),
        (status = NOT_FOUND, description = "monitor not found", body = SimpleError),
    ),
)]
pub async fn delete_monitor(
    Path(monitor_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    if repository::delete(&db, monitor_id).await? {
        Ok(Json(String::from("monitor deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
    }
}

/// Lists the viagens of a monitor, most recent date first
#[utoipa::path(
    get,
    tag = "monitor",
    path = "/monitores/{monitor_id}/viagens",
    params(("monitor_id" = i32, Path, description = "id of the monitor")),
    responses(
        (
            status = OK,
            description = "viagens of the monitor",
            content_type = "application/json",
            body = Vec<entity::viagem::Model>,
        ),
        (status = NOT_FOUND, description = "monitor not found", body = SimpleError),
    ),
)]
pub async fn list_monitor_viagens(
    Path(monitor_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<viagem::Model>>, (StatusCode, SimpleError)> {
    repository::find_by_id(&db, monitor_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let viagens = repository::viagens_of_monitor(&db, monitor_id).await?;

    Ok(Json(viagens))
}
