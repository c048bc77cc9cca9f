use super::dto::{CreateAlunoDto, ListAlunosDto, UpdateAlunoDto};
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
use entity::{aluno, presenca};
use http::StatusCode;
use migration::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_alunos))
        .route("/", post(create_aluno))
        .route("/:aluno_id", get(aluno_by_id))
        .route("/:aluno_id", put(update_aluno))
        .route("/:aluno_id", delete(delete_aluno))
        .route("/:aluno_id/presencas", get(list_aluno_presencas))
}

/// Lists alunos, paginated and optionally filtered by name
#[utoipa::path(
    get,
    tag = "aluno",
    path = "/alunos",
    params(Pagination, ListAlunosDto),
    responses(
        (
            status = OK,
            description = "paginated list of alunos",
            content_type = "application/json",
            body = PaginatedAluno,
        ),
    ),
)]
pub async fn list_alunos(
    ValidatedQuery(pagination): ValidatedQuery<Pagination>,
    ValidatedQuery(filter): ValidatedQuery<ListAlunosDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<PaginationResult<aluno::Model>>, (StatusCode, SimpleError)> {
    let db_query = aluno::Entity::find()
        .apply_if(filter.nome, |query, nome| {
            if nome.is_empty() {
                query
            } else {
                let col = Expr::col((aluno::Entity, aluno::Column::Nome));
                query.filter(col.ilike(format!("%{}%", nome)))
            }
        })
        .order_by_asc(aluno::Column::Id)
        .paginate(db.as_ref(), pagination.page_size);

    let result = database::helpers::paginated_query_to_pagination_result(db_query, pagination)
        .await
        .map_err(DbError::from)?;

    Ok(Json(result))
}

/// Get a aluno by ID
#[utoipa::path(
    get,
    tag = "aluno",
    path = "/alunos/{aluno_id}",
    params(("aluno_id" = i32, Path, description = "id of the aluno")),
    responses(
        (
            status = OK,
            description = "the aluno",
            content_type = "application/json",
            body = entity::aluno::Model,
        ),
        (status = NOT_FOUND, description = "aluno not found", body = SimpleError),
    ),
)]
pub async fn aluno_by_id(
    Path(aluno_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<aluno::Model>, (StatusCode, SimpleError)> {
    let aluno = repository::find_by_id(&db, aluno_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(aluno))
}

/// Creates a new aluno
#[utoipa::path(
    post,
    tag = "aluno",
    path = "/alunos",
    request_body = CreateAlunoDto,
    responses(
        (
            status = OK,
            description = "the created aluno",
            content_type = "application/json",
            body = entity::aluno::Model,
        ),
        (status = BAD_REQUEST, description = "invalid dto error message", body = SimpleError),
    ),
)]
pub async fn create_aluno(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateAlunoDto>,
) -> Result<Json<aluno::Model>, (StatusCode, SimpleError)> {
    let created = repository::create(&db, dto).await?;

    Ok(Json(created))
}

/// Partially updates a aluno
#[utoipa::path(
    put,
    tag = "aluno",
    path = "/alunos/{aluno_id}",
    params(("aluno_id" = i32, Path, description = "id of the aluno to update")),
    request_body = UpdateAlunoDto,
    responses(
        (
            status = OK,
            description = "the updated aluno",
            content_type = "application/json",
            body = entity::aluno::Model,
        ),
        (status = NOT_FOUND, description = "aluno not found", body = SimpleError),
    ),
)]
pub async fn update_aluno(
    Path(aluno_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateAlunoDto>,
) -> Result<Json<aluno::Model>, (StatusCode, SimpleError)> {
    let updated = repository::update(&db, aluno_id, dto)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(updated))
}

/// Deletes a aluno and, by cascade, its presencas
#[utoipa::path(
    delete,
    tag = "aluno",
    path = "/alunos/{aluno_id}",
    params(("aluno_id" = i32, Path, description = "id of the aluno to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("aluno deleted successfully"),
        ),
        (status = NOT_FOUND, description = "aluno not found", body = SimpleError),
    ),
)]
pub async fn delete_aluno(
    Path(aluno_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    if repository::delete(&db, aluno_id).await? {
        Ok(Json(String::from("aluno deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
    }
}

/// Lists the presencas of a aluno, most recent first
#[utoipa::path(
    get,
    tag = "aluno",
    path = "/alunos/{aluno_id}/presencas",
    params(("aluno_id" = i32, Path, description = "id of the aluno")),
    responses(
        (
            status = OK,
            description = "presencas of the aluno",
            content_type = "application/json",
            body = Vec<entity::presenca::Model>,
        ),
        (status = NOT_FOUND, description = "aluno not found", body = SimpleError),
    ),
)]
pub async fn list_aluno_presencas(
    Path(aluno_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<presenca::Model>>, (StatusCode, SimpleError)> {
    repository::find_by_id(&db, aluno_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let presencas = repository::presencas_of_aluno(&db, aluno_id).await?;

    Ok(Json(presencas))
}
