use super::dto::{CreatePresencaDto, UpdatePresencaDto};
use super::repository::{self, PresencaOutcome};
use crate::{
    modules::{
        aluno,
        common::{
            extractors::{DbConnection, ValidatedJson},
            responses::SimpleError,
        },
        viagem,
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, get, post, put},
    Json, Router,
};
use entity::presenca;
use http::StatusCode;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_presencas))
        .route("/", post(create_presenca))
        .route("/:presenca_id", get(presenca_by_id))
        .route("/:presenca_id", put(update_presenca))
        .route("/:presenca_id", delete(delete_presenca))
        .route("/viagem/:viagem_id", get(list_presencas_of_viagem))
        .route("/aluno/:aluno_id", get(list_presencas_of_aluno))
}

fn outcome_to_response(
    outcome: PresencaOutcome,
) -> Result<Json<presenca::Model>, (StatusCode, SimpleError)> {
    match outcome {
        PresencaOutcome::Ok(model) => Ok(Json(model)),
        PresencaOutcome::NotFound => {
            Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
        }
        PresencaOutcome::ViagemNotFound => Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from("viagem not found"),
        )),
        PresencaOutcome::AlunoNotFound => Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from("aluno not found"),
        )),
    }
}

/// Lists every presenca, most recent first
#[utoipa::path(
    get,
    tag = "presenca",
    path = "/presencas",
    responses(
        (
            status = OK,
            description = "list of presencas",
            content_type = "application/json",
            body = Vec<entity::presenca::Model>,
        ),
    ),
)]
pub async fn list_presencas(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<presenca::Model>>, (StatusCode, SimpleError)> {
    Ok(Json(repository::find_all(&db).await?))
}

/// Registers the presenca of a aluno on a viagem
#[utoipa::path(
    post,
    tag = "presenca",
    path = "/presencas",
    request_body = CreatePresencaDto,
    responses(
        (
            status = OK,
            description = "the created presenca",
            content_type = "application/json",
            body = entity::presenca::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / viagem or aluno not found",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_presenca(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreatePresencaDto>,
) -> Result<Json<presenca::Model>, (StatusCode, SimpleError)> {
    outcome_to_response(repository::create(&db, dto).await?)
}

/// Get a presenca by ID
#[utoipa::path(
    get,
    tag = "presenca",
    path = "/presencas/{presenca_id}",
    params(("presenca_id" = i32, Path, description = "id of the presenca")),
    responses(
        (
            status = OK,
            description = "the presenca",
            content_type = "application/json",
            body = entity::presenca::Model,
        ),
        (status = NOT_FOUND, description = "presenca not found", body = SimpleError),
    ),
)]
pub async fn presenca_by_id(
    Path(presenca_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<presenca::Model>, (StatusCode, SimpleError)> {
    let presenca = repository::find_by_id(&db, presenca_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    Ok(Json(presenca))
}

/// Partially updates a presenca
#[utoipa::path(
    put,
    tag = "presenca",
    path = "/presencas/{presenca_id}",
    params(("presenca_id" = i32, Path, description = "id of the presenca to update")),
    request_body = UpdatePresencaDto,
    responses(
        (
            status = OK,
            description = "the updated presenca",
            content_type = "application/json",
            body = entity::presenca::Model,
        ),
        (status = NOT_FOUND, description = "presenca not found", body = SimpleError),
    ),
)]
pub async fn update_presenca(
    Path(presenca_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdatePresencaDto>,
) -> Result<Json<presenca::Model>, (StatusCode, SimpleError)> {
    outcome_to_response(repository::update(&db, presenca_id, dto).await?)
}

/// Deletes a presenca
#[utoipa::path(
    delete,
    tag = "presenca",
    path = "/presencas/{presenca_id}",
    params(("presenca_id" = i32, Path, description = "id of the presenca to delete")),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("presenca deleted successfully"),
        ),
        (status = NOT_FOUND, description = "presenca not found", body = SimpleError),
    ),
)]
pub async fn delete_presenca(
    Path(presenca_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<String>, (StatusCode, SimpleError)> {
    if repository::delete(&db, presenca_id).await? {
        Ok(Json(String::from("presenca deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))
    }
}

/// Lists the presencas registered for a viagem
#[utoipa::path(
    get,
    tag = "presenca",
    path = "/presencas/viagem/{viagem_id}",
    params(("viagem_id" = i32, Path, description = "id of the viagem")),
    responses(
        (
            status = OK,
            description = "presencas of the viagem",
            content_type = "application/json",
            body = Vec<entity::presenca::Model>,
        ),
        (status = NOT_FOUND, description = "viagem not found", body = SimpleError),
    ),
)]
pub async fn list_presencas_of_viagem(
    Path(viagem_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<presenca::Model>>, (StatusCode, SimpleError)> {
    viagem::repository::find_by_id(&db, viagem_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let presencas = viagem::repository::presencas_of_viagem(&db, viagem_id).await?;

    Ok(Json(presencas))
}

/// Lists the presencas of a aluno across viagens, most recent first
#[utoipa::path(
    get,
    tag = "presenca",
    path = "/presencas/aluno/{aluno_id}",
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
pub async fn list_presencas_of_aluno(
    Path(aluno_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<presenca::Model>>, (StatusCode, SimpleError)> {
    aluno::repository::find_by_id(&db, aluno_id)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::entity_not_found()))?;

    let presencas = aluno::repository::presencas_of_aluno(&db, aluno_id).await?;

    Ok(Json(presencas))
}
