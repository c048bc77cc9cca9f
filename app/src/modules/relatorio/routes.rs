use super::dto::{
    OpcoesRelatorioDto, RelatorioFiltrosDto, RelatorioFuncionariosDto, RelatorioViagensDto,
};
use super::repository;
use crate::{
    modules::common::{
        extractors::{DbConnection, ValidatedQuery},
        responses::SimpleError,
    },
    server::controller::AppState,
};
use axum::{routing::get, Json, Router};
use http::StatusCode;
use tracing::error;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/motoristas", get(relatorio_motoristas))
        .route("/monitores", get(relatorio_monitores))
        .route("/viagens", get(relatorio_viagens))
        .route("/opcoes", get(relatorio_opcoes))
}

fn gerado_em() -> String {
    chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Report over the motoristas and their trips
#[utoipa::path(
    get,
    tag = "relatorio",
    path = "/relatorios/motoristas",
    params(RelatorioFiltrosDto),
    responses(
        (
            status = OK,
            description = "the generated report",
            content_type = "application/json",
            body = RelatorioFuncionariosDto,
        ),
    ),
)]
pub async fn relatorio_motoristas(
    ValidatedQuery(filtros): ValidatedQuery<RelatorioFiltrosDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<RelatorioFuncionariosDto>, (StatusCode, SimpleError)> {
    let funcionarios = repository::relatorio_motoristas(&db, &filtros)
        .await
        .map_err(|e| {
            error!("[RELATORIO] failed to build motoristas report: {}", e.0);
            e
        })?;

    Ok(Json(RelatorioFuncionariosDto {
        gerado_em: gerado_em(),
        filtros,
        funcionarios,
    }))
}

/// Report over the monitores and their trips
#[utoipa::path(
    get,
    tag = "relatorio",
    path = "/relatorios/monitores",
    params(RelatorioFiltrosDto),
    responses(
        (
            status = OK,
            description = "the generated report",
            content_type = "application/json",
            body = RelatorioFuncionariosDto,
        ),
    ),
)]
pub async fn relatorio_monitores(
    ValidatedQuery(filtros): ValidatedQuery<RelatorioFiltrosDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<RelatorioFuncionariosDto>, (StatusCode, SimpleError)> {
    let funcionarios = repository::relatorio_monitores(&db, &filtros)
        .await
        .map_err(|e| {
            error!("[RELATORIO] failed to build monitores report: {}", e.0);
            e
        })?;

    Ok(Json(RelatorioFuncionariosDto {
        gerado_em: gerado_em(),
        filtros,
        funcionarios,
    }))
}

/// Report over the viagens with association names inlined
#[utoipa::path(
    get,
    tag = "relatorio",
    path = "/relatorios/viagens",
    params(RelatorioFiltrosDto),
    responses(
        (
            status = OK,
            description = "the generated report",
            content_type = "application/json",
            body = RelatorioViagensDto,
        ),
    ),
)]
pub async fn relatorio_viagens(
    ValidatedQuery(filtros): ValidatedQuery<RelatorioFiltrosDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<RelatorioViagensDto>, (StatusCode, SimpleError)> {
    let viagens = repository::relatorio_viagens(&db, &filtros)
        .await
        .map_err(|e| {
            error!("[RELATORIO] failed to build viagens report: {}", e.0);
            e
        })?;

    Ok(Json(RelatorioViagensDto {
        gerado_em: gerado_em(),
        filtros,
        viagens,
    }))
}

/// Lookup lists for the report filter forms
#[utoipa::path(
    get,
    tag = "relatorio",
    path = "/relatorios/opcoes",
    responses(
        (
            status = OK,
            description = "the filter options",
            content_type = "application/json",
            body = OpcoesRelatorioDto,
        ),
    ),
)]
pub async fn relatorio_opcoes(
    DbConnection(db): DbConnection,
) -> Result<Json<OpcoesRelatorioDto>, (StatusCode, SimpleError)> {
    let opcoes = repository::opcoes(&db).await.map_err(|e| {
        error!("[RELATORIO] failed to load report options: {}", e.0);
        e
    })?;

    Ok(Json(opcoes))
}
