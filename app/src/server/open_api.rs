use crate::modules::{
    aluno, common, horario, monitor, motorista, onibus, parada, presenca, relatorio, rota, viagem,
};
use crate::server::controller;
use axum::Router;
use utoipa::openapi::{InfoBuilder, OpenApiBuilder};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        entity::aluno::Model,
        entity::motorista::Model,
        entity::monitor::Model,
        entity::onibus::Model,
        entity::parada::Model,
        entity::rota::Model,
        entity::rota_parada::Model,
        entity::horario::Model,
        entity::viagem::Model,
        entity::presenca::Model,

        entity::enums::TipoParada,
        entity::enums::TipoHorario,
        entity::enums::StatusFuncionario,
        entity::enums::CargoFuncionario,

        common::dto::PaginatedAluno,
        common::dto::PaginatedMotorista,
        common::dto::PaginatedMonitor,
        common::dto::PaginatedHorario,

        common::responses::SimpleError,

        aluno::dto::CreateAlunoDto,
        aluno::dto::UpdateAlunoDto,

        motorista::dto::CreateMotoristaDto,
        motorista::dto::UpdateMotoristaDto,

        monitor::dto::CreateMonitorDto,
        monitor::dto::UpdateMonitorDto,

        onibus::dto::CreateOnibusDto,
        onibus::dto::UpdateOnibusDto,

        parada::dto::CreateParadaDto,
        parada::dto::UpdateParadaDto,

        rota::dto::CreateRotaDto,
        rota::dto::UpdateRotaDto,
        rota::dto::ParadaDaRotaDto,
        rota::dto::RotaParadaInputDto,

        horario::dto::CreateHorarioDto,
        horario::dto::UpdateHorarioDto,

        viagem::dto::CreateViagemDto,
        viagem::dto::UpdateViagemDto,

        presenca::dto::CreatePresencaDto,
        presenca::dto::UpdatePresencaDto,

        relatorio::dto::RelatorioFiltrosDto,
        relatorio::dto::FuncionarioRelatorioDto,
        relatorio::dto::ViagemRelatorioDto,
        relatorio::dto::RelatorioFuncionariosDto,
        relatorio::dto::RelatorioViagensDto,
        relatorio::dto::RotaOpcaoDto,
        relatorio::dto::FuncionarioOpcaoDto,
        relatorio::dto::OnibusOpcaoDto,
        relatorio::dto::HorarioOpcaoDto,
        relatorio::dto::OpcoesRelatorioDto,
    )),
    paths(
        controller::healthcheck,

        aluno::routes::list_alunos,
        aluno::routes::aluno_by_id,
        aluno::routes::create_aluno,
        aluno::routes::update_aluno,
        aluno::routes::delete_aluno,
        aluno::routes::list_aluno_presencas,

        motorista::routes::list_motoristas,
        motorista::routes::motorista_by_id,
        motorista::routes::create_motorista,
        motorista::routes::update_motorista,
        motorista::routes::delete_motorista,
        motorista::routes::list_motorista_viagens,

        monitor::routes::list_monitores,
        monitor::routes::monitor_by_id,
        monitor::routes::create_monitor,
        monitor::routes::update_monitor,
        monitor::routes::delete_monitor,
        monitor::routes::list_monitor_viagens,

        onibus::routes::list_onibus,
        onibus::routes::onibus_by_id,
        onibus::routes::create_onibus,
        onibus::routes::update_onibus,
        onibus::routes::delete_onibus,
        onibus::routes::list_onibus_viagens,

        parada::routes::list_paradas,
        parada::routes::parada_by_id,
        parada::routes::create_parada,
        parada::routes::update_parada,
        parada::routes::delete_parada,

        rota::routes::list_rotas,
        rota::routes::rota_by_id,
        rota::routes::create_rota,
        rota::routes::update_rota,
        rota::routes::delete_rota,
        rota::routes::list_rota_paradas,
        rota::routes::list_rota_viagens,

        horario::routes::list_horarios,
        horario::routes::horario_by_id,
        horario::routes::create_horario,
        horario::routes::update_horario,
        horario::routes::delete_horario,
        horario::routes::list_horario_viagens,

        viagem::routes::list_viagens,
        viagem::routes::viagem_by_id,
        viagem::routes::create_viagem,
        viagem::routes::update_viagem,
        viagem::routes::delete_viagem,

        presenca::routes::list_presencas,
        presenca::routes::create_presenca,
        presenca::routes::presenca_by_id,
        presenca::routes::update_presenca,
        presenca::routes::delete_presenca,
        presenca::routes::list_presencas_of_viagem,
        presenca::routes::list_presencas_of_aluno,

        relatorio::routes::relatorio_motoristas,
        relatorio::routes::relatorio_monitores,
        relatorio::routes::relatorio_viagens,
        relatorio::routes::relatorio_opcoes,
    ),
)]
struct ApiDoc;

pub fn create_openapi_router() -> Router<controller::AppState> {
    let builder: OpenApiBuilder = ApiDoc::openapi().into();

    let info = InfoBuilder::new()
        .title("Transporte Escolar API")
        .description(Some(
            "REST api for managing a school bus transportation operation.",
        ))
        .version("0.0.1")
        .build();

    let api_doc = builder.info(info).build();

    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/docs/openapi.json", api_doc))
        .merge(RapiDoc::new("/docs/openapi.json").path("/rapidoc"))
}
