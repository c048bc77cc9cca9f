use super::dto::{
    parse_bool_param, FuncionarioOpcaoDto, FuncionarioRelatorioDto, HorarioOpcaoDto,
    OnibusOpcaoDto, OpcoesRelatorioDto, RelatorioFiltrosDto, RotaOpcaoDto, ViagemRelatorioDto,
};
use crate::database::error::DbError;
use entity::enums::{CargoFuncionario, StatusFuncionario};
use entity::{horario, monitor, motorista, onibus, rota, viagem};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait,
};
use std::collections::HashMap;

const N_A: &str = "N/A";

/// how many recent trips feed the rota / horario samples of the
/// crew reports
const SAMPLE_TRIPS: u64 = 5;

async fn rota_names(db: &DatabaseConnection) -> Result<HashMap<i32, String>, DbError> {
    let rotas = rota::Entity::find().all(db).await?;

    Ok(rotas.into_iter().map(|r| (r.id, r.nome)).collect())
}

/// `Das HH:MM às HH:MM` labels by horario id
async fn horario_labels(db: &DatabaseConnection) -> Result<HashMap<i32, String>, DbError> {
    let horarios = horario::Entity::find().all(db).await?;

    Ok(horarios
        .into_iter()
        .map(|h| (h.id, format!("Das {} às {}", h.hora_inicio, h.hora_fim)))
        .collect())
}

fn push_distinct(labels: &mut Vec<String>, label: String) {
    if labels.len() < SAMPLE_TRIPS as usize && !labels.contains(&label) {
        labels.push(label);
    }
}

fn trip_filters_present(filtros: &RelatorioFiltrosDto) -> bool {
    filtros.data_inicio.is_some() || filtros.data_fim.is_some() || filtros.rota_id.is_some()
}

fn filtered_viagens_of(
    column: viagem::Column,
    id: i32,
    filtros: &RelatorioFiltrosDto,
) -> sea_orm::Select<viagem::Entity> {
    viagem::Entity::find()
        .filter(column.eq(id))
        .apply_if(filtros.data_inicio, |query, data| {
            query.filter(viagem::Column::DataViagem.gte(data))
        })
        .apply_if(filtros.data_fim, |query, data| {
            query.filter(viagem::Column::DataViagem.lte(data))
        })
        .apply_if(filtros.rota_id, |query, rota_id| {
            query.filter(viagem::Column::RotaId.eq(rota_id))
        })
}

/// Builds a crew report row: the trip count under the filters plus
/// rota and horario samples from the most recent trips
///
/// count and samples are computed independently, the samples come
/// from the most recent trips regardless of the filters, a glimpse
/// of recent activity and not a breakdown of the count
async fn funcionario_row(
    db: &DatabaseConnection,
    column: viagem::Column,
    id: i32,
    nome: String,
    cpf: String,
    cargo: CargoFuncionario,
    status: StatusFuncionario,
    filtros: &RelatorioFiltrosDto,
    rotas: &HashMap<i32, String>,
    horarios: &HashMap<i32, String>,
) -> Result<Option<FuncionarioRelatorioDto>, DbError> {
    let total_viagens = filtered_viagens_of(column, id, filtros).count(db).await?;

    // under trip level filters a funcionario with no matching trips
    // does not belong on the report
    if total_viagens == 0 && trip_filters_present(filtros) {
        return Ok(None);
    }

    let recentes = viagem::Entity::find()
        .filter(column.eq(id))
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .limit(SAMPLE_TRIPS)
        .all(db)
        .await?;

    let mut rota_labels = Vec::new();
    let mut horario_labels = Vec::new();

    for v in &recentes {
        if let Some(nome) = rotas.get(&v.rota_id) {
            push_distinct(&mut rota_labels, nome.clone());
        }

        if let Some(label) = v.horario_id.and_then(|id| horarios.get(&id)) {
            push_distinct(&mut horario_labels, label.clone());
        }
    }

    Ok(Some(FuncionarioRelatorioDto {
        id,
        nome,
        cpf,
        cargo: cargo.to_string(),
        status: status.to_string(),
        total_viagens,
        rotas: rota_labels,
        horarios: horario_labels,
    }))
}

pub async fn relatorio_motoristas(
    db: &DatabaseConnection,
    filtros: &RelatorioFiltrosDto,
) -> Result<Vec<FuncionarioRelatorioDto>, DbError> {
    let cargo = filtros.cargo.as_deref().and_then(CargoFuncionario::parse_exact);
    let status = filtros.status.as_deref().and_then(StatusFuncionario::parse_exact);

    let motoristas = motorista::Entity::find()
        .apply_if(cargo, |query, cargo| {
            query.filter(motorista::Column::Cargo.eq(cargo))
        })
        .apply_if(status, |query, status| {
            query.filter(motorista::Column::Status.eq(status))
        })
        .order_by_asc(motorista::Column::Nome)
        .all(db)
        .await?;

    let rotas = rota_names(db).await?;
    let horarios = horario_labels(db).await?;

    let mut rows = Vec::new();

    for m in motoristas {
        let row = funcionario_row(
            db,
            viagem::Column::MotoristaId,
            m.id,
            m.nome,
            m.cpf,
            m.cargo,
            m.status,
            filtros,
            &rotas,
            &horarios,
        )
        .await?;

        if let Some(row) = row {
            rows.push(row);
        }
    }

    Ok(rows)
}

pub async fn relatorio_monitores(
    db: &DatabaseConnection,
    filtros: &RelatorioFiltrosDto,
) -> Result<Vec<FuncionarioRelatorioDto>, DbError> {
    let cargo = filtros.cargo.as_deref().and_then(CargoFuncionario::parse_exact);
    let status = filtros.status.as_deref().and_then(StatusFuncionario::parse_exact);

    let monitores = monitor::Entity::find()
        .apply_if(cargo, |query, cargo| {
            query.filter(monitor::Column::Cargo.eq(cargo))
        })
        .apply_if(status, |query, status| {
            query.filter(monitor::Column::Status.eq(status))
        })
        .order_by_asc(monitor::Column::Nome)
        .all(db)
        .await?;

    let rotas = rota_names(db).await?;
    let horarios = horario_labels(db).await?;

    let mut rows = Vec::new();

    for m in monitores {
        let row = funcionario_row(
            db,
            viagem::Column::MonitorId,
            m.id,
            m.nome,
            m.cpf,
            m.cargo,
            m.status,
            filtros,
            &rotas,
            &horarios,
        )
        .await?;

        if let Some(row) = row {
            rows.push(row);
        }
    }

    Ok(rows)
}

pub async fn relatorio_viagens(
    db: &DatabaseConnection,
    filtros: &RelatorioFiltrosDto,
) -> Result<Vec<ViagemRelatorioDto>, DbError> {
    // an unrecognized status word silently ignores the filter
    let status = filtros.status.as_deref().and_then(parse_bool_param);

    let viagens = viagem::Entity::find()
        .apply_if(filtros.data_inicio, |query, data| {
            query.filter(viagem::Column::DataViagem.gte(data))
        })
        .apply_if(filtros.data_fim, |query, data| {
            query.filter(viagem::Column::DataViagem.lte(data))
        })
        .apply_if(filtros.rota_id, |query, rota_id| {
            query.filter(viagem::Column::RotaId.eq(rota_id))
        })
        .apply_if(filtros.motorista_id, |query, id| {
            query.filter(viagem::Column::MotoristaId.eq(id))
        })
        .apply_if(filtros.monitor_id, |query, id| {
            query.filter(viagem::Column::MonitorId.eq(id))
        })
        .apply_if(filtros.onibus_id, |query, id| {
            query.filter(viagem::Column::OnibusId.eq(id))
        })
        .apply_if(status, |query, status| {
            query.filter(viagem::Column::Status.eq(status))
        })
        .order_by_desc(viagem::Column::DataViagem)
        .order_by_asc(viagem::Column::HoraSaidaPrevista)
        .all(db)
        .await?;

    let rotas = rota_names(db).await?;
    let horarios = horario_labels(db).await?;

    let motoristas: HashMap<i32, String> = motorista::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, m.nome))
        .collect();

    let monitores: HashMap<i32, String> = monitor::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, m.nome))
        .collect();

    let frota: HashMap<i32, String> = onibus::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|o| (o.id, format!("{} ({})", o.placa, o.modelo)))
        .collect();

    let name_or_na = |map: &HashMap<i32, String>, id: i32| {
        map.get(&id).cloned().unwrap_or_else(|| String::from(N_A))
    };

    let rows = viagens
        .into_iter()
        .map(|v| ViagemRelatorioDto {
            id: v.id,
            data_viagem: v.data_viagem,
            hora_saida_prevista: v.hora_saida_prevista,
            rota: name_or_na(&rotas, v.rota_id),
            horario: v
                .horario_id
                .and_then(|id| horarios.get(&id).cloned())
                .unwrap_or_else(|| String::from(N_A)),
            motorista: name_or_na(&motoristas, v.motorista_id),
            monitor: v
                .monitor_id
                .and_then(|id| monitores.get(&id).cloned())
                .unwrap_or_else(|| String::from(N_A)),
            onibus: name_or_na(&frota, v.onibus_id),
            status: String::from(if v.status { "Ativa" } else { "Inativa" }),
        })
        .collect();

    Ok(rows)
}

/// Lookup lists for the report filter forms
pub async fn opcoes(db: &DatabaseConnection) -> Result<OpcoesRelatorioDto, DbError> {
    let rotas = rota::Entity::find()
        .filter(rota::Column::Status.eq(true))
        .order_by_asc(rota::Column::Nome)
        .all(db)
        .await?
        .into_iter()
        .map(|r| RotaOpcaoDto {
            id: r.id,
            nome: r.nome,
        })
        .collect();

    let motoristas = motorista::Entity::find()
        .order_by_asc(motorista::Column::Nome)
        .all(db)
        .await?
        .into_iter()
        .map(|m| FuncionarioOpcaoDto {
            id: m.id,
            nome: m.nome,
            cargo: m.cargo.to_string(),
        })
        .collect();

    let monitores = monitor::Entity::find()
        .order_by_asc(monitor::Column::Nome)
        .all(db)
        .await?
        .into_iter()
        .map(|m| FuncionarioOpcaoDto {
            id: m.id,
            nome: m.nome,
            cargo: m.cargo.to_string(),
        })
        .collect();

    let frota = onibus::Entity::find()
        .order_by_asc(onibus::Column::Placa)
        .all(db)
        .await?
        .into_iter()
        .map(|o| OnibusOpcaoDto {
            id: o.id,
            placa: o.placa,
            modelo: o.modelo,
        })
        .collect();

    let horarios = horario::Entity::find()
        .order_by_asc(horario::Column::HoraInicio)
        .all(db)
        .await?
        .into_iter()
        .map(|h| HorarioOpcaoDto {
            id: h.id,
            hora_inicio: h.hora_inicio,
            hora_fim: h.hora_fim,
        })
        .collect();

    Ok(OpcoesRelatorioDto {
        rotas,
        motoristas,
        monitores,
        onibus: frota,
        horarios,
        cargos: CargoFuncionario::to_string_vec(),
        status: StatusFuncionario::to_string_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    fn filtros_vazios() -> RelatorioFiltrosDto {
        RelatorioFiltrosDto {
            data_inicio: None,
            data_fim: None,
            rota_id: None,
            cargo: None,
            status: None,
            motorista_id: None,
            monitor_id: None,
            onibus_id: None,
        }
    }

    #[tokio::test]
    async fn funcionario_with_no_trips_is_skipped_under_trip_filters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .into_connection();

        let filtros = RelatorioFiltrosDto {
            rota_id: Some(7),
            ..filtros_vazios()
        };

        let row = funcionario_row(
            &db,
            viagem::Column::MotoristaId,
            1,
            String::from("Joana Lima"),
            String::from("111.222.333-44"),
            CargoFuncionario::Efetivo,
            StatusFuncionario::Ativo,
            &filtros,
            &HashMap::new(),
            &HashMap::new(),
        )
        .await
        .unwrap();

        assert!(row.is_none());
    }

    #[tokio::test]
    async fn trip_sample_ignores_the_report_filters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(1)]])
            .append_query_results([Vec::<viagem::Model>::new()])
            .into_connection();

        let filtros = RelatorioFiltrosDto {
            data_inicio: chrono::NaiveDate::from_ymd_opt(2024, 6, 1),
            ..filtros_vazios()
        };

        funcionario_row(
            &db,
            viagem::Column::MotoristaId,
            1,
            String::from("Joana Lima"),
            String::from("111.222.333-44"),
            CargoFuncionario::Efetivo,
            StatusFuncionario::Ativo,
            &filtros,
            &HashMap::new(),
            &HashMap::new(),
        )
        .await
        .unwrap();

        let log = db.into_transaction_log();

        // the count honors the date range, the recent trip sample does not
        let count_sql = format!("{:?}", log[0]);
        let sample_sql = format!("{:?}", log[1]);

        assert!(count_sql.contains(">="));
        assert!(!sample_sql.contains(">="));
    }

    #[tokio::test]
    async fn funcionario_with_no_trips_is_kept_without_trip_filters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .append_query_results([Vec::<viagem::Model>::new()])
            .into_connection();

        let row = funcionario_row(
            &db,
            viagem::Column::MonitorId,
            2,
            String::from("Joana Lima"),
            String::from("111.222.333-44"),
            CargoFuncionario::Act,
            StatusFuncionario::Ferias,
            &filtros_vazios(),
            &HashMap::new(),
            &HashMap::new(),
        )
        .await
        .unwrap()
        .expect("a funcionario without trips still belongs on the unfiltered report");

        assert_eq!(row.total_viagens, 0);
        assert_eq!(row.cargo, "ACT");
        assert_eq!(row.status, "Ferias");
        assert!(row.rotas.is_empty());
        assert!(row.horarios.is_empty());
    }
}
