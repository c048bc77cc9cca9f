use entity::enums::{CargoFuncionario, StatusFuncionario, TipoHorario, TipoParada};
use entity::{aluno, horario, monitor, motorista, onibus, parada, presenca, rota, rota_parada, viagem};
use fake::{faker, Fake};
use rand::{seq::SliceRandom, Rng};
use sea_orm_migration::sea_orm::{
    prelude::Date, ActiveModelTrait, DatabaseTransaction, DbErr, JsonValue, Set,
};

use crate::seeder_consts;

const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMERIC: &str = "0123456789";

fn fake_nome() -> String {
    let rng = &mut rand::thread_rng();

    format!(
        "{} {}",
        seeder_consts::NOMES.choose(rng).unwrap(),
        seeder_consts::SOBRENOMES.choose(rng).unwrap()
    )
}

fn fake_cpf() -> String {
    let d: String = fake::StringFaker::with(Vec::from(NUMERIC), 11).fake();

    format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
}

fn fake_telefone() -> String {
    let d: String = fake::StringFaker::with(Vec::from(NUMERIC), 8).fake();

    format!("(48) 9{}", d)
}

fn fake_endereco() -> String {
    let rng = &mut rand::thread_rng();

    format!(
        "Rua {}, {}, {}",
        seeder_consts::SOBRENOMES.choose(rng).unwrap(),
        rng.gen_range(1..999),
        seeder_consts::BAIRROS.choose(rng).unwrap()
    )
}

/// Creates a brazilian mercosul vehicle plate in the `AAA9A99` format
fn fake_placa() -> String {
    let a: String = fake::StringFaker::with(Vec::from(ALPHA), 3).fake();
    let n: String = fake::StringFaker::with(Vec::from(NUMERIC), 1).fake();
    let l: String = fake::StringFaker::with(Vec::from(ALPHA), 1).fake();
    let s: String = fake::StringFaker::with(Vec::from(NUMERIC), 2).fake();

    a + &n + &l + &s
}

/// Random zero padded `HH:MM` between 05:00 and 19:59
fn fake_hora() -> String {
    let rng = &mut rand::thread_rng();

    format!("{:02}:{:02}", rng.gen_range(5..20), rng.gen_range(0..60))
}

fn fake_data(start_year: i32, end_year: i32) -> Date {
    let rng = &mut rand::thread_rng();

    Date::from_ymd_opt(
        rng.gen_range(start_year..=end_year),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    )
    .unwrap()
}

fn fake_words(range: std::ops::Range<usize>) -> String {
    faker::lorem::en::Words(range)
        .fake::<Vec<String>>()
        .join(" ")
}

/// Creates a random boolean with a certain % of chance to be `true`
fn fake_bool_with_chance(chance_to_be_true: u8) -> bool {
    let n = rand::thread_rng().gen_range(0..100);

    n < chance_to_be_true
}

pub async fn aluno(db: &DatabaseTransaction) -> Result<aluno::Model, DbErr> {
    aluno::ActiveModel {
        nome: Set(fake_nome()),
        descricao: Set(Some(fake_words(2..6))),
        data_nascimento: Set(fake_data(2010, 2019)),
        responsavel: Set(fake_nome()),
        telefone_responsavel: Set(fake_telefone()),
        endereco: Set(fake_endereco()),
        ponto_referencia: Set(None),
        status: Set(fake_bool_with_chance(90)),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn motorista(db: &DatabaseTransaction) -> Result<motorista::Model, DbErr> {
    // rng values go into locals so nothing !Send lives across the insert
    let categoria_cnh = seeder_consts::CATEGORIAS_CNH
        .choose(&mut rand::thread_rng())
        .unwrap()
        .to_string();

    motorista::ActiveModel {
        nome: Set(fake_nome()),
        cpf: Set(fake_cpf()),
        cnh: Set(fake::StringFaker::with(Vec::from(NUMERIC), 11).fake()),
        categoria_cnh: Set(categoria_cnh),
        validade_cnh: Set(fake_data(2025, 2030)),
        telefone: Set(fake_telefone()),
        endereco: Set(fake_endereco()),
        data_contratacao: Set(fake_data(2015, 2024)),
        status: Set(StatusFuncionario::Ativo),
        cargo: Set(if fake_bool_with_chance(70) {
            CargoFuncionario::Efetivo
        } else {
            CargoFuncionario::Act
        }),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn monitor(db: &DatabaseTransaction) -> Result<monitor::Model, DbErr> {
    monitor::ActiveModel {
        nome: Set(fake_nome()),
        cpf: Set(fake_cpf()),
        telefone: Set(fake_telefone()),
        endereco: Set(fake_endereco()),
        data_contratacao: Set(fake_data(2018, 2024)),
        status: Set(StatusFuncionario::Ativo),
        cargo: Set(CargoFuncionario::Efetivo),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn onibus(db: &DatabaseTransaction) -> Result<onibus::Model, DbErr> {
    let (modelo, capacidade, ano_fabricacao) = {
        let rng = &mut rand::thread_rng();

        (
            seeder_consts::MODELOS_ONIBUS.choose(rng).unwrap().to_string(),
            rng.gen_range(20..50),
            rng.gen_range(2005..2024),
        )
    };

    onibus::ActiveModel {
        placa: Set(fake_placa()),
        modelo: Set(modelo),
        capacidade: Set(capacidade),
        ano_fabricacao: Set(ano_fabricacao),
        status: Set(String::from("Disponivel")),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn parada(db: &DatabaseTransaction, tipo: TipoParada) -> Result<parada::Model, DbErr> {
    let (bairro, latitude, longitude) = {
        let rng = &mut rand::thread_rng();

        (
            seeder_consts::BAIRROS.choose(rng).unwrap(),
            rng.gen_range(-27.70..-27.50),
            rng.gen_range(-48.60..-48.40),
        )
    };

    parada::ActiveModel {
        nome: Set(format!("Ponto {}", bairro)),
        endereco: Set(fake_endereco()),
        ponto_referencia: Set(None),
        latitude: Set(Some(latitude)),
        longitude: Set(Some(longitude)),
        tipo: Set(tipo),
        status: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn rota(db: &DatabaseTransaction, n: usize) -> Result<rota::Model, DbErr> {
    let (origem, distancia_km, tempo_estimado_minutos) = {
        let rng = &mut rand::thread_rng();

        (
            seeder_consts::BAIRROS.choose(rng).unwrap().to_string(),
            rng.gen_range(5.0..30.0),
            rng.gen_range(20..90),
        )
    };

    rota::ActiveModel {
        nome: Set(format!("Rota {}", n)),
        descricao: Set(Some(fake_words(3..8))),
        tipo: Set(String::from("Escolar")),
        origem: Set(Some(origem)),
        destino: Set(Some(String::from("Escola Municipal"))),
        horario_inicio: Set(Some(String::from("06:30"))),
        horario_fim: Set(Some(String::from("07:30"))),
        distancia_km: Set(Some(distancia_km)),
        tempo_estimado_minutos: Set(Some(tempo_estimado_minutos)),
        status: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn horario(db: &DatabaseTransaction, rota_id: i32) -> Result<horario::Model, DbErr> {
    horario::ActiveModel {
        rota_id: Set(rota_id),
        nome: Set(String::from("Turno da manhã")),
        descricao: Set(None),
        hora_inicio: Set(String::from("06:30")),
        hora_fim: Set(String::from("07:30")),
        dias_semana: Set(JsonValue::from(vec![1, 2, 3, 4, 5])),
        tipo: Set(TipoHorario::Regular),
        status: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn viagem(
    db: &DatabaseTransaction,
    rota_id: i32,
    onibus_id: i32,
    motorista_id: i32,
    monitor_id: Option<i32>,
    horario_id: Option<i32>,
) -> Result<viagem::Model, DbErr> {
    viagem::ActiveModel {
        rota_id: Set(rota_id),
        onibus_id: Set(onibus_id),
        motorista_id: Set(motorista_id),
        monitor_id: Set(monitor_id),
        horario_id: Set(horario_id),
        data_viagem: Set(fake_data(2024, 2024)),
        hora_saida_prevista: Set(String::from("06:30")),
        hora_chegada_prevista: Set(Some(String::from("07:30"))),
        hora_saida_real: Set(Some(fake_hora())),
        hora_chegada_real: Set(None),
        observacoes: Set(None),
        status: Set(fake_bool_with_chance(85)),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn presenca(
    db: &DatabaseTransaction,
    viagem_id: i32,
    aluno_id: i32,
) -> Result<presenca::Model, DbErr> {
    presenca::ActiveModel {
        viagem_id: Set(viagem_id),
        aluno_id: Set(aluno_id),
        presente: Set(fake_bool_with_chance(80)),
        hora_embarque: Set(Some(fake_hora())),
        observacoes: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Seeds a small but fully connected transport network: rotas with ordered
/// paradas and a horario each, viagens for those rotas and presencas for
/// the seeded alunos
pub async fn create_transport_network(db: &DatabaseTransaction) -> Result<(), DbErr> {
    let mut alunos = Vec::new();
    for _ in 0..15 {
        alunos.push(aluno(db).await?);
    }

    let mut motoristas = Vec::new();
    for _ in 0..6 {
        motoristas.push(motorista(db).await?);
    }

    let mut monitores = Vec::new();
    for _ in 0..4 {
        monitores.push(monitor(db).await?);
    }

    let mut frota = Vec::new();
    for _ in 0..5 {
        frota.push(onibus(db).await?);
    }

    for n in 1..=4 {
        let r = rota(db, n).await?;

        let inicio = parada(db, TipoParada::Inicio).await?;
        let meio = parada(db, TipoParada::Intermediaria).await?;
        let fim = parada(db, TipoParada::Final).await?;

        for (ordem, p) in [inicio, meio, fim].iter().enumerate() {
            rota_parada::ActiveModel {
                rota_id: Set(r.id),
                parada_id: Set(p.id),
                ordem: Set(ordem as i32 + 1),
                horario_estimado: Set(Some(format!("06:{:02}", 30 + ordem * 10))),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        let h = horario(db, r.id).await?;

        let rng_pick = |max: usize| rand::thread_rng().gen_range(0..max);

        for _ in 0..5 {
            let v = viagem(
                db,
                r.id,
                frota[rng_pick(frota.len())].id,
                motoristas[rng_pick(motoristas.len())].id,
                fake_bool_with_chance(60).then(|| monitores[rng_pick(monitores.len())].id),
                fake_bool_with_chance(75).then_some(h.id),
            )
            .await?;

            for a in alunos.iter().take(5) {
                presenca(db, v.id, a.id).await?;
            }
        }
    }

    Ok(())
}
