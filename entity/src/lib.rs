pub mod aluno;
pub mod enums;
pub mod horario;
pub mod monitor;
pub mod motorista;
pub mod onibus;
pub mod parada;
pub mod presenca;
pub mod rota;
pub mod rota_parada;
pub mod viagem;
