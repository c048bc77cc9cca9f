pub mod aluno;
pub mod common;
pub mod horario;
pub mod monitor;
pub mod motorista;
pub mod onibus;
pub mod parada;
pub mod presenca;
pub mod relatorio;
pub mod rota;
pub mod viagem;
