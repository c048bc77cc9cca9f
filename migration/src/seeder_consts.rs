pub const NOMES: [&str; 20] = [
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Fábio", "Gabriela", "Heitor", "Isabela", "João",
    "Karina", "Lucas", "Mariana", "Nicolas", "Olívia", "Pedro", "Rafaela", "Sofia", "Thiago",
    "Valentina",
];

pub const SOBRENOMES: [&str; 12] = [
    "Silva", "Santos", "Oliveira", "Souza", "Pereira", "Costa", "Rodrigues", "Almeida", "Nunes",
    "Lima", "Carvalho", "Ribeiro",
];

pub const MODELOS_ONIBUS: [&str; 6] = [
    "Mercedes-Benz OF-1721",
    "Volkswagen Volksbus 15.190",
    "Iveco CityClass 70C17",
    "Marcopolo Volare V8L",
    "Mercedes-Benz LO-916",
    "Agrale MA 10.0",
];

pub const BAIRROS: [&str; 8] = [
    "Centro",
    "Jardim das Flores",
    "Vila Nova",
    "Santa Luzia",
    "Bela Vista",
    "São José",
    "Parque Industrial",
    "Morro Azul",
];

pub const CATEGORIAS_CNH: [&str; 3] = ["D", "E", "AD"];
