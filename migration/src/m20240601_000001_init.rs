use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let statement = r#"
        create type "status_funcionario" as enum ('Ativo', 'Inativo', 'Ferias', 'Licenca');

        create type "cargo_funcionario" as enum ('Efetivo', 'ACT', 'Temporário');

        create type "tipo_parada" as enum ('Inicio', 'Intermediaria', 'Final');

        create type "tipo_horario" as enum ('Regular', 'Especial');

        create table "alunos" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "nome" varchar(255) not null,
            "descricao" text null,
            "data_nascimento" date not null,
            "responsavel" varchar(255) not null,
            "telefone_responsavel" varchar(20) not null,
            "endereco" text not null,
            "ponto_referencia" varchar(255) null,
            "status" boolean not null default true
        );

        create table "motoristas" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "nome" varchar(255) not null,
            "cpf" varchar(14) not null,
            "cnh" varchar(20) not null,
            "categoria_cnh" varchar(5) not null,
            "validade_cnh" date not null,
            "telefone" varchar(20) not null,
            "endereco" text not null,
            "data_contratacao" date not null,
            "status" status_funcionario not null default 'Ativo',
            "cargo" cargo_funcionario not null default 'Efetivo'
        );

        alter table
            "motoristas"
        add
            constraint "motoristas_cpf_unique" unique ("cpf");

        create table "monitores" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "nome" varchar(255) not null,
            "cpf" varchar(14) not null,
            "telefone" varchar(20) not null,
            "endereco" text not null,
            "data_contratacao" date not null,
            "status" status_funcionario not null default 'Ativo',
            "cargo" cargo_funcionario not null default 'Efetivo'
        );

        alter table
            "monitores"
        add
            constraint "monitores_cpf_unique" unique ("cpf");

        create table "onibus" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "placa" varchar(10) not null,
            "modelo" varchar(255) not null,
            "capacidade" int not null,
            "ano_fabricacao" smallint not null,
            "status" varchar(50) not null default 'Disponivel'
        );

        alter table
            "onibus"
        add
            constraint "onibus_placa_unique" unique ("placa");

        create table "paradas" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "nome" varchar(255) not null,
            "endereco" text not null,
            "ponto_referencia" varchar(255) null,
            "latitude" double precision null,
            "longitude" double precision null,
            "tipo" tipo_parada not null,
            "status" boolean not null default true
        );

        create table "rotas" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "nome" varchar(100) not null,
            "descricao" text null,
            "tipo" varchar(50) not null default 'Escolar',
            "origem" varchar(255) null,
            "destino" varchar(255) null,
            "horario_inicio" varchar(5) null,
            "horario_fim" varchar(5) null,
            "distancia_km" double precision null,
            "tempo_estimado_minutos" int null,
            "status" boolean not null default true
        );

        create table "horarios" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "rota_id" int not null,
            "nome" varchar(100) not null,
            "descricao" text null,
            "hora_inicio" varchar(5) not null,
            "hora_fim" varchar(5) not null,
            "dias_semana" json not null,
            "tipo" tipo_horario not null default 'Regular',
            "status" boolean not null default true
        );

        alter table
            "horarios"
        add
            constraint "horarios_rota_id_foreign" foreign key ("rota_id") references "rotas" ("id") on update cascade on delete cascade;

        create table "viagens" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "rota_id" int not null,
            "onibus_id" int not null,
            "motorista_id" int not null,
            "monitor_id" int null,
            "horario_id" int null,
            "data_viagem" date not null,
            "hora_saida_prevista" varchar(5) not null,
            "hora_chegada_prevista" varchar(5) null,
            "hora_saida_real" varchar(5) null,
            "hora_chegada_real" varchar(5) null,
            "observacoes" text null,
            "status" boolean not null default true
        );

        alter table
            "viagens"
        add
            constraint "viagens_rota_id_foreign" foreign key ("rota_id") references "rotas" ("id") on update cascade;

        alter table
            "viagens"
        add
            constraint "viagens_onibus_id_foreign" foreign key ("onibus_id") references "onibus" ("id") on update cascade;

        alter table
            "viagens"
        add
            constraint "viagens_motorista_id_foreign" foreign key ("motorista_id") references "motoristas" ("id") on update cascade on delete cascade;

        alter table
            "viagens"
        add
            constraint "viagens_monitor_id_foreign" foreign key ("monitor_id") references "monitores" ("id") on update cascade on delete
        set
            null;

        alter table
            "viagens"
        add
            constraint "viagens_horario_id_foreign" foreign key ("horario_id") references "horarios" ("id") on update cascade on delete
        set
            null;

        create table "presencas" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "viagem_id" int not null,
            "aluno_id" int not null,
            "presente" boolean not null,
            "hora_embarque" varchar(5) null,
            "observacoes" text null
        );

        alter table
            "presencas"
        add
            constraint "presencas_viagem_id_foreign" foreign key ("viagem_id") references "viagens" ("id") on update cascade on delete cascade;

        alter table
            "presencas"
        add
            constraint "presencas_aluno_id_foreign" foreign key ("aluno_id") references "alunos" ("id") on update cascade on delete cascade;

        create table "rota_parada" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "rota_id" int not null,
            "parada_id" int not null,
            "ordem" int not null,
            "horario_estimado" varchar(5) null
        );

        alter table
            "rota_parada"
        add
            constraint "rota_parada_rota_id_foreign" foreign key ("rota_id") references "rotas" ("id") on update cascade on delete cascade;

        alter table
            "rota_parada"
        add
            constraint "rota_parada_parada_id_foreign" foreign key ("parada_id") references "paradas" ("id") on update cascade on delete cascade;

        create table "rota_subrotas" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "rota_principal_id" int not null,
            "subrota_id" int not null,
            "ordem" int not null
        );

        alter table
            "rota_subrotas"
        add
            constraint "rota_subrotas_rota_principal_id_foreign" foreign key ("rota_principal_id") references "rotas" ("id") on update cascade on delete cascade;

        alter table
            "rota_subrotas"
        add
            constraint "rota_subrotas_subrota_id_foreign" foreign key ("subrota_id") references "rotas" ("id") on update cascade on delete cascade;
        "#;

        db.execute_unprepared(statement).await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Custom(String::from("cannot be reverted")))
    }
}
