use super::dto::{CreateAlunoDto, UpdateAlunoDto};
use crate::database::{error::DbError, helpers::set_if_some};
use chrono::Utc;
use entity::{aluno, presenca};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub async fn find_by_id(
    db: &DatabaseConnection,
    aluno_id: i32,
) -> Result<Option<aluno::Model>, DbError> {
    Ok(aluno::Entity::find_by_id(aluno_id).one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    dto: CreateAlunoDto,
) -> Result<aluno::Model, DbError> {
    let status = dto.status.map(|s| s.as_bool()).unwrap_or(true);

    let created = aluno::ActiveModel {
        nome: Set(dto.nome),
        descricao: Set(dto.descricao),
        data_nascimento: Set(dto.data_nascimento),
        responsavel: Set(dto.responsavel),
        telefone_responsavel: Set(dto.telefone_responsavel),
        endereco: Set(dto.endereco),
        ponto_referencia: Set(dto.ponto_referencia),
        status: Set(status),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    aluno_id: i32,
    dto: UpdateAlunoDto,
) -> Result<Option<aluno::Model>, DbError> {
    let Some(found) = aluno::Entity::find_by_id(aluno_id).one(db).await? else {
        return Ok(None);
    };

    let mut v: aluno::ActiveModel = found.into();

    v.nome = set_if_some(dto.nome);
    v.descricao = set_if_some(dto.descricao);
    v.data_nascimento = set_if_some(dto.data_nascimento);
    v.responsavel = set_if_some(dto.responsavel);
    v.telefone_responsavel = set_if_some(dto.telefone_responsavel);
    v.endereco = set_if_some(dto.endereco);
    v.ponto_referencia = set_if_some(dto.ponto_referencia);

    if let Some(status) = dto.status {
        v.status = Set(status.as_bool());
    }

    v.updated_at = Set(Utc::now().into());

    Ok(Some(v.update(db).await?))
}

pub async fn delete(db: &DatabaseConnection, aluno_id: i32) -> Result<bool, DbError> {
    let res = aluno::Entity::delete_by_id(aluno_id).exec(db).await?;

    Ok(res.rows_affected > 0)
}

pub async fn presencas_of_aluno(
    db: &DatabaseConnection,
    aluno_id: i32,
) -> Result<Vec<presenca::Model>, DbError> {
    let presencas = presenca::Entity::find()
        .filter(presenca::Column::AlunoId.eq(aluno_id))
        .order_by_desc(presenca::Column::Id)
        .all(db)
        .await?;

    Ok(presencas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn aluno_fixture() -> aluno::Model {
        let ts = chrono::DateTime::parse_from_rfc3339("2024-06-01T08:00:00-03:00").unwrap();

        aluno::Model {
            id: 1,
            created_at: ts,
            updated_at: ts,
            nome: String::from("Ana Souza"),
            descricao: None,
            data_nascimento: NaiveDate::from_ymd_opt(2015, 3, 10).unwrap(),
            responsavel: String::from("Carla Souza"),
            telefone_responsavel: String::from("(48) 99999-0000"),
            endereco: String::from("Rua das Laranjeiras, 42"),
            ponto_referencia: None,
            status: true,
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_the_row_when_it_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![aluno_fixture()], vec![]])
            .into_connection();

        let found = find_by_id(&db, 1).await.unwrap();
        assert_eq!(found, Some(aluno_fixture()));

        let missing = find_by_id(&db, 2).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn update_on_a_missing_aluno_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<aluno::Model>::new()])
            .into_connection();

        let dto = UpdateAlunoDto::default();

        let updated = update(&db, 42, dto).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        assert!(delete(&db, 1).await.unwrap());
        assert!(!delete(&db, 2).await.unwrap());
    }
}
