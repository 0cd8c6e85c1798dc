// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Database abstraction in terms of the operations needed by the service.

use crate::model::{AuthorityName, Cpf, DataNascimento, Nome, Usuario, UsuarioData, UsuarioId};
#[cfg(feature = "postgres")]
use bdprojeto_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use bdprojeto_core::db::sqlite;
use bdprojeto_core::db::{ensure_one_row, DbError, DbResult, Executor};
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::collections::BTreeSet;
use time::Date;


/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Builds a persisted usuario from the raw values of a row.
fn build_usuario(
    id: i64,
    cpf: i64,
    nome: Option<String>,
    data_nascimento: Option<Date>,
) -> DbResult<Usuario> {
    let data = UsuarioData::new(
        Cpf::new(cpf)?,
        nome.map(Nome::new).transpose()?,
        data_nascimento.map(DataNascimento::new),
    );
    Ok(Usuario::saved(UsuarioId::new(id)?, data))
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Usuario {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let cpf: i64 = row.try_get("cpf").map_err(postgres::map_sqlx_error)?;
        let nome: Option<String> = row.try_get("nome").map_err(postgres::map_sqlx_error)?;
        let data_nascimento: Option<Date> =
            row.try_get("data_nascimento").map_err(postgres::map_sqlx_error)?;

        build_usuario(id, cpf, nome, data_nascimento)
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Usuario {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let cpf: i64 = row.try_get("cpf").map_err(sqlite::map_sqlx_error)?;
        let nome: Option<String> = row.try_get("nome").map_err(sqlite::map_sqlx_error)?;
        let data_nascimento: Option<Date> =
            row.try_get("data_nascimento").map_err(sqlite::map_sqlx_error)?;

        build_usuario(id, cpf, nome, data_nascimento)
    }
}

/// Persists `usuario`.
///
/// Usuarios that have not been persisted yet are inserted and get a new identifier.  Usuarios
/// that have already been persisted have their row updated, which fails with `NotFound` if the
/// row does not exist.  Returns the identifier and the persisted usuario in both cases.
pub async fn save_usuario(ex: &mut Executor, usuario: Usuario) -> DbResult<(UsuarioId, Usuario)> {
    match usuario {
        Usuario::Unsaved(data) => {
            let id = UsuarioId::new(insert_usuario(ex, &data).await?)?;
            Ok((id, Usuario::saved(id, data)))
        }
        Usuario::Saved { id, data } => {
            update_usuario(ex, id, &data).await?;
            Ok((id, Usuario::saved(id, data)))
        }
    }
}

/// Inserts a new row for `data` and returns the identifier assigned to it.
async fn insert_usuario(ex: &mut Executor, data: &UsuarioData) -> DbResult<i64> {
    let nome = data.nome().as_ref().map(Nome::as_str);
    let data_nascimento = data.data_nascimento().as_ref().map(DataNascimento::as_date);

    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO usuario (cpf, nome, data_nascimento)
                VALUES ($1, $2, $3)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(data.cpf().as_i64())
                .bind(nome)
                .bind(data_nascimento)
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("id").map_err(postgres::map_sqlx_error)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO usuario (cpf, nome, data_nascimento)
                VALUES (?, ?, ?)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(data.cpf().as_i64())
                .bind(nome)
                .bind(data_nascimento)
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("id").map_err(sqlite::map_sqlx_error)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Updates the row of the usuario identified by `id` with `data`.
async fn update_usuario(ex: &mut Executor, id: UsuarioId, data: &UsuarioData) -> DbResult<()> {
    let nome = data.nome().as_ref().map(Nome::as_str);
    let data_nascimento = data.data_nascimento().as_ref().map(DataNascimento::as_date);

    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                UPDATE usuario
                SET cpf = $1, nome = $2, data_nascimento = $3
                WHERE id = $4";
            let done = sqlx::query(query_str)
                .bind(data.cpf().as_i64())
                .bind(nome)
                .bind(data_nascimento)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE usuario
                SET cpf = ?, nome = ?, data_nascimento = ?
                WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(data.cpf().as_i64())
                .bind(nome)
                .bind(data_nascimento)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    ensure_one_row(rows_affected)
}

/// Gets all persisted usuarios in the order in which they were created.
pub async fn get_usuarios(ex: &mut Executor) -> DbResult<Vec<Usuario>> {
    let query_str = "SELECT * FROM usuario ORDER BY id";
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let rows = sqlx::query(query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Usuario::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let rows =
                sqlx::query(query_str).fetch_all(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Usuario::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the usuario identified by `id`, or `None` if it does not exist.
pub async fn find_usuario_by_id(ex: &mut Executor, id: UsuarioId) -> DbResult<Option<Usuario>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM usuario WHERE id = $1";
            let raw = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_optional(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            raw.map(Usuario::try_from).transpose()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM usuario WHERE id = ?";
            let raw = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_optional(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            raw.map(Usuario::try_from).transpose()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Looks up the authority called `name` in the store of known authorities.
///
/// Fails with `NotFound` if there is no such authority.
pub async fn get_authority(ex: &mut Executor, name: &AuthorityName) -> DbResult<AuthorityName> {
    let raw: String = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT name FROM authority WHERE name = $1";
            let row = sqlx::query(query_str)
                .bind(name.as_str())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("name").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT name FROM authority WHERE name = ?";
            let row = sqlx::query(query_str)
                .bind(name.as_str())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("name").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(AuthorityName::new(raw)?)
}

/// Gets the names of all known authorities.
#[cfg(test)]
pub async fn get_authorities(ex: &mut Executor) -> DbResult<BTreeSet<AuthorityName>> {
    let query_str = "SELECT name FROM authority";
    let raws: Vec<String> = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => sqlx::query_scalar(query_str)
            .fetch_all(ex.conn())
            .await
            .map_err(postgres::map_sqlx_error)?,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlx::query_scalar(query_str)
            .fetch_all(ex.conn())
            .await
            .map_err(sqlite::map_sqlx_error)?,

        #[allow(unused)]
        _ => unreachable!(),
    };

    let mut names = BTreeSet::default();
    for raw in raws {
        names.insert(AuthorityName::new(raw)?);
    }
    Ok(names)
}

/// Grants the authorities in `names` to the usuario identified by `id`.
///
/// Fails with `NotFound` if the usuario or any of the authorities do not exist, and with
/// `AlreadyExists` if the usuario already had any of the authorities.
pub async fn put_usuario_authorities(
    ex: &mut Executor,
    id: UsuarioId,
    names: &BTreeSet<AuthorityName>,
) -> DbResult<()> {
    for name in names {
        let rows_affected = match ex {
            #[cfg(feature = "postgres")]
            Executor::Postgres(ex) => {
                let query_str =
                    "INSERT INTO usuario_authority (usuario_id, authority_name) VALUES ($1, $2)";
                let done = sqlx::query(query_str)
                    .bind(id.as_i64())
                    .bind(name.as_str())
                    .execute(ex.conn())
                    .await
                    .map_err(postgres::map_sqlx_error)?;
                done.rows_affected()
            }

            #[cfg(any(feature = "sqlite", test))]
            Executor::Sqlite(ex) => {
                let query_str =
                    "INSERT INTO usuario_authority (usuario_id, authority_name) VALUES (?, ?)";
                let done = sqlx::query(query_str)
                    .bind(id.as_i64())
                    .bind(name.as_str())
                    .execute(ex.conn())
                    .await
                    .map_err(sqlite::map_sqlx_error)?;
                done.rows_affected()
            }

            #[allow(unused)]
            _ => unreachable!(),
        };
        ensure_one_row(rows_affected)?;
    }
    Ok(())
}

/// Gets the names of the authorities granted to the usuario identified by `id`.
///
/// This does not check whether the usuario exists: unknown usuarios have no authorities.
pub async fn get_usuario_authorities(
    ex: &mut Executor,
    id: UsuarioId,
) -> DbResult<BTreeSet<AuthorityName>> {
    let raws: Vec<String> = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT authority_name FROM usuario_authority WHERE usuario_id = $1";
            sqlx::query_scalar(query_str)
                .bind(id.as_i64())
                .fetch_all(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT authority_name FROM usuario_authority WHERE usuario_id = ?";
            sqlx::query_scalar(query_str)
                .bind(id.as_i64())
                .fetch_all(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    let mut names = BTreeSet::default();
    for raw in raws {
        names.insert(AuthorityName::new(raw)?);
    }
    Ok(names)
}
