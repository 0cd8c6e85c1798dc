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

//! Common utilities to interact with a PostgreSQL database.

use crate::db::{Db, DbError, DbResult, Executor, TxExecutor};
use crate::env::{get_optional_var, get_required_var};
use async_trait::async_trait;
use derivative::Derivative;
use futures::Future;
use log::warn;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions, Postgres};
use sqlx::Transaction;
use std::time::Duration;

/// Default value for the `max_retries` configuration property.
const DEFAULT_MAX_RETRIES: u16 = 60;

/// PostgreSQL error code reported when the server has no connection slots left.
const TOO_MANY_CONNECTIONS: &str = "53300";

/// Takes a raw SQLx error `e` and converts it to our generic error type.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    match e {
        sqlx::Error::ColumnDecode { source, .. } => DbError::DataIntegrityError(source.to_string()),
        sqlx::Error::Database(e) if e.is_foreign_key_violation() => DbError::NotFound,
        sqlx::Error::Database(e) if e.is_unique_violation() => DbError::AlreadyExists,
        sqlx::Error::Database(e) if e.code().as_deref() == Some(TOO_MANY_CONNECTIONS) => {
            DbError::Unavailable
        }
        sqlx::Error::PoolTimedOut => DbError::Unavailable,
        sqlx::Error::RowNotFound => DbError::NotFound,
        e => DbError::BackendError(e.to_string()),
    }
}

/// Options to establish a connection to a PostgreSQL database.
#[derive(Derivative)]
#[derivative(Debug, Default)]
#[cfg_attr(test, derivative(PartialEq))]
pub struct PostgresOptions {
    /// Host to connect to.
    pub host: String,

    /// Port to connect to (typically 5432).
    pub port: u16,

    /// Name of the database to use.
    pub database: String,

    /// Username to authenticate as.
    pub username: String,

    /// Password to authenticate with.
    #[derivative(Debug = "ignore")]
    pub password: String,

    /// Minimum number of connections to keep open in the pool.
    pub min_connections: Option<u32>,

    /// Maximum number of connections to open in the pool.
    pub max_connections: Option<u32>,

    /// Maximum number of times to retry acquiring a connection while the database reports being
    /// unavailable.
    pub max_retries: u16,
}

impl PostgresOptions {
    /// Reads the options from environment variables named after `prefix`.
    ///
    /// The required variables are `<prefix>_HOST`, `<prefix>_PORT`, `<prefix>_DATABASE`,
    /// `<prefix>_USERNAME` and `<prefix>_PASSWORD`.  `<prefix>_MIN_CONNECTIONS`,
    /// `<prefix>_MAX_CONNECTIONS` and `<prefix>_MAX_RETRIES` are optional.
    pub fn from_env(prefix: &str) -> Result<PostgresOptions, String> {
        Ok(PostgresOptions {
            host: get_required_var::<String>(prefix, "HOST")?,
            port: get_required_var::<u16>(prefix, "PORT")?,
            database: get_required_var::<String>(prefix, "DATABASE")?,
            username: get_required_var::<String>(prefix, "USERNAME")?,
            password: get_required_var::<String>(prefix, "PASSWORD")?,
            min_connections: get_optional_var::<u32>(prefix, "MIN_CONNECTIONS")?,
            max_connections: get_optional_var::<u32>(prefix, "MAX_CONNECTIONS")?,
            max_retries: get_optional_var::<u16>(prefix, "MAX_RETRIES")?
                .unwrap_or(DEFAULT_MAX_RETRIES),
        })
    }
}

/// An executor for PostgreSQL, backed either by a pooled connection or by a transaction.
#[derive(Debug)]
pub enum PostgresExecutor {
    /// An executor backed by a pooled connection.  Consecutive operations are not atomic.
    PoolExec(PoolConnection<Postgres>),

    /// An executor backed by a transaction.
    TxExec(Transaction<'static, Postgres>),
}

impl PostgresExecutor {
    /// Returns the connection to pass to `sqlx` query functions.
    pub fn conn(&mut self) -> &mut PgConnection {
        match self {
            PostgresExecutor::PoolExec(conn) => &mut **conn,
            PostgresExecutor::TxExec(tx) => &mut **tx,
        }
    }

    /// Commits the transaction backing this executor.
    ///
    /// Panics if the executor is not backed by a transaction.
    pub(super) async fn commit(self) -> DbResult<()> {
        match self {
            PostgresExecutor::PoolExec(_) => unreachable!("Do not call commit on direct executors"),
            PostgresExecutor::TxExec(tx) => tx.commit().await.map_err(map_sqlx_error),
        }
    }
}

/// Runs `op` until it succeeds, fails with an error other than `DbError::Unavailable`, or
/// exhausts `retries`.  Waits a randomized and growing delay between attempts.
async fn retry<Op, OpFut, T>(op: Op, mut retries: u16) -> DbResult<T>
where
    Op: Fn() -> OpFut,
    OpFut: Future<Output = Result<T, sqlx::Error>>,
{
    let mut delay = Duration::from_millis(100 + u64::from(rand::random::<u16>() % 900));
    loop {
        match op().await.map_err(map_sqlx_error) {
            Err(DbError::Unavailable) if retries > 0 => {
                retries -= 1;
                warn!(
                    "Database is unavailable; waiting {}ms before retrying with {} attempts left",
                    delay.as_millis(),
                    retries
                );
                tokio::time::sleep(delay).await;
                if delay < Duration::from_secs(5) {
                    delay += Duration::from_millis(u64::from(rand::random::<u16>() % 1000));
                }
            }
            result => return result,
        }
    }
}

/// A database backed by PostgreSQL.
pub struct PostgresDb {
    /// Connection pool shared by all executors handed out by this database.
    pool: PgPool,

    /// Maximum number of times to retry acquiring a connection.
    max_retries: u16,
}

impl Drop for PostgresDb {
    fn drop(&mut self) {
        if !self.pool.is_closed() {
            warn!("Dropping connection without having called close() first");
        }
    }
}

impl PostgresDb {
    /// Creates a connection pool based on a set of options.
    ///
    /// Connections are opened lazily, so this does not contact the server.
    pub fn connect(opts: PostgresOptions) -> DbResult<Self> {
        let mut pool_options = PgPoolOptions::new().acquire_timeout(Duration::from_secs(2));
        if let Some(min_connections) = opts.min_connections {
            pool_options = pool_options.min_connections(min_connections);
        }
        if let Some(max_connections) = opts.max_connections {
            pool_options = pool_options.max_connections(max_connections);
        }

        let options = PgConnectOptions::new()
            .host(&opts.host)
            .port(opts.port)
            .database(&opts.database)
            .username(&opts.username)
            .password(&opts.password);

        let pool = pool_options.connect_lazy_with(options);
        Ok(Self { pool, max_retries: opts.max_retries })
    }

    /// Returns an executor of the specific type used by this database.
    pub async fn typed_ex(&self) -> DbResult<PostgresExecutor> {
        let conn = retry(|| self.pool.acquire(), self.max_retries).await?;
        Ok(PostgresExecutor::PoolExec(conn))
    }
}

#[async_trait]
impl Db for PostgresDb {
    async fn ex(&self) -> DbResult<Executor> {
        Ok(Executor::Postgres(self.typed_ex().await?))
    }

    async fn begin(&self) -> DbResult<TxExecutor> {
        let tx = retry(|| self.pool.begin(), self.max_retries).await?;
        Ok(TxExecutor(Executor::Postgres(PostgresExecutor::TxExec(tx))))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Runs the possibly multi-statement `schema` script against `e`.
pub async fn run_schema(e: &mut PostgresExecutor, schema: &str) -> DbResult<()> {
    sqlx::raw_sql(schema).execute(e.conn()).await.map_err(map_sqlx_error)?;
    Ok(())
}

/// Test utilities for the PostgreSQL connection.
#[cfg(any(feature = "testutils", test))]
pub mod testutils {
    use super::*;

    /// Connects to the test database described by the `PGSQL_TEST_*` variables.
    ///
    /// The connection uses the `pg_temp` schema so that all tables created by a test vanish on
    /// disconnection.  For that to work the pool must hold exactly one connection.
    ///
    /// Given that this is for testing purposes only, any errors will panic.
    pub async fn setup() -> PostgresDb {
        let _can_fail = env_logger::builder().is_test(true).try_init();

        let mut opts = PostgresOptions::from_env("PGSQL_TEST").unwrap();
        opts.min_connections = Some(1);
        opts.max_connections = Some(1);
        let db = PostgresDb::connect(opts).unwrap();

        let mut ex = db.typed_ex().await.unwrap();
        sqlx::query("SET search_path TO pg_temp").execute(ex.conn()).await.unwrap();
        db
    }
}

#[cfg(test)]
mod tests {
    use super::testutils::*;
    use super::*;
    use crate::db::tests::{generate_db_ro_concurrent_tests, generate_db_rw_tests};

    generate_db_ro_concurrent_tests!(
        {
            let _can_fail = env_logger::builder().is_test(true).try_init();

            // The concurrent tests need at least two connections, which the single-connection
            // `setup()` cannot give.  Without `pg_temp` these tests must not write anything.
            PostgresDb::connect(PostgresOptions::from_env("PGSQL_TEST").unwrap()).unwrap()
        },
        #[ignore = "Requires environment configuration and is expensive"]
    );

    generate_db_rw_tests!(
        setup().await,
        #[ignore = "Requires environment configuration and is expensive"]
    );

    #[test]
    fn test_postgres_options_from_env_required_only() {
        temp_env::with_vars(
            [
                ("PGSQL_HOST", Some("the-host")),
                ("PGSQL_PORT", Some("1234")),
                ("PGSQL_DATABASE", Some("the-database")),
                ("PGSQL_USERNAME", Some("the-username")),
                ("PGSQL_PASSWORD", Some("the-password")),
                ("PGSQL_MIN_CONNECTIONS", None),
                ("PGSQL_MAX_CONNECTIONS", None),
                ("PGSQL_MAX_RETRIES", None),
            ],
            || {
                let opts = PostgresOptions::from_env("PGSQL").unwrap();
                assert_eq!(
                    PostgresOptions {
                        host: "the-host".to_owned(),
                        port: 1234,
                        database: "the-database".to_owned(),
                        username: "the-username".to_owned(),
                        password: "the-password".to_owned(),
                        min_connections: None,
                        max_connections: None,
                        max_retries: DEFAULT_MAX_RETRIES,
                    },
                    opts
                );
            },
        );
    }

    #[test]
    fn test_postgres_options_from_env_with_pool_settings() {
        temp_env::with_vars(
            [
                ("PGSQL_HOST", Some("the-host")),
                ("PGSQL_PORT", Some("1234")),
                ("PGSQL_DATABASE", Some("the-database")),
                ("PGSQL_USERNAME", Some("the-username")),
                ("PGSQL_PASSWORD", Some("the-password")),
                ("PGSQL_MIN_CONNECTIONS", Some("2")),
                ("PGSQL_MAX_CONNECTIONS", Some("8")),
                ("PGSQL_MAX_RETRIES", Some("3")),
            ],
            || {
                let opts = PostgresOptions::from_env("PGSQL").unwrap();
                assert_eq!(Some(2), opts.min_connections);
                assert_eq!(Some(8), opts.max_connections);
                assert_eq!(3, opts.max_retries);
            },
        );
    }

    #[test]
    fn test_postgres_options_from_env_missing() {
        let vars = ["HOST", "PORT", "DATABASE", "USERNAME", "PASSWORD"];
        for missing in vars {
            let overrides = vars.map(|var| {
                let value = if var == missing { None } else { Some("1") };
                (format!("MISSING_{}", var), value)
            });
            temp_env::with_vars(overrides, || {
                let err = PostgresOptions::from_env("MISSING").unwrap_err();
                assert!(err.contains(&format!("MISSING_{} not present", missing)));
            });
        }
    }

    #[test]
    fn test_postgres_options_bad_port() {
        temp_env::with_vars(
            [
                ("BAD_HOST", Some("the-host")),
                ("BAD_PORT", Some("not a number")),
                ("BAD_DATABASE", Some("the-database")),
                ("BAD_USERNAME", Some("the-username")),
                ("BAD_PASSWORD", Some("the-password")),
            ],
            || {
                let err = PostgresOptions::from_env("BAD").unwrap_err();
                assert!(err.contains("BAD_PORT"));
                assert!(err.contains("Invalid u16"));
            },
        );
    }
}
