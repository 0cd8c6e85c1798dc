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

//! Generic abstraction to access the supported database systems.
//!
//! PostgreSQL is the production backend.  SQLite exists so that unit tests can run against a real
//! SQL engine without any external setup.

use crate::model::ModelError;
use async_trait::async_trait;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Database errors.  Unexpected failures are reported as `BackendError`, but the conditions that
/// callers may want to react to have their own variants.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// Indicates that an insertion collided with an existing unique value.
    #[error("Already exists")]
    AlreadyExists,

    /// Catch-all error type for unexpected database errors.
    #[error("Database error: {0}")]
    BackendError(String),

    /// Indicates that data read back from the database does not pass model validation.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),

    /// Indicates that a requested entry does not exist.
    #[error("Entity not found")]
    NotFound,

    /// Indicates that the database cannot take more work right now, for example because all of
    /// its connection slots are in use.
    #[error("Unavailable")]
    Unavailable,
}

impl From<ModelError> for DbError {
    fn from(e: ModelError) -> Self {
        DbError::DataIntegrityError(e.to_string())
    }
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// Checks that a write statement touched exactly one row.
///
/// Zero rows means that the targeted entity does not exist.
pub fn ensure_one_row(rows_affected: u64) -> DbResult<()> {
    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        n => Err(DbError::BackendError(format!("Expected to affect one row but affected {}", n))),
    }
}

/// A database executor for any of the supported database systems.
///
/// sqlx needs to know the concrete database type of every query it runs, so users of this type
/// must destructure it and write one query per backend.
///
/// The executor may be backed by a connection taken from the pool or by an open transaction.
pub enum Executor {
    /// A PostgreSQL executor.
    #[cfg(feature = "postgres")]
    Postgres(postgres::PostgresExecutor),

    /// A SQLite executor.
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteExecutor),
}

/// An executor backed by an open transaction.
///
/// Dropping this without calling `commit` rolls the transaction back.
pub struct TxExecutor(Executor);

impl TxExecutor {
    /// Returns the executor wrapped by this transaction.
    ///
    /// This would be better called `executor` but it is used so often that the short name keeps
    /// call sites readable.
    pub fn ex(&mut self) -> &mut Executor {
        &mut self.0
    }

    /// Commits the transaction.
    pub async fn commit(self) -> DbResult<()> {
        match self.0 {
            #[cfg(feature = "postgres")]
            Executor::Postgres(e) => e.commit().await,

            #[cfg(feature = "sqlite")]
            Executor::Sqlite(e) => e.commit().await,
        }
    }
}

/// Abstraction over a database connection pool.
#[async_trait]
pub trait Db {
    /// Obtains an executor backed by a pooled connection, outside of any transaction.
    async fn ex(&self) -> DbResult<Executor>;

    /// Begins a transaction.
    ///
    /// The caller must call `commit` on the returned executor to persist its changes.
    async fn begin(&self) -> DbResult<TxExecutor>;

    /// Closes the pool, waiting for all connections to be returned.
    async fn close(&self);
}

/// Macros to instantiate the same tests against multiple database systems.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    pub use paste::paste;

    /// Instantiates the `module::name` test against the database returned by `setup`.
    ///
    /// The test function receives a `&dyn Db` and the database is closed once it returns.
    #[macro_export]
    macro_rules! generate_one_test [
        ( $name:ident, $setup:expr, $module:path $(, #[$extra:meta] )? ) => {
            #[tokio::test]
            $(#[$extra])?
            async fn $name() {
                let db = $setup;
                $crate::db::testutils::paste! {
                    $module :: [< $name >](&db).await;
                }
                $crate::db::Db::close(&db).await;
            }
        }
    ];

    pub use generate_one_test;

    /// Instantiates a collection of tests for a specific database system.
    ///
    /// `setup` must evaluate to an initialized database object.  The optional `extra` metadata
    /// is attached to every generated test, which is useful to `#[ignore]` expensive backends.
    #[macro_export]
    macro_rules! generate_tests [
        ( #[$extra:meta], $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module, #[$extra]);
            )+
        };

        ( $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module);
            )+
        };
    ];

    pub use generate_tests;
}

#[cfg(all(test, any(feature = "postgres", feature = "sqlite")))]
mod tests {
    use super::*;
    use sqlx::Row;

    /// Runs a `query` on `ex` and discards its results.  The `query` must be valid for all
    /// database implementations.
    async fn exec(ex: &mut Executor, query: &str) {
        match ex {
            #[cfg(feature = "postgres")]
            Executor::Postgres(ex) => {
                sqlx::query(query).execute(ex.conn()).await.unwrap();
            }

            #[cfg(feature = "sqlite")]
            Executor::Sqlite(ex) => {
                sqlx::query(query).execute(ex.conn()).await.unwrap();
            }
        }
    }

    /// Runs a `query` on `ex` that returns a single row and extracts the `i64` in `column`.  The
    /// `query` must be valid for all database implementations.
    async fn query_i64(ex: &mut Executor, column: &str, query: &str) -> i64 {
        match ex {
            #[cfg(feature = "postgres")]
            Executor::Postgres(ex) => {
                let row = sqlx::query(query).fetch_one(ex.conn()).await.unwrap();
                row.try_get(column).unwrap()
            }

            #[cfg(feature = "sqlite")]
            Executor::Sqlite(ex) => {
                let row = sqlx::query(query).fetch_one(ex.conn()).await.unwrap();
                row.try_get(column).unwrap()
            }
        }
    }

    /// Counts the rows in the `test` table.
    async fn count_rows(db: &dyn Db) -> i64 {
        query_i64(&mut db.ex().await.unwrap(), "count", "SELECT COUNT(*) AS count FROM test").await
    }

    pub(super) async fn test_direct_execution(db: &dyn Db) {
        exec(&mut db.ex().await.unwrap(), "CREATE TABLE test (i INTEGER)").await;
        exec(&mut db.ex().await.unwrap(), "INSERT INTO test (i) VALUES (3)").await;
        assert_eq!(1, count_rows(db).await);
    }

    pub(super) async fn test_tx_commit(db: &dyn Db) {
        exec(&mut db.ex().await.unwrap(), "CREATE TABLE test (i INTEGER)").await;

        let mut tx = db.begin().await.unwrap();
        exec(tx.ex(), "INSERT INTO test (i) VALUES (3)").await;
        exec(tx.ex(), "INSERT INTO test (i) VALUES (4)").await;
        tx.commit().await.unwrap();

        assert_eq!(2, count_rows(db).await);
    }

    pub(super) async fn test_tx_rollback_on_drop(db: &dyn Db) {
        exec(&mut db.ex().await.unwrap(), "CREATE TABLE test (i INTEGER)").await;

        {
            let mut tx = db.begin().await.unwrap();
            exec(tx.ex(), "INSERT INTO test (i) VALUES (3)").await;
        }

        assert_eq!(0, count_rows(db).await);
    }

    pub(super) async fn test_multiple_txs(db: &dyn Db) {
        let tx1 = db.begin().await.unwrap();
        let tx2 = db.begin().await.unwrap();
        tx1.commit().await.unwrap();
        tx2.commit().await.unwrap();
    }

    /// Instantiates tests that need more than one connection open at once.  These tests cannot
    /// write to the database.
    macro_rules! generate_db_ro_concurrent_tests [
        ( $setup:expr $(, #[$extra:meta])? ) => {
            $crate::db::testutils::generate_tests!(
                $( #[$extra], )?
                $setup,
                $crate::db::tests,
                test_multiple_txs
            );
        }
    ];

    pub(super) use generate_db_ro_concurrent_tests;

    /// Instantiates tests that need write access to the test database.
    macro_rules! generate_db_rw_tests [
        ( $setup:expr $(, #[$extra:meta])? ) => {
            $crate::db::testutils::generate_tests!(
                $( #[$extra], )?
                $setup,
                $crate::db::tests,
                test_direct_execution,
                test_tx_commit,
                test_tx_rollback_on_drop
            );
        }
    ];

    pub(super) use generate_db_rw_tests;

    #[test]
    fn test_ensure_one_row() {
        assert_eq!(Err(DbError::NotFound), ensure_one_row(0));
        assert_eq!(Ok(()), ensure_one_row(1));
        match ensure_one_row(2) {
            Err(DbError::BackendError(msg)) => assert!(msg.contains("affected 2")),
            e => panic!("Unexpected result: {:?}", e),
        }
    }
}
