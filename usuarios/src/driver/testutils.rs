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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::{Driver, DriverOptions};
use crate::model::*;
use bdprojeto_core::db::{Db, Executor};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver using an in-memory database.
    pub(crate) async fn setup() -> Self {
        let db = Arc::from(bdprojeto_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone(), DriverOptions::default());
        Self { db, driver }
    }

    /// Obtains a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Returns a copy of the driver, which is consumed by every operation.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Persists a new usuario with `cpf` and `nome` directly in the database.
    pub(crate) async fn create_usuario(&self, cpf: i64, nome: Option<&'static str>) -> UsuarioId {
        let data = UsuarioData::new(Cpf::new(cpf).unwrap(), nome.map(Nome::from), None);
        let (id, _) = db::save_usuario(&mut self.ex().await, Usuario::new(data)).await.unwrap();
        id
    }
}
