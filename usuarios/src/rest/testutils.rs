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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::{Driver, DriverOptions};
use crate::model::*;
use crate::rest::app;
use axum::Router;
use bdprojeto_core::db::Db;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Name of the application used by the tests, which shows up in the alert headers.
pub(crate) const TEST_APP_NAME: &str = "testApp";

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the app.
    db: Arc<dyn Db + Send + Sync>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app using an in-memory database.
    pub(crate) async fn setup() -> Self {
        let db = Arc::from(bdprojeto_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let opts = DriverOptions { app_name: TEST_APP_NAME.to_owned() };
        let driver = Driver::new(db.clone(), opts);
        let app = app(driver);
        Self { db, app }
    }

    /// Returns a copy of the app router to send a request to.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app router.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Persists a new usuario directly in the database and returns it.
    pub(crate) async fn create_usuario(
        &self,
        cpf: i64,
        nome: Option<&'static str>,
        authorities: &[&'static str],
    ) -> Usuario {
        let mut ex = self.db.ex().await.unwrap();
        let data = UsuarioData::new(Cpf::new(cpf).unwrap(), nome.map(Nome::from), None);
        let (id, usuario) = db::save_usuario(&mut ex, Usuario::new(data)).await.unwrap();
        let authorities =
            authorities.iter().map(|n| AuthorityName::from(*n)).collect::<BTreeSet<_>>();
        db::put_usuario_authorities(&mut ex, id, &authorities).await.unwrap();
        usuario
    }

    /// Gets all usuarios directly from the database.
    pub(crate) async fn get_usuarios(&self) -> Vec<Usuario> {
        db::get_usuarios(&mut self.db.ex().await.unwrap()).await.unwrap()
    }

    /// Gets the authorities of usuario `id` directly from the database.
    pub(crate) async fn get_usuario_authorities(&self, id: UsuarioId) -> BTreeSet<AuthorityName> {
        db::get_usuario_authorities(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }
}
