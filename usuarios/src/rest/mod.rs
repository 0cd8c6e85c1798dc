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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::Router;

#[cfg(test)]
mod testutils;
mod usuario_authorities_get;
mod usuario_get;
mod usuarios_get;
mod usuarios_post;

/// Name of the entity exposed by this service, as reported in alerts.
const ENTITY_NAME: &str = "usuario";

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/api/usuarios", get(usuarios_get::handler).post(usuarios_post::handler))
        .route("/api/usuarios/:id", get(usuario_get::handler))
        .route("/api/usuarios/:id/authorities", get(usuario_authorities_get::handler))
        .with_state(driver)
}
