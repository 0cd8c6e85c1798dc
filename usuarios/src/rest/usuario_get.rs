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

//! API to get one usuario.

use crate::driver::Driver;
use crate::model::UsuarioId;
use axum::extract::{Path, State};
use axum::http;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bdprojeto_core::driver::DriverError;
use bdprojeto_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i64>,
    _: EmptyBody,
) -> Result<Response, RestError> {
    // Non-positive identifiers never name a stored usuario.
    let Ok(id) = UsuarioId::new(id) else {
        return Ok(http::StatusCode::NOT_FOUND.into_response());
    };

    match driver.get_usuario(id).await {
        Ok(usuario) => Ok(Json(usuario).into_response()),
        Err(DriverError::NotFound(_)) => Ok(http::StatusCode::NOT_FOUND.into_response()),
        Err(e) => Err(e.into()),
    }
}
