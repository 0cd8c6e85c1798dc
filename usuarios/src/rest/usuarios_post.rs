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

//! API to create a new usuario.

use crate::driver::Driver;
use crate::model::{AuthorityName, Cpf, DataNascimento, Nome, UsuarioData};
use crate::rest::ENTITY_NAME;
use axum::extract::State;
use axum::http::{self, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use bdprojeto_core::rest::{entity_creation_alert, FailureAlert, RestError};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Reference to an existing authority.
#[derive(Deserialize)]
pub(crate) struct AuthorityRef {
    /// Name of the authority.
    name: AuthorityName,
}

/// Message sent to the server to create a usuario.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsuarioRequest {
    /// Identifier of the usuario, which must be absent or null because the server assigns it.
    /// Any other value is rejected, whatever its type.
    #[serde(default)]
    id: Option<serde_json::Value>,

    /// National identification number.
    cpf: Cpf,

    /// Display name.
    #[serde(default)]
    nome: Option<Nome>,

    /// Birth date.
    #[serde(default)]
    data_nascimento: Option<DataNascimento>,

    /// Authorities to grant to the new usuario.
    #[serde(default)]
    authorities: Vec<AuthorityRef>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<UsuarioRequest>,
) -> Result<impl IntoResponse, RestError> {
    let app_name = driver.opts().app_name.clone();

    if request.id.is_some() {
        return Err(RestError::BadRequestAlert(FailureAlert {
            app_name,
            entity_name: ENTITY_NAME,
            error_key: "idexists",
            message: "A new usuario cannot already have an ID".to_owned(),
        }));
    }

    let data = UsuarioData::new(request.cpf, request.nome, request.data_nascimento);
    let authorities =
        request.authorities.into_iter().map(|a| a.name).collect::<BTreeSet<AuthorityName>>();
    let (id, usuario) = driver.create_usuario(data, authorities).await?;

    let id = id.to_string();
    let mut headers = entity_creation_alert(&app_name, ENTITY_NAME, &id)?;
    let location = HeaderValue::try_from(format!("/api/usuarios/{}", id))
        .map_err(|e| RestError::InternalError(e.to_string()))?;
    headers.insert(http::header::LOCATION, location);

    Ok((http::StatusCode::CREATED, headers, Json(usuario)))
}
