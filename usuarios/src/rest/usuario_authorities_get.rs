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

//! API to get the authorities granted to one usuario.

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

    match driver.get_usuario_authorities(id).await {
        Ok(authorities) => Ok(Json(authorities).into_response()),
        Err(DriverError::NotFound(_)) => Ok(http::StatusCode::NOT_FOUND.into_response()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use bdprojeto_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/api/usuarios/{}/authorities", id))
    }

    #[tokio::test]
    async fn test_ok_sorted() {
        let context = TestContext::setup().await;

        context.create_usuario(111, None, &["ROLE_USER", "ROLE_ADMIN"]).await;

        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_json::<Vec<String>>()
            .await;
        assert_eq!(vec!["ROLE_ADMIN".to_owned(), "ROLE_USER".to_owned()], response);
    }

    #[tokio::test]
    async fn test_ok_empty() {
        let context = TestContext::setup().await;

        context.create_usuario(111, None, &[]).await;

        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_json::<Vec<String>>()
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_empty()
            .await;
    }

    #[tokio::test]
    async fn test_impossible_id_not_found() {
        let context = TestContext::setup().await;

        context.create_usuario(111, None, &["ROLE_USER"]).await;

        for id in ["0", "-1"] {
            OneShotBuilder::new(context.app(), route(id))
                .send_empty()
                .await
                .expect_status(http::StatusCode::NOT_FOUND)
                .expect_empty()
                .await;
        }
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("abc"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_text("Invalid URL")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1"));
}
