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

//! API to get all usuarios.

use crate::driver::Driver;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use bdprojeto_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let usuarios = driver.get_usuarios().await?;

    Ok(Json(usuarios))
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use bdprojeto_core::rest::testutils::*;
    use serde_json::json;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api/usuarios".to_owned())
    }

    #[tokio::test]
    async fn test_empty() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(json!([]), response);
    }

    #[tokio::test]
    async fn test_some() {
        let context = TestContext::setup().await;

        context.create_usuario(333, Some("Third"), &["ROLE_USER"]).await;
        context.create_usuario(111, None, &[]).await;
        context.create_usuario(222, Some("Second"), &["ROLE_ADMIN", "ROLE_USER"]).await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        let exp_response = json!([
            {"id": 1, "cpf": 333, "nome": "Third"},
            {"id": 2, "cpf": 111},
            {"id": 3, "cpf": 222, "nome": "Second"},
        ]);
        assert_eq!(exp_response, response);
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
