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

//! Generic code for REST handlers.
//!
//! All services should implement an `app` function in their `rest` module that returns the
//! `Router` for the application.
//!
//! Every API lives in its own `.rs` file named `<entity>_<method>.rs`, so that the integration
//! tests of an API sit right next to it.  The `tests` module of each API defines a `route` function
//! returning the HTTP method and path under test, and all tests in that module go through it.
//!
//! Services should also provide a `TestContext` in a `testutils` module that sets up the app and
//! gives tests direct access to the database with simplified types.

use crate::driver::DriverError;
use crate::model::ModelError;
use async_trait::async_trait;
use axum::body::HttpBody;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

mod alerts;
pub use alerts::{entity_creation_alert, failure_alert, FailureAlert};

/// Frontend errors.  These are the errors that are visible to the user on failed requests.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RestError {
    /// Indicates an invalid request about a specific entity, with details for the client to show.
    #[error("{}", .0.message)]
    BadRequestAlert(FailureAlert),

    /// Catch-all error type for all unexpected errors.
    #[error("{0}")]
    InternalError(String),

    /// Indicates an error in the contents of the request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Indicates that a requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Indicates that a request that should have empty content did not.
    #[error("Content should be empty")]
    PayloadNotEmpty,
}

impl From<DriverError> for RestError {
    fn from(e: DriverError) -> Self {
        match e {
            DriverError::AlreadyExists(_) => RestError::InvalidRequest(e.to_string()),
            DriverError::BackendError(_) => RestError::InternalError(e.to_string()),
            DriverError::InvalidInput(_) => RestError::InvalidRequest(e.to_string()),
            DriverError::NotFound(_) => RestError::NotFound(e.to_string()),
        }
    }
}

impl From<ModelError> for RestError {
    fn from(e: ModelError) -> Self {
        RestError::InvalidRequest(e.to_string())
    }
}

impl From<serde_json::Error> for RestError {
    fn from(e: serde_json::Error) -> Self {
        RestError::InvalidRequest(e.to_string())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> axum::response::Response {
        let mut headers = HeaderMap::new();
        let mut response = ErrorResponse { message: self.to_string(), ..Default::default() };
        let status = match self {
            RestError::BadRequestAlert(alert) => {
                // The body already describes the failure, so losing the headers is acceptable.
                if let Ok(alert_headers) = failure_alert(&alert) {
                    headers.extend(alert_headers);
                }
                response.entity_name = Some(alert.entity_name.to_owned());
                response.error_key = Some(alert.error_key.to_owned());
                http::StatusCode::BAD_REQUEST
            }
            RestError::InternalError(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
            RestError::InvalidRequest(_) => http::StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => http::StatusCode::NOT_FOUND,
            RestError::PayloadNotEmpty => http::StatusCode::PAYLOAD_TOO_LARGE,
        };

        (status, headers, Json(response)).into_response()
    }
}

/// Result type for this module.
pub type RestResult<T> = Result<T, RestError>;

/// Representation of the details of an error response.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    /// Textual representation of the error message.
    pub(crate) message: String,

    /// Name of the entity the failed request was about, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) entity_name: Option<String>,

    /// Machine-readable key identifying the failure, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) error_key: Option<String>,
}

/// A request body extractor that forbids any content.
///
/// APIs that don't expect a body should use this so that clients can't send data that would be
/// silently ignored.
pub struct EmptyBody {}

#[async_trait]
impl<S> FromRequest<S> for EmptyBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        if req.into_body().is_end_stream() {
            Ok(EmptyBody {})
        } else {
            Err(RestError::PayloadNotEmpty)
        }
    }
}

/// Common test code for the REST server.
#[cfg(feature = "testutils")]
pub mod testutils {
    use super::*;
    use axum::http::{self, HeaderName, HeaderValue};
    use axum::Router;
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    /// Maximum body size for testing purposes.
    const MAX_BODY_SIZE: usize = 64 * 1024;

    /// Builder for a single request to the API server.
    #[must_use]
    pub struct OneShotBuilder {
        /// The router for the app being tested.
        app: Router,

        /// Builder for the request that will be sent to the app.
        builder: http::request::Builder,
    }

    impl OneShotBuilder {
        /// Creates a new request against a given `method`/`uri` pair served by an `app` router.
        pub fn new<U: AsRef<str>>(app: Router, (method, uri): (http::Method, U)) -> Self {
            let builder = Request::builder().method(method).uri(uri.as_ref());
            Self { app, builder }
        }

        /// Sets the header `name` to `value` in the outgoing request.
        pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
        where
            HeaderName: TryFrom<K>,
            <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
            HeaderValue: TryFrom<V>,
            <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
        {
            self.builder = self.builder.header(name, value);
            self
        }

        /// Sends `request` through the app.
        async fn send(self, request: Request) -> ResponseChecker {
            ResponseChecker::from(self.app.oneshot(request).await.unwrap())
        }

        /// Finishes building the request and sends it with an empty payload.
        pub async fn send_empty(self) -> ResponseChecker {
            let request = self.builder.body(axum::body::Body::empty()).unwrap();
            ResponseChecker::from(self.app.oneshot(request).await.unwrap())
        }

        /// Finishes building the request and sends it with a text payload.
        pub async fn send_text<T: Into<String>>(mut self, text: T) -> ResponseChecker {
            let builder = std::mem::take(&mut self.builder);
            let request = builder
                .header(http::header::CONTENT_TYPE, mime::TEXT_PLAIN.as_ref())
                .body(axum::body::Body::from(text.into()))
                .unwrap();
            self.send(request).await
        }

        /// Finishes building the request and sends it with a JSON payload.
        pub async fn send_json<T: Serialize>(mut self, request: T) -> ResponseChecker {
            let builder = std::mem::take(&mut self.builder);
            let request = builder
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(axum::body::Body::from(serde_json::to_vec(&request).unwrap()))
                .unwrap();
            self.send(request).await
        }
    }

    /// Type alias for the response type returned by the `oneshot` function.
    type HttpResponse = axum::response::Response;

    /// Validator for the outcome of a request sent by a `OneShotBuilder`.
    #[must_use]
    pub struct ResponseChecker {
        /// Actual response that we received from the app.
        response: HttpResponse,

        /// Expected HTTP status code in the response above.
        exp_status: http::StatusCode,

        /// Headers that must be present in the response with the given values.
        exp_headers: Vec<(String, String)>,
    }

    impl From<HttpResponse> for ResponseChecker {
        fn from(response: HttpResponse) -> Self {
            Self { response, exp_status: http::StatusCode::OK, exp_headers: vec![] }
        }
    }

    impl ResponseChecker {
        /// Sets the expected exit HTTP status to `status`.
        pub fn expect_status(mut self, status: http::StatusCode) -> Self {
            self.exp_status = status;
            self
        }

        /// Requires the header `name` to be present in the response with `value`.
        pub fn expect_header<N, V>(mut self, name: N, value: V) -> Self
        where
            N: Into<String>,
            V: Into<String>,
        {
            self.exp_headers.push((name.into(), value.into()));
            self
        }

        /// Performs common validation operations on the response.
        pub fn verify(&self) {
            assert_eq!(self.exp_status, self.response.status());
            for (name, exp_value) in &self.exp_headers {
                let value = match self.response.headers().get(name.as_str()) {
                    Some(value) => value.to_str().unwrap(),
                    None => panic!("Header {} not in response", name),
                };
                assert_eq!(exp_value, value, "Unexpected value for header {}", name);
            }
        }

        /// Reads the whole body of the response.
        async fn body(self) -> Vec<u8> {
            axum::body::to_bytes(self.response.into_body(), MAX_BODY_SIZE).await.unwrap().to_vec()
        }

        /// Reads the error response in the body.
        async fn error_response(self) -> ErrorResponse {
            let body = self.body().await;
            match serde_json::from_slice(&body) {
                Ok(response) => response,
                Err(e) => {
                    let body = String::from_utf8(body).unwrap();
                    panic!("Invalid error response due to {}; content was {}", e, body);
                }
            }
        }

        /// Finishes checking the response and expects it to contain an empty body.
        pub async fn expect_empty(self) {
            self.verify();

            let body = String::from_utf8(self.body().await).unwrap();
            assert!(body.is_empty(), "Body not empty; got {}", body);
        }

        /// Finishes checking the response and expects its body to be an `ErrorResponse` that
        /// matches `exp_re`.
        pub async fn expect_error(self, exp_re: &str) {
            self.verify();

            let response = self.error_response().await;
            let re = regex::Regex::new(exp_re).unwrap();
            assert!(
                re.is_match(&response.message),
                "Response content '{:?}' does not match re '{}'",
                response,
                exp_re
            );
        }

        /// Finishes checking the response and expects its body to be an `ErrorResponse` carrying
        /// an alert for `exp_entity_name` with `exp_error_key`.
        pub async fn expect_alert(self, exp_entity_name: &str, exp_error_key: &str) {
            self.verify();

            let response = self.error_response().await;
            assert_eq!(Some(exp_entity_name), response.entity_name.as_deref());
            assert_eq!(Some(exp_error_key), response.error_key.as_deref());
        }

        /// Finishes checking the response and expects it to contain a valid JSON object of
        /// type `T`.
        pub async fn expect_json<T: DeserializeOwned>(self) -> T {
            self.verify();

            serde_json::from_slice::<T>(&self.body().await).unwrap()
        }

        /// Finishes checking the response and expects its body to be valid UTF-8 and to match
        /// `exp_re`.
        pub async fn expect_text(self, exp_re: &str) {
            assert!(!exp_re.is_empty(), "Use expect_empty to validate empty responses");

            self.verify();

            let body = String::from_utf8(self.body().await).unwrap();
            assert!(
                !body.contains("\"message\":"),
                "Use expect_error to validate errors wrapped in an ErrorResponse"
            );
            let re = regex::Regex::new(exp_re).unwrap();
            assert!(re.is_match(&body), "Body content '{}' does not match re '{}'", body, exp_re);
        }

        /// Finishes checking the response and returns the response itself for out of band
        /// validation of properties not supported by the `ResponseChecker`.
        pub async fn take_response(self) -> HttpResponse {
            self.verify();

            self.response
        }
    }

    /// Generates a test to verify that an API that expects JSON fails when it gets something else.
    #[macro_export]
    macro_rules! test_payload_must_be_json {
        ( $app:expr, $route:expr ) => {
            #[tokio::test]
            async fn test_payload_must_be_json() {
                $crate::rest::testutils::OneShotBuilder::new($app, $route)
                    .send_text("this is not json")
                    .await
                    .expect_status(axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE)
                    .expect_text("Content-Type")
                    .await;

                $crate::rest::testutils::OneShotBuilder::new($app, $route)
                    .with_header(axum::http::header::CONTENT_TYPE, "application/json")
                    .send_text("this is not json")
                    .await
                    .expect_status(axum::http::StatusCode::BAD_REQUEST)
                    .expect_text("expected ident")
                    .await;
            }
        };
    }

    pub use test_payload_must_be_json;

    /// Generates a test to verify that an API that does not expect a payload fails as necessary.
    #[macro_export]
    macro_rules! test_payload_must_be_empty {
        ( $app:expr, $route:expr ) => {
            #[tokio::test]
            async fn test_payload_must_be_empty() {
                $crate::rest::testutils::OneShotBuilder::new($app, $route)
                    .send_text("should not be here")
                    .await
                    .expect_status(axum::http::StatusCode::PAYLOAD_TOO_LARGE)
                    .expect_error("should be empty")
                    .await;
            }
        };
    }

    pub use test_payload_must_be_empty;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_driver_error() {
        assert_eq!(
            RestError::InternalError("boom".to_owned()),
            RestError::from(DriverError::BackendError("boom".to_owned()))
        );
        assert_eq!(
            RestError::InvalidRequest("bad".to_owned()),
            RestError::from(DriverError::InvalidInput("bad".to_owned()))
        );
        assert_eq!(
            RestError::NotFound("gone".to_owned()),
            RestError::from(DriverError::NotFound("gone".to_owned()))
        );
    }

    #[test]
    fn test_into_response_status() {
        let cases = [
            (RestError::InternalError("x".to_owned()), http::StatusCode::INTERNAL_SERVER_ERROR),
            (RestError::InvalidRequest("x".to_owned()), http::StatusCode::BAD_REQUEST),
            (RestError::NotFound("x".to_owned()), http::StatusCode::NOT_FOUND),
            (RestError::PayloadNotEmpty, http::StatusCode::PAYLOAD_TOO_LARGE),
        ];
        for (error, exp_status) in cases {
            assert_eq!(exp_status, error.into_response().status());
        }
    }

    #[test]
    fn test_into_response_bad_request_alert() {
        let error = RestError::BadRequestAlert(FailureAlert {
            app_name: "testApp".to_owned(),
            entity_name: "thing",
            error_key: "broken",
            message: "The thing is broken".to_owned(),
        });
        let response = error.into_response();
        assert_eq!(http::StatusCode::BAD_REQUEST, response.status());
        assert_eq!("error.broken", response.headers().get("x-testApp-error").unwrap());
        assert_eq!("thing", response.headers().get("x-testApp-params").unwrap());
    }
}
