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

//! Alert headers attached to responses so that clients can surface notifications.

use crate::rest::{RestError, RestResult};
use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Details of a failed operation on an entity.
#[derive(Clone, Debug, PartialEq)]
pub struct FailureAlert {
    /// Name of the application, used to namespace the headers.
    pub app_name: String,

    /// Name of the entity the operation was about.
    pub entity_name: &'static str,

    /// Machine-readable key describing the failure.
    pub error_key: &'static str,

    /// Human-readable description of the failure.
    pub message: String,
}

/// Inserts `value` into `headers` under the `x-<app_name>-<suffix>` name.
fn insert(headers: &mut HeaderMap, app_name: &str, suffix: &str, value: &str) -> RestResult<()> {
    let name = format!("x-{}-{}", app_name, suffix);
    let name = HeaderName::try_from(name.as_str())
        .map_err(|e| RestError::InternalError(format!("Invalid header name {}: {}", name, e)))?;
    let value = HeaderValue::try_from(value)
        .map_err(|e| RestError::InternalError(format!("Invalid header value {}: {}", value, e)))?;
    headers.insert(name, value);
    Ok(())
}

/// Builds the headers announcing that `message` happened with `param` as its argument.
pub fn alert(app_name: &str, message: &str, param: &str) -> RestResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    insert(&mut headers, app_name, "alert", message)?;
    insert(&mut headers, app_name, "params", param)?;
    Ok(headers)
}

/// Builds the headers announcing that a new `entity_name` was created with identifier `id`.
pub fn entity_creation_alert(app_name: &str, entity_name: &str, id: &str) -> RestResult<HeaderMap> {
    let message = format!("A new {} is created with identifier {}", entity_name, id);
    alert(app_name, &message, id)
}

/// Builds the headers describing a failed operation.
pub fn failure_alert(alert: &FailureAlert) -> RestResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    insert(&mut headers, &alert.app_name, "error", &format!("error.{}", alert.error_key))?;
    insert(&mut headers, &alert.app_name, "params", alert.entity_name)?;
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation_alert() {
        let headers = entity_creation_alert("myApp", "usuario", "12").unwrap();
        assert_eq!(2, headers.len());
        assert_eq!(
            "A new usuario is created with identifier 12",
            headers.get("x-myapp-alert").unwrap()
        );
        assert_eq!("12", headers.get("x-myapp-params").unwrap());
    }

    #[test]
    fn test_failure_alert() {
        let alert = FailureAlert {
            app_name: "myApp".to_owned(),
            entity_name: "usuario",
            error_key: "idexists",
            message: "irrelevant".to_owned(),
        };
        let headers = failure_alert(&alert).unwrap();
        assert_eq!(2, headers.len());
        assert_eq!("error.idexists", headers.get("x-myapp-error").unwrap());
        assert_eq!("usuario", headers.get("x-myapp-params").unwrap());
    }

    #[test]
    fn test_invalid_app_name() {
        match alert("bad app", "message", "param") {
            Err(RestError::InternalError(e)) => assert!(e.contains("Invalid header name")),
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn test_invalid_value() {
        match alert("app", "bad\nmessage", "param") {
            Err(RestError::InternalError(e)) => assert!(e.contains("Invalid header value")),
            e => panic!("{:?}", e),
        }
    }
}
