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

//! Business logic for the service.

use bdprojeto_core::db::Db;
use axum::http::HeaderName;
use bdprojeto_core::env::get_optional_var;
use std::sync::Arc;

#[cfg(test)]
mod testutils;
mod usuario;
mod usuarios;

/// Default value for the `APP_NAME` setting when not specified.
const DEFAULT_APP_NAME: &str = "bdApp";

/// Configuration options for the driver.
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct DriverOptions {
    /// Name of the application, used to tag the alerts returned to clients.
    pub app_name: String,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self { app_name: DEFAULT_APP_NAME.to_owned() }
    }
}

impl DriverOptions {
    /// Creates a new set of options from environment variables whose name starts with `prefix`.
    ///
    /// The application name is embedded in the `X-<app>-*` alert headers, so it must be usable
    /// as part of an HTTP header name.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        let app_name = get_optional_var::<String>(prefix, "APP_NAME")?
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_owned());
        HeaderName::try_from(format!("x-{}-alert", app_name))
            .map_err(|e| format!("Invalid {}_APP_NAME '{}': {}", prefix, app_name, e))?;
        Ok(Self { app_name })
    }
}

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they start and commit a
/// transaction, so it's incorrect for the caller to use two separate calls.  For this reason,
/// these operations consume the driver in an attempt to minimize the possibility of executing
/// two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,

    /// Options for the driver.
    opts: Arc<DriverOptions>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>, opts: DriverOptions) -> Self {
        Self { db, opts: Arc::from(opts) }
    }

    /// Returns the options of the driver.
    pub(crate) fn opts(&self) -> &DriverOptions {
        &self.opts
    }
}
