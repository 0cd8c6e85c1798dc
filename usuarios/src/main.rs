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

//! Entry point to the usuarios service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use bdprojeto_core::db::postgres::PostgresOptions;
use bdprojeto_core::env::get_optional_var;
use bdprojeto_usuarios::{serve, DriverOptions};
use log::error;
use std::net::Ipv4Addr;

/// Default port to listen on when `USUARIOS_PORT` is not set.
const DEFAULT_PORT: u16 = 8080;

/// Reads the configuration from the environment and serves the app until it fails.
async fn run() -> Result<(), String> {
    let port = get_optional_var::<u16>("USUARIOS", "PORT")?.unwrap_or(DEFAULT_PORT);
    let db_opts = PostgresOptions::from_env("PGSQL_PROD")?;
    let driver_opts = DriverOptions::from_env("USUARIOS")?;

    serve((Ipv4Addr::UNSPECIFIED, port), db_opts, driver_opts).await.map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}
