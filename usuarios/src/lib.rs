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

//! REST service to manage usuarios.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

#[cfg(feature = "postgres")]
use bdprojeto_core::db::postgres::{PostgresDb, PostgresOptions};
#[cfg(feature = "postgres")]
use bdprojeto_core::db::Db;
#[cfg(feature = "postgres")]
use log::info;
#[cfg(feature = "postgres")]
use std::error::Error;
#[cfg(feature = "postgres")]
use std::net::SocketAddr;
#[cfg(feature = "postgres")]
use std::sync::Arc;

pub mod db;
pub mod driver;
#[cfg(feature = "postgres")]
use driver::Driver;
pub use driver::DriverOptions;
pub mod model;
mod rest;

/// Instantiates all resources to serve the application on `bind_addr`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
#[cfg(feature = "postgres")]
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    db_opts: PostgresOptions,
    driver_opts: DriverOptions,
) -> Result<(), Box<dyn Error>> {
    let db = Arc::from(PostgresDb::connect(db_opts)?);
    db::init_schema(&mut db.ex().await?).await?;
    let driver = Driver::new(db, driver_opts);
    let app = rest::app(driver);

    let bind_addr = bind_addr.into();
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Serving on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
