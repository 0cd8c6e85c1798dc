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

//! Shared scaffolding for the REST services of this project.
//!
//! Services built on top of this crate are organized in the following layers, and each service
//! should mirror them in its own module structure:
//!
//! 1.  `model`: Domain data types.  These are plain values that validate themselves on
//!     construction, usually via the newtype pattern, and carry no business logic.
//!
//! 1.  `db`: The persistence layer.  Services provide free functions that take an `Executor` and
//!     issue explicit SQL against every supported backend.
//!
//! 1.  `driver`: The business logic layer.  Services provide a `Driver` type that holds the shared
//!     resources of the app and decides the transaction boundaries of every operation.
//!
//! 1.  `rest`: The HTTP layer.  Services provide an `app` function returning an `axum::Router`
//!     whose handlers delegate to the `Driver`.
//!
//! 1.  `main`: The launcher, which reads configuration from the environment and starts serving.
//!
//! Every layer has its own error and result types (`ModelError`, `DbError`, `DriverError` and
//! `RestError`) with conversions between them, so errors float up with `?` until the REST layer
//! turns them into HTTP status codes.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod db;
pub mod driver;
pub mod env;
pub mod model;
pub mod rest;
