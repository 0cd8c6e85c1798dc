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

//! Operations on one usuario.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use bdprojeto_core::db::DbError;
use bdprojeto_core::driver::{DriverError, DriverResult};
use log::{debug, info, warn};
use std::collections::BTreeSet;

impl Driver {
    /// Creates a new usuario with `data` and grants it the given `authorities`.
    ///
    /// All of the `authorities` must exist.  Nothing is persisted if any of them does not or if
    /// the CPF in `data` is already taken.  Returns the identifier assigned to the new usuario
    /// along with the usuario itself.
    pub(crate) async fn create_usuario(
        self,
        data: UsuarioData,
        authorities: BTreeSet<AuthorityName>,
    ) -> DriverResult<(UsuarioId, Usuario)> {
        let mut tx = self.db.begin().await?;

        for name in &authorities {
            match db::get_authority(tx.ex(), name).await {
                Ok(_) => (),
                Err(DbError::NotFound) => {
                    return Err(DriverError::InvalidInput(format!(
                        "Unknown authority {}",
                        name.as_str()
                    )));
                }
                Err(e) => return Err(e.into()),
            }
        }

        let cpf = *data.cpf();
        let (id, usuario) = match db::save_usuario(tx.ex(), Usuario::new(data)).await {
            Ok(saved) => saved,
            Err(DbError::AlreadyExists) => {
                warn!("Rejected creation of usuario with duplicate CPF {}", cpf);
                return Err(DriverError::BackendError(format!(
                    "A usuario with CPF {} already exists",
                    cpf
                )));
            }
            Err(e) => return Err(e.into()),
        };

        db::put_usuario_authorities(tx.ex(), id, &authorities).await?;
        tx.commit().await?;

        info!("Created usuario {} with {} authorities", id, authorities.len());
        Ok((id, usuario))
    }

    /// Gets the usuario identified by `id`.
    pub(crate) async fn get_usuario(self, id: UsuarioId) -> DriverResult<Usuario> {
        debug!("Getting usuario {}", id);
        match db::find_usuario_by_id(&mut self.db.ex().await?, id).await? {
            Some(usuario) => Ok(usuario),
            None => Err(DriverError::NotFound(format!("Usuario {} not found", id))),
        }
    }

    /// Gets the names of the authorities granted to the usuario identified by `id`.
    pub(crate) async fn get_usuario_authorities(
        self,
        id: UsuarioId,
    ) -> DriverResult<BTreeSet<AuthorityName>> {
        debug!("Getting authorities of usuario {}", id);
        let mut tx = self.db.begin().await?;
        if db::find_usuario_by_id(tx.ex(), id).await?.is_none() {
            return Err(DriverError::NotFound(format!("Usuario {} not found", id)));
        }
        let authorities = db::get_usuario_authorities(tx.ex(), id).await?;
        tx.commit().await?;
        Ok(authorities)
    }
}
