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

//! The `Usuario` entity.

use crate::model::{Cpf, DataNascimento, Nome, UsuarioId};
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Serialize, Serializer};

/// Properties of a usuario other than its identity.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub struct UsuarioData {
    /// National identification number.
    cpf: Cpf,

    /// Display name, if known.
    nome: Option<Nome>,

    /// Birth date, if known.
    data_nascimento: Option<DataNascimento>,
}

/// A usuario, which gets its identifier once it is persisted.
///
/// Two usuarios are equal if and only if they are both persisted and have the same identifier.
/// This means that a usuario that has not been persisted yet is not even equal to itself, which
/// is why this type does not implement `Eq`.
#[derive(Clone, Debug)]
pub enum Usuario {
    /// A usuario that has not been persisted yet.
    Unsaved(UsuarioData),

    /// A persisted usuario.
    Saved {
        /// Identifier assigned by the database.
        id: UsuarioId,

        /// Properties of the usuario.
        data: UsuarioData,
    },
}

impl Usuario {
    /// Creates a new usuario that has not been persisted yet.
    pub fn new(data: UsuarioData) -> Self {
        Usuario::Unsaved(data)
    }

    /// Creates a usuario that has already been persisted with `id`.
    pub fn saved(id: UsuarioId, data: UsuarioData) -> Self {
        Usuario::Saved { id, data }
    }

    /// Returns the identifier of the usuario, if it has been persisted.
    pub fn id(&self) -> Option<UsuarioId> {
        match self {
            Usuario::Unsaved(_) => None,
            Usuario::Saved { id, .. } => Some(*id),
        }
    }

    /// Returns the properties of the usuario.
    pub fn data(&self) -> &UsuarioData {
        match self {
            Usuario::Unsaved(data) => data,
            Usuario::Saved { data, .. } => data,
        }
    }
}

impl PartialEq for Usuario {
    fn eq(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(id1), Some(id2)) => id1 == id2,
            (_, _) => false,
        }
    }
}

/// Wire representation of a `Usuario`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UsuarioView<'a> {
    /// Identifier, absent for usuarios that have not been persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<UsuarioId>,

    /// National identification number.
    cpf: Cpf,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    nome: Option<&'a Nome>,

    /// Birth date.
    #[serde(skip_serializing_if = "Option::is_none")]
    data_nascimento: Option<&'a DataNascimento>,
}

impl Serialize for Usuario {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let data = self.data();
        let view = UsuarioView {
            id: self.id(),
            cpf: *data.cpf(),
            nome: data.nome().as_ref(),
            data_nascimento: data.data_nascimento().as_ref(),
        };
        view.serialize(serializer)
    }
}
