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

//! The `Nome` data type.

use bdprojeto_core::model::{ModelError, ModelResult};
use serde::{de::Visitor, Deserialize, Serialize};

/// Maximum length of a name as specified in the schema.
pub(crate) const USUARIO_MAX_NOME_LENGTH: usize = 50;

/// Represents the display name of a usuario.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Nome(String);

impl Nome {
    /// Creates a new name from an untrusted string `s`, making sure it is valid.
    pub fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        // The schema counts characters, not bytes.
        if s.chars().count() > USUARIO_MAX_NOME_LENGTH {
            return Err(ModelError(format!(
                "Nome cannot be longer than {} characters",
                USUARIO_MAX_NOME_LENGTH
            )));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
impl From<&'static str> for Nome {
    /// Creates a new name from a hardcoded string, which must be valid.
    fn from(name: &'static str) -> Self {
        Nome::new(name).expect("Hardcoded names must be valid")
    }
}

/// A deserialization visitor for a `Nome`.
struct NomeVisitor;

impl Visitor<'_> for NomeVisitor {
    type Value = Nome;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Nome::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Nome::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Nome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(NomeVisitor)
    }
}
