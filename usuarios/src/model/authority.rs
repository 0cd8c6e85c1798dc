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

//! The `AuthorityName` data type.

use bdprojeto_core::model::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// Maximum length of an authority name as specified in the schema.
pub(crate) const AUTHORITY_MAX_NAME_LENGTH: usize = 50;

/// Name of an authority (a role) that can be granted to usuarios.
///
/// The name is the only property of an authority, so this type stands for the authority itself.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct AuthorityName(String);

impl AuthorityName {
    /// Creates a new authority name from an untrusted string `s`, making sure it is valid.
    pub fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        if s.is_empty() {
            return Err(ModelError("Authority name cannot be empty".to_owned()));
        }
        if s.chars().count() > AUTHORITY_MAX_NAME_LENGTH {
            return Err(ModelError("Authority name is too long".to_owned()));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
impl From<&'static str> for AuthorityName {
    /// Creates a new authority name from a hardcoded string, which must be valid.
    fn from(name: &'static str) -> Self {
        AuthorityName::new(name).expect("Hardcoded authority names must be valid")
    }
}

impl From<AuthorityName> for String {
    fn from(name: AuthorityName) -> Self {
        name.0
    }
}

impl TryFrom<String> for AuthorityName {
    type Error = ModelError;

    fn try_from(s: String) -> ModelResult<Self> {
        Self::new(s)
    }
}
