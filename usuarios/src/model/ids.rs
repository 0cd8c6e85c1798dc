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

//! Numeric identifiers of usuarios.

use bdprojeto_core::model::{ModelError, ModelResult};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Validates that `value` is strictly positive, using `what` to describe it in errors.
fn check_positive(what: &str, value: i64) -> ModelResult<i64> {
    if value <= 0 {
        return Err(ModelError(format!("{} must be positive but got {}", what, value)));
    }
    Ok(value)
}

/// System-generated identifier of a persisted usuario.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct UsuarioId(i64);

impl UsuarioId {
    /// Creates a new identifier from an untrusted `value`, making sure it is valid.
    pub fn new(value: i64) -> ModelResult<Self> {
        check_positive("Usuario id", value).map(Self)
    }

    /// Returns the identifier as stored in the database.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<UsuarioId> for i64 {
    fn from(id: UsuarioId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for UsuarioId {
    type Error = ModelError;

    fn try_from(value: i64) -> ModelResult<Self> {
        Self::new(value)
    }
}

/// National identification number of a usuario.
///
/// The number is unique across all usuarios, which the database enforces.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct Cpf(i64);

impl Cpf {
    /// Creates a new CPF from an untrusted `value`, making sure it is valid.
    pub fn new(value: i64) -> ModelResult<Self> {
        check_positive("CPF", value).map(Self)
    }

    /// Returns the number as stored in the database.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<Cpf> for i64 {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl TryFrom<i64> for Cpf {
    type Error = ModelError;

    fn try_from(value: i64) -> ModelResult<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_usuario_id_ok() {
        assert_eq!(1, UsuarioId::new(1).unwrap().as_i64());
        assert_eq!(i64::MAX, UsuarioId::new(i64::MAX).unwrap().as_i64());
        assert_eq!("123", UsuarioId::new(123).unwrap().to_string());
    }

    #[test]
    fn test_usuario_id_error() {
        assert_eq!(
            ModelError("Usuario id must be positive but got 0".to_owned()),
            UsuarioId::new(0).unwrap_err()
        );
        assert!(UsuarioId::new(-5).is_err());
    }

    #[test]
    fn test_usuario_id_ser_de() {
        assert_tokens(&UsuarioId::new(42).unwrap(), &[Token::I64(42)]);
        assert_de_tokens_error::<UsuarioId>(
            &[Token::I64(-1)],
            "Usuario id must be positive but got -1",
        );
    }

    #[test]
    fn test_cpf_ok() {
        assert_eq!(12345678901, Cpf::new(12345678901).unwrap().as_i64());
    }

    #[test]
    fn test_cpf_error() {
        assert!(Cpf::new(0).is_err());
        assert!(Cpf::new(-111).is_err());
    }

    #[test]
    fn test_cpf_ser_de() {
        assert_tokens(&Cpf::new(111).unwrap(), &[Token::I64(111)]);
        assert_de_tokens_error::<Cpf>(&[Token::I64(0)], "CPF must be positive but got 0");
    }
}
