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

//! The `DataNascimento` data type.

use bdprojeto_core::model::{ModelError, ModelResult};
use serde::{de::Visitor, Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

/// Format of birth dates in their textual representation.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Birth date of a usuario.  Dates are represented as `YYYY-MM-DD` strings when serialized.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct DataNascimento(Date);

impl DataNascimento {
    /// Creates a new birth date from a calendar `date`.
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    /// Parses a birth date from its `YYYY-MM-DD` representation in `s`.
    pub fn parse(s: &str) -> ModelResult<Self> {
        match Date::parse(s, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(e) => Err(ModelError(format!("Invalid date '{}': {}", s, e))),
        }
    }

    /// Returns the calendar date.
    pub fn as_date(&self) -> Date {
        self.0
    }
}

impl Serialize for DataNascimento {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let formatted = self.0.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

/// A deserialization visitor for a `DataNascimento`.
struct DataNascimentoVisitor;

impl Visitor<'_> for DataNascimentoVisitor {
    type Value = DataNascimento;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a date in YYYY-MM-DD format")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        DataNascimento::parse(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for DataNascimento {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DataNascimentoVisitor)
    }
}
