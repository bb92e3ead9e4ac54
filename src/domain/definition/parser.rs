// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decoding of YAML resource documents into typed definitions.
//!
//! Documents are first decoded into a generic [`serde_yaml::Value`] so the
//! `kind` discriminator can be inspected, then decoded again into the
//! matching `k8s-openapi` type.

use crate::domain::definition::model::{Definition, ResourceDefinition};
use crate::infrastructure::constants::{KIND_DEPLOYMENT, KIND_SERVICE};
use crate::shared::error::{KrdError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Decode a single resource document.
///
/// Empty input (or a document holding only comments) produces `Ok(None)`.
pub fn parse(raw: &[u8]) -> Result<Option<ResourceDefinition>> {
    if is_blank(raw) {
        return Ok(None);
    }

    debug!(bytes = raw.len(), "Decoding resource definition");
    let value: Value = serde_yaml::from_slice(raw)
        .map_err(|e| KrdError::decode("Deserialize resource definition error", e))?;

    decode_value(value)
}

/// Decode every document of a `---` separated stream, skipping empty ones.
pub fn parse_all(raw: &[u8]) -> Result<Vec<ResourceDefinition>> {
    let mut definitions = Vec::new();
    if is_blank(raw) {
        return Ok(definitions);
    }

    for document in serde_yaml::Deserializer::from_slice(raw) {
        let value = Value::deserialize(document)
            .map_err(|e| KrdError::decode("Deserialize resource definition error", e))?;
        if let Some(definition) = decode_value(value)? {
            definitions.push(definition);
        }
    }

    Ok(definitions)
}

/// Read a resource document from disk and decode it.
pub fn read_definition_file(path: impl AsRef<Path>) -> Result<Option<ResourceDefinition>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading resource definition");
    let raw = std::fs::read(path).map_err(|e| KrdError::read(path, e))?;
    parse(&raw)
}

/// Whitespace and comment lines only
fn is_blank(raw: &[u8]) -> bool {
    String::from_utf8_lossy(raw).lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn decode_value(value: Value) -> Result<Option<ResourceDefinition>> {
    if value.is_null() {
        return Ok(None);
    }

    let mapping: Mapping = serde_yaml::from_value(value)
        .map_err(|e| KrdError::decode("Deserialize resource definition error", e))?;
    let kind = mapping
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let value = Value::Mapping(mapping);

    match kind.as_str() {
        KIND_DEPLOYMENT => {
            let deployment: Deployment = decode_typed(value, KIND_DEPLOYMENT)?;
            Ok(Some(Definition::new(deployment)?.into()))
        }
        KIND_SERVICE => {
            let service: Service = decode_typed(value, KIND_SERVICE)?;
            Ok(Some(Definition::new(service)?.into()))
        }
        _ => Err(KrdError::UnknownKind(kind)),
    }
}

fn decode_typed<T: DeserializeOwned>(value: Value, kind: &str) -> Result<T> {
    serde_yaml::from_value(value)
        .map_err(|e| KrdError::decode(format!("Deserialize {} error", kind), e))
}
