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

//! Descriptor package loading

use crate::domain::definition::{parse_all, ResourceDefinition};
use crate::infrastructure::constants::{
    FILE_URL_PREFIX, PACKAGE_DEPLOYMENT_FILE, PACKAGE_SERVICE_FILE,
};
use crate::shared::error::{KrdError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Resolves a descriptor package reference into resource definitions.
#[async_trait::async_trait]
pub trait DescriptorSource: Send + Sync {
    async fn load(&self, csar_url: &str) -> Result<Vec<ResourceDefinition>>;
}

/// Packages unpacked on local storage.
///
/// References are relative to the package root and never resolve outside
/// it. A reference naming a file is decoded as a (possibly multi-document)
/// YAML stream. A reference naming a directory must hold `deployment.yaml`
/// and may hold `service.yaml`.
#[derive(Debug, Clone)]
pub struct LocalDescriptorSource {
    root: PathBuf,
}

impl LocalDescriptorSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a reference onto the package root, rejecting absolute paths and `..`.
    fn resolve(&self, csar_url: &str) -> Result<PathBuf> {
        let reference = csar_url.strip_prefix(FILE_URL_PREFIX).unwrap_or(csar_url);
        let path = Path::new(reference);

        let contained = path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(outside_root(csar_url));
        }

        Ok(self.root.join(path))
    }

    /// Resolve symlinks and check the target still lives under the root.
    async fn locate(&self, csar_url: &str) -> Result<PathBuf> {
        let joined = self.resolve(csar_url)?;

        let root = tokio::fs::canonicalize(&self.root)
            .await
            .map_err(|e| KrdError::read(&self.root, e))?;
        let path = tokio::fs::canonicalize(&joined)
            .await
            .map_err(|e| KrdError::read(&joined, e))?;

        if !path.starts_with(&root) {
            return Err(outside_root(csar_url));
        }
        Ok(path)
    }
}

#[async_trait::async_trait]
impl DescriptorSource for LocalDescriptorSource {
    async fn load(&self, csar_url: &str) -> Result<Vec<ResourceDefinition>> {
        if csar_url.trim().is_empty() {
            return Err(KrdError::InvalidResource("csar_url is required".to_string()));
        }

        let path = self.locate(csar_url).await?;
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| KrdError::read(&path, e))?;

        let definitions = if metadata.is_dir() {
            let mut definitions = read_documents(&path.join(PACKAGE_DEPLOYMENT_FILE)).await?;

            let service = path.join(PACKAGE_SERVICE_FILE);
            if service.exists() {
                definitions.extend(read_documents(&service).await?);
            }
            definitions
        } else {
            read_documents(&path).await?
        };

        info!(
            package = %path.display(),
            definitions = definitions.len(),
            "Loaded descriptor package"
        );
        Ok(definitions)
    }
}

fn outside_root(csar_url: &str) -> KrdError {
    KrdError::InvalidResource(format!(
        "package reference '{}' is outside the package root",
        csar_url
    ))
}

async fn read_documents(path: &Path) -> Result<Vec<ResourceDefinition>> {
    debug!(path = %path.display(), "Reading descriptor document");
    let raw = tokio::fs::read(path)
        .await
        .map_err(|e| KrdError::read(path, e))?;
    parse_all(&raw)
}
