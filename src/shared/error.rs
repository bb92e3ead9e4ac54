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

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KrdError>;

#[derive(Error, Debug)]
pub enum KrdError {
    /// A local resource document could not be read.
    #[error("Read {} error: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A resource document is not valid YAML or does not match its kind's schema.
    #[error("{context}: {source}")]
    Decode {
        context: String,
        source: serde_yaml::Error,
    },

    #[error("Unknown resource kind: '{0}'")]
    UnknownKind(String),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Connection error: {0}")]
    Connection(String),

    /// A call against the cluster management API failed.
    #[error("{context}: {source}")]
    RemoteApi {
        context: String,
        source: kube::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl KrdError {
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn decode(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    pub fn remote(context: impl Into<String>, source: kube::Error) -> Self {
        Self::RemoteApi {
            context: context.into(),
            source,
        }
    }

    pub fn connection(context: impl Into<String>) -> Self {
        Self::Connection(context.into())
    }

    pub fn config_error(context: impl Into<String>) -> Self {
        Self::Config(context.into())
    }

    /// True when the cluster reported the target resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RemoteApi {
                source: kube::Error::Api(response),
                ..
            } if response.code == 404
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    fn api_error(code: u16, reason: &str) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: format!("deployments.apps \"web\" {}", reason),
            reason: reason.to_string(),
            code,
        })
    }

    #[test]
    fn test_remote_error_keeps_context() {
        let err = KrdError::remote("Create Service error", api_error(409, "AlreadyExists"));
        let msg = err.to_string();
        assert!(msg.starts_with("Create Service error: "));
        assert!(msg.contains("AlreadyExists"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(KrdError::remote("Delete Deployment error", api_error(404, "NotFound")).is_not_found());
        assert!(!KrdError::remote("Delete Deployment error", api_error(403, "Forbidden")).is_not_found());
        assert!(!KrdError::UnknownKind("ConfigMap".to_string()).is_not_found());
    }

    #[test]
    fn test_read_error_names_path() {
        let err = KrdError::read(
            "/tmp/missing/deployment.yaml",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("/tmp/missing/deployment.yaml"));
    }
}
