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

use crate::infrastructure::constants::DEFAULT_NAMESPACE;
use crate::infrastructure::kubernetes::client::ResourceClients;
use crate::infrastructure::kubernetes::connection::{KubeConnection, ResourceApi};
use crate::shared::error::{KrdError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Where to find cluster credentials.
///
/// No kubeconfig path means default resolution: in-cluster service account,
/// then `KUBECONFIG`, then `~/.kube/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
}

impl ConnectionDescriptor {
    pub fn from_path(path: impl AsRef<str>) -> Self {
        let path = path.as_ref().trim();
        Self {
            kubeconfig: if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            },
            context: None,
        }
    }

    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context.filter(|c| !c.is_empty());
        self
    }
}

/// Turns a connection descriptor into a live connection handle.
#[async_trait::async_trait]
pub trait ConnectionResolver: Send + Sync {
    type Connection: ResourceApi<Deployment> + ResourceApi<Service> + 'static;

    async fn resolve(&self, descriptor: &ConnectionDescriptor) -> Result<Self::Connection>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KubeconfigResolver;

#[async_trait::async_trait]
impl ConnectionResolver for KubeconfigResolver {
    type Connection = KubeConnection;

    async fn resolve(&self, descriptor: &ConnectionDescriptor) -> Result<KubeConnection> {
        KubeConnection::connect(descriptor).await
    }
}

/// Builds [`ResourceClients`] from a descriptor using an injected resolver.
pub struct ClientFactory<R> {
    resolver: R,
    namespace: String,
}

impl ClientFactory<KubeconfigResolver> {
    pub fn kubeconfig() -> Self {
        Self::new(KubeconfigResolver)
    }
}

impl<R: ConnectionResolver> ClientFactory<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub async fn new_client(&self, descriptor: &ConnectionDescriptor) -> Result<ResourceClients> {
        let connection = self
            .resolver
            .resolve(descriptor)
            .await
            .map_err(|e| match e {
                err @ KrdError::Connection(_) => err,
                other => KrdError::connection(other.to_string()),
            })?;

        info!(
            kubeconfig = ?descriptor.kubeconfig,
            namespace = %self.namespace,
            "Connected to Kubernetes cluster"
        );
        Ok(ResourceClients::bind(Arc::new(connection), &self.namespace))
    }
}
