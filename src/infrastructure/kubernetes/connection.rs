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

use crate::infrastructure::kubernetes::factory::ConnectionDescriptor;
use crate::shared::error::KrdError;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

/// Raw per-kind access to the cluster management API.
///
/// Errors are returned exactly as the API reported them; adding operation
/// context is left to the resource clients.
#[async_trait::async_trait]
pub trait ResourceApi<K>: Send + Sync
where
    K: Send + Sync + 'static,
{
    async fn create(&self, namespace: &str, object: &K) -> Result<K, kube::Error>;

    async fn list(&self, namespace: &str, params: &ListParams) -> Result<Vec<K>, kube::Error>;

    async fn delete(
        &self,
        namespace: &str,
        name: &str,
        params: &DeleteParams,
    ) -> Result<(), kube::Error>;
}

/// Authenticated session against a live cluster.
///
/// `kube::Client` is a cheap handle over a shared connection pool, so one
/// connection serves every concurrent request.
#[derive(Clone)]
pub struct KubeConnection {
    client: Client,
}

impl KubeConnection {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, KrdError> {
        let config_options = KubeConfigOptions {
            context: descriptor.context.clone(),
            cluster: None,
            user: None,
        };

        let config = match descriptor.kubeconfig {
            Some(ref path) => {
                debug!(path = %path.display(), "Loading kubeconfig");
                let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                    KrdError::connection(format!(
                        "Failed to load kubeconfig {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                kube::Config::from_custom_kubeconfig(kubeconfig, &config_options)
                    .await
                    .map_err(|e| {
                        KrdError::connection(format!(
                            "Failed to create Kubernetes config: {}",
                            e
                        ))
                    })?
            }
            None if descriptor.context.is_some() => {
                kube::Config::from_kubeconfig(&config_options)
                    .await
                    .map_err(|e| {
                        KrdError::connection(format!(
                            "Failed to create Kubernetes config: {}",
                            e
                        ))
                    })?
            }
            None => kube::Config::infer().await.map_err(|e| {
                KrdError::connection(format!("Failed to infer Kubernetes config: {}", e))
            })?,
        };

        let client = Client::try_from(config).map_err(|e| {
            KrdError::connection(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl<K> ResourceApi<K> for KubeConnection
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + Debug
        + DeserializeOwned
        + Serialize
        + Send
        + Sync
        + 'static,
{
    async fn create(&self, namespace: &str, object: &K) -> Result<K, kube::Error> {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let pp = PostParams::default();

        api.create(&pp, object).await
    }

    async fn list(&self, namespace: &str, params: &ListParams) -> Result<Vec<K>, kube::Error> {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);

        api.list(params).await.map(|list| list.items)
    }

    async fn delete(
        &self,
        namespace: &str,
        name: &str,
        params: &DeleteParams,
    ) -> Result<(), kube::Error> {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);

        api.delete(name, params).await?;
        Ok(())
    }
}
