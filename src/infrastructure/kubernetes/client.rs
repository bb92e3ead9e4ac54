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

use crate::domain::definition::{Definition, ResourceDefinition, ResourceKind};
use crate::infrastructure::constants::DEFAULT_NAMESPACE;
use crate::infrastructure::kubernetes::connection::ResourceApi;
use crate::shared::error::{KrdError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::api::{DeleteParams, ListParams, PropagationPolicy};
use kube::{Resource, ResourceExt};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle contract shared by every supported resource kind.
#[async_trait::async_trait]
pub trait ResourceClient: Send + Sync {
    type Definition: Send + 'static;

    /// Submit a definition and return the name the cluster stored it under.
    async fn create(&self, definition: Self::Definition) -> Result<String>;

    /// Return at most `limit` resource names.
    async fn list(&self, limit: u32) -> Result<Vec<String>>;

    /// Delete by name. Foreground propagation applies unless `params` sets a policy.
    async fn delete(&self, name: &str, params: DeleteParams) -> Result<()>;

    async fn get(&self, name: &str) -> Result<Option<String>>;
}

pub trait ClusterResource: Resource<DynamicType = ()> + Clone + Debug + Send + Sync + 'static {}

impl<K> ClusterResource for K where K: Resource<DynamicType = ()> + Clone + Debug + Send + Sync + 'static
{}

/// Resource client bound to one kind and one connection.
///
/// `list`, `get` and `delete` operate in the client's namespace; `create`
/// follows the namespace carried by the definition.
pub struct KindClient<K: ClusterResource> {
    api: Arc<dyn ResourceApi<K>>,
    namespace: String,
}

pub type WorkloadClient = KindClient<Deployment>;
pub type ServiceClient = KindClient<Service>;

impl<K: ClusterResource> Clone for KindClient<K> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

impl<K: ClusterResource> KindClient<K> {
    pub fn new(api: Arc<dyn ResourceApi<K>>, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let namespace = if namespace.is_empty() {
            DEFAULT_NAMESPACE.to_string()
        } else {
            namespace
        };

        Self { api, namespace }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn kind() -> String {
        K::kind(&()).to_string()
    }
}

#[async_trait::async_trait]
impl<K: ClusterResource> ResourceClient for KindClient<K> {
    type Definition = Definition<K>;

    async fn create(&self, definition: Definition<K>) -> Result<String> {
        let kind = Self::kind();
        let namespace = match definition.namespace() {
            "" => DEFAULT_NAMESPACE.to_string(),
            ns => ns.to_string(),
        };
        let object = definition.into_object();

        info!(kind = %kind, namespace = %namespace, name = %object.name_any(), "Creating resource");
        let created = self
            .api
            .create(&namespace, &object)
            .await
            .map_err(|e| KrdError::remote(format!("Create {} error", kind), e))?;

        let name = created.name_any();
        if name.is_empty() {
            return Err(KrdError::InvalidResource(format!(
                "Create {} error: cluster returned an object without a name",
                kind
            )));
        }

        Ok(name)
    }

    async fn list(&self, limit: u32) -> Result<Vec<String>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let kind = Self::kind();
        debug!(kind = %kind, namespace = %self.namespace, limit, "Listing resources");
        let params = ListParams::default().limit(limit);
        let items = self
            .api
            .list(&self.namespace, &params)
            .await
            .map_err(|e| KrdError::remote(format!("Get {} list error", kind), e))?;

        Ok(items
            .iter()
            .map(|item| item.name_any())
            .take(limit as usize)
            .collect())
    }

    async fn delete(&self, name: &str, params: DeleteParams) -> Result<()> {
        let kind = Self::kind();
        let mut params = params;
        if params.propagation_policy.is_none() {
            params.propagation_policy = Some(PropagationPolicy::Foreground);
        }

        info!(kind = %kind, namespace = %self.namespace, name, "Deleting resource");
        self.api
            .delete(&self.namespace, name, &params)
            .await
            .map_err(|e| KrdError::remote(format!("Delete {} error", kind), e))
    }

    async fn get(&self, name: &str) -> Result<Option<String>> {
        let kind = Self::kind();
        let items = self
            .api
            .list(&self.namespace, &ListParams::default())
            .await
            .map_err(|e| KrdError::remote(format!("Get {} error", kind), e))?;

        // No server-side name filter; match locally.
        Ok(items
            .iter()
            .find(|item| item.meta().name.as_deref() == Some(name))
            .map(|_| name.to_string()))
    }
}

/// One client per supported kind, all sharing a single connection.
#[derive(Clone)]
pub struct ResourceClients {
    workload: WorkloadClient,
    service: ServiceClient,
}

impl ResourceClients {
    /// Bind one shared connection into a client for every kind.
    pub fn bind<C>(connection: Arc<C>, namespace: &str) -> Self
    where
        C: ResourceApi<Deployment> + ResourceApi<Service> + 'static,
    {
        let workload_api: Arc<dyn ResourceApi<Deployment>> = connection.clone();
        let service_api: Arc<dyn ResourceApi<Service>> = connection;

        Self {
            workload: KindClient::new(workload_api, namespace),
            service: KindClient::new(service_api, namespace),
        }
    }

    pub fn workloads(&self) -> &WorkloadClient {
        &self.workload
    }

    pub fn services(&self) -> &ServiceClient {
        &self.service
    }

    /// Create a definition of any kind through the matching client.
    pub async fn create(&self, definition: ResourceDefinition) -> Result<String> {
        match definition {
            ResourceDefinition::Workload(d) => self.workload.create(d).await,
            ResourceDefinition::Service(d) => self.service.create(d).await,
        }
    }

    pub async fn list(&self, kind: ResourceKind, limit: u32) -> Result<Vec<String>> {
        match kind {
            ResourceKind::Workload => self.workload.list(limit).await,
            ResourceKind::Service => self.service.list(limit).await,
        }
    }

    pub async fn get(&self, kind: ResourceKind, name: &str) -> Result<Option<String>> {
        match kind {
            ResourceKind::Workload => self.workload.get(name).await,
            ResourceKind::Service => self.service.get(name).await,
        }
    }

    pub async fn delete(&self, kind: ResourceKind, name: &str, params: DeleteParams) -> Result<()> {
        match kind {
            ResourceKind::Workload => self.workload.delete(name, params).await,
            ResourceKind::Service => self.service.delete(name, params).await,
        }
    }
}
