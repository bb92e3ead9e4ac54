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

//! VNF instance endpoints.

use crate::api::error::ApiError;
use crate::api::model::{CreateVnfRequest, GeneralResponse, ListVnfResponse};
use crate::domain::definition::ResourceDefinition;
use crate::domain::package::DescriptorSource;
use crate::infrastructure::constants::{RESPONSE_CREATED, RESPONSE_DELETED, RESPONSE_LISTING};
use crate::infrastructure::kubernetes::{ResourceClient, ResourceClients};
use crate::shared::error::KrdError;
use actix_web::web::{Bytes, Data, Path};
use actix_web::HttpResponse;
use kube::api::DeleteParams;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Shared state behind the VNF instance endpoints.
pub struct VnfInstanceService {
    clients: ResourceClients,
    source: Arc<dyn DescriptorSource>,
    list_limit: u32,
}

impl VnfInstanceService {
    pub fn new(clients: ResourceClients, source: Arc<dyn DescriptorSource>, list_limit: u32) -> Self {
        Self {
            clients,
            source,
            list_limit,
        }
    }

    /// Create every resource of the request's package, workloads first.
    ///
    /// Returns the name of the first workload created.
    pub async fn instantiate(&self, request: &CreateVnfRequest) -> Result<String, ApiError> {
        let definitions = self
            .source
            .load(&request.csar_url)
            .await
            .map_err(|e| ApiError::internal("Get Deployment information error", e))?;

        let (workloads, services): (Vec<_>, Vec<_>) = definitions
            .into_iter()
            .partition(|d| matches!(d, ResourceDefinition::Workload(_)));

        let mut workloads = workloads.into_iter();
        let Some(first) = workloads.next() else {
            return Err(ApiError::internal(
                "Create VNF error",
                KrdError::InvalidResource(format!(
                    "package '{}' contains no Deployment",
                    request.csar_url
                )),
            ));
        };

        let instance = self.create_one(first).await?;
        for definition in workloads.chain(services) {
            self.create_one(definition).await?;
        }

        Ok(instance)
    }

    async fn create_one(&self, definition: ResourceDefinition) -> Result<String, ApiError> {
        self.clients
            .create(definition)
            .await
            .map_err(|e| ApiError::internal("Create VNF error", e))
    }

    /// Delete the workload and a same-named service when one exists.
    pub async fn remove(&self, name: &str) -> Result<(), ApiError> {
        self.clients
            .workloads()
            .delete(name, DeleteParams::foreground())
            .await
            .map_err(|e| ApiError::internal("Delete VNF error", e))?;

        let service = self
            .clients
            .services()
            .get(name)
            .await
            .map_err(|e| ApiError::internal("Delete VNF error", e))?;

        if service.is_some() {
            self.clients
                .services()
                .delete(name, DeleteParams::foreground())
                .await
                .map_err(|e| ApiError::internal("Delete VNF error", e))?;
        }

        Ok(())
    }
}

/// Instantiate a VNF from its descriptor package.
#[actix_web::post("/vnf_instances")]
pub async fn create(
    service: Data<VnfInstanceService>,
    body: Bytes,
) -> Result<HttpResponse, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BodyEmpty);
    }

    let request: CreateVnfRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let instance_id = format!("{}_{}", request.csar_id, Uuid::new_v4());
    info!(instance_id = %instance_id, csar_url = %request.csar_url, "Instantiating VNF");

    let name = service.instantiate(&request).await?;
    Ok(HttpResponse::Created().json(GeneralResponse::new(format!("{}{}", RESPONSE_CREATED, name))))
}

/// List the VNF instances of the configured namespace.
#[actix_web::get("/vnf_instances")]
pub async fn list(service: Data<VnfInstanceService>) -> Result<HttpResponse, ApiError> {
    let names = service
        .clients
        .workloads()
        .list(service.list_limit)
        .await
        .map_err(|e| ApiError::internal("Get VNF list error", e))?;

    debug!(count = names.len(), "Listed VNF instances");
    Ok(HttpResponse::Accepted().json(ListVnfResponse {
        response: RESPONSE_LISTING.to_string(),
        vnf_instances: names,
    }))
}

#[actix_web::get("/vnf_instances/{name}")]
pub async fn get(
    service: Data<VnfInstanceService>,
    path: Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    let found = service
        .clients
        .workloads()
        .get(&name)
        .await
        .map_err(|e| ApiError::internal("Get VNF error", e))?;

    match found {
        Some(name) => Ok(HttpResponse::Ok().json(GeneralResponse::new(name))),
        None => Err(ApiError::NotFound(name)),
    }
}

/// Delete a VNF instance by name.
#[actix_web::delete("/vnf_instances/{name}")]
pub async fn delete(
    service: Data<VnfInstanceService>,
    path: Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    service.remove(&name).await?;

    info!(name = %name, "Deleted VNF instance");
    Ok(HttpResponse::Accepted().json(GeneralResponse::new(format!("{}{}", RESPONSE_DELETED, name))))
}
