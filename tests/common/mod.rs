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

//! In-memory cluster used by the integration tests

#![allow(dead_code)]

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::api::{DeleteParams, ListParams};
use kube::core::ErrorResponse;
use kube::{Resource, ResourceExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use vnf_kube::ResourceApi;

/// Objects of one kind, keyed by namespace and name.
pub struct FakeStore<K> {
    objects: Mutex<Vec<(String, K)>>,
    deletes: Mutex<Vec<(String, DeleteParams)>>,
    fail_with: Mutex<Option<u16>>,
    generated: AtomicUsize,
}

impl<K> Default for FakeStore<K> {
    fn default() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
            generated: AtomicUsize::new(0),
        }
    }
}

impl<K: Resource<DynamicType = ()> + Clone> FakeStore<K> {
    /// Make every following call fail with the given HTTP status.
    pub fn fail_with(&self, code: u16) {
        *self.fail_with.lock().unwrap() = Some(code);
    }

    pub fn names(&self, namespace: &str) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, o)| o.name_any())
            .collect()
    }

    pub fn deletes(&self) -> Vec<(String, DeleteParams)> {
        self.deletes.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), kube::Error> {
        match *self.fail_with.lock().unwrap() {
            Some(code) => Err(api_error(code, "Forced", "forced failure".to_string())),
            None => Ok(()),
        }
    }

    fn create(&self, namespace: &str, object: &K) -> Result<K, kube::Error> {
        self.check()?;

        let mut stored = object.clone();
        if stored.meta().name.is_none() {
            let prefix = stored.meta().generate_name.clone().unwrap_or_default();
            let n = self.generated.fetch_add(1, Ordering::SeqCst);
            stored.meta_mut().name = Some(format!("{}{}", prefix, n));
        }
        stored.meta_mut().namespace = Some(namespace.to_string());

        let name = stored.name_any();
        let mut objects = self.objects.lock().unwrap();
        if objects.iter().any(|(ns, o)| ns == namespace && o.name_any() == name) {
            return Err(api_error(
                409,
                "AlreadyExists",
                format!("{} \"{}\" already exists", K::kind(&()), name),
            ));
        }

        objects.push((namespace.to_string(), stored.clone()));
        Ok(stored)
    }

    fn list(&self, namespace: &str, params: &ListParams) -> Result<Vec<K>, kube::Error> {
        self.check()?;

        let limit = params.limit.map_or(usize::MAX, |l| l as usize);
        Ok(self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, o)| o.clone())
            .take(limit)
            .collect())
    }

    fn delete(&self, namespace: &str, name: &str, params: &DeleteParams) -> Result<(), kube::Error> {
        self.check()?;

        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|(ns, o)| !(ns == namespace && o.name_any() == name));
        if objects.len() == before {
            return Err(api_error(
                404,
                "NotFound",
                format!("{} \"{}\" not found", K::kind(&()), name),
            ));
        }

        self.deletes
            .lock()
            .unwrap()
            .push((name.to_string(), params.clone()));
        Ok(())
    }
}

fn api_error(code: u16, reason: &str, message: String) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message,
        reason: reason.to_string(),
        code,
    })
}

/// Cheaply cloneable cluster; clones share state.
#[derive(Clone, Default)]
pub struct FakeCluster {
    pub deployments: Arc<FakeStore<Deployment>>,
    pub services: Arc<FakeStore<Service>>,
}

#[async_trait::async_trait]
impl ResourceApi<Deployment> for FakeCluster {
    async fn create(&self, namespace: &str, object: &Deployment) -> Result<Deployment, kube::Error> {
        self.deployments.create(namespace, object)
    }

    async fn list(&self, namespace: &str, params: &ListParams) -> Result<Vec<Deployment>, kube::Error> {
        self.deployments.list(namespace, params)
    }

    async fn delete(&self, namespace: &str, name: &str, params: &DeleteParams) -> Result<(), kube::Error> {
        self.deployments.delete(namespace, name, params)
    }
}

#[async_trait::async_trait]
impl ResourceApi<Service> for FakeCluster {
    async fn create(&self, namespace: &str, object: &Service) -> Result<Service, kube::Error> {
        self.services.create(namespace, object)
    }

    async fn list(&self, namespace: &str, params: &ListParams) -> Result<Vec<Service>, kube::Error> {
        self.services.list(namespace, params)
    }

    async fn delete(&self, namespace: &str, name: &str, params: &DeleteParams) -> Result<(), kube::Error> {
        self.services.delete(namespace, name, params)
    }
}

pub const DEPLOYMENT_YAML: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: vnf-web
  labels:
    app: vnf-web
spec:
  replicas: 1
  selector:
    matchLabels:
      app: vnf-web
  template:
    metadata:
      labels:
        app: vnf-web
    spec:
      containers:
        - name: web
          image: nginx:1.25
"#;

pub const SERVICE_YAML: &str = r#"
apiVersion: v1
kind: Service
metadata:
  name: vnf-web
spec:
  selector:
    app: vnf-web
  ports:
    - port: 80
"#;
