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

//! Typed resource definitions

use crate::infrastructure::constants::{
    DEFAULT_NAMESPACE, KIND_DEPLOYMENT, KIND_SERVICE, MAX_LABEL_LEN, MAX_OBJECT_NAME_LEN,
};
use crate::shared::error::KrdError;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::Resource;

/// A validated resource object ready to be submitted to the cluster.
///
/// The namespace is always populated (the default namespace is substituted
/// when the source document names none) and the object carries either a
/// valid name or a `generateName` prefix. A definition cannot be modified
/// once built and is consumed by `create`.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition<K> {
    object: K,
}

pub type WorkloadDefinition = Definition<Deployment>;
pub type ServiceDefinition = Definition<Service>;

impl<K> Definition<K>
where
    K: Resource<DynamicType = ()>,
{
    pub fn new(mut object: K) -> Result<Self, KrdError> {
        let kind = K::kind(&()).to_string();
        let meta = object.meta_mut();

        if meta.namespace.as_deref().map_or(true, str::is_empty) {
            meta.namespace = Some(DEFAULT_NAMESPACE.to_string());
        }

        match meta.name.as_deref() {
            Some(name) if !name.is_empty() => {
                let valid = if kind == KIND_SERVICE {
                    is_dns1035_label(name)
                } else {
                    is_valid_k8s_name(name)
                };
                if !valid {
                    return Err(KrdError::InvalidResource(format!(
                        "{} name '{}' is not a valid object name",
                        kind, name
                    )));
                }
            }
            _ => {
                meta.name = None;
                if meta.generate_name.as_deref().map_or(true, str::is_empty) {
                    return Err(KrdError::InvalidResource(format!(
                        "{} requires metadata.name or metadata.generateName",
                        kind
                    )));
                }
            }
        }

        Ok(Self { object })
    }

    /// Object name, or the `generateName` prefix when the cluster assigns the name.
    pub fn name(&self) -> &str {
        let meta = self.object.meta();
        meta.name
            .as_deref()
            .or(meta.generate_name.as_deref())
            .unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.object
            .meta()
            .namespace
            .as_deref()
            .unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn object(&self) -> &K {
        &self.object
    }

    pub fn into_object(self) -> K {
        self.object
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Workload,
    Service,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Workload => KIND_DEPLOYMENT,
            ResourceKind::Service => KIND_SERVICE,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = KrdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deployment" | "deploy" | "workload" => Ok(ResourceKind::Workload),
            "service" | "svc" => Ok(ResourceKind::Service),
            _ => Err(KrdError::UnknownKind(s.to_string())),
        }
    }
}

/// A decoded resource document, one variant per supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceDefinition {
    Workload(WorkloadDefinition),
    Service(ServiceDefinition),
}

impl ResourceDefinition {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDefinition::Workload(_) => ResourceKind::Workload,
            ResourceDefinition::Service(_) => ResourceKind::Service,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResourceDefinition::Workload(d) => d.name(),
            ResourceDefinition::Service(d) => d.name(),
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            ResourceDefinition::Workload(d) => d.namespace(),
            ResourceDefinition::Service(d) => d.namespace(),
        }
    }

    pub fn as_workload(&self) -> Option<&WorkloadDefinition> {
        match self {
            ResourceDefinition::Workload(d) => Some(d),
            ResourceDefinition::Service(_) => None,
        }
    }

    pub fn as_service(&self) -> Option<&ServiceDefinition> {
        match self {
            ResourceDefinition::Service(d) => Some(d),
            ResourceDefinition::Workload(_) => None,
        }
    }
}

impl From<WorkloadDefinition> for ResourceDefinition {
    fn from(definition: WorkloadDefinition) -> Self {
        ResourceDefinition::Workload(definition)
    }
}

impl From<ServiceDefinition> for ResourceDefinition {
    fn from(definition: ServiceDefinition) -> Self {
        ResourceDefinition::Service(definition)
    }
}

/// DNS-1123 subdomain: dot-separated labels, at most 253 characters.
pub(crate) fn is_valid_k8s_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_OBJECT_NAME_LEN && name.split('.').all(is_dns1123_label)
}

/// DNS-1123 label: lowercase alphanumerics and '-', alphanumeric at both ends.
pub(crate) fn is_dns1123_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }

    let bytes = label.as_bytes();
    let alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    alnum(bytes[0])
        && alnum(bytes[bytes.len() - 1])
        && bytes.iter().all(|&b| alnum(b) || b == b'-')
}

/// DNS-1035 label, required for Service names: a DNS-1123 label starting with a letter.
pub(crate) fn is_dns1035_label(label: &str) -> bool {
    is_dns1123_label(label) && label.as_bytes()[0].is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn deployment(name: Option<&str>, namespace: Option<&str>) -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                name: name.map(str::to_string),
                namespace: namespace.map(str::to_string),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_namespace_defaults_when_absent_or_empty() {
        let absent = WorkloadDefinition::new(deployment(Some("web"), None)).unwrap();
        assert_eq!(absent.namespace(), "default");

        let empty = WorkloadDefinition::new(deployment(Some("web"), Some(""))).unwrap();
        assert_eq!(empty.namespace(), "default");
        assert_eq!(
            empty.object().metadata.namespace.as_deref(),
            Some("default")
        );
    }

    #[test]
    fn test_explicit_namespace_is_kept() {
        let def = WorkloadDefinition::new(deployment(Some("web"), Some("ns1"))).unwrap();
        assert_eq!(def.namespace(), "ns1");
        assert_eq!(def.name(), "web");
    }

    #[test]
    fn test_name_or_generate_name_required() {
        let err = WorkloadDefinition::new(deployment(None, None)).unwrap_err();
        assert!(matches!(err, KrdError::InvalidResource(_)));

        let mut generated = deployment(Some(""), None);
        generated.metadata.generate_name = Some("web-".to_string());
        let def = WorkloadDefinition::new(generated).unwrap();
        assert_eq!(def.name(), "web-");
        assert!(def.object().metadata.name.is_none());
    }

    #[test]
    fn test_invalid_name_rejected() {
        let err = WorkloadDefinition::new(deployment(Some("Web_Server"), None)).unwrap_err();
        assert!(err.to_string().contains("Web_Server"));
    }

    #[test]
    fn test_resource_kind_from_str() {
        assert_eq!("deployment".parse::<ResourceKind>().unwrap(), ResourceKind::Workload);
        assert_eq!("Service".parse::<ResourceKind>().unwrap(), ResourceKind::Service);
        assert_eq!("svc".parse::<ResourceKind>().unwrap(), ResourceKind::Service);
        assert!("configmap".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_is_valid_k8s_name() {
        assert!(is_valid_k8s_name("sise-deploy"));
        assert!(is_valid_k8s_name("vnf1.example"));
        assert!(!is_valid_k8s_name("-leading"));
        assert!(!is_valid_k8s_name("trailing-"));
        assert!(!is_valid_k8s_name("UPPER"));
        assert!(!is_valid_k8s_name(&"a".repeat(254)));
        assert!(!is_valid_k8s_name("a..b"));
        assert!(!is_valid_k8s_name("a.-b"));
        assert!(!is_valid_k8s_name("a-.b"));
        assert!(!is_valid_k8s_name(&format!("{}.b", "a".repeat(64))));
    }

    #[test]
    fn test_dns_labels() {
        assert!(is_dns1123_label("1web"));
        assert!(!is_dns1123_label("web.example"));
        assert!(!is_dns1123_label(&"a".repeat(64)));

        assert!(is_dns1035_label("web-1"));
        assert!(!is_dns1035_label("1web"));
        assert!(!is_dns1035_label("web.example"));
    }

    #[test]
    fn test_service_name_must_be_dns1035_label() {
        fn service(name: &str) -> Service {
            Service {
                metadata: ObjectMeta {
                    name: Some(name.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            }
        }

        assert!(ServiceDefinition::new(service("vnf-web")).is_ok());
        let long = "s".repeat(64);
        for name in ["vnf.web", "1web", long.as_str()] {
            let err = ServiceDefinition::new(service(name)).unwrap_err();
            assert!(matches!(err, KrdError::InvalidResource(_)), "{}", name);
        }

        // Deployments still accept dotted subdomain names.
        assert!(WorkloadDefinition::new(deployment(Some("vnf.web"), None)).is_ok());
    }
}
