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

/// Namespace used when a definition or the configuration names none
pub const DEFAULT_NAMESPACE: &str = "default";

/// Resource kind discriminators
pub const KIND_DEPLOYMENT: &str = "Deployment";
pub const KIND_SERVICE: &str = "Service";

/// Kubernetes object names (DNS-1123 subdomain)
pub const MAX_OBJECT_NAME_LEN: usize = 253;

/// Descriptor package layout
pub const PACKAGE_DEPLOYMENT_FILE: &str = "deployment.yaml";
pub const PACKAGE_SERVICE_FILE: &str = "service.yaml";
pub const FILE_URL_PREFIX: &str = "file://";

/// HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8081";
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Response prefixes
pub const RESPONSE_CREATED: &str = "Created Deployment:";
pub const RESPONSE_LISTING: &str = "Listing:";
pub const RESPONSE_DELETED: &str = "Deletion complete:";

/// DNS-1123 / DNS-1035 labels (namespaces, Service names)
pub const MAX_LABEL_LEN: usize = 63;

/// Descriptor packages are resolved relative to this directory by default
pub const DEFAULT_CSAR_ROOT: &str = "/var/lib/vnf-kube/csar";
