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

// Core modules
pub mod api;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export commonly used types
pub use domain::config::PluginConf;
pub use domain::definition::{
    parse, parse_all, read_definition_file, ResourceDefinition, ResourceKind, ServiceDefinition,
    WorkloadDefinition,
};
pub use domain::package::{DescriptorSource, LocalDescriptorSource};
pub use infrastructure::kubernetes::{
    ClientFactory, ConnectionDescriptor, ConnectionResolver, KubeConnection, ResourceApi,
    ResourceClient, ResourceClients, ServiceClient, WorkloadClient,
};
pub use shared::{KrdError, Result};
