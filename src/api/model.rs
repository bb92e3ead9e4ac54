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

//! Request and response payloads of the VNF instance API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters of a VNF instantiation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreateVnfRequest {
    pub csar_id: String,
    pub csar_url: String,
    pub oof_parameters: OofParameters,
    #[serde(rename = "vnfdId")]
    pub vnfd_id: String,
    #[serde(rename = "vnfInstanceName")]
    pub name: String,
    #[serde(rename = "vnfInstanceDescription")]
    pub description: String,
}

/// Placement hints supplied by the optimization framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OofParameters {
    pub key_values: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralResponse {
    pub response: String,
}

impl GeneralResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListVnfResponse {
    pub response: String,
    pub vnf_instances: Vec<String>,
}
