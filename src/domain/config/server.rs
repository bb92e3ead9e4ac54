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

use crate::domain::definition::model::is_dns1123_label;
use crate::infrastructure::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_CSAR_ROOT, DEFAULT_LIST_LIMIT, DEFAULT_NAMESPACE,
};
use crate::infrastructure::kubernetes::ConnectionDescriptor;
use crate::shared::error::{KrdError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

/// Plugin configuration loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PluginConf {
    pub server: ServerConf,
    pub kubernetes: KubernetesConf,
    pub vnf: VnfConf,
}

impl PluginConf {
    /// Load configuration from TOML file
    pub fn from<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| KrdError::read(path, e))?;
        let conf: Self = toml::from_str(&content)?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.bind.trim().is_empty() {
            return Err(KrdError::config_error("server.bind must not be empty"));
        }

        if self.server.workers == Some(0) {
            return Err(KrdError::config_error("server.workers must be > 0"));
        }

        if self.vnf.list_limit == 0 {
            return Err(KrdError::config_error("vnf.list_limit must be > 0"));
        }

        let ns = &self.kubernetes.namespace;
        if !is_dns1123_label(ns) {
            return Err(KrdError::config_error(format!(
                "Invalid kubernetes.namespace: '{}'",
                ns
            )));
        }

        Ok(())
    }

    pub fn connection_descriptor(&self) -> ConnectionDescriptor {
        ConnectionDescriptor::from_path(self.kubernetes.kubeconfig.as_deref().unwrap_or(""))
            .with_context(self.kubernetes.context.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConf {
    pub bind: String,
    /// Worker threads for the HTTP server; actix picks one per core when unset.
    pub workers: Option<usize>,
}

impl Default for ServerConf {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KubernetesConf {
    pub kubeconfig: Option<String>,
    pub context: Option<String>,
    pub namespace: String,
}

impl Default for KubernetesConf {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VnfConf {
    pub list_limit: u32,
    pub csar_root: String,
}

impl Default for VnfConf {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
            csar_root: DEFAULT_CSAR_ROOT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let conf = PluginConf::default();
        assert_eq!(conf.server.bind, "0.0.0.0:8081");
        assert_eq!(conf.kubernetes.namespace, "default");
        assert_eq!(conf.vnf.list_limit, 10);
        assert!(conf.validate().is_ok());
        assert_eq!(conf.connection_descriptor(), ConnectionDescriptor::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[kubernetes]\nkubeconfig = \"/etc/kube/config\"\ncontext = \"edge\"\nnamespace = \"vnf\"\n\n[vnf]\nlist_limit = 25"
        )
        .unwrap();

        let conf = PluginConf::from(file.path()).unwrap();
        assert_eq!(conf.server, ServerConf::default());
        assert_eq!(conf.kubernetes.namespace, "vnf");
        assert_eq!(conf.vnf.list_limit, 25);
        assert_eq!(conf.vnf.csar_root, DEFAULT_CSAR_ROOT);

        let descriptor = conf.connection_descriptor();
        assert_eq!(descriptor.kubeconfig, Some(PathBuf::from("/etc/kube/config")));
        assert_eq!(descriptor.context.as_deref(), Some("edge"));
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            PluginConf::from("/nonexistent/vnf-kube.toml"),
            Err(KrdError::Read { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[vnf]\nlist_limit = \"many\"").unwrap();
        assert!(matches!(
            PluginConf::from(file.path()),
            Err(KrdError::TomlParse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut conf = PluginConf::default();
        conf.vnf.list_limit = 0;
        assert!(conf.validate().is_err());

        let mut conf = PluginConf::default();
        conf.server.bind = " ".to_string();
        assert!(conf.validate().is_err());

        let mut conf = PluginConf::default();
        conf.kubernetes.namespace = "Bad_Namespace".to_string();
        assert!(conf.validate().is_err());

        let mut conf = PluginConf::default();
        conf.kubernetes.namespace = "a.b".to_string();
        assert!(conf.validate().is_err());
    }
}
