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

use crate::domain::config::PluginConf;
use std::collections::HashMap;
use tracing::warn;

/// Apply `-D key=value` overrides on top of a loaded configuration.
///
/// Unknown keys are ignored. Values that fail to parse are logged and skipped.
pub fn apply_to_plugin_conf(configs: &HashMap<String, String>, conf: &mut PluginConf) {
    if let Some(bind) = configs.get("server.bind") {
        conf.server.bind = bind.clone();
    }

    if let Some(workers_str) = configs.get("server.workers") {
        match workers_str.parse::<usize>() {
            Ok(workers) => conf.server.workers = Some(workers),
            Err(_) => warn!(value = %workers_str, "Ignoring invalid server.workers"),
        }
    }

    if let Some(path) = configs.get("kubernetes.config.file") {
        conf.kubernetes.kubeconfig = non_empty(path);
    }

    if let Some(context) = configs.get("kubernetes.context") {
        conf.kubernetes.context = non_empty(context);
    }

    if let Some(namespace) = configs.get("kubernetes.namespace") {
        conf.kubernetes.namespace = namespace.clone();
    }

    if let Some(limit_str) = configs.get("vnf.list-limit") {
        match limit_str.parse::<u32>() {
            Ok(limit) => conf.vnf.list_limit = limit,
            Err(_) => warn!(value = %limit_str, "Ignoring invalid vnf.list-limit"),
        }
    }

    if let Some(root) = configs.get("vnf.csar-root") {
        conf.vnf.csar_root = root.clone();
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_overrides_apply() {
        let mut conf = PluginConf::default();
        apply_to_plugin_conf(
            &configs(&[
                ("server.bind", "127.0.0.1:9000"),
                ("server.workers", "2"),
                ("kubernetes.config.file", "/tmp/kubeconfig"),
                ("kubernetes.namespace", "ns1"),
                ("vnf.list-limit", "50"),
                ("vnf.csar-root", "/srv/csar"),
            ]),
            &mut conf,
        );

        assert_eq!(conf.server.bind, "127.0.0.1:9000");
        assert_eq!(conf.server.workers, Some(2));
        assert_eq!(conf.kubernetes.kubeconfig.as_deref(), Some("/tmp/kubeconfig"));
        assert_eq!(conf.kubernetes.namespace, "ns1");
        assert_eq!(conf.vnf.list_limit, 50);
        assert_eq!(conf.vnf.csar_root, "/srv/csar");
    }

    #[test]
    fn test_invalid_numbers_are_skipped() {
        let mut conf = PluginConf::default();
        apply_to_plugin_conf(
            &configs(&[("vnf.list-limit", "lots"), ("server.workers", "-1")]),
            &mut conf,
        );

        assert_eq!(conf.vnf.list_limit, 10);
        assert_eq!(conf.server.workers, None);
    }

    #[test]
    fn test_empty_context_clears() {
        let mut conf = PluginConf::default();
        conf.kubernetes.context = Some("edge".to_string());
        apply_to_plugin_conf(&configs(&[("kubernetes.context", "")]), &mut conf);
        assert!(conf.kubernetes.context.is_none());
    }
}
