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

use crate::domain::config::ManifestConf;
use std::collections::HashMap;
use std::path::PathBuf;

/// Apply `-D key=value` overrides on top of a loaded configuration.
pub fn apply_to_manifest_conf(configs: &HashMap<String, String>, conf: &mut ManifestConf) {
    if let Some(path) = configs.get("renderer.resources-path") {
        conf.renderer.resources_path = PathBuf::from(path);
    }

    if let Some(dc) = configs.get("renderer.datacenter") {
        conf.renderer.datacenter = dc.clone();
    }

    if let Some(url) = configs.get("renderer.external-url") {
        conf.renderer.external_url = url.clone();
    }

    if let Some(host) = configs.get("renderer.overwrite-host") {
        conf.renderer.overwrite_host = Some(host.clone());
    }

    if let Some(name) = configs.get("cluster.name") {
        conf.cluster.name = name.clone();
    }

    if let Some(url) = configs.get("cluster.address-url") {
        conf.cluster.address_url = url.clone();
    }

    if let Some(port_str) = configs.get("cluster.node-port") {
        match port_str.parse::<i32>() {
            Ok(port) => conf.cluster.node_port = port,
            Err(e) => tracing::warn!("Ignoring cluster.node-port '{}': {}", port_str, e),
        }
    }
}

/// Parse dynamic configuration properties from -D key=value format
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for config in configs {
        let (key, value) = config.split_once('=').ok_or_else(|| {
            format!("Invalid config format: '{}'. Expected 'key=value'", config)
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(format!("Empty key in config: '{}'", config));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}
