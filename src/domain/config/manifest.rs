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

use crate::domain::cluster::{ClusterAddress, ClusterDescriptor};
use crate::infrastructure::constants::DEFAULT_RESOURCES_PATH;
use crate::shared::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Top-level configuration file (`master-manifests.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManifestConf {
    pub renderer: RendererConfig,
    pub cluster: ClusterConf,
}

/// Controller-level settings shared by every render call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct RendererConfig {
    pub resources_path: PathBuf,
    pub datacenter: String,
    pub external_url: String,
    pub overwrite_host: Option<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            resources_path: PathBuf::from(DEFAULT_RESOURCES_PATH),
            datacenter: String::new(),
            external_url: String::new(),
            overwrite_host: None,
        }
    }
}

impl RendererConfig {
    /// Operator override for the apiserver advertise address, if set and non-empty.
    pub fn overwrite_host(&self) -> Option<&str> {
        self.overwrite_host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if self.resources_path.as_os_str().is_empty() {
            return Err(ManifestError::config_error("resources-path must not be empty"));
        }
        Ok(())
    }
}

/// Cluster section of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClusterConf {
    pub name: String,
    pub address_url: String,
    pub node_port: i32,
}

impl ManifestConf {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            ManifestError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        conf.renderer.validate()?;
        Ok(conf)
    }

    /// Build the descriptor handed to the renderer from the cluster and
    /// controller settings.
    pub fn descriptor(&self) -> ClusterDescriptor {
        ClusterDescriptor::new(
            self.cluster.name.clone(),
            ClusterAddress::new(self.cluster.address_url.clone(), self.cluster.node_port),
        )
        .with_datacenter(self.renderer.datacenter.clone())
        .with_external_url(self.renderer.external_url.clone())
    }
}
