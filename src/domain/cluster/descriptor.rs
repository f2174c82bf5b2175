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

use serde::{Deserialize, Serialize};

/// Address under which a managed cluster's apiserver is published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAddress {
    /// Public URL, e.g. `https://cluster1.example.com:6443`
    pub url: String,
    /// Node port allocated for the apiserver
    pub node_port: i32,
}

impl ClusterAddress {
    pub fn new(url: impl Into<String>, node_port: i32) -> Self {
        Self {
            url: url.into(),
            node_port,
        }
    }
}

/// Snapshot of a managed cluster as seen by the controller.
///
/// Every value a master resource template can reference is derived from this
/// struct; nothing is read from the surrounding controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDescriptor {
    pub name: String,
    pub address: ClusterAddress,
    /// Datacenter owning the cluster's master components
    pub datacenter: String,
    /// Externally reachable URL of the seed, used for ingress hosts
    pub external_url: String,
}

impl ClusterDescriptor {
    pub fn new(name: impl Into<String>, address: ClusterAddress) -> Self {
        Self {
            name: name.into(),
            address,
            ..Default::default()
        }
    }

    pub fn with_datacenter(mut self, datacenter: impl Into<String>) -> Self {
        self.datacenter = datacenter.into();
        self
    }

    pub fn with_external_url(mut self, external_url: impl Into<String>) -> Self {
        self.external_url = external_url.into();
        self
    }
}
