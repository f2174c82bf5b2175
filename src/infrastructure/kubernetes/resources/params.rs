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

//! Substitution values per resource kind.
//!
//! Field names are serialized with the placeholder names used by the
//! templates (`SecurePort`, `DC`, `ClusterName`, ...). Each variant carries
//! exactly the values its kind may reference; anything else is undefined
//! at render time.

use crate::domain::cluster::ClusterDescriptor;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceParams {
    #[serde(rename = "SecurePort")]
    pub secure_port: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngressParams {
    #[serde(rename = "DC")]
    pub datacenter: String,
    #[serde(rename = "ClusterName")]
    pub cluster_name: String,
    #[serde(rename = "ExternalURL")]
    pub external_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentParams {
    #[serde(rename = "DC")]
    pub datacenter: String,
    #[serde(rename = "ClusterName")]
    pub cluster_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiserverParams {
    #[serde(rename = "AdvertiseAddress")]
    pub advertise_address: String,
    #[serde(rename = "SecurePort")]
    pub secure_port: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PvcParams {
    #[serde(rename = "ClusterName")]
    pub cluster_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderParameters {
    Service(ServiceParams),
    Ingress(IngressParams),
    Deployment(DeploymentParams),
    Apiserver(ApiserverParams),
    PersistentVolumeClaim(PvcParams),
}

impl RenderParameters {
    pub fn service(cluster: &ClusterDescriptor) -> Self {
        Self::Service(ServiceParams {
            secure_port: cluster.address.node_port,
        })
    }

    pub fn ingress(cluster: &ClusterDescriptor) -> Self {
        Self::Ingress(IngressParams {
            datacenter: cluster.datacenter.clone(),
            cluster_name: cluster.name.clone(),
            external_url: cluster.external_url.clone(),
        })
    }

    pub fn deployment(cluster: &ClusterDescriptor) -> Self {
        Self::Deployment(DeploymentParams {
            datacenter: cluster.datacenter.clone(),
            cluster_name: cluster.name.clone(),
        })
    }

    /// The advertise address is resolved by the caller.
    pub fn apiserver(cluster: &ClusterDescriptor, advertise_address: String) -> Self {
        Self::Apiserver(ApiserverParams {
            advertise_address,
            secure_port: cluster.address.node_port,
        })
    }

    pub fn pvc(cluster: &ClusterDescriptor) -> Self {
        Self::PersistentVolumeClaim(PvcParams {
            cluster_name: cluster.name.clone(),
        })
    }
}
