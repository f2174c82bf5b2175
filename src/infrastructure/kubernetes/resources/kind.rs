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

use crate::infrastructure::constants::{
    TEMPLATE_SUFFIX_DEPLOYMENT, TEMPLATE_SUFFIX_INGRESS, TEMPLATE_SUFFIX_PVC,
    TEMPLATE_SUFFIX_SERVICE,
};
use crate::shared::error::{ManifestError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Service};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;
use std::fmt;

/// Master resource kinds that can be rendered from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Service,
    Ingress,
    Deployment,
    /// Deployment whose template receives the apiserver advertise address
    ApiserverDeployment,
    PersistentVolumeClaim,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Service,
        ResourceKind::Ingress,
        ResourceKind::Deployment,
        ResourceKind::ApiserverDeployment,
        ResourceKind::PersistentVolumeClaim,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Service => "service",
            ResourceKind::Ingress => "ingress",
            ResourceKind::Deployment => "deployment",
            ResourceKind::ApiserverDeployment => "apiserver",
            ResourceKind::PersistentVolumeClaim => "pvc",
        }
    }

    /// Suffix appended to the resource name to form the template file name.
    pub fn template_suffix(&self) -> &'static str {
        match self {
            ResourceKind::Service => TEMPLATE_SUFFIX_SERVICE,
            ResourceKind::Ingress => TEMPLATE_SUFFIX_INGRESS,
            ResourceKind::Deployment | ResourceKind::ApiserverDeployment => {
                TEMPLATE_SUFFIX_DEPLOYMENT
            }
            ResourceKind::PersistentVolumeClaim => TEMPLATE_SUFFIX_PVC,
        }
    }

    /// Kubernetes object kind the template decodes into.
    pub fn object_kind(&self) -> &'static str {
        match self {
            ResourceKind::Service => "Service",
            ResourceKind::Ingress => "Ingress",
            ResourceKind::Deployment | ResourceKind::ApiserverDeployment => "Deployment",
            ResourceKind::PersistentVolumeClaim => "PersistentVolumeClaim",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "service" | "svc" => Ok(ResourceKind::Service),
            "ingress" | "ing" => Ok(ResourceKind::Ingress),
            "deployment" | "dep" => Ok(ResourceKind::Deployment),
            "apiserver" => Ok(ResourceKind::ApiserverDeployment),
            "pvc" | "persistentvolumeclaim" => Ok(ResourceKind::PersistentVolumeClaim),
            _ => Err(ManifestError::config_error(format!(
                "Invalid resource kind: {} (expected service, ingress, deployment, apiserver or pvc)",
                s
            ))),
        }
    }
}

/// A decoded master resource, ready to be applied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderedResource {
    Service(Service),
    Ingress(Ingress),
    Deployment(Deployment),
    PersistentVolumeClaim(PersistentVolumeClaim),
}

impl RenderedResource {
    pub fn object_kind(&self) -> &'static str {
        match self {
            RenderedResource::Service(_) => "Service",
            RenderedResource::Ingress(_) => "Ingress",
            RenderedResource::Deployment(_) => "Deployment",
            RenderedResource::PersistentVolumeClaim(_) => "PersistentVolumeClaim",
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            RenderedResource::Service(svc) => &svc.metadata,
            RenderedResource::Ingress(ing) => &ing.metadata,
            RenderedResource::Deployment(dep) => &dep.metadata,
            RenderedResource::PersistentVolumeClaim(pvc) => &pvc.metadata,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata().name.as_deref()
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_service(self) -> Option<Service> {
        match self {
            RenderedResource::Service(svc) => Some(svc),
            _ => None,
        }
    }

    pub fn into_ingress(self) -> Option<Ingress> {
        match self {
            RenderedResource::Ingress(ing) => Some(ing),
            _ => None,
        }
    }

    pub fn into_deployment(self) -> Option<Deployment> {
        match self {
            RenderedResource::Deployment(dep) => Some(dep),
            _ => None,
        }
    }

    pub fn into_pvc(self) -> Option<PersistentVolumeClaim> {
        match self {
            RenderedResource::PersistentVolumeClaim(pvc) => Some(pvc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_suffixes() {
        assert_eq!(ResourceKind::Service.template_suffix(), "-service");
        assert_eq!(ResourceKind::Ingress.template_suffix(), "-ingress");
        assert_eq!(ResourceKind::Deployment.template_suffix(), "-dep");
        assert_eq!(ResourceKind::ApiserverDeployment.template_suffix(), "-dep");
        assert_eq!(ResourceKind::PersistentVolumeClaim.template_suffix(), "-pvc");
    }

    #[test]
    fn test_parse_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
        assert_eq!(
            "Dep".parse::<ResourceKind>().unwrap(),
            ResourceKind::Deployment
        );
        assert!("statefulset".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_rendered_resource_accessors() {
        let svc = Service {
            metadata: ObjectMeta {
                name: Some("apiserver".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resource = RenderedResource::Service(svc);

        assert_eq!(resource.object_kind(), "Service");
        assert_eq!(resource.name(), Some("apiserver"));
        assert!(resource.to_yaml().unwrap().contains("name: apiserver"));
        assert!(resource.clone().into_deployment().is_none());
        assert!(resource.into_service().is_some());
    }
}
