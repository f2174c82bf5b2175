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

use crate::domain::cluster::ClusterDescriptor;
use crate::infrastructure::kubernetes::resources::kind::{RenderedResource, ResourceKind};
use crate::infrastructure::kubernetes::resources::params::RenderParameters;
use crate::infrastructure::kubernetes::resources::template::ResourceTemplate;
use crate::infrastructure::network::{resolve_advertise_address, HostResolver, SystemResolver};
use crate::shared::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Service};
use k8s_openapi::api::networking::v1::Ingress;
use std::path::Path;

/// Renders master resource templates into typed Kubernetes objects.
///
/// Holds nothing but the resolver, so a single renderer can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct ResourceRenderer<R = SystemResolver> {
    resolver: R,
}

impl ResourceRenderer<SystemResolver> {
    pub fn new() -> Self {
        Self {
            resolver: SystemResolver,
        }
    }
}

impl<R: HostResolver> ResourceRenderer<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Render `<base_path>/<resource_name><suffix>.yaml` for `kind`.
    ///
    /// `overwrite_host` is only consulted for [`ResourceKind::ApiserverDeployment`].
    pub fn render(
        &self,
        kind: ResourceKind,
        base_path: &Path,
        resource_name: &str,
        cluster: &ClusterDescriptor,
        overwrite_host: Option<&str>,
    ) -> Result<RenderedResource> {
        let resource = match kind {
            ResourceKind::Service => RenderedResource::Service(self.load(
                kind,
                base_path,
                resource_name,
                cluster,
                overwrite_host,
            )?),
            ResourceKind::Ingress => RenderedResource::Ingress(self.load(
                kind,
                base_path,
                resource_name,
                cluster,
                overwrite_host,
            )?),
            ResourceKind::Deployment | ResourceKind::ApiserverDeployment => {
                RenderedResource::Deployment(self.load(
                    kind,
                    base_path,
                    resource_name,
                    cluster,
                    overwrite_host,
                )?)
            }
            ResourceKind::PersistentVolumeClaim => {
                RenderedResource::PersistentVolumeClaim(self.load(
                    kind,
                    base_path,
                    resource_name,
                    cluster,
                    overwrite_host,
                )?)
            }
        };

        tracing::debug!(
            "Rendered {} {} for cluster {}",
            resource.object_kind(),
            resource.name().unwrap_or("<unnamed>"),
            cluster.name
        );
        Ok(resource)
    }

    /// Assemble the substitution values for `kind`.
    pub fn parameters(
        &self,
        kind: ResourceKind,
        cluster: &ClusterDescriptor,
        overwrite_host: Option<&str>,
    ) -> Result<RenderParameters> {
        let params = match kind {
            ResourceKind::Service => RenderParameters::service(cluster),
            ResourceKind::Ingress => RenderParameters::ingress(cluster),
            ResourceKind::Deployment => RenderParameters::deployment(cluster),
            ResourceKind::ApiserverDeployment => {
                let advertise_address = resolve_advertise_address(
                    &self.resolver,
                    &cluster.address.url,
                    overwrite_host,
                )?;
                RenderParameters::apiserver(cluster, advertise_address)
            }
            ResourceKind::PersistentVolumeClaim => RenderParameters::pvc(cluster),
        };
        Ok(params)
    }

    pub fn load_service(
        &self,
        base_path: &Path,
        resource_name: &str,
        cluster: &ClusterDescriptor,
    ) -> Result<Service> {
        self.load(ResourceKind::Service, base_path, resource_name, cluster, None)
    }

    pub fn load_ingress(
        &self,
        base_path: &Path,
        resource_name: &str,
        cluster: &ClusterDescriptor,
    ) -> Result<Ingress> {
        self.load(ResourceKind::Ingress, base_path, resource_name, cluster, None)
    }

    pub fn load_deployment(
        &self,
        base_path: &Path,
        resource_name: &str,
        cluster: &ClusterDescriptor,
    ) -> Result<Deployment> {
        self.load(ResourceKind::Deployment, base_path, resource_name, cluster, None)
    }

    pub fn load_apiserver(
        &self,
        base_path: &Path,
        resource_name: &str,
        cluster: &ClusterDescriptor,
        overwrite_host: Option<&str>,
    ) -> Result<Deployment> {
        self.load(
            ResourceKind::ApiserverDeployment,
            base_path,
            resource_name,
            cluster,
            overwrite_host,
        )
    }

    pub fn load_pvc(
        &self,
        base_path: &Path,
        resource_name: &str,
        cluster: &ClusterDescriptor,
    ) -> Result<PersistentVolumeClaim> {
        self.load(
            ResourceKind::PersistentVolumeClaim,
            base_path,
            resource_name,
            cluster,
            None,
        )
    }

    /// Template load, parameter assembly and decode shared by every kind.
    fn load<K: serde::de::DeserializeOwned>(
        &self,
        kind: ResourceKind,
        base_path: &Path,
        resource_name: &str,
        cluster: &ClusterDescriptor,
        overwrite_host: Option<&str>,
    ) -> Result<K> {
        let template = ResourceTemplate::load(base_path, resource_name, kind)?;
        let params = self.parameters(kind, cluster, overwrite_host)?;
        template.execute(&params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cluster::ClusterAddress;
    use crate::infrastructure::network::StaticResolver;

    fn cluster(url: &str) -> ClusterDescriptor {
        ClusterDescriptor::new("cluster1", ClusterAddress::new(url, 30443))
            .with_datacenter("dc1")
            .with_external_url("seed.example.com")
    }

    #[test]
    fn test_apiserver_parameters_use_overwrite_host() {
        let renderer = ResourceRenderer::with_resolver(StaticResolver::new());
        let params = renderer
            .parameters(
                ResourceKind::ApiserverDeployment,
                &cluster("https://cluster1.example.com:6443"),
                Some("10.0.0.5"),
            )
            .unwrap();

        match params {
            RenderParameters::Apiserver(p) => {
                assert_eq!(p.advertise_address, "10.0.0.5");
                assert_eq!(p.secure_port, 30443);
            }
            other => panic!("unexpected parameters: {:?}", other),
        }
    }

    #[test]
    fn test_overwrite_host_ignored_for_other_kinds() {
        let renderer = ResourceRenderer::with_resolver(StaticResolver::new());
        let params = renderer
            .parameters(ResourceKind::Service, &cluster(""), Some("10.0.0.5"))
            .unwrap();
        assert_eq!(params, RenderParameters::service(&cluster("")));
    }

    #[test]
    fn test_bad_address_fails_before_lookup() {
        let renderer = ResourceRenderer::with_resolver(StaticResolver::new());
        let err = renderer
            .parameters(ResourceKind::ApiserverDeployment, &cluster(""), None)
            .unwrap_err();
        assert!(err.is_address_parse());
    }
}
