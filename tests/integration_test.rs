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

#[cfg(test)]
mod tests {
    use master_manifests::domain::config::{apply_to_manifest_conf, parse_dynamic_configs};
    use master_manifests::*;
    use std::path::Path;

    const SERVICE_TEMPLATE: &str = "apiVersion: v1\n\
kind: Service\n\
metadata:\n  name: {{ ClusterName }}-apiserver\n";

    const APISERVER_TEMPLATE: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: apiserver
spec:
  selector:
    matchLabels:
      app: apiserver
  template:
    metadata:
      labels:
        app: apiserver
    spec:
      containers:
      - name: apiserver
        args:
        - "--advertise-address={{ AdvertiseAddress }}"
        - "--secure-port={{ SecurePort }}"
"#;

    fn write_config(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("master-manifests.toml");
        std::fs::write(
            &path,
            format!(
                r#"
[renderer]
resources-path = "{}"
datacenter = "us-central1"
external-url = "seed.example.com"

[cluster]
name = "cluster1"
address-url = "https://127.0.0.1:6443"
node-port = 30443
"#,
                dir.display()
            ),
        )
        .unwrap();
        path
    }

    fn advertise_arg(resource: RenderedResource) -> String {
        let dep = resource.into_deployment().unwrap();
        dep.spec.unwrap().template.spec.unwrap().containers[0]
            .args
            .clone()
            .unwrap()[0]
            .clone()
    }

    #[test]
    fn test_config_driven_render_with_system_resolver() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("apiserver-dep.yaml"), APISERVER_TEMPLATE).unwrap();
        let conf = ManifestConf::from_file(write_config(dir.path())).unwrap();

        let renderer = ResourceRenderer::new();
        let resource = renderer
            .render(
                ResourceKind::ApiserverDeployment,
                &conf.renderer.resources_path,
                "apiserver",
                &conf.descriptor(),
                conf.renderer.overwrite_host(),
            )
            .expect("Failed to render apiserver deployment");

        assert_eq!(advertise_arg(resource), "--advertise-address=127.0.0.1");
    }

    #[test]
    fn test_dynamic_overwrite_host() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("apiserver-dep.yaml"), APISERVER_TEMPLATE).unwrap();
        let mut conf = ManifestConf::from_file(write_config(dir.path())).unwrap();

        let configs = parse_dynamic_configs(&[
            "renderer.overwrite-host=10.0.0.5".to_string(),
            "cluster.address-url=https://cluster1.invalid:6443".to_string(),
        ])
        .unwrap();
        apply_to_manifest_conf(&configs, &mut conf);

        let resource = ResourceRenderer::new()
            .render(
                ResourceKind::ApiserverDeployment,
                &conf.renderer.resources_path,
                "apiserver",
                &conf.descriptor(),
                conf.renderer.overwrite_host(),
            )
            .expect("Failed to render apiserver deployment");

        assert_eq!(advertise_arg(resource), "--advertise-address=10.0.0.5");
    }

    #[test]
    fn test_service_template_rendering_and_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("apiserver-service.yaml"), SERVICE_TEMPLATE).unwrap();

        let cluster = ClusterDescriptor::new("cluster1", ClusterAddress::new("", 30443));
        let renderer = ResourceRenderer::with_resolver(StaticResolver::new());

        // Service placeholders do not include the cluster name
        let err = renderer
            .render(ResourceKind::Service, dir.path(), "apiserver", &cluster, None)
            .unwrap_err();
        assert!(err.is_substitution());

        std::fs::write(
            dir.path().join("apiserver-service.yaml"),
            "apiVersion: v1\nkind: Service\nmetadata:\n  name: apiserver-{{ SecurePort }}\n",
        )
        .unwrap();
        let resource = renderer
            .render(ResourceKind::Service, dir.path(), "apiserver", &cluster, None)
            .unwrap();

        assert_eq!(resource.name(), Some("apiserver-30443"));
        let yaml = resource.to_yaml().unwrap();
        assert!(yaml.contains("kind: Service"));
        let json = resource.to_json().unwrap();
        assert!(json.contains("\"name\": \"apiserver-30443\""));
    }

    #[test]
    fn test_bundled_sample_templates_render() {
        let resources = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
        let cluster = ClusterDescriptor::new(
            "sample",
            ClusterAddress::new("https://sample.example.com:6443", 30443),
        )
        .with_datacenter("dc1")
        .with_external_url("seed.example.com");
        let renderer = ResourceRenderer::with_resolver(StaticResolver::new());

        for (kind, name) in [
            (ResourceKind::Service, "apiserver"),
            (ResourceKind::Ingress, "k8sniff"),
            (ResourceKind::Deployment, "etcd"),
            (ResourceKind::ApiserverDeployment, "apiserver"),
            (ResourceKind::PersistentVolumeClaim, "etcd"),
        ] {
            let resource = renderer
                .render(kind, &resources, name, &cluster, Some("10.0.0.5"))
                .unwrap_or_else(|e| panic!("Failed to render {} sample: {}", kind, e));
            assert_eq!(resource.object_kind(), kind.object_kind());
        }
    }
}
