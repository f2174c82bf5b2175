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

use crate::cli::display::{TableRenderer, TemplateInfo};
use crate::domain::config::{apply_to_manifest_conf, parse_dynamic_configs, ManifestConf};
use crate::infrastructure::constants::{CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
use crate::infrastructure::kubernetes::resources::{
    RenderedResource, ResourceKind, ResourceRenderer,
};
use crate::shared::error::ManifestError;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ManifestError::config_error(format!(
                "Invalid output format: {}",
                s
            ))),
        }
    }
}

impl OutputFormat {
    pub fn format(&self, resource: &RenderedResource) -> Result<String, ManifestError> {
        match self {
            OutputFormat::Yaml => resource.to_yaml(),
            OutputFormat::Json => resource.to_json(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct RenderCommand {
    /// Resource kind (service, ingress, deployment, apiserver, pvc)
    #[arg(long, short = 'k')]
    pub kind: String,

    /// Template family name, e.g. "apiserver" for apiserver-dep.yaml
    #[arg(long)]
    pub name: String,

    /// Directory holding the resource templates
    #[arg(long)]
    pub resources_path: Option<PathBuf>,

    /// Cluster name
    #[arg(long)]
    pub cluster_name: Option<String>,

    /// Cluster address URL, e.g. https://cluster1.example.com:6443
    #[arg(long)]
    pub address_url: Option<String>,

    /// Node port allocated for the cluster apiserver
    #[arg(long)]
    pub node_port: Option<i32>,

    /// Datacenter owning the cluster
    #[arg(long)]
    pub datacenter: Option<String>,

    /// Externally reachable URL of the seed
    #[arg(long)]
    pub external_url: Option<String>,

    /// Advertise address for the apiserver, skips DNS resolution
    #[arg(long)]
    pub overwrite_host: Option<String>,

    /// Path to configuration file (master-manifests.toml)
    /// If not provided, reads MASTER_MANIFESTS_CONF or ./master-manifests.toml when present
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Output format (yaml, json)
    #[arg(long, short = 'o', default_value = "yaml")]
    pub output: String,

    /// Dynamic configuration properties to override any settings (-D key=value)
    ///
    /// Renderer: renderer.resources-path, renderer.datacenter, renderer.external-url,
    /// renderer.overwrite-host
    /// Cluster: cluster.name, cluster.address-url, cluster.node-port
    ///
    /// Example: -Drenderer.datacenter=europe-west3-c -Dcluster.node-port=30443
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl RenderCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let kind = self.kind.parse::<ResourceKind>()?;
        let format = self.output.parse::<OutputFormat>()?;
        let conf = self.resolve_conf()?;

        let cluster = conf.descriptor();
        if cluster.name.is_empty() {
            anyhow::bail!("cluster name is required (use --cluster-name)");
        }

        tracing::info!(
            "Rendering {} template '{}' from {} for cluster {}",
            kind,
            self.name,
            conf.renderer.resources_path.display(),
            cluster.name
        );

        let renderer = ResourceRenderer::new();
        let resource = renderer.render(
            kind,
            &conf.renderer.resources_path,
            &self.name,
            &cluster,
            conf.renderer.overwrite_host(),
        )?;

        println!("{}", format.format(&resource)?);
        Ok(())
    }

    /// Priority: -D properties > command line > config file > defaults
    pub fn resolve_conf(&self) -> anyhow::Result<ManifestConf> {
        let mut conf = load_conf(self.config_file.as_deref())?;

        if let Some(ref path) = self.resources_path {
            conf.renderer.resources_path = path.clone();
        }
        if let Some(ref dc) = self.datacenter {
            conf.renderer.datacenter = dc.clone();
        }
        if let Some(ref url) = self.external_url {
            conf.renderer.external_url = url.clone();
        }
        if let Some(ref host) = self.overwrite_host {
            conf.renderer.overwrite_host = Some(host.clone());
        }
        if let Some(ref name) = self.cluster_name {
            conf.cluster.name = name.clone();
        }
        if let Some(ref url) = self.address_url {
            conf.cluster.address_url = url.clone();
        }
        if let Some(port) = self.node_port {
            conf.cluster.node_port = port;
        }

        if !self.properties.is_empty() {
            let dynamic_configs = parse_dynamic_configs(&self.properties)
                .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
            apply_to_manifest_conf(&dynamic_configs, &mut conf);
        }

        conf.renderer.validate()?;
        Ok(conf)
    }
}

#[derive(Parser, Debug, Clone)]
pub struct TemplatesCommand {
    /// Template family name
    #[arg(long)]
    pub name: String,

    /// Directory holding the resource templates
    #[arg(long)]
    pub resources_path: Option<PathBuf>,

    /// Path to configuration file (master-manifests.toml)
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,
}

impl TemplatesCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let conf = load_conf(self.config_file.as_deref())?;
        let resources_path = self
            .resources_path
            .clone()
            .unwrap_or(conf.renderer.resources_path);

        let templates = TemplateInfo::scan(&resources_path, &self.name);
        let output = TableRenderer::new().render_templates_list(&self.name, &templates);
        println!("{}", output);

        Ok(())
    }
}

/// Load configuration: explicit path > MASTER_MANIFESTS_CONF > ./master-manifests.toml > defaults
fn load_conf(config_file: Option<&str>) -> anyhow::Result<ManifestConf> {
    if let Some(path) = config_file {
        return Ok(ManifestConf::from_file(path)?);
    }

    if let Ok(env_path) = std::env::var(CONFIG_FILE_ENV) {
        return Ok(ManifestConf::from_file(env_path)?);
    }

    if Path::new(DEFAULT_CONFIG_FILE).is_file() {
        return Ok(ManifestConf::from_file(DEFAULT_CONFIG_FILE)?);
    }

    tracing::debug!("No configuration file found, using default settings");
    Ok(ManifestConf::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_command(args: &[&str]) -> RenderCommand {
        let mut argv = vec!["render"];
        argv.extend_from_slice(args);
        RenderCommand::parse_from(argv)
    }

    #[test]
    fn test_output_format() {
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("master-manifests.toml");
        std::fs::write(
            &config_path,
            "[renderer]\ndatacenter = \"dc-file\"\n\n[cluster]\nname = \"from-file\"\nnode-port = 30001\n",
        )
        .unwrap();

        let cmd = render_command(&[
            "--kind",
            "service",
            "--name",
            "apiserver",
            "--config-file",
            config_path.to_str().unwrap(),
            "--cluster-name",
            "from-flag",
            "-D",
            "cluster.node-port=30443",
        ]);

        let conf = cmd.resolve_conf().unwrap();
        assert_eq!(conf.cluster.name, "from-flag");
        assert_eq!(conf.cluster.node_port, 30443);
        assert_eq!(conf.renderer.datacenter, "dc-file");
    }
}
