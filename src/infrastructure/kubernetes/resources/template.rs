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

use crate::infrastructure::constants::TEMPLATE_EXTENSION;
use crate::infrastructure::kubernetes::resources::kind::ResourceKind;
use crate::infrastructure::kubernetes::resources::params::RenderParameters;
use crate::shared::error::{ManifestError, Result};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Matches Go template field references such as `{{ .ClusterName }}`.
fn go_field_reference() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\{\{-?\s*)\.([A-Za-z_])").expect("field reference pattern is valid")
    })
}

/// Only `{{ ... }}` is shared with Go templates. Blocks and comments get
/// delimiters that cannot appear in shell snippets or format strings, so
/// text such as `${#PEERS}` or `{%s}` passes through untouched.
fn template_syntax() -> std::result::Result<SyntaxConfig, minijinja::Error> {
    SyntaxConfig::builder()
        .variable_delimiters("{{", "}}")
        .block_delimiters("{{%", "%}}")
        .comment_delimiters("{{/*", "*/}}")
        .build()
}

/// Strips the leading dot from Go-style field references so that templates
/// written as `{{ .SecurePort }}` render the same as `{{ SecurePort }}`.
pub fn normalize_field_references(source: &str) -> Cow<'_, str> {
    go_field_reference().replace_all(source, "${1}${2}")
}

pub fn template_path(base_path: &Path, resource_name: &str, kind: ResourceKind) -> PathBuf {
    base_path.join(format!(
        "{}{}.{}",
        resource_name,
        kind.template_suffix(),
        TEMPLATE_EXTENSION
    ))
}

/// A resource template read from disk. Not cached; every load hits the file.
#[derive(Debug, Clone)]
pub struct ResourceTemplate {
    kind: ResourceKind,
    path: PathBuf,
    source: String,
}

impl ResourceTemplate {
    pub fn load(base_path: &Path, resource_name: &str, kind: ResourceKind) -> Result<Self> {
        let path = template_path(base_path, resource_name, kind);

        if resource_name.is_empty() {
            return Err(ManifestError::template_not_found(
                &path,
                io::Error::new(io::ErrorKind::InvalidInput, "empty resource name"),
            ));
        }

        let source = std::fs::read_to_string(&path)
            .map_err(|e| ManifestError::template_not_found(&path, e))?;

        tracing::debug!("Loaded {} template {}", kind, path.display());

        Ok(Self { kind, path, source })
    }

    /// Substitute `params` into the template text.
    pub fn substitute(&self, params: &RenderParameters) -> Result<String> {
        let to_error = |source| ManifestError::Substitution {
            path: self.path.clone(),
            source,
        };

        let mut env = Environment::new();
        env.set_syntax(template_syntax().map_err(to_error)?);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        env.render_str(&normalize_field_references(&self.source), params)
            .map_err(to_error)
    }

    /// Decode substituted text into the target object.
    pub fn decode<K: DeserializeOwned>(&self, rendered: &str) -> Result<K> {
        serde_yaml::from_str(rendered).map_err(|source| ManifestError::Decode {
            kind: self.kind.object_kind(),
            path: self.path.clone(),
            source,
        })
    }

    pub fn execute<K: DeserializeOwned>(&self, params: &RenderParameters) -> Result<K> {
        let rendered = self.substitute(params)?;
        self.decode(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::resources::params::{PvcParams, ServiceParams};
    use k8s_openapi::api::core::v1::Service;

    fn template(source: &str) -> ResourceTemplate {
        ResourceTemplate {
            kind: ResourceKind::Service,
            path: PathBuf::from("apiserver-service.yaml"),
            source: source.to_string(),
        }
    }

    fn service_params(port: i32) -> RenderParameters {
        RenderParameters::Service(ServiceParams { secure_port: port })
    }

    #[test]
    fn test_template_path() {
        let path = template_path(Path::new("/srv/resources"), "apiserver", ResourceKind::Ingress);
        assert_eq!(path, PathBuf::from("/srv/resources/apiserver-ingress.yaml"));

        let path = template_path(
            Path::new("/srv/resources"),
            "apiserver",
            ResourceKind::ApiserverDeployment,
        );
        assert_eq!(path, PathBuf::from("/srv/resources/apiserver-dep.yaml"));
    }

    #[test]
    fn test_normalize_field_references() {
        assert_eq!(
            normalize_field_references("port: {{ .SecurePort }}"),
            "port: {{ SecurePort }}"
        );
        assert_eq!(
            normalize_field_references("name: {{- .ClusterName }}-etcd"),
            "name: {{- ClusterName }}-etcd"
        );
        assert_eq!(
            normalize_field_references("image: quay.io/coreos/etcd:v3.1.8"),
            "image: quay.io/coreos/etcd:v3.1.8"
        );
    }

    #[test]
    fn test_substitute_go_and_plain_syntax() {
        let tpl = template("a: {{ .SecurePort }}\nb: {{ SecurePort }}\n");
        assert_eq!(tpl.substitute(&service_params(443)).unwrap(), "a: 443\nb: 443\n");
    }

    #[test]
    fn test_shell_and_format_braces_pass_through() {
        let tpl = template(
            "command: 'echo ${#PEERS} peers on {{ .SecurePort }}'\nfmt: '{%s} {%d}'\n",
        );
        assert_eq!(
            tpl.substitute(&service_params(443)).unwrap(),
            "command: 'echo ${#PEERS} peers on 443'\nfmt: '{%s} {%d}'\n"
        );
    }

    #[test]
    fn test_go_comments_and_blocks() {
        let tpl = template(
            "{{/* apiserver port */}}\
             port: {{% if SecurePort > 0 %}}{{ SecurePort }}{{% endif %}}\n",
        );
        assert_eq!(tpl.substitute(&service_params(443)).unwrap(), "port: 443\n");
    }

    #[test]
    fn test_undefined_placeholder_is_substitution_error() {
        let tpl = template("name: {{ ClusterName }}\n");
        let err = tpl.substitute(&service_params(443)).unwrap_err();
        assert!(err.is_substitution());
        assert!(err.to_string().contains("apiserver-service.yaml"));
    }

    #[test]
    fn test_malformed_template_is_substitution_error() {
        let tpl = template("name: {{ ClusterName \n");
        let params = RenderParameters::PersistentVolumeClaim(PvcParams {
            cluster_name: "cluster1".to_string(),
        });
        assert!(tpl.substitute(&params).unwrap_err().is_substitution());
    }

    #[test]
    fn test_schema_mismatch_is_decode_error() {
        let tpl = template("apiVersion: v1\nkind: Service\nspec:\n  - {{ SecurePort }}\n");
        let err = tpl.execute::<Service>(&service_params(443)).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_load_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResourceTemplate::load(dir.path(), "apiserver", ResourceKind::Service)
            .unwrap_err();
        assert!(err.is_template_not_found());
        assert!(err.to_string().contains("apiserver-service.yaml"));

        let err =
            ResourceTemplate::load(dir.path(), "", ResourceKind::Service).unwrap_err();
        assert!(err.is_template_not_found());
    }
}
