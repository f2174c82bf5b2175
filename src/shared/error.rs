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

use std::path::{Path, PathBuf};
use thiserror::Error;
pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Template not found: {} ({source})", path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse cluster address '{address}': {reason}")]
    AddressParse { address: String, reason: String },

    #[error("Cannot resolve host '{host}': {reason}")]
    HostResolution { host: String, reason: String },

    #[error("Failed to substitute template {}: {source}", path.display())]
    Substitution {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to decode {kind} from template {}: {source}", path.display())]
    Decode {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("YAML encode error: {0}")]
    YamlEncode(#[from] serde_yaml::Error),

    #[error("JSON encode error: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

impl ManifestError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn template_not_found(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::TemplateNotFound {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn address_parse(address: impl Into<String>, reason: impl ToString) -> Self {
        Self::AddressParse {
            address: address.into(),
            reason: reason.to_string(),
        }
    }

    pub fn host_resolution(host: impl Into<String>, reason: impl ToString) -> Self {
        Self::HostResolution {
            host: host.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_template_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }

    pub fn is_address_parse(&self) -> bool {
        matches!(self, Self::AddressParse { .. })
    }

    pub fn is_host_resolution(&self) -> bool {
        matches!(self, Self::HostResolution { .. })
    }

    pub fn is_substitution(&self) -> bool {
        matches!(self, Self::Substitution { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
