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

/// Default directory holding master resource templates
pub const DEFAULT_RESOURCES_PATH: &str = "resources";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "master-manifests.toml";

/// Template file extension
pub const TEMPLATE_EXTENSION: &str = "yaml";

/// Template name suffixes, appended to the resource name
pub const TEMPLATE_SUFFIX_SERVICE: &str = "-service";
pub const TEMPLATE_SUFFIX_INGRESS: &str = "-ingress";
pub const TEMPLATE_SUFFIX_DEPLOYMENT: &str = "-dep";
pub const TEMPLATE_SUFFIX_PVC: &str = "-pvc";

/// Environment variable pointing at the configuration file
pub const CONFIG_FILE_ENV: &str = "MASTER_MANIFESTS_CONF";
