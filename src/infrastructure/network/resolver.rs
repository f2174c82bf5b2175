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

use crate::shared::error::{ManifestError, Result};
use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use url::{Host, Url};

/// Name resolution seam used for the apiserver advertise address.
pub trait HostResolver: Send + Sync {
    /// Addresses for `host`, in the order the resolver returned them.
    fn lookup_host(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by the operating system (`getaddrinfo`, hosts file).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn lookup_host(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        Ok((host, 0).to_socket_addrs()?.map(|addr| addr.ip()).collect())
    }
}

/// Fixed host table. Hosts missing from the table fail to resolve.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>, addrs: Vec<IpAddr>) -> Self {
        self.hosts.insert(host.into(), addrs);
        self
    }
}

impl HostResolver for StaticResolver {
    fn lookup_host(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        self.hosts.get(host).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such host: {}", host))
        })
    }
}

/// Host component of a cluster address URL, without port or IPv6 brackets.
pub fn host_from_url(address: &str) -> Result<String> {
    let url = Url::parse(address).map_err(|e| ManifestError::address_parse(address, e))?;

    match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
        Some(Host::Ipv4(ip)) => Ok(ip.to_string()),
        Some(Host::Ipv6(ip)) => Ok(ip.to_string()),
        _ => Err(ManifestError::address_parse(address, "URL has no host")),
    }
}

/// Picks the apiserver advertise address.
///
/// A non-empty `overwrite_host` wins verbatim. Otherwise the host of
/// `address_url` is resolved and the first returned address is used.
pub fn resolve_advertise_address(
    resolver: &dyn HostResolver,
    address_url: &str,
    overwrite_host: Option<&str>,
) -> Result<String> {
    if let Some(host) = overwrite_host.filter(|h| !h.is_empty()) {
        tracing::debug!("Using overwrite host {} as advertise address", host);
        return Ok(host.to_string());
    }

    let host = host_from_url(address_url)?;
    let addrs = resolver
        .lookup_host(&host)
        .map_err(|e| ManifestError::host_resolution(&host, e))?;

    let first = addrs
        .first()
        .ok_or_else(|| ManifestError::host_resolution(&host, "no addresses returned"))?;

    tracing::debug!(
        "Resolved {} to {} ({} candidates)",
        host,
        first,
        addrs.len()
    );
    Ok(first.to_string())
}
