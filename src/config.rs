//! Configuration module for the gateway.
//!
//! This module provides the configuration structure and related types for
//! controlling which clients are allowed through the gateway.

use std::{collections::HashSet, net::IpAddr, str::FromStr};

use ipnetwork::IpNetwork;

use crate::{HttpIpGatewayError, HttpIpGatewayResult};

/// Allowlist applied when none is configured.
pub const DEFAULT_ALLOWED_IPS: &str = "127.0.0.1";

/// Main configuration structure for the gateway.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Clients permitted to talk to the gateway
    pub allowed_ips: AllowedIps,
}

impl Configuration {
    /// Creates a new `Configuration` by parsing and validating the provided string input.
    ///
    /// The allowlist is a comma-separated string of IP addresses and CIDR
    /// ranges. Every entry must parse; an entry that is neither a valid IP
    /// address nor a valid CIDR range is rejected here so that a bad
    /// allowlist fails at startup rather than at request time.
    pub fn try_new(allowed_ips: &str) -> HttpIpGatewayResult<Self> {
        let allowed_ips = AllowedIps::from_str(allowed_ips)?;

        Ok(Configuration { allowed_ips })
    }

    /// Check if the client address is on the allowlist
    pub fn is_ip_allowed(&self, ip: IpAddr) -> bool {
        self.allowed_ips.contains(ip)
    }
}

/// Collection of addresses and networks that are permitted to connect to the gateway
#[derive(Debug, Clone, Default)]
pub struct AllowedIps {
    addrs: HashSet<IpAddr>,
    networks: Vec<IpNetwork>,
}

impl AllowedIps {
    /// Check whether `ip` matches an exact entry or falls inside a listed network
    pub fn contains(&self, ip: IpAddr) -> bool {
        self.addrs.contains(&ip) || self.networks.iter().any(|network| network.contains(ip))
    }

    /// Number of entries in the allowlist
    pub fn len(&self) -> usize {
        self.addrs.len() + self.networks.len()
    }

    /// Whether the allowlist has no entries. An empty allowlist admits nobody.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty() && self.networks.is_empty()
    }
}

impl FromStr for AllowedIps {
    type Err = HttpIpGatewayError;

    /// Expected format:
    /// - A comma separated string of IP addresses and CIDR ranges,
    ///   e.g. "127.0.0.1,10.0.0.0/24,2001:db8::/32"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut addrs = HashSet::new();
        let mut networks = Vec::new();

        for entry in s.trim().split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            if entry.contains('/') {
                let network = IpNetwork::from_str(entry).map_err(|e| {
                    HttpIpGatewayError::ConfigurationError(format!(
                        "Failed to parse CIDR range from value {}: {}",
                        entry, e
                    ))
                })?;
                networks.push(network);
            } else {
                let addr = IpAddr::from_str(entry).map_err(|e| {
                    HttpIpGatewayError::ConfigurationError(format!(
                        "Failed to parse IP address from value {}: {}",
                        entry, e
                    ))
                })?;
                addrs.insert(addr);
            }
        }

        Ok(Self { addrs, networks })
    }
}
