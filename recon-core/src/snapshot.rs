//! Per-cloud resource snapshots.
//!
//! A snapshot is fetched (or loaded from an exported document) once per
//! verification run and treated as read-only for the lifetime of the run.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resource::{FloatingIp, Network, Port, Router, SecurityGroup, Subnet, Tenant};

/// Device owner recorded on a router's external gateway port.
pub const ROUTER_GATEWAY_OWNER: &str = "network:router_gateway";

/// One cloud's resource state. Collections keep fetch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudSnapshot {
    /// Cloud label, for example `src` or `dst`.
    pub cloud: String,
    /// Cloud release label, for example `icehouse`.
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
    #[serde(default)]
    pub routers: Vec<Router>,
    #[serde(default)]
    pub security_groups: Vec<SecurityGroup>,
    #[serde(default)]
    pub floating_ips: Vec<FloatingIp>,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
}

/// Errors returned when loading snapshot documents.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse snapshot {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Parse a snapshot document from raw JSON.
pub fn parse(raw: &str) -> Result<CloudSnapshot, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read and parse a snapshot document from disk.
pub fn parse_file(path: &Path) -> Result<CloudSnapshot, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&raw).map_err(|source| SnapshotError::Json {
        path: path.display().to_string(),
        source,
    })
}

impl CloudSnapshot {
    /// Resolve a network id to its name within this cloud.
    pub fn network_name(&self, id: &str) -> Option<&str> {
        self.networks
            .iter()
            .find(|net| net.id == id)
            .map(|net| net.name.as_str())
    }

    /// Resolve a tenant id to its name within this cloud.
    pub fn tenant_name(&self, id: &str) -> Option<&str> {
        self.tenants
            .iter()
            .find(|tenant| tenant.id == id)
            .map(|tenant| tenant.name.as_str())
    }

    /// All ports attached to a device, in fetch order.
    pub fn ports_for_device(&self, device_id: &str) -> Vec<&Port> {
        self.ports
            .iter()
            .filter(|port| port.device_id == device_id)
            .collect()
    }

    /// The first external gateway port of a router, if any.
    pub fn gateway_port(&self, device_id: &str) -> Option<&Port> {
        self.ports
            .iter()
            .find(|port| port.device_id == device_id && port.device_owner == ROUTER_GATEWAY_OWNER)
    }

    /// Floating IP addresses, the one attribute guaranteed to survive
    /// migration unchanged.
    pub fn floating_addresses(&self) -> BTreeSet<&str> {
        self.floating_ips
            .iter()
            .map(|fip| fip.floating_ip_address.as_str())
            .collect()
    }

    pub fn floating_ip_by_address(&self, address: &str) -> Option<&FloatingIp> {
        self.floating_ips
            .iter()
            .find(|fip| fip.floating_ip_address == address)
    }

    /// Routers carrying an external gateway.
    pub fn external_routers(&self) -> Vec<&Router> {
        self.routers
            .iter()
            .filter(|router| router.external_gateway_info.is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse, parse_file, SnapshotError};

    const MINIMAL: &str = r#"{
        "cloud": "src",
        "release": "icehouse",
        "networks": [{"id": "net-1", "name": "ext", "router:external": true}],
        "tenants": [{"id": "t1", "name": "tenant1"}],
        "ports": [
            {"id": "p1", "network_id": "net-1", "device_id": "r1",
             "device_owner": "network:router_gateway",
             "fixed_ips": [{"ip_address": "172.16.0.2"}]},
            {"id": "p2", "network_id": "net-1", "device_id": "r1",
             "device_owner": "network:router_interface"}
        ],
        "floating_ips": [
            {"id": "f1", "floating_ip_address": "1.2.3.4", "floating_network_id": "net-1"}
        ]
    }"#;

    #[test]
    fn parses_and_resolves_lookups() {
        let snapshot = parse(MINIMAL).expect("parse");
        assert_eq!(snapshot.network_name("net-1"), Some("ext"));
        assert_eq!(snapshot.network_name("net-2"), None);
        assert_eq!(snapshot.tenant_name("t1"), Some("tenant1"));
        assert_eq!(snapshot.ports_for_device("r1").len(), 2);
        assert_eq!(
            snapshot
                .gateway_port("r1")
                .map(|port| port.fixed_ips[0].ip_address.as_str()),
            Some("172.16.0.2")
        );
        assert!(snapshot.floating_addresses().contains("1.2.3.4"));
    }

    #[test]
    fn parse_file_reports_missing_path() {
        let err = parse_file(std::path::Path::new("/no/such/snapshot.json"))
            .expect_err("should fail read");
        match err {
            SnapshotError::Io { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn parse_file_reports_malformed_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").expect("write");

        let err = parse_file(&path).expect_err("should fail parse");
        match err {
            SnapshotError::Json { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
