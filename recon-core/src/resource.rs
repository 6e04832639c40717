use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::matcher::Named;

/// A network as reported by the cloud API.
///
/// Serde field names follow the wire names, including the vendor-prefixed
/// provider attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(rename = "provider:network_type", default)]
    pub network_type: String,
    #[serde(rename = "provider:segmentation_id", default)]
    pub segmentation_id: Option<u64>,
    #[serde(rename = "provider:physical_network", default)]
    pub physical_network: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub admin_state_up: bool,
    #[serde(rename = "router:external", default)]
    pub external: bool,
    #[serde(default)]
    pub shared: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tenant_id: String,
    pub cidr: String,
    #[serde(default)]
    pub gateway_ip: Option<String>,
    #[serde(default)]
    pub dns_nameservers: Vec<String>,
    #[serde(default)]
    pub enable_dhcp: bool,
    #[serde(default)]
    pub allocation_pools: Vec<AllocationPool>,
    #[serde(default)]
    pub host_routes: Vec<HostRoute>,
    #[serde(default = "default_ip_version")]
    pub ip_version: u8,
}

fn default_ip_version() -> u8 {
    4
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPool {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRoute {
    pub destination: String,
    pub nexthop: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Router {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub admin_state_up: bool,
    #[serde(default)]
    pub routes: Vec<HostRoute>,
    #[serde(default)]
    pub external_gateway_info: Option<ExternalGateway>,
}

/// A router's attachment point to an external network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalGateway {
    pub network_id: String,
    #[serde(default)]
    pub enable_snat: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingIp {
    pub id: String,
    pub floating_ip_address: String,
    #[serde(default)]
    pub floating_network_id: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub fixed_ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub network_id: String,
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub device_owner: String,
    #[serde(default)]
    pub fixed_ips: Vec<FixedIp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedIp {
    pub ip_address: String,
    #[serde(default)]
    pub subnet_id: String,
}

/// An ownership boundary; names may be remapped between clouds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
}

impl Network {
    /// Typed field lookup by wire name. Unknown names return `None` so a
    /// misconfigured check surfaces instead of silently passing.
    pub fn field_value(&self, field: &str) -> Option<Value> {
        Some(match field {
            "name" => json!(self.name),
            "provider:network_type" => json!(self.network_type),
            "provider:segmentation_id" => json!(self.segmentation_id),
            "provider:physical_network" => json!(self.physical_network),
            "status" => json!(self.status),
            "admin_state_up" => json!(self.admin_state_up),
            "router:external" => json!(self.external),
            "shared" => json!(self.shared),
            _ => return None,
        })
    }
}

impl Subnet {
    pub fn field_value(&self, field: &str) -> Option<Value> {
        Some(match field {
            "name" => json!(self.name),
            "cidr" => json!(self.cidr),
            "gateway_ip" => json!(self.gateway_ip),
            "dns_nameservers" => json!(self.dns_nameservers),
            "enable_dhcp" => json!(self.enable_dhcp),
            "allocation_pools" => json!(self.allocation_pools),
            "host_routes" => json!(self.host_routes),
            "ip_version" => json!(self.ip_version),
            _ => return None,
        })
    }
}

impl Router {
    /// The nested `external_gateway_info` field is excluded here: its
    /// comparison needs per-cloud normalization, which belongs to the caller.
    pub fn field_value(&self, field: &str) -> Option<Value> {
        Some(match field {
            "name" => json!(self.name),
            "status" => json!(self.status),
            "admin_state_up" => json!(self.admin_state_up),
            "routes" => json!(self.routes),
            _ => return None,
        })
    }
}

impl SecurityGroup {
    pub fn field_value(&self, field: &str) -> Option<Value> {
        Some(match field {
            "name" => json!(self.name),
            "description" => json!(self.description),
            _ => return None,
        })
    }
}

impl Named for Network {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Subnet {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Router {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for SecurityGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for FloatingIp {
    fn name(&self) -> &str {
        &self.floating_ip_address
    }
}
