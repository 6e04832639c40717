//! Generic primitives for cross-cloud resource reconciliation.

pub mod diff;
pub mod matcher;
pub mod resource;
pub mod snapshot;

pub use diff::{unordered_lists_equal, values_equal, FieldDiff};
pub use matcher::{match_by_name, MatchResult, Named};
pub use resource::{
    AllocationPool, ExternalGateway, FixedIp, FloatingIp, HostRoute, Network, Port, Router,
    SecurityGroup, Subnet, Tenant,
};
pub use snapshot::{parse, parse_file, CloudSnapshot, SnapshotError, ROUTER_GATEWAY_OWNER};
