//! Table-driven scenario runner.
//!
//! Every verification scenario is an entry in a static table dispatched
//! through one shared check function. Scenarios are independent: a check
//! that cannot be evaluated records an error outcome for that scenario
//! only, and the aggregate report is always produced.

use serde::Serialize;
use thiserror::Error;

use recon_core::CloudSnapshot;

use crate::config::RunConfig;
use crate::resource_map::ResourceMap;
use crate::{
    verify_floating_ips, verify_gateway, verify_idempotency, verify_params, verify_ports,
    verify_tenants,
};

/// Immutable inputs shared by every check in a run.
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    pub src: &'a CloudSnapshot,
    pub dst: &'a CloudSnapshot,
    pub config: &'a RunConfig,
    pub resource_map: Option<&'a ResourceMap>,
}

/// A check that could not be evaluated. Distinct from a failure: the
/// infrastructure disagreed with nothing, it simply could not be asked.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("no resource map configured; set resource_map in the run config or pass --resource-map")]
    MissingResourceMap,
    #[error("unknown field '{field}' for {kind}")]
    UnknownField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("network '{id}' not found in {cloud} snapshot")]
    DanglingNetwork { cloud: String, id: String },
    #[error("tenant '{id}' not found in {cloud} snapshot")]
    DanglingTenant { cloud: String, id: String },
}

/// A scenario filter naming no entry in the table.
#[derive(Debug, Error)]
#[error("unknown scenario '{0}'")]
pub struct UnknownScenario(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// Per-scenario result, folded into the aggregate report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub scenario: String,
    pub outcome: Outcome,
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedSide {
    Source,
    Destination,
}

/// One reconciliation check, dispatched by the shared runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    NetworkParam(&'static str),
    SubnetParam(&'static str),
    RouterParam(&'static str),
    SecurityGroupParam(&'static str),
    NetworksMigratedOnce,
    RoutersMigratedOnce,
    RouterNetworks,
    RouterTenants,
    FloatingIpsMigrated,
    MappedFloatingIps(MappedSide),
    ExtGatewayChanged,
}

#[derive(Debug, Clone, Copy)]
pub struct ScenarioDef {
    pub name: &'static str,
    pub check: Check,
}

const fn scenario(name: &'static str, check: Check) -> ScenarioDef {
    ScenarioDef { name, check }
}

/// The static scenario table, in execution order.
pub const SCENARIOS: &[ScenarioDef] = &[
    scenario("networks.name", Check::NetworkParam("name")),
    scenario(
        "networks.provider:network_type",
        Check::NetworkParam("provider:network_type"),
    ),
    scenario(
        "networks.provider:segmentation_id",
        Check::NetworkParam("provider:segmentation_id"),
    ),
    scenario(
        "networks.provider:physical_network",
        Check::NetworkParam("provider:physical_network"),
    ),
    scenario("networks.status", Check::NetworkParam("status")),
    scenario("networks.admin_state_up", Check::NetworkParam("admin_state_up")),
    scenario("networks.router:external", Check::NetworkParam("router:external")),
    scenario("networks.shared", Check::NetworkParam("shared")),
    scenario("subnets.name", Check::SubnetParam("name")),
    scenario("subnets.gateway_ip", Check::SubnetParam("gateway_ip")),
    scenario("subnets.cidr", Check::SubnetParam("cidr")),
    scenario("subnets.dns_nameservers", Check::SubnetParam("dns_nameservers")),
    scenario("subnets.enable_dhcp", Check::SubnetParam("enable_dhcp")),
    scenario("subnets.allocation_pools", Check::SubnetParam("allocation_pools")),
    scenario("subnets.host_routes", Check::SubnetParam("host_routes")),
    scenario("subnets.ip_version", Check::SubnetParam("ip_version")),
    scenario("routers.name", Check::RouterParam("name")),
    scenario("routers.status", Check::RouterParam("status")),
    scenario("routers.admin_state_up", Check::RouterParam("admin_state_up")),
    scenario("routers.routes", Check::RouterParam("routes")),
    scenario(
        "routers.external_gateway_info",
        Check::RouterParam("external_gateway_info"),
    ),
    scenario("security_groups.name", Check::SecurityGroupParam("name")),
    scenario(
        "security_groups.description",
        Check::SecurityGroupParam("description"),
    ),
    scenario("networks.migrated_once", Check::NetworksMigratedOnce),
    scenario("routers.migrated_once", Check::RoutersMigratedOnce),
    scenario("routers.connected_networks", Check::RouterNetworks),
    scenario("routers.tenant", Check::RouterTenants),
    scenario("floating_ips.migrated", Check::FloatingIpsMigrated),
    scenario(
        "floating_ips.mapped_src",
        Check::MappedFloatingIps(MappedSide::Source),
    ),
    scenario(
        "floating_ips.mapped_dst",
        Check::MappedFloatingIps(MappedSide::Destination),
    ),
    scenario("routers.ext_gateway_changed", Check::ExtGatewayChanged),
];

/// Aggregate run outcome. `pass` holds only when every scenario passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconReport {
    pub src_cloud: String,
    pub dst_cloud: String,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub pass: bool,
    pub verdicts: Vec<Verdict>,
}

/// Run every scenario (or one selected by name) against the context.
pub fn run_scenarios(
    ctx: &RunContext,
    filter: Option<&str>,
) -> Result<ReconReport, UnknownScenario> {
    let verdicts = selected(filter)?
        .into_iter()
        .map(|def| run_scenario(def, ctx))
        .collect();
    Ok(aggregate(&ctx.src.cloud, &ctx.dst.cloud, verdicts))
}

/// Build the all-error report used when a snapshot could not be fetched:
/// every selected scenario depends on the failed fixture.
pub fn error_report(
    src_cloud: &str,
    dst_cloud: &str,
    detail: &str,
    filter: Option<&str>,
) -> Result<ReconReport, UnknownScenario> {
    let verdicts = selected(filter)?
        .into_iter()
        .map(|def| Verdict {
            scenario: def.name.to_string(),
            outcome: Outcome::Error,
            diagnostics: vec![detail.to_string()],
        })
        .collect();
    Ok(aggregate(src_cloud, dst_cloud, verdicts))
}

fn selected(filter: Option<&str>) -> Result<Vec<&'static ScenarioDef>, UnknownScenario> {
    let Some(name) = filter else {
        return Ok(SCENARIOS.iter().collect());
    };
    let hits: Vec<_> = SCENARIOS.iter().filter(|def| def.name == name).collect();
    if hits.is_empty() {
        return Err(UnknownScenario(name.to_string()));
    }
    Ok(hits)
}

fn aggregate(src_cloud: &str, dst_cloud: &str, verdicts: Vec<Verdict>) -> ReconReport {
    let passed = count(&verdicts, Outcome::Pass);
    let failed = count(&verdicts, Outcome::Fail);
    let errors = count(&verdicts, Outcome::Error);
    ReconReport {
        src_cloud: src_cloud.to_string(),
        dst_cloud: dst_cloud.to_string(),
        passed,
        failed,
        errors,
        pass: failed == 0 && errors == 0,
        verdicts,
    }
}

fn count(verdicts: &[Verdict], outcome: Outcome) -> usize {
    verdicts.iter().filter(|v| v.outcome == outcome).count()
}

fn run_scenario(def: &ScenarioDef, ctx: &RunContext) -> Verdict {
    match dispatch(def.check, ctx) {
        Ok(diagnostics) if diagnostics.is_empty() => Verdict {
            scenario: def.name.to_string(),
            outcome: Outcome::Pass,
            diagnostics,
        },
        Ok(diagnostics) => Verdict {
            scenario: def.name.to_string(),
            outcome: Outcome::Fail,
            diagnostics,
        },
        Err(err) => Verdict {
            scenario: def.name.to_string(),
            outcome: Outcome::Error,
            diagnostics: vec![err.to_string()],
        },
    }
}

fn dispatch(check: Check, ctx: &RunContext) -> Result<Vec<String>, CheckError> {
    match check {
        Check::NetworkParam(field) => verify_params::network_param(ctx, field),
        Check::SubnetParam(field) => verify_params::subnet_param(ctx, field),
        Check::RouterParam(field) => verify_params::router_param(ctx, field),
        Check::SecurityGroupParam(field) => verify_params::security_group_param(ctx, field),
        Check::NetworksMigratedOnce => Ok(verify_idempotency::migrated_once(
            "network",
            &ctx.src.networks,
            &ctx.dst.networks,
        )),
        Check::RoutersMigratedOnce => Ok(verify_idempotency::migrated_once(
            "router",
            &ctx.src.routers,
            &ctx.dst.routers,
        )),
        Check::RouterNetworks => verify_ports::router_networks(ctx),
        Check::RouterTenants => verify_tenants::router_tenants(ctx),
        Check::FloatingIpsMigrated => verify_floating_ips::floating_ips_migrated(ctx),
        Check::MappedFloatingIps(side) => verify_floating_ips::mapped_floating_ips(ctx, side),
        Check::ExtGatewayChanged => verify_gateway::ext_gateway_changed(ctx),
    }
}
