//! Tenant ownership verification for migrated routers.

use recon_core::match_by_name;

use crate::scenario::{CheckError, RunContext};

/// A matched router must land in the tenant whose source name, passed
/// through the tenant map, equals the destination tenant name.
pub fn router_tenants(ctx: &RunContext) -> Result<Vec<String>, CheckError> {
    let result = match_by_name(&ctx.src.routers, &ctx.dst.routers);

    let mut diagnostics = Vec::new();
    for (src_router, dst_router) in &result.pairs {
        let src_tenant =
            ctx.src
                .tenant_name(&src_router.tenant_id)
                .ok_or_else(|| CheckError::DanglingTenant {
                    cloud: ctx.src.cloud.clone(),
                    id: src_router.tenant_id.clone(),
                })?;
        let dst_tenant =
            ctx.dst
                .tenant_name(&dst_router.tenant_id)
                .ok_or_else(|| CheckError::DanglingTenant {
                    cloud: ctx.dst.cloud.clone(),
                    id: dst_router.tenant_id.clone(),
                })?;
        let expected = ctx.config.tenant_map.remap(src_tenant);
        if expected != dst_tenant {
            diagnostics.push(format!(
                "router '{}': destination tenant '{dst_tenant}' does not match expected '{expected}'",
                src_router.name
            ));
        }
    }
    Ok(diagnostics)
}
