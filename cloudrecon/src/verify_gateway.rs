//! External gateway address rotation check.
//!
//! When the run is configured to change router IPs during migration, a
//! gateway address surviving unchanged means the migration reused the
//! source address instead of allocating a new one. The check inverts the
//! usual equality expectation.

use recon_core::match_by_name;

use crate::scenario::{CheckError, RunContext};

pub fn ext_gateway_changed(ctx: &RunContext) -> Result<Vec<String>, CheckError> {
    if !ctx.config.change_router_ips {
        return Ok(Vec::new());
    }

    let src_routers = ctx.src.external_routers();
    let dst_routers = ctx.dst.external_routers();
    let result = match_by_name(&src_routers, &dst_routers);

    let mut diagnostics = Vec::new();
    for (src_router, dst_router) in &result.pairs {
        let src_addr = gateway_address(ctx.src, &src_router.id);
        let dst_addr = gateway_address(ctx.dst, &dst_router.id);
        // Routers without a populated gateway port are not comparable.
        let (Some(src_addr), Some(dst_addr)) = (src_addr, dst_addr) else {
            continue;
        };
        if src_addr == dst_addr {
            diagnostics.push(format!(
                "gateway address {src_addr} of router '{}' is unchanged between source and destination",
                src_router.name
            ));
        }
    }
    Ok(diagnostics)
}

fn gateway_address<'a>(cloud: &'a recon_core::CloudSnapshot, router_id: &str) -> Option<&'a str> {
    cloud
        .gateway_port(router_id)?
        .fixed_ips
        .first()
        .map(|fixed| fixed.ip_address.as_str())
}
