//! Floating IP reconciliation.
//!
//! Addresses are the one attribute guaranteed to survive migration
//! unchanged, so the checks work on address sets rather than names or
//! ids.

use crate::scenario::{CheckError, MappedSide, RunContext};

/// Every source address must reappear on the destination, except
/// addresses whose backing external network was deliberately remapped.
pub fn floating_ips_migrated(ctx: &RunContext) -> Result<Vec<String>, CheckError> {
    let src_ips = ctx.src.floating_addresses();
    let dst_ips = ctx.dst.floating_addresses();

    let mut diagnostics = Vec::new();
    for address in src_ips.difference(&dst_ips) {
        if let (Some(map), Some(fip)) = (ctx.resource_map, ctx.src.floating_ip_by_address(address))
        {
            if map.is_expected_source_absence(&fip.floating_network_id) {
                continue;
            }
        }
        diagnostics.push(format!("floating ip {address} did not migrate to destination"));
    }
    Ok(diagnostics)
}

/// Check the two sides of the external-network remapping document.
///
/// Source side: no floating IP may remain parked on a remapped source
/// network. Destination side: addresses on remap targets are tolerated up
/// to the configured slack for freshly created unassociated IPs.
pub fn mapped_floating_ips(ctx: &RunContext, side: MappedSide) -> Result<Vec<String>, CheckError> {
    let map = ctx.resource_map.ok_or(CheckError::MissingResourceMap)?;

    match side {
        MappedSide::Source => Ok(ctx
            .src
            .floating_ips
            .iter()
            .filter(|fip| map.is_expected_source_absence(&fip.floating_network_id))
            .map(|fip| {
                format!(
                    "source floating ip {} still sits on remapped network {}",
                    fip.floating_ip_address, fip.floating_network_id
                )
            })
            .collect()),
        MappedSide::Destination => {
            let tolerance = ctx.config.dst_unassociated_fip;
            let mut parked = Vec::new();
            let mut within_tolerance = true;
            for fip in &ctx.dst.floating_ips {
                if !map.is_mapped_destination(&fip.floating_network_id) {
                    continue;
                }
                parked.push(fip.floating_ip_address.as_str());
                within_tolerance = map.is_expected_destination_excess(
                    &fip.floating_network_id,
                    parked.len(),
                    tolerance,
                );
            }
            if within_tolerance {
                return Ok(Vec::new());
            }
            Ok(parked
                .iter()
                .map(|address| {
                    format!("destination floating ip {address} exceeds the unassociated tolerance")
                })
                .collect())
        }
    }
}
