//! Field comparison policies for matched resource pairs.

use std::collections::BTreeSet;

use recon_core::{CloudSnapshot, FieldDiff, Router};
use serde_json::{json, Value};

use crate::scenario::CheckError;

/// Equality policy for a compared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Structural equality.
    Scalar,
    /// Equality as multisets of list elements, ignoring sequence order.
    Unordered,
}

pub fn subnet_field_class(field: &str) -> FieldClass {
    match field {
        "dns_nameservers" | "allocation_pools" | "host_routes" => FieldClass::Unordered,
        _ => FieldClass::Scalar,
    }
}

pub fn router_field_class(field: &str) -> FieldClass {
    match field {
        "routes" => FieldClass::Unordered,
        _ => FieldClass::Scalar,
    }
}

pub fn compare_field(field: &str, class: FieldClass, src_value: Value, dst_value: Value) -> FieldDiff {
    match class {
        FieldClass::Scalar => FieldDiff::scalar(field, src_value, dst_value),
        FieldClass::Unordered => FieldDiff::unordered(field, src_value, dst_value),
    }
}

/// Compare `external_gateway_info` between a matched router pair.
///
/// The embedded network id is not comparable across clouds, so each side
/// resolves it to a network name within its own snapshot. The
/// `enable_snat` sub-field participates only when both clouds report a
/// release from the SNAT-compatible set; otherwise it is dropped from
/// both sides before comparing.
pub fn gateway_diff(
    src_router: &Router,
    dst_router: &Router,
    src: &CloudSnapshot,
    dst: &CloudSnapshot,
    snat_releases: &BTreeSet<String>,
) -> Result<FieldDiff, CheckError> {
    let include_snat =
        snat_releases.contains(&src.release) && snat_releases.contains(&dst.release);
    let src_value = normalized_gateway(src_router, src, include_snat)?;
    let dst_value = normalized_gateway(dst_router, dst, include_snat)?;
    Ok(FieldDiff::scalar(
        "external_gateway_info",
        src_value,
        dst_value,
    ))
}

fn normalized_gateway(
    router: &Router,
    cloud: &CloudSnapshot,
    include_snat: bool,
) -> Result<Value, CheckError> {
    let Some(gateway) = &router.external_gateway_info else {
        return Ok(Value::Null);
    };
    let name = cloud
        .network_name(&gateway.network_id)
        .ok_or_else(|| CheckError::DanglingNetwork {
            cloud: cloud.cloud.clone(),
            id: gateway.network_id.clone(),
        })?;
    let mut value = json!({ "network_name": name });
    if include_snat {
        value["enable_snat"] = json!(gateway.enable_snat);
    }
    Ok(value)
}
