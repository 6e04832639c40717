//! Per-field parameter comparison between matched resource pairs.
//!
//! Each scenario compares one named field across every source/destination
//! pair sharing a name. A source resource missing from the destination is
//! a failure in its own right; an unknown field name is a scenario error.

use recon_core::{match_by_name, FieldDiff, Named};
use serde_json::Value;

use crate::compare::{
    compare_field, gateway_diff, router_field_class, subnet_field_class, FieldClass,
};
use crate::scenario::{CheckError, RunContext};

pub fn network_param(ctx: &RunContext, field: &'static str) -> Result<Vec<String>, CheckError> {
    param_diagnostics(
        "network",
        field,
        &ctx.src.networks,
        &ctx.dst.networks,
        FieldClass::Scalar,
        |net| net.field_value(field),
    )
}

pub fn subnet_param(ctx: &RunContext, field: &'static str) -> Result<Vec<String>, CheckError> {
    param_diagnostics(
        "subnet",
        field,
        &ctx.src.subnets,
        &ctx.dst.subnets,
        subnet_field_class(field),
        |subnet| subnet.field_value(field),
    )
}

pub fn router_param(ctx: &RunContext, field: &'static str) -> Result<Vec<String>, CheckError> {
    if field == "external_gateway_info" {
        return router_gateway_param(ctx);
    }
    param_diagnostics(
        "router",
        field,
        &ctx.src.routers,
        &ctx.dst.routers,
        router_field_class(field),
        |router| router.field_value(field),
    )
}

pub fn security_group_param(
    ctx: &RunContext,
    field: &'static str,
) -> Result<Vec<String>, CheckError> {
    param_diagnostics(
        "security group",
        field,
        &ctx.src.security_groups,
        &ctx.dst.security_groups,
        FieldClass::Scalar,
        |group| group.field_value(field),
    )
}

/// The nested gateway descriptor needs per-cloud normalization before it
/// can be compared, so it bypasses the plain field lookup.
fn router_gateway_param(ctx: &RunContext) -> Result<Vec<String>, CheckError> {
    let result = match_by_name(&ctx.src.routers, &ctx.dst.routers);
    let mut diagnostics = missing_on_destination("router", &result.unmatched_src);
    for (src_router, dst_router) in &result.pairs {
        let diff = gateway_diff(
            src_router,
            dst_router,
            ctx.src,
            ctx.dst,
            &ctx.config.snat_releases,
        )?;
        if !diff.equal {
            diagnostics.push(mismatch("router", src_router.name(), &diff));
        }
    }
    Ok(diagnostics)
}

fn param_diagnostics<T: Named>(
    kind: &'static str,
    field: &'static str,
    src_items: &[T],
    dst_items: &[T],
    class: FieldClass,
    value_of: impl Fn(&T) -> Option<Value>,
) -> Result<Vec<String>, CheckError> {
    let result = match_by_name(src_items, dst_items);
    let mut diagnostics = missing_on_destination(kind, &result.unmatched_src);
    for (src_item, dst_item) in &result.pairs {
        let src_value = value_of(src_item).ok_or(CheckError::UnknownField { kind, field })?;
        let dst_value = value_of(dst_item).ok_or(CheckError::UnknownField { kind, field })?;
        let diff = compare_field(field, class, src_value, dst_value);
        if !diff.equal {
            diagnostics.push(mismatch(kind, src_item.name(), &diff));
        }
    }
    Ok(diagnostics)
}

fn missing_on_destination<T: Named>(kind: &str, unmatched: &[&T]) -> Vec<String> {
    unmatched
        .iter()
        .map(|item| format!("{kind} '{}' not found on destination", item.name()))
        .collect()
}

fn mismatch(kind: &str, name: &str, diff: &FieldDiff) -> String {
    format!(
        "{kind} '{name}': {} differs: src={} dst={}",
        diff.field, diff.src_value, diff.dst_value
    )
}
