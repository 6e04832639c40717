//! Router attachment verification.
//!
//! A migrated router must be plugged into the same networks as its
//! source counterpart. Port network ids differ between clouds, so each
//! side's ids resolve to names and the name multisets are compared.

use recon_core::{match_by_name, CloudSnapshot};

use crate::scenario::{CheckError, RunContext};

pub fn router_networks(ctx: &RunContext) -> Result<Vec<String>, CheckError> {
    let result = match_by_name(&ctx.src.routers, &ctx.dst.routers);

    let mut diagnostics = Vec::new();
    for (src_router, dst_router) in &result.pairs {
        let src_names = port_network_names(ctx.src, &src_router.id)?;
        let dst_names = port_network_names(ctx.dst, &dst_router.id)?;
        if src_names != dst_names {
            diagnostics.push(format!(
                "router '{}': attached networks differ: src={src_names:?} dst={dst_names:?}",
                src_router.name
            ));
        }
    }
    Ok(diagnostics)
}

/// Network names behind a device's ports, sorted for order-irrelevant
/// comparison. A port pointing at an unknown network is an error.
fn port_network_names(cloud: &CloudSnapshot, device_id: &str) -> Result<Vec<String>, CheckError> {
    let mut names = cloud
        .ports_for_device(device_id)
        .iter()
        .map(|port| {
            cloud
                .network_name(&port.network_id)
                .map(ToString::to_string)
                .ok_or_else(|| CheckError::DanglingNetwork {
                    cloud: cloud.cloud.clone(),
                    id: port.network_id.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    names.sort_unstable();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use recon_core::parse;

    use super::router_networks;
    use crate::config::RunConfig;
    use crate::scenario::{CheckError, RunContext};

    fn snapshot(cloud: &str, port_nets: &[(&str, &str)]) -> recon_core::CloudSnapshot {
        let networks: Vec<String> = port_nets
            .iter()
            .map(|(id, name)| format!(r#"{{"id": "{id}", "name": "{name}"}}"#))
            .collect();
        let ports: Vec<String> = port_nets
            .iter()
            .enumerate()
            .map(|(idx, (id, _))| {
                format!(
                    r#"{{"id": "p{idx}", "network_id": "{id}", "device_id": "r-{cloud}",
                        "device_owner": "network:router_interface"}}"#
                )
            })
            .collect();
        parse(&format!(
            r#"{{
                "cloud": "{cloud}",
                "routers": [{{"id": "r-{cloud}", "name": "router1"}}],
                "networks": [{}],
                "ports": [{}]
            }}"#,
            networks.join(","),
            ports.join(",")
        ))
        .expect("snapshot")
    }

    fn run(
        src: &recon_core::CloudSnapshot,
        dst: &recon_core::CloudSnapshot,
    ) -> Result<Vec<String>, CheckError> {
        let config = RunConfig::default();
        router_networks(&RunContext {
            src,
            dst,
            config: &config,
            resource_map: None,
        })
    }

    #[test]
    fn same_networks_in_different_port_order_pass() {
        let src = snapshot("src", &[("a1", "alpha"), ("b1", "beta")]);
        let dst = snapshot("dst", &[("b2", "beta"), ("a2", "alpha")]);
        assert!(run(&src, &dst).expect("check").is_empty());
    }

    #[test]
    fn differing_attachment_sets_fail() {
        let src = snapshot("src", &[("a1", "alpha"), ("b1", "beta")]);
        let dst = snapshot("dst", &[("a2", "alpha")]);
        let diagnostics = run(&src, &dst).expect("check");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("router1"));
    }

    #[test]
    fn port_on_unknown_network_errors() {
        let src = snapshot("src", &[("a1", "alpha")]);
        let mut dst = snapshot("dst", &[("a2", "alpha")]);
        dst.networks.clear();
        let err = run(&src, &dst).expect_err("should error");
        match err {
            CheckError::DanglingNetwork { id, .. } => assert_eq!(id, "a2"),
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
