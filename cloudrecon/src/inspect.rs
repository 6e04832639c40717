//! Single-snapshot summary rendering.

use recon_core::CloudSnapshot;

pub fn render_snapshot_summary(snapshot: &CloudSnapshot) -> String {
    let release = if snapshot.release.is_empty() {
        "unknown"
    } else {
        snapshot.release.as_str()
    };
    let mut out = Vec::new();
    out.push(format!("snapshot cloud={} release={release}", snapshot.cloud));
    out.push(format!(
        "counts networks={} subnets={} routers={} security_groups={} floating_ips={} ports={} tenants={}",
        snapshot.networks.len(),
        snapshot.subnets.len(),
        snapshot.routers.len(),
        snapshot.security_groups.len(),
        snapshot.floating_ips.len(),
        snapshot.ports.len(),
        snapshot.tenants.len()
    ));
    let external = snapshot.external_routers();
    if !external.is_empty() {
        out.push("external routers".to_string());
        for router in external {
            out.push(format!("- {}", router.name));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use recon_core::parse;

    use super::render_snapshot_summary;

    #[test]
    fn summarizes_counts_and_external_routers() {
        let snapshot = parse(
            r#"{
                "cloud": "src",
                "release": "icehouse",
                "networks": [{"id": "n1", "name": "ext"}],
                "routers": [
                    {"id": "r1", "name": "edge",
                     "external_gateway_info": {"network_id": "n1"}},
                    {"id": "r2", "name": "inner"}
                ]
            }"#,
        )
        .expect("snapshot");

        let text = render_snapshot_summary(&snapshot);
        assert!(text.contains("snapshot cloud=src release=icehouse"));
        assert!(text.contains("networks=1"));
        assert!(text.contains("- edge"));
        assert!(!text.contains("- inner"));
    }
}
