//! External-network remapping document.
//!
//! Migration may deliberately move floating IPs from one external network
//! to another. The mapping document records those translations so the
//! resulting absences and surpluses can be classified as expected rather
//! than reported as losses.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigError;

/// Static source-network-id to destination-network-id translations,
/// loaded once per run and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceMap {
    #[serde(default)]
    pub ext_network_map: BTreeMap<String, String>,
}

/// Load a resource map from a TOML document with a single top-level
/// `ext_network_map` table.
pub fn load_resource_map(path: &Path) -> Result<ResourceMap, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

impl ResourceMap {
    /// A floating IP backed by this source network is expected to be
    /// absent from the naive destination view.
    pub fn is_expected_source_absence(&self, net_id: &str) -> bool {
        self.ext_network_map.contains_key(net_id)
    }

    /// The network is a remap target on the destination side.
    pub fn is_mapped_destination(&self, net_id: &str) -> bool {
        self.ext_network_map.values().any(|dst| dst == net_id)
    }

    /// True while the running count of destination floating IPs parked on
    /// a remapped network stays within the configured tolerance.
    pub fn is_expected_destination_excess(
        &self,
        net_id: &str,
        count_so_far: usize,
        tolerance: usize,
    ) -> bool {
        self.is_mapped_destination(net_id) && count_so_far <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{load_resource_map, ResourceMap};
    use crate::config::ConfigError;

    fn map() -> ResourceMap {
        toml::from_str(
            r#"
[ext_network_map]
netA = "netB"
"#,
        )
        .expect("parse map")
    }

    #[test]
    fn classifies_source_absence_and_destination_target() {
        let map = map();
        assert!(map.is_expected_source_absence("netA"));
        assert!(!map.is_expected_source_absence("netB"));
        assert!(map.is_mapped_destination("netB"));
        assert!(!map.is_mapped_destination("netA"));
    }

    #[test]
    fn destination_excess_respects_tolerance() {
        let map = map();
        assert!(map.is_expected_destination_excess("netB", 1, 1));
        assert!(!map.is_expected_destination_excess("netB", 2, 1));
        assert!(!map.is_expected_destination_excess("netC", 1, 1));
    }

    #[test]
    fn loads_mapping_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resource_map.toml");
        fs::write(&path, "[ext_network_map]\n\"net-src\" = \"net-dst\"\n").expect("write map");

        let map = load_resource_map(&path).expect("map should parse");
        assert!(map.is_expected_source_absence("net-src"));
    }

    #[test]
    fn missing_document_is_a_configuration_error() {
        let err = load_resource_map(std::path::Path::new("/no/such/map.toml"))
            .expect_err("should fail read");
        match err {
            ConfigError::Io { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
