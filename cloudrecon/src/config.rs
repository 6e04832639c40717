//! Run configuration for a reconciliation run.
//!
//! Loaded exactly once before any check runs; a missing or malformed
//! document is fatal.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::tenant_map::TenantMap;

/// Reconciliation run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Cloud releases whose gateways support the SNAT field. The
    /// `enable_snat` sub-field is compared only when both clouds report a
    /// release from this set.
    #[serde(default = "default_snat_releases")]
    pub snat_releases: BTreeSet<String>,
    /// When enabled, router external gateway addresses must have changed
    /// during migration.
    #[serde(default = "default_true")]
    pub change_router_ips: bool,
    /// Slack for unassociated floating IPs created fresh on the
    /// destination's remapped external networks.
    #[serde(default)]
    pub dst_unassociated_fip: usize,
    /// Optional path to the external-network mapping document.
    #[serde(default)]
    pub resource_map: Option<PathBuf>,
    /// Intentional project renames applied during migration.
    #[serde(default)]
    pub tenant_map: TenantMap,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            snat_releases: default_snat_releases(),
            change_router_ips: true,
            dst_unassociated_fip: 0,
            resource_map: None,
            tenant_map: TenantMap::default(),
        }
    }
}

fn default_snat_releases() -> BTreeSet<String> {
    ["icehouse", "juno"].iter().map(ToString::to_string).collect()
}

fn default_true() -> bool {
    true
}

/// Errors returned when loading configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load a run configuration from a TOML file.
pub fn load_run_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{load_run_config, ConfigError, RunConfig};

    #[test]
    fn defaults_cover_the_icehouse_juno_snat_set() {
        let config = RunConfig::default();
        assert!(config.snat_releases.contains("icehouse"));
        assert!(config.snat_releases.contains("juno"));
        assert!(config.change_router_ips);
        assert_eq!(config.dst_unassociated_fip, 0);
    }

    #[test]
    fn loads_full_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.toml");
        fs::write(
            &path,
            r#"
snat_releases = ["icehouse", "juno", "kilo"]
change_router_ips = false
dst_unassociated_fip = 2
resource_map = "resource_map.toml"

[tenant_map]
tenant1 = "tenantX"
"#,
        )
        .expect("write config");

        let config = load_run_config(&path).expect("config should parse");
        assert!(config.snat_releases.contains("kilo"));
        assert!(!config.change_router_ips);
        assert_eq!(config.dst_unassociated_fip, 2);
        assert_eq!(config.tenant_map.remap("tenant1"), "tenantX");
    }

    #[test]
    fn returns_parse_error_for_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "not = [valid").expect("write broken file");

        let err = load_run_config(&path).expect_err("should fail parse");
        match err {
            ConfigError::Parse { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
