//! Tenant name remapping.
//!
//! Projects may be intentionally renamed during migration; the tenant map
//! records those renames so they do not register as ownership mismatches.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Partial source-name to destination-name translation. Names absent from
/// the table pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TenantMap(BTreeMap<String, String>);

impl TenantMap {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn remap<'a>(&'a self, name: &'a str) -> &'a str {
        self.0.get(name).map(String::as_str).unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::TenantMap;

    fn map() -> TenantMap {
        let mut entries = BTreeMap::new();
        entries.insert("tenant1".to_string(), "tenantX".to_string());
        TenantMap::new(entries)
    }

    #[test]
    fn remaps_known_name() {
        assert_eq!(map().remap("tenant1"), "tenantX");
    }

    #[test]
    fn unknown_name_is_identity() {
        assert_eq!(map().remap("unknown"), "unknown");
    }
}
