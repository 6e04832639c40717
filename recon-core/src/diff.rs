//! Field-level comparison outcomes and value equality policies.

use serde::Serialize;
use serde_json::Value;

/// A single compared field for one matched resource pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDiff {
    pub field: String,
    pub src_value: Value,
    pub dst_value: Value,
    pub equal: bool,
}

impl FieldDiff {
    /// Structural equality.
    pub fn scalar(field: &str, src_value: Value, dst_value: Value) -> Self {
        let equal = values_equal(&src_value, &dst_value);
        Self {
            field: field.to_string(),
            src_value,
            dst_value,
            equal,
        }
    }

    /// Equality as multisets of list elements, ignoring sequence order.
    pub fn unordered(field: &str, src_value: Value, dst_value: Value) -> Self {
        let equal = unordered_lists_equal(&src_value, &dst_value);
        Self {
            field: field.to_string(),
            src_value,
            dst_value,
            equal,
        }
    }
}

pub fn values_equal(a: &Value, b: &Value) -> bool {
    a == b
}

/// Compare two JSON arrays as multisets. Non-array values fall back to
/// structural equality.
pub fn unordered_lists_equal(a: &Value, b: &Value) -> bool {
    match (a.as_array(), b.as_array()) {
        (Some(a), Some(b)) => multiset_equal(a, b),
        _ => a == b,
    }
}

fn multiset_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut remaining: Vec<&Value> = b.iter().collect();
    for item in a {
        match remaining.iter().position(|candidate| *candidate == item) {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => return false,
        }
    }
    true
}
