//! Serializable snapshot of an axis.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::AxisConfig;

/// Everything needed to rebuild an axis: configuration, count, display order,
/// size exceptions and hidden positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisState {
    /// Sizes and zoom.
    pub config: AxisConfig,
    /// Number of body positions.
    pub count: u32,
    /// Data position at each view position. Empty means identity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<u32>,
    /// Explicit nominal sizes by data position, hidden positions included.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub size_exceptions: BTreeMap<u32, u16>,
    /// Hidden data positions.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub hidden: BTreeSet<u32>,
}
