//! Configuration types for billing conventions.

use serde::{Deserialize, Serialize};

use crate::models::AllocationMethod;

/// Billing conventions applied across all allocation runs.
///
/// All fields have defaults matching the standard dormitory billing policy,
/// so an empty YAML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Decimal places for monetary amounts.
    #[serde(default = "default_rounding_scale")]
    pub rounding_scale: u32,
    /// Decimal places for ratios in reports.
    #[serde(default = "default_ratio_scale")]
    pub ratio_scale: u32,
    /// Split method used when a charge does not specify one.
    #[serde(default)]
    pub default_method: AllocationMethod,
}

fn default_rounding_scale() -> u32 {
    2
}

fn default_ratio_scale() -> u32 {
    4
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            rounding_scale: default_rounding_scale(),
            ratio_scale: default_ratio_scale(),
            default_method: AllocationMethod::default(),
        }
    }
}
