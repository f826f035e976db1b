//! Cost calculation result types
//!
//! Consolidates the derived value types the engine returns. Everything here
//! is a plain output structure; the engine never mutates its inputs.

use crate::core::catalog::{BillingUnit, InclusionType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One deduplicated license cost entry.
///
/// A license shared by multiple services appears exactly once, at the
/// quantity computed from its own billing unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniqueLicense {
    pub id: Uuid,
    pub name: String,
    /// Monthly buy price per unit (EK)
    pub cost_per_month: f64,
    /// Monthly sell price per unit (VK)
    pub price_per_month: f64,
    pub billing_unit: BillingUnit,
    pub quantity: u32,
}

impl UniqueLicense {
    /// Monthly buy cost at the derived quantity.
    pub fn monthly_cost_ek(&self) -> f64 {
        self.cost_per_month * self.quantity as f64
    }

    /// Monthly sell price at the derived quantity.
    pub fn monthly_price_vk(&self) -> f64 {
        self.price_per_month * self.quantity as f64
    }
}

/// Result of resolving a package override for one service at one tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideResolution {
    pub inclusion_type: InclusionType,
    /// Cost multiplier from the config record, 1.0 when absent
    pub multiplier: f64,
    /// `1 + hourly_rate_surcharge / 100`
    pub hourly_rate_multiplier: f64,
    /// Base time cost after multiplier and surcharge; 0 for `not_available`
    pub adjusted_time_cost: f64,
    /// True iff the inclusion type is `inclusive`
    pub is_included: bool,
    pub sla_response_time: Option<String>,
    pub sla_availability: Option<String>,
    pub custom_description: Option<String>,
}

/// Per-service cost line in a package calculation, for display and audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCostBreakdown {
    pub service_id: Uuid,
    pub service_name: String,
    pub billing_type: BillingUnit,
    pub quantity: u32,
    pub inclusion_type: InclusionType,
    pub is_included: bool,
    /// Time cost before any override
    pub base_time_cost: f64,
    /// Time cost after multiplier and hourly-rate surcharge
    pub adjusted_time_cost: f64,
    pub sla_response_time: Option<String>,
    pub sla_availability: Option<String>,
    pub custom_description: Option<String>,
}

/// Complete cost calculation for one package tier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageCostCalculation {
    /// Normalized tier name this calculation is for
    pub package_type: String,
    /// Per-service breakdown of every eligible service
    pub services: Vec<ServiceCostBreakdown>,
    /// Deduplicated license costs across the eligible services
    pub unique_licenses: Vec<UniqueLicense>,
    /// Sum of adjusted time costs for `inclusive` services
    pub total_inclusive_time_cost: f64,
    /// Sum of adjusted time costs for `effort_based` services
    pub total_effort_based_time_cost: f64,
    /// `inclusive + effort_based`; custom and not_available contribute 0
    pub total_time_cost: f64,
    /// Sum of `cost_per_month * quantity` over unique licenses (EK)
    pub total_license_cost_ek: f64,
    /// Sum of `price_per_month * quantity` over unique licenses (VK)
    pub total_license_price_vk: f64,
    /// `total_time_cost + total_license_cost_ek`
    pub total_cost_ek: f64,
    /// `total_time_cost + total_license_price_vk`
    pub total_price_vk: f64,
}

impl PackageCostCalculation {
    /// An all-zero calculation, the defined result for unknown tiers.
    pub fn empty(package_type: impl Into<String>) -> Self {
        Self {
            package_type: package_type.into(),
            ..Self::default()
        }
    }

    /// Derive the dependent totals from the accumulated buckets.
    pub fn calculate_totals(&mut self) {
        self.total_time_cost = self.total_inclusive_time_cost + self.total_effort_based_time_cost;
        self.total_cost_ek = self.total_time_cost + self.total_license_cost_ek;
        self.total_price_vk = self.total_time_cost + self.total_license_price_vk;
    }
}
