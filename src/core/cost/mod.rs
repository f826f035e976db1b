//! Package cost calculation
//!
//! Centralized cost logic for the pricing engine: time-based service costs,
//! per-package override resolution, license deduplication, and the EK/VK
//! aggregation. Everything in this module is a pure function over
//! already-materialized catalogue collections.

pub mod calculator;
pub mod licenses;
pub mod types;
pub mod utils;

// Re-export main types and functions
pub use calculator::{calculate_package_costs, resolve_override, time_cost};
pub use licenses::unique_license_costs;
pub use types::{
    OverrideResolution, PackageCostCalculation, ServiceCostBreakdown, UniqueLicense,
};
pub use utils::{apply_markup, average_cost_per_minute, format_cost};
