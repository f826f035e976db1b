//! Type definitions for the pricing service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// EK/VK/margin summary for one tier, as rendered by the cost-analysis view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierCostSummary {
    /// Normalized tier name
    pub package_type: String,
    /// Buy-side total (EK)
    pub total_cost_ek: f64,
    /// Sell-side total (VK)
    pub total_price_vk: f64,
    /// `total_cost_ek * (1 + markup / 100)`, presentation-layer only
    pub price_with_markup: f64,
    /// `total_price_vk - total_cost_ek`
    pub margin: f64,
    /// Margin relative to VK, 0 when VK is 0
    pub margin_percent: f64,
}

/// Per-tier cost analysis using a fixed reference markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostAnalysis {
    pub reference_markup_percent: f64,
    pub tiers: Vec<TierCostSummary>,
}

/// Catalogue statistics for the loaded snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_services: usize,
    pub active_services: usize,
    pub total_licenses: usize,
    pub active_licenses: usize,
    pub license_links: usize,
    pub package_configs: usize,
    /// Config counts per normalized tier name
    pub configs_per_tier: HashMap<String, usize>,
    pub active_employees: usize,
    pub exported_at: Option<DateTime<Utc>>,
}
