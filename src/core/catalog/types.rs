//! Catalogue entity types
//!
//! Immutable inputs to the pricing engine. The lifecycle of these records is
//! owned by the external catalogue store; the engine only ever reads them and
//! returns new derived values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit a monthly cost scales by.
///
/// Shared by services (`billing_type`) and licenses (`billing_unit`). The
/// aliases cover legacy spellings found in exported catalogues; anything
/// unrecognized falls through to [`BillingUnit::Other`] and is priced at
/// quantity 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillingUnit {
    /// Flat monthly fee
    #[default]
    #[serde(alias = "fixed")]
    Fix,
    /// Scales by user count
    #[serde(alias = "per_user")]
    ProUser,
    /// Scales by server count
    #[serde(alias = "per_server")]
    ProServer,
    /// Scales by client/device count
    #[serde(alias = "pro_device", alias = "per_client")]
    ProClient,
    /// Per site; no site metric is wired into the size config, priced at 1
    ProSite,
    /// Per terabyte; no volume metric is wired into the size config, priced at 1
    PerTb,
    /// Unrecognized unit, priced at quantity 1
    #[serde(other)]
    Other,
}

impl BillingUnit {
    /// Quantity for this unit under the given customer size.
    pub fn quantity(&self, size: &CustomerSizeConfig) -> u32 {
        match self {
            BillingUnit::ProClient => size.clients,
            BillingUnit::ProServer => size.servers,
            BillingUnit::ProUser => size.users,
            BillingUnit::Fix | BillingUnit::ProSite | BillingUnit::PerTb | BillingUnit::Other => 1,
        }
    }
}

/// How a service's cost behaves within a package tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InclusionType {
    /// Bundled into the package price, always counted
    Inclusive,
    /// Billed on usage but still counted in the totals
    #[default]
    EffortBased,
    /// Withdrawn from the tier (and, by inheritance, all tiers above it)
    NotAvailable,
    /// Individually negotiated; tracked per service, excluded from totals
    Custom,
}

impl std::fmt::Display for InclusionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InclusionType::Inclusive => "inclusive",
            InclusionType::EffortBased => "effort_based",
            InclusionType::NotAvailable => "not_available",
            InclusionType::Custom => "custom",
        };
        f.write_str(label)
    }
}

/// A billable service from the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    /// Estimated monthly effort
    pub time_in_minutes: u32,
    #[serde(default)]
    pub billing_type: BillingUnit,
    /// Tier at which the service first becomes available. `package_level` is
    /// the legacy field name; the alias folds it in once at ingestion.
    #[serde(default, alias = "package_level")]
    pub min_package_level: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A software license from the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Monthly buy price (EK)
    pub cost_per_month: f64,
    /// Monthly sell price (VK)
    pub price_per_month: f64,
    #[serde(default)]
    pub billing_unit: BillingUnit,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Many-to-many association between a service and a license.
///
/// Only links with `include_cost = true` contribute to cost; other links are
/// informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLicenseLink {
    pub service_id: Uuid,
    pub license_id: Uuid,
    #[serde(default)]
    pub include_cost: bool,
}

/// Per-package-per-service override configuration.
///
/// Keyed by `(service_id, package_type)` with at most one record per pair.
/// Absence of a record means "inherit from hierarchy, default to
/// effort_based, multiplier 1.0".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    pub service_id: Uuid,
    pub package_type: String,
    #[serde(default)]
    pub multiplier: Option<f64>,
    #[serde(default)]
    pub inclusion_type: InclusionType,
    #[serde(default)]
    pub sla_response_time: Option<String>,
    #[serde(default)]
    pub sla_availability: Option<String>,
    /// Percentage surcharge on the labor rate
    #[serde(default)]
    pub hourly_rate_surcharge: Option<f64>,
    #[serde(default)]
    pub custom_description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A package tier definition from the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: Uuid,
    pub name: String,
    /// Ladder position; lower index = more basic
    pub order_index: i32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Customer sizing supplied per calculation, never persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerSizeConfig {
    #[serde(default)]
    pub clients: u32,
    #[serde(default)]
    pub servers: u32,
    #[serde(default)]
    pub users: u32,
}

impl CustomerSizeConfig {
    pub fn new(clients: u32, servers: u32, users: u32) -> Self {
        Self {
            clients,
            servers,
            users,
        }
    }
}

/// An employee record, used only to derive the average labor rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub hourly_rate: f64,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A consistent, already-materialized set of catalogue collections.
///
/// The engine never observes partial or interleaved catalogue state; it
/// receives one of these snapshots, not live cursors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub service_license_links: Vec<ServiceLicenseLink>,
    #[serde(default)]
    pub package_configs: Vec<PackageConfig>,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}
