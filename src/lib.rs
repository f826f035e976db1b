//! # paketkalk-rs
//!
//! A package pricing engine for managed service providers. Turns a catalogue
//! of billable services and software licenses into per-tier package prices
//! for a given customer size (clients, servers, users).
//!
//! ## Features
//!
//! - **Tier hierarchy**: cumulative package tiers with per-service
//!   revocation and explicit reinstatement
//! - **License deduplication**: a license shared by several services is
//!   billed once per package calculation
//! - **Override matrix**: per-package-per-service inclusion type, cost
//!   multiplier, and hourly-rate surcharge
//! - **EK/VK aggregation**: buy-cost and sell-price totals with a
//!   per-service audit breakdown
//! - **Pure engine**: deterministic, no I/O, safe to re-run concurrently
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paketkalk_rs::config::EngineConfig;
//! use paketkalk_rs::core::catalog::CustomerSizeConfig;
//! use paketkalk_rs::services::pricing::{FileSource, PricingService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = PricingService::new(EngineConfig::default());
//!     service.load_from(&FileSource::new("catalog.json")).await?;
//!
//!     let size = CustomerSizeConfig::new(25, 4, 40);
//!     for calc in service.calculate_all_tiers(&size) {
//!         println!("{}: {:.2} EK / {:.2} VK",
//!             calc.package_type, calc.total_cost_ek, calc.total_price_vk);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::{Config, EngineConfig};
pub use utils::error::{EngineError, Result};

// Export the engine surface
pub use core::catalog::{
    BillingUnit, CatalogSnapshot, CustomerSizeConfig, Employee, InclusionType, License, Package,
    PackageConfig, Service, ServiceLicenseLink,
};
pub use core::cost::{
    OverrideResolution, PackageCostCalculation, ServiceCostBreakdown, UniqueLicense, apply_markup,
    average_cost_per_minute, calculate_package_costs, resolve_override, time_cost,
    unique_license_costs,
};
pub use core::eligibility::eligible_services;
pub use core::tiers::{PackageLadder, normalize_tier_name};
pub use services::pricing::PricingService;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
