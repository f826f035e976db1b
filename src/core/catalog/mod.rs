//! Catalogue entities consumed by the pricing engine
//!
//! All entity lifecycles are owned by the external catalogue store; this
//! module only defines the read contracts and the snapshot shape the engine
//! operates on.

mod types;

pub use types::{
    BillingUnit, CatalogSnapshot, CustomerSizeConfig, Employee, InclusionType, License, Package,
    PackageConfig, Service, ServiceLicenseLink,
};

use crate::core::tiers::normalize_tier_name;
use uuid::Uuid;

/// Look up the override configuration for a `(service, tier)` pair.
///
/// The lookup is case-insensitive on `package_type`; `normalized_tier` must
/// already be in normalized form.
pub fn find_package_config<'a>(
    configs: &'a [PackageConfig],
    service_id: Uuid,
    normalized_tier: &str,
) -> Option<&'a PackageConfig> {
    configs
        .iter()
        .find(|c| c.service_id == service_id && normalize_tier_name(&c.package_type) == normalized_tier)
}
