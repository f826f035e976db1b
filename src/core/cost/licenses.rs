//! License cost deduplication
//!
//! Several services may reference the same license; a package calculation
//! bills it once. The mapping is keyed by license id, so service iteration
//! order never affects the result.

use crate::core::catalog::{CustomerSizeConfig, License, Service, ServiceLicenseLink};
use crate::core::cost::types::UniqueLicense;
use std::collections::HashMap;
use uuid::Uuid;

/// Collect one cost entry per distinct license reachable from `services`
/// through links with `include_cost = true`.
///
/// First-seen wins: a license reachable through multiple services is priced
/// exactly once, at the quantity derived from its own billing unit. Links
/// pointing at missing or inactive licenses are skipped silently; the
/// catalogue store is the source of truth and may be edited concurrently
/// with calculation.
pub fn unique_license_costs(
    services: &[&Service],
    links: &[ServiceLicenseLink],
    licenses: &[License],
    size: &CustomerSizeConfig,
) -> Vec<UniqueLicense> {
    let mut seen: HashMap<Uuid, UniqueLicense> = HashMap::new();

    for service in services {
        for link in links
            .iter()
            .filter(|l| l.service_id == service.id && l.include_cost)
        {
            if seen.contains_key(&link.license_id) {
                continue;
            }
            let Some(license) = licenses.iter().find(|l| l.id == link.license_id) else {
                continue;
            };
            if !license.active {
                continue;
            }
            seen.insert(
                license.id,
                UniqueLicense {
                    id: license.id,
                    name: license.name.clone(),
                    cost_per_month: license.cost_per_month,
                    price_per_month: license.price_per_month,
                    billing_unit: license.billing_unit,
                    quantity: license.billing_unit.quantity(size),
                },
            );
        }
    }

    // Sorted for stable display; membership and quantities never depend on
    // insertion order.
    let mut result: Vec<UniqueLicense> = seen.into_values().collect();
    result.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    result
}
