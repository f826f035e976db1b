//! Service eligibility per package tier
//!
//! Tiers are cumulative by default: anything available in a cheaper tier is
//! available in every pricier tier. A `not_available` override withdraws a
//! service from a tier and, through inheritance, from all tiers above it,
//! unless an explicit non-`not_available` config reinstates it at a specific
//! higher tier.

use crate::core::catalog::{InclusionType, PackageConfig, Service, find_package_config};
use crate::core::tiers::{PackageLadder, normalize_tier_name};
use tracing::debug;

/// Return the active services available at `target_tier`.
///
/// Unknown tiers yield an empty set, never an error.
pub fn eligible_services<'a>(
    services: &'a [Service],
    package_configs: &[PackageConfig],
    ladder: &PackageLadder,
    target_tier: &str,
) -> Vec<&'a Service> {
    let Some(target_index) = ladder.tier_index(target_tier) else {
        debug!(tier = target_tier, "unknown tier, no services eligible");
        return Vec::new();
    };
    let target_normalized = normalize_tier_name(target_tier);

    services
        .iter()
        .filter(|service| {
            is_eligible(
                service,
                package_configs,
                ladder,
                target_index,
                &target_normalized,
            )
        })
        .collect()
}

fn is_eligible(
    service: &Service,
    package_configs: &[PackageConfig],
    ladder: &PackageLadder,
    target_index: usize,
    target_normalized: &str,
) -> bool {
    if !service.active {
        return false;
    }

    // A missing minimum level means the service starts at the lowest tier; a
    // named but unresolvable level excludes the service.
    let min_index = match service.min_package_level.as_deref() {
        Some(level) => match ladder.tier_index(level) {
            Some(index) => index,
            None => return false,
        },
        None => 0,
    };

    if min_index > target_index {
        return false;
    }

    // An explicit config for the exact target tier takes precedence over the
    // inherited walk.
    if let Some(config) = find_package_config(package_configs, service.id, target_normalized) {
        return config.inclusion_type != InclusionType::NotAvailable;
    }

    // Inherited range: a withdrawal at any level between the service's
    // minimum and the target sticks.
    for level in &ladder.levels()[min_index..=target_index] {
        if let Some(config) = find_package_config(package_configs, service.id, level) {
            if config.inclusion_type == InclusionType::NotAvailable {
                return false;
            }
        }
    }

    true
}
