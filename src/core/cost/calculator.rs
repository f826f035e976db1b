//! Package cost calculation
//!
//! Core pricing logic: time-based service costs, per-package override
//! resolution, and the aggregation into EK/VK totals. Pure functions over
//! already-materialized catalogue collections; there is no I/O here and,
//! given well-formed inputs, no failure path.

use crate::core::catalog::{
    CustomerSizeConfig, InclusionType, License, PackageConfig, Service, ServiceLicenseLink,
    find_package_config,
};
use crate::core::cost::licenses::unique_license_costs;
use crate::core::cost::types::{OverrideResolution, PackageCostCalculation, ServiceCostBreakdown};
use crate::core::eligibility::eligible_services;
use crate::core::tiers::{PackageLadder, normalize_tier_name};

/// Raw time-based cost of a service before any package override.
///
/// `avg_cost_per_minute` is supplied by the caller; see
/// [`average_cost_per_minute`](crate::core::cost::utils::average_cost_per_minute)
/// for the boundary that produces it (0.0 with no active employees).
pub fn time_cost(
    service: &Service,
    avg_cost_per_minute: f64,
    size: &CustomerSizeConfig,
) -> f64 {
    let quantity = service.billing_type.quantity(size) as f64;
    service.time_in_minutes as f64 * avg_cost_per_minute * quantity
}

/// Resolve the package override for a service at a tier.
///
/// With no config record the inclusion type defaults to `effort_based` and
/// the base cost passes through unchanged. For `not_available` the adjusted
/// cost is forced to 0 even if the caller skipped the eligibility filter.
pub fn resolve_override(
    service: &Service,
    package_configs: &[PackageConfig],
    tier_name: &str,
    base_time_cost: f64,
) -> OverrideResolution {
    let tier_normalized = normalize_tier_name(tier_name);
    let config = find_package_config(package_configs, service.id, &tier_normalized);

    let inclusion_type = config.map(|c| c.inclusion_type).unwrap_or_default();
    let multiplier = config.and_then(|c| c.multiplier).unwrap_or(1.0);
    let surcharge = config.and_then(|c| c.hourly_rate_surcharge).unwrap_or(0.0);
    let hourly_rate_multiplier = 1.0 + surcharge / 100.0;

    let adjusted_time_cost = if inclusion_type == InclusionType::NotAvailable {
        0.0
    } else {
        base_time_cost * multiplier * hourly_rate_multiplier
    };

    OverrideResolution {
        inclusion_type,
        multiplier,
        hourly_rate_multiplier,
        adjusted_time_cost,
        is_included: inclusion_type == InclusionType::Inclusive,
        sla_response_time: config.and_then(|c| c.sla_response_time.clone()),
        sla_availability: config.and_then(|c| c.sla_availability.clone()),
        custom_description: config.and_then(|c| c.custom_description.clone()),
    }
}

/// Calculate the complete EK/VK cost picture for one package tier.
///
/// Composes the eligibility filter, license deduplication, and override
/// resolution. An unrecognized tier returns an all-zero calculation so
/// callers can render it without special-casing.
#[allow(clippy::too_many_arguments)]
pub fn calculate_package_costs(
    tier_name: &str,
    services: &[Service],
    licenses: &[License],
    links: &[ServiceLicenseLink],
    package_configs: &[PackageConfig],
    ladder: &PackageLadder,
    avg_cost_per_minute: f64,
    size: &CustomerSizeConfig,
) -> PackageCostCalculation {
    let tier_normalized = normalize_tier_name(tier_name);
    let mut calc = PackageCostCalculation::empty(tier_normalized);

    if ladder.tier_index(tier_name).is_none() {
        return calc;
    }

    let eligible = eligible_services(services, package_configs, ladder, tier_name);

    calc.unique_licenses = unique_license_costs(&eligible, links, licenses, size);
    calc.total_license_cost_ek = calc.unique_licenses.iter().map(|l| l.monthly_cost_ek()).sum();
    calc.total_license_price_vk = calc.unique_licenses.iter().map(|l| l.monthly_price_vk()).sum();

    for service in &eligible {
        let base_time_cost = time_cost(service, avg_cost_per_minute, size);
        let resolved = resolve_override(service, package_configs, tier_name, base_time_cost);

        match resolved.inclusion_type {
            InclusionType::Inclusive => {
                calc.total_inclusive_time_cost += resolved.adjusted_time_cost;
            }
            InclusionType::EffortBased => {
                calc.total_effort_based_time_cost += resolved.adjusted_time_cost;
            }
            // Tracked in the breakdown, excluded from both buckets.
            InclusionType::Custom | InclusionType::NotAvailable => {}
        }

        calc.services.push(ServiceCostBreakdown {
            service_id: service.id,
            service_name: service.name.clone(),
            billing_type: service.billing_type,
            quantity: service.billing_type.quantity(size),
            inclusion_type: resolved.inclusion_type,
            is_included: resolved.is_included,
            base_time_cost,
            adjusted_time_cost: resolved.adjusted_time_cost,
            sla_response_time: resolved.sla_response_time,
            sla_availability: resolved.sla_availability,
            custom_description: resolved.custom_description,
        });
    }

    calc.calculate_totals();
    calc
}
