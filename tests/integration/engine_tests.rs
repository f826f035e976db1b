//! End-to-end engine scenarios over assembled catalogues

use crate::assert_approx_eq;
use crate::common::{CatalogBuilder, ConfigFactory, LicenseFactory, ServiceFactory};
use paketkalk_rs::core::catalog::{BillingUnit, CustomerSizeConfig};
use paketkalk_rs::core::cost::{calculate_package_costs, resolve_override, time_cost};
use paketkalk_rs::core::eligibility::eligible_services;
use paketkalk_rs::core::tiers::PackageLadder;

fn size(clients: u32, servers: u32, users: u32) -> CustomerSizeConfig {
    CustomerSizeConfig::new(clients, servers, users)
}

#[test]
fn basic_scenario_fix_service_with_license() {
    // Service A (fix, 60 min, basis), license L (10/20, fix), avg 1.0/min
    let ladder = PackageLadder::default();
    let a = ServiceFactory::fix("A", 60);
    let l = LicenseFactory::fix("L", 10.0, 20.0);
    let catalog = CatalogBuilder::new()
        .service(a.clone())
        .license(l.clone())
        .link(&a, &l)
        .build();

    let calc = calculate_package_costs(
        "basis",
        &catalog.services,
        &catalog.licenses,
        &catalog.service_license_links,
        &catalog.package_configs,
        &ladder,
        1.0,
        &size(1, 1, 1),
    );

    assert_approx_eq!(calc.total_time_cost, 60.0);
    assert_approx_eq!(calc.total_license_cost_ek, 10.0);
    assert_approx_eq!(calc.total_cost_ek, 70.0);
    assert_approx_eq!(calc.total_license_price_vk, 20.0);
    assert_approx_eq!(calc.total_price_vk, 80.0);
}

#[test]
fn not_available_config_excludes_service_from_eligibility() {
    let ladder = PackageLadder::default();
    let a = ServiceFactory::fix("A", 60);
    let l = LicenseFactory::fix("L", 10.0, 20.0);
    let catalog = CatalogBuilder::new()
        .service(a.clone())
        .license(l.clone())
        .link(&a, &l)
        .config(ConfigFactory::not_available(&a, "basis"))
        .build();

    let eligible = eligible_services(
        &catalog.services,
        &catalog.package_configs,
        &ladder,
        "basis",
    );
    assert!(eligible.is_empty());

    // No other service references L, so the license cost disappears too.
    let calc = calculate_package_costs(
        "basis",
        &catalog.services,
        &catalog.licenses,
        &catalog.service_license_links,
        &catalog.package_configs,
        &ladder,
        1.0,
        &size(1, 1, 1),
    );
    assert_approx_eq!(calc.total_cost_ek, 0.0);
}

#[test]
fn license_survives_when_another_service_references_it() {
    let ladder = PackageLadder::default();
    let a = ServiceFactory::fix("A", 60);
    let b = ServiceFactory::fix("B", 30);
    let l = LicenseFactory::fix("L", 10.0, 20.0);
    let catalog = CatalogBuilder::new()
        .service(a.clone())
        .service(b.clone())
        .license(l.clone())
        .link(&a, &l)
        .link(&b, &l)
        .config(ConfigFactory::not_available(&a, "basis"))
        .build();

    let calc = calculate_package_costs(
        "basis",
        &catalog.services,
        &catalog.licenses,
        &catalog.service_license_links,
        &catalog.package_configs,
        &ladder,
        1.0,
        &size(1, 1, 1),
    );

    // A is out, B keeps the license alive.
    assert_eq!(calc.services.len(), 1);
    assert_approx_eq!(calc.total_license_cost_ek, 10.0);
    assert_approx_eq!(calc.total_time_cost, 30.0);
}

#[test]
fn pro_user_service_with_multiplier_and_surcharge() {
    // 30 min * 2.0/min * 5 users = 300; * 1.5 * 1.10 = 495
    let b = ServiceFactory::with_billing("B", 30, BillingUnit::ProUser);
    let config = ConfigFactory::with_multiplier(&b, "gold", 1.5, 10.0);
    let customer = size(0, 0, 5);

    let base = time_cost(&b, 2.0, &customer);
    assert_approx_eq!(base, 300.0);

    let resolved = resolve_override(&b, &[config], "gold", base);
    assert_approx_eq!(resolved.adjusted_time_cost, 495.0);
}

#[test]
fn shared_pro_server_license_deduplicated_in_totals() {
    let ladder = PackageLadder::default();
    let a = ServiceFactory::fix("A", 0);
    let b = ServiceFactory::fix("B", 0);
    let m = LicenseFactory::with_unit("M", 5.0, 7.5, BillingUnit::ProServer);
    let catalog = CatalogBuilder::new()
        .service(a.clone())
        .service(b.clone())
        .license(m.clone())
        .link(&a, &m)
        .link(&b, &m)
        .build();

    let calc = calculate_package_costs(
        "basis",
        &catalog.services,
        &catalog.licenses,
        &catalog.service_license_links,
        &catalog.package_configs,
        &ladder,
        0.0,
        &size(0, 3, 0),
    );

    assert_eq!(calc.unique_licenses.len(), 1);
    assert_eq!(calc.unique_licenses[0].quantity, 3);
    assert_approx_eq!(calc.total_license_cost_ek, 15.0);
}

#[test]
fn hierarchy_monotonicity_without_withdrawals() {
    let ladder = PackageLadder::default();
    let services = vec![
        ServiceFactory::from_level("Basis Svc", 10, "basis"),
        ServiceFactory::from_level("Gold Svc", 10, "gold"),
        ServiceFactory::from_level("Allin Svc", 10, "allin"),
    ];

    let mut previous: Vec<String> = Vec::new();
    for tier in ["basis", "gold", "allin", "allin_black"] {
        let eligible: Vec<String> = eligible_services(&services, &[], &ladder, tier)
            .iter()
            .map(|s| s.name.clone())
            .collect();
        // Everything eligible at the cheaper tier stays eligible here.
        for name in &previous {
            assert!(eligible.contains(name), "{} lost at {}", name, tier);
        }
        previous = eligible;
    }
    assert_eq!(previous.len(), 3);
}

#[test]
fn revocation_propagates_until_explicit_reinstatement() {
    let ladder = PackageLadder::default();
    let svc = ServiceFactory::from_level("Monitoring", 10, "basis");
    let configs = vec![
        ConfigFactory::not_available(&svc, "gold"),
        ConfigFactory::inclusive(&svc, "allin_black"),
    ];
    let services = vec![svc];

    assert_eq!(eligible_services(&services, &configs, &ladder, "basis").len(), 1);
    assert!(eligible_services(&services, &configs, &ladder, "gold").is_empty());
    assert!(eligible_services(&services, &configs, &ladder, "allin").is_empty());
    assert_eq!(
        eligible_services(&services, &configs, &ladder, "allin_black").len(),
        1
    );
}

#[test]
fn zero_employee_rate_leaves_only_license_costs() {
    let ladder = PackageLadder::default();
    let a = ServiceFactory::with_billing("A", 240, BillingUnit::ProClient);
    let l = LicenseFactory::with_unit("L", 4.0, 6.0, BillingUnit::ProUser);
    let catalog = CatalogBuilder::new()
        .service(a.clone())
        .license(l.clone())
        .link(&a, &l)
        .build();

    let calc = calculate_package_costs(
        "allin",
        &catalog.services,
        &catalog.licenses,
        &catalog.service_license_links,
        &catalog.package_configs,
        &ladder,
        0.0,
        &size(50, 5, 10),
    );

    assert_approx_eq!(calc.total_time_cost, 0.0);
    assert_approx_eq!(calc.total_cost_ek, calc.total_license_cost_ek);
    assert_approx_eq!(calc.total_license_cost_ek, 40.0);
}

#[test]
fn identical_inputs_give_bit_identical_totals() {
    let ladder = PackageLadder::default();
    let a = ServiceFactory::with_billing("A", 37, BillingUnit::ProUser);
    let b = ServiceFactory::with_billing("B", 11, BillingUnit::ProServer);
    let l = LicenseFactory::with_unit("L", 3.33, 6.66, BillingUnit::ProClient);
    let catalog = CatalogBuilder::new()
        .service(a.clone())
        .service(b.clone())
        .license(l.clone())
        .link(&a, &l)
        .link(&b, &l)
        .config(ConfigFactory::with_multiplier(&a, "gold", 1.25, 7.5))
        .build();
    let customer = size(9, 4, 17);

    let run = || {
        calculate_package_costs(
            "gold",
            &catalog.services,
            &catalog.licenses,
            &catalog.service_license_links,
            &catalog.package_configs,
            &ladder,
            0.9,
            &customer,
        )
    };

    let first = run();
    let second = run();
    assert_eq!(first.total_cost_ek.to_bits(), second.total_cost_ek.to_bits());
    assert_eq!(first.total_price_vk.to_bits(), second.total_price_vk.to_bits());
    assert_eq!(
        first.total_time_cost.to_bits(),
        second.total_time_cost.to_bits()
    );
}

#[test]
fn informational_links_do_not_price() {
    let ladder = PackageLadder::default();
    let a = ServiceFactory::fix("A", 10);
    let l = LicenseFactory::fix("L", 10.0, 20.0);
    let catalog = CatalogBuilder::new()
        .service(a.clone())
        .license(l.clone())
        .informational_link(&a, &l)
        .build();

    let calc = calculate_package_costs(
        "basis",
        &catalog.services,
        &catalog.licenses,
        &catalog.service_license_links,
        &catalog.package_configs,
        &ladder,
        1.0,
        &size(1, 1, 1),
    );

    assert!(calc.unique_licenses.is_empty());
    assert_approx_eq!(calc.total_cost_ek, 10.0);
}

#[test]
fn inactive_entities_are_filtered_not_errors() {
    let ladder = PackageLadder::default();
    let active = ServiceFactory::fix("Active", 10);
    let inactive = ServiceFactory::inactive("Inactive");
    let dead_license = LicenseFactory::inactive("Dead", 100.0, 200.0);
    let catalog = CatalogBuilder::new()
        .service(active.clone())
        .service(inactive)
        .license(dead_license.clone())
        .link(&active, &dead_license)
        .build();

    let calc = calculate_package_costs(
        "basis",
        &catalog.services,
        &catalog.licenses,
        &catalog.service_license_links,
        &catalog.package_configs,
        &ladder,
        1.0,
        &size(1, 1, 1),
    );

    assert_eq!(calc.services.len(), 1);
    assert!(calc.unique_licenses.is_empty());
    assert_approx_eq!(calc.total_cost_ek, 10.0);
}
