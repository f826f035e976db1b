//! Main pricing service implementation

use super::events::{CatalogEventType, CatalogUpdateEvent};
use super::types::{CatalogStatistics, CostAnalysis, TierCostSummary};
use crate::config::EngineConfig;
use crate::core::catalog::{CatalogSnapshot, CustomerSizeConfig, PackageConfig};
use crate::core::cost::{
    PackageCostCalculation, apply_markup, average_cost_per_minute, calculate_package_costs,
};
use crate::core::tiers::{PackageLadder, normalize_tier_name};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};
use uuid::Uuid;

/// Pricing service over a materialized catalogue snapshot.
///
/// Holds the snapshot behind a single lock; every calculation reads a
/// consistent state and returns freshly allocated results.
#[derive(Debug, Clone)]
pub struct PricingService {
    /// Catalogue state - single lock for all collections
    pub(super) catalog: Arc<RwLock<CatalogSnapshot>>,
    /// Engine configuration (ladder, markup, currency)
    pub(super) config: EngineConfig,
    /// Event broadcaster for catalogue updates
    pub(super) event_sender: tokio::sync::broadcast::Sender<CatalogUpdateEvent>,
}

impl PricingService {
    /// Create a pricing service with an empty catalogue.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_catalog(config, CatalogSnapshot::default())
    }

    /// Create a pricing service over an existing snapshot.
    pub fn with_catalog(config: EngineConfig, snapshot: CatalogSnapshot) -> Self {
        let (event_sender, _) = tokio::sync::broadcast::channel(256);

        let service = Self {
            catalog: Arc::new(RwLock::new(snapshot)),
            config,
            event_sender,
        };

        info!("Pricing service initialized");
        service
    }

    /// Engine configuration this service was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The tier ladder derived from the configuration.
    pub fn ladder(&self) -> PackageLadder {
        self.config.ladder()
    }

    /// Subscribe to catalogue update events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<CatalogUpdateEvent> {
        self.event_sender.subscribe()
    }

    /// Swap in a fresh consistent snapshot.
    pub fn replace_catalog(&self, snapshot: CatalogSnapshot) {
        {
            let mut catalog = self.catalog.write();
            *catalog = snapshot;
        }

        let _ = self.event_sender.send(CatalogUpdateEvent {
            event_type: CatalogEventType::CatalogReplaced,
            timestamp: SystemTime::now(),
        });
    }

    /// Create or update the override config for a `(service, tier)` pair.
    ///
    /// At most one record per pair exists; an existing record is replaced.
    pub fn upsert_package_config(&self, config: PackageConfig) {
        let normalized = normalize_tier_name(&config.package_type);
        let service_id = config.service_id;

        {
            let mut catalog = self.catalog.write();
            let existing = catalog.package_configs.iter_mut().find(|c| {
                c.service_id == service_id && normalize_tier_name(&c.package_type) == normalized
            });
            match existing {
                Some(slot) => *slot = config,
                None => catalog.package_configs.push(config),
            }
        }

        debug!(service_id = %service_id, tier = %normalized, "package config upserted");
        let _ = self.event_sender.send(CatalogUpdateEvent {
            event_type: CatalogEventType::ConfigUpserted {
                service_id,
                package_type: normalized,
            },
            timestamp: SystemTime::now(),
        });
    }

    /// Remove the override config for a `(service, tier)` pair.
    ///
    /// Returns whether a record was removed.
    pub fn remove_package_config(&self, service_id: Uuid, package_type: &str) -> bool {
        let normalized = normalize_tier_name(package_type);

        let removed = {
            let mut catalog = self.catalog.write();
            let before = catalog.package_configs.len();
            catalog.package_configs.retain(|c| {
                c.service_id != service_id || normalize_tier_name(&c.package_type) != normalized
            });
            catalog.package_configs.len() != before
        };

        if removed {
            let _ = self.event_sender.send(CatalogUpdateEvent {
                event_type: CatalogEventType::ConfigRemoved {
                    service_id,
                    package_type: normalized,
                },
                timestamp: SystemTime::now(),
            });
        }
        removed
    }

    /// Calculate the full cost picture for one tier.
    pub fn calculate_for_tier(
        &self,
        tier_name: &str,
        size: &CustomerSizeConfig,
    ) -> PackageCostCalculation {
        let catalog = self.catalog.read();
        let avg_cost_per_minute = average_cost_per_minute(&catalog.employees);

        calculate_package_costs(
            tier_name,
            &catalog.services,
            &catalog.licenses,
            &catalog.service_license_links,
            &catalog.package_configs,
            &self.ladder(),
            avg_cost_per_minute,
            size,
        )
    }

    /// Calculate every ladder tier, lowest first.
    pub fn calculate_all_tiers(&self, size: &CustomerSizeConfig) -> Vec<PackageCostCalculation> {
        self.ladder()
            .levels()
            .iter()
            .map(|tier| self.calculate_for_tier(tier, size))
            .collect()
    }

    /// Per-tier EK/VK/margin analysis using the configured reference markup.
    pub fn cost_analysis(&self, size: &CustomerSizeConfig) -> CostAnalysis {
        let markup = self.config.reference_markup_percent;

        let tiers = self
            .calculate_all_tiers(size)
            .into_iter()
            .map(|calc| {
                let margin = calc.total_price_vk - calc.total_cost_ek;
                let margin_percent = if calc.total_price_vk > 0.0 {
                    margin / calc.total_price_vk * 100.0
                } else {
                    0.0
                };
                TierCostSummary {
                    package_type: calc.package_type,
                    total_cost_ek: calc.total_cost_ek,
                    total_price_vk: calc.total_price_vk,
                    price_with_markup: apply_markup(calc.total_cost_ek, markup),
                    margin,
                    margin_percent,
                }
            })
            .collect();

        CostAnalysis {
            reference_markup_percent: markup,
            tiers,
        }
    }

    /// Catalogue statistics for the loaded snapshot.
    pub fn statistics(&self) -> CatalogStatistics {
        let catalog = self.catalog.read();

        let mut configs_per_tier: HashMap<String, usize> = HashMap::new();
        for config in &catalog.package_configs {
            *configs_per_tier
                .entry(normalize_tier_name(&config.package_type))
                .or_insert(0) += 1;
        }

        CatalogStatistics {
            total_services: catalog.services.len(),
            active_services: catalog.services.iter().filter(|s| s.active).count(),
            total_licenses: catalog.licenses.len(),
            active_licenses: catalog.licenses.iter().filter(|l| l.active).count(),
            license_links: catalog.service_license_links.len(),
            package_configs: catalog.package_configs.len(),
            configs_per_tier,
            active_employees: catalog.employees.iter().filter(|e| e.active).count(),
            exported_at: catalog.exported_at,
        }
    }
}
