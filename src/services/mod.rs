//! Services module
//!
//! Stateful wrappers around the pure engine

pub mod pricing;

pub use pricing::{
    CatalogEventType, CatalogStatistics, CatalogUpdateEvent, CostAnalysis, PricingService,
    TierCostSummary,
};
