//! Catalogue update events

use std::time::SystemTime;
use uuid::Uuid;

/// Event emitted whenever the service's catalogue state changes.
#[derive(Debug, Clone)]
pub struct CatalogUpdateEvent {
    /// What changed
    pub event_type: CatalogEventType,
    /// When the change happened
    pub timestamp: SystemTime,
}

/// Types of catalogue events that can occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEventType {
    /// A fresh snapshot replaced the whole catalogue
    CatalogReplaced,
    /// A package config was created or updated
    ConfigUpserted {
        service_id: Uuid,
        package_type: String,
    },
    /// A package config was removed
    ConfigRemoved {
        service_id: Uuid,
        package_type: String,
    },
}
