//! Cost calculation helpers
//!
//! Boundary helpers around the pure calculator: labor-rate derivation,
//! presentation-layer markup, and display formatting.

use crate::core::catalog::Employee;

/// Average labor cost per minute: mean hourly rate of active employees
/// divided by 60. Yields `0.0` when there are no active employees, never
/// `NaN` and never an error.
pub fn average_cost_per_minute(employees: &[Employee]) -> f64 {
    let rates: Vec<f64> = employees
        .iter()
        .filter(|e| e.active)
        .map(|e| e.hourly_rate)
        .collect();

    if rates.is_empty() {
        return 0.0;
    }

    rates.iter().sum::<f64>() / rates.len() as f64 / 60.0
}

/// Apply a percentage markup to a total. This belongs to the presentation
/// layer; the engine's own totals never include markup.
pub fn apply_markup(total: f64, markup_percent: f64) -> f64 {
    total * (1.0 + markup_percent / 100.0)
}

/// Format a monetary amount for display.
pub fn format_cost(cost: f64, currency: &str) -> String {
    format!("{:.2} {}", cost, currency)
}
