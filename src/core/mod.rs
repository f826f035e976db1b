//! Core pricing engine
//!
//! Pure, synchronous computation with no I/O and no shared mutable state.
//! Every invocation only reads its arguments and allocates new output
//! structures, so calls may run concurrently without coordination.

pub mod catalog;
pub mod cost;
pub mod eligibility;
pub mod tiers;
