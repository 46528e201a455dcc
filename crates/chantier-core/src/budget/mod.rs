//! Budget categories, line items and item reclassification.

mod model;
mod reroute;

pub use model::{load_budget, save_budget, total_cost, BudgetCategory, BudgetItem};
pub use reroute::{
    is_basement_slab, is_drain_or_backfill, reroute, MovedItem, RerouteReport, RerouteRules,
    Route, BASEMENT_SLAB, EXCAVATION, FOUNDATION, FOUNDATION_RULES,
};
