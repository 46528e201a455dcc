//! Budget item reclassification
//!
//! Moves line items out of a source category into destination categories
//! based on their (normalized) names. Costs are copied verbatim and the
//! engine never creates categories.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::normalize::normalize;

use super::model::{BudgetCategory, BudgetItem};

pub const FOUNDATION: &str = "Fondation";
pub const EXCAVATION: &str = "Excavation";
pub const BASEMENT_SLAB: &str = "Coulage de dalle du sous-sol";

const DRAIN_MARKERS: &[&str] = &["drain", "remblai", "puisard", "drain francais"];
const SLAB_MARKERS: &[&str] = &["dalle", "plancher beton"];
const FOUR_INCH_MARKERS: &[&str] = &["4 pouces", "4\"", "4 po"];
const SLAB_FINISH_MARKER: &str = "coffrage et finition";
const CONCRETE_GRADE_MARKER: &str = "25 mpa";
const BASEMENT_MARKERS: &[&str] = &["sous-sol", "sous sol"];

/// A single routing rule; `matches` receives the normalized item name
#[derive(Clone, Copy)]
pub struct Route {
    pub name: &'static str,
    pub destination: &'static str,
    pub matches: fn(&str) -> bool,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

/// Source category plus ordered routes (first match wins)
#[derive(Debug, Clone, Copy)]
pub struct RerouteRules {
    pub source: &'static str,
    pub routes: &'static [Route],
}

pub const FOUNDATION_RULES: RerouteRules = RerouteRules {
    source: FOUNDATION,
    routes: &[
        Route {
            name: "drain-backfill",
            destination: EXCAVATION,
            matches: is_drain_or_backfill,
        },
        Route {
            name: "basement-slab",
            destination: BASEMENT_SLAB,
            matches: is_basement_slab,
        },
    ],
};

/// One item moved by a reroute pass
#[derive(Debug, Clone, PartialEq)]
pub struct MovedItem {
    pub item: String,
    pub rule: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// What a reroute pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RerouteReport {
    pub moved: Vec<MovedItem>,
}

impl RerouteReport {
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }

    /// Moved item names for one destination, in append order
    pub fn moved_to(&self, destination: &str) -> Vec<&str> {
        self.moved
            .iter()
            .filter(|m| m.to == destination)
            .map(|m| m.item.as_str())
            .collect()
    }
}

impl RerouteRules {
    pub fn foundation() -> Self {
        FOUNDATION_RULES
    }

    /// Destination for an item name, `None` when it stays in the source
    pub fn route_for(&self, item_name: &str) -> Option<&Route> {
        let key = normalize(item_name);
        self.routes.iter().find(|route| (route.matches)(&key))
    }

    pub fn apply<'a>(&self, categories: &'a [BudgetCategory]) -> Cow<'a, [BudgetCategory]> {
        self.apply_with_report(categories).0
    }

    /// Reroute items out of the source category
    ///
    /// Returns the input untouched (borrowed) when the source is missing or
    /// empty, or when any destination is missing. Otherwise returns an owned
    /// copy where each destination keeps its items and gets the rerouted ones
    /// appended in source order. Only the first category with a given name is
    /// addressed.
    pub fn apply_with_report<'a>(
        &self,
        categories: &'a [BudgetCategory],
    ) -> (Cow<'a, [BudgetCategory]>, RerouteReport) {
        let unchanged = || (Cow::Borrowed(categories), RerouteReport::default());

        let Some(source_idx) = position(categories, self.source) else {
            return unchanged();
        };
        if categories[source_idx].items.is_empty() {
            return unchanged();
        }

        let mut destination_idx = Vec::with_capacity(self.routes.len());
        for route in self.routes {
            match position(categories, route.destination) {
                Some(idx) => destination_idx.push(idx),
                None => {
                    debug!(
                        destination = route.destination,
                        "reroute skipped: destination category missing"
                    );
                    return unchanged();
                }
            }
        }

        let mut kept: Vec<BudgetItem> = Vec::new();
        let mut buckets: Vec<Vec<BudgetItem>> = vec![Vec::new(); self.routes.len()];
        let mut report = RerouteReport::default();

        for item in &categories[source_idx].items {
            let key = normalize(&item.name);
            match self.routes.iter().position(|route| (route.matches)(&key)) {
                Some(route_idx) => {
                    let route = &self.routes[route_idx];
                    debug!(
                        item = %item.name,
                        rule = route.name,
                        to = route.destination,
                        "rerouting budget item"
                    );
                    report.moved.push(MovedItem {
                        item: item.name.clone(),
                        rule: route.name,
                        from: self.source,
                        to: route.destination,
                    });
                    buckets[route_idx].push(item.clone());
                }
                None => kept.push(item.clone()),
            }
        }

        let mut output = categories.to_vec();
        output[source_idx].items = kept;
        for (bucket, idx) in buckets.into_iter().zip(destination_idx) {
            output[idx].items.extend(bucket);
        }

        (Cow::Owned(output), report)
    }
}

/// Reroute foundation items with the default rules
pub fn reroute(categories: &[BudgetCategory]) -> Cow<'_, [BudgetCategory]> {
    FOUNDATION_RULES.apply(categories)
}

fn position(categories: &[BudgetCategory], name: &str) -> Option<usize> {
    categories.iter().position(|c| c.name == name)
}

fn contains_any(name: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| name.contains(marker))
}

/// French drains, backfill and sump pits belong to excavation
pub fn is_drain_or_backfill(name: &str) -> bool {
    contains_any(name, DRAIN_MARKERS)
}

/// Basement slab work
///
/// The concrete grade alone is not enough: foundation walls are poured with
/// the same 25 MPa concrete.
pub fn is_basement_slab(name: &str) -> bool {
    let has_slab = contains_any(name, SLAB_MARKERS);
    let has_four_inch = contains_any(name, FOUR_INCH_MARKERS);
    let has_basement = contains_any(name, BASEMENT_MARKERS);
    let has_grade = name.contains(CONCRETE_GRADE_MARKER);

    has_slab
        || has_four_inch
        || name.contains(SLAB_FINISH_MARKER)
        || (has_grade && (has_slab || has_four_inch || has_basement))
}
