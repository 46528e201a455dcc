//! Property tests for normalization, label fallback and budget rerouting.

use chantier_core::budget::{total_cost, BASEMENT_SLAB, EXCAVATION, FOUNDATION};
use chantier_core::label::{CATEGORY_KEYS, TRADE_KEYS};
use chantier_core::{
    normalize, reroute, translate_category_name, translate_plan_name, translate_trade_name,
    BudgetCategory, BudgetItem,
};
use proptest::prelude::*;

/// Translator that knows every key and answers with a marker
fn translate_everything(key: &str) -> String {
    format!("<{key}>")
}

fn item_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Drain français".to_string()),
        Just("Remblai granulaire".to_string()),
        Just("Puisard".to_string()),
        Just("Dalle de béton 25 MPa".to_string()),
        Just("Plancher béton 4 pouces".to_string()),
        Just("Béton 25 MPa sous-sol".to_string()),
        Just("Béton 25 MPa murs".to_string()),
        Just("Coffrage mur fondation".to_string()),
        Just("Semelles".to_string()),
        "[a-zA-Zéèàç \"0-9]{0,24}",
    ]
}

fn items() -> impl Strategy<Value = Vec<BudgetItem>> {
    prop::collection::vec(
        (item_name(), 0u32..100_000).prop_map(|(name, cents)| {
            BudgetItem::new(name, f64::from(cents) / 100.0)
        }),
        0..12,
    )
}

fn budget() -> impl Strategy<Value = Vec<BudgetCategory>> {
    (items(), items(), items()).prop_map(|(foundation, excavation, slab)| {
        vec![
            BudgetCategory::new(EXCAVATION, excavation),
            BudgetCategory::new(FOUNDATION, foundation),
            BudgetCategory::new("Toiture", vec![BudgetItem::new("Bardeaux", 42.0)]),
            BudgetCategory::new(BASEMENT_SLAB, slab),
        ]
    })
}

fn sorted_costs(categories: &[BudgetCategory]) -> Vec<u64> {
    let mut costs: Vec<u64> = categories
        .iter()
        .flat_map(|c| c.items.iter().map(|i| (i.cost * 100.0).round() as u64))
        .collect();
    costs.sort_unstable();
    costs
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "[ -~\\u{a0}-\\u{17f}\\t\\n]{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_has_no_edge_or_double_spaces(s in "[ \\tA-Za-zÉéèô\\n]{0,40}") {
        let n = normalize(&s);
        prop_assert!(!n.starts_with(' '));
        prop_assert!(!n.ends_with(' '));
        prop_assert!(!n.contains("  "));
    }

    #[test]
    fn unknown_names_fall_back_to_themselves(name in "\\PC{0,30}") {
        prop_assume!(!CATEGORY_KEYS.iter().any(|(c, _)| *c == name));
        prop_assume!(!TRADE_KEYS.iter().any(|(c, _)| *c == name));
        prop_assume!(!["Gratuit", "Essentiel", "Pro", "Entreprise"].contains(&name.as_str()));

        prop_assert_eq!(translate_category_name(&translate_everything, &name), name.clone());
        prop_assert_eq!(translate_trade_name(&translate_everything, &name), name.clone());
        prop_assert_eq!(translate_plan_name(&translate_everything, &name), name);
    }

    #[test]
    fn reroute_conserves_costs(categories in budget()) {
        let output = reroute(&categories);
        prop_assert_eq!(sorted_costs(&output), sorted_costs(&categories));
        prop_assert_eq!(output.len(), categories.len());
        prop_assert!((total_cost(&output) - total_cost(&categories)).abs() < 1e-6);
    }

    #[test]
    fn reroute_keeps_every_item_once(categories in budget()) {
        let output = reroute(&categories);
        let count = |cs: &[BudgetCategory]| cs.iter().map(|c| c.items.len()).sum::<usize>();
        prop_assert_eq!(count(&output[..]), count(&categories[..]));
        // untouched category keeps its items
        prop_assert_eq!(&output[2], &categories[2]);
    }

    #[test]
    fn reroute_twice_equals_once(categories in budget()) {
        let once = reroute(&categories).into_owned();
        let twice = reroute(&once).into_owned();
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn normalize_is_diacritic_insensitive() {
    assert_eq!(normalize("Électricité"), normalize("electricite"));
}
