//! Canonical Name Tables
//!
//! 正規名（フランス語）→ キー断片 の静的定義。
//! 正規名は保存データと完全一致する表記で書くこと。

/// 予算カテゴリ（`categories.`）
pub const CATEGORY_KEYS: &[(&str, &str)] = &[
    ("Planification du projet", "planning"),
    ("Permis et autorisations", "permits"),
    ("Excavation", "excavation"),
    ("Fondation", "foundation"),
    ("Coulage de dalle du sous-sol", "basementSlab"),
    ("Structure et charpente", "framing"),
    ("Toiture", "roofing"),
    ("Fenêtres et portes", "windowsDoors"),
    ("Revêtement extérieur", "exteriorSiding"),
    ("Plomberie", "plumbing"),
    ("Électricité", "electrical"),
    ("Chauffage et ventilation", "hvac"),
    ("Isolation et pare-vapeur", "insulation"),
    ("Gypse et peinture", "drywallPaint"),
    ("Revêtements de sol", "flooring"),
    ("Cuisine et salles de bain", "kitchenBath"),
    ("Finitions intérieures", "interiorFinishing"),
    ("Aménagement extérieur", "landscaping"),
];

/// プラン階層（`plans.<key>.name` など）
pub const PLAN_KEYS: &[(&str, &str)] = &[
    ("Gratuit", "free"),
    ("Essentiel", "essential"),
    ("Pro", "pro"),
    ("Entreprise", "enterprise"),
];

/// 工程ID（`steps.`）
pub const STEP_KEYS: &[(&str, &str)] = &[
    ("planification", "planning"),
    ("permis", "permits"),
    ("excavation", "excavation"),
    ("fondation", "foundation"),
    ("dalle-sous-sol", "basementSlab"),
    ("structure", "framing"),
    ("toiture", "roofing"),
    ("fenetres-portes", "windowsDoors"),
    ("revetement-exterieur", "exteriorSiding"),
    ("plomberie-roughin", "plumbingRoughIn"),
    ("electricite-roughin", "electricalRoughIn"),
    ("hvac-roughin", "hvacRoughIn"),
    ("isolation", "insulation"),
    ("gypse-peinture", "drywallPaint"),
    ("revetements-sol", "flooring"),
    ("cuisine-sdb", "kitchenBath"),
    ("plomberie-finition", "plumbingFinishing"),
    ("electricite-finition", "electricalFinishing"),
    ("hvac-finition", "hvacFinishing"),
    ("finitions-interieures", "interiorFinishing"),
    ("amenagement-exterieur", "landscaping"),
    ("inspections-finales", "finalInspections"),
];

/// 職種（`schedule.trades.`）
pub const TRADE_KEYS: &[(&str, &str)] = &[
    ("Entrepreneur général", "generalContractor"),
    ("Arpenteur-géomètre", "landSurveyor"),
    ("Excavateur", "excavator"),
    ("Coffreur", "formworker"),
    ("Cimentier-applicateur", "concreteFinisher"),
    ("Charpentier-menuisier", "carpenter"),
    ("Couvreur", "roofer"),
    ("Plombier", "plumber"),
    ("Électricien", "electrician"),
    ("Frigoriste", "hvacTechnician"),
    ("Poseur de revêtements souples", "flooringInstaller"),
    ("Plâtrier", "plasterer"),
    ("Peintre", "painter"),
    ("Carreleur", "tiler"),
    ("Ébéniste", "cabinetmaker"),
    ("Paysagiste", "landscaper"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_have_unique_canonical_names() {
        for table in [CATEGORY_KEYS, PLAN_KEYS, STEP_KEYS, TRADE_KEYS] {
            let names: HashSet<_> = table.iter().map(|(name, _)| name).collect();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_step_keys_cover_builtin_steps() {
        for step in crate::steps::BUILTIN_STEPS {
            assert!(
                STEP_KEYS.iter().any(|(id, _)| *id == step.id),
                "missing step key for {}",
                step.id
            );
        }
    }
}
