//! # Label Module
//!
//! 正規データ（フランス語）を利用者の言語で表示するための解決器群。
//!
//! ## 設計目的
//!
//! 保存データは常に1つの言語で持ち、表示時にだけ翻訳する：
//!
//! - **カテゴリ**: 予算カテゴリ名
//! - **プラン**: 名前、説明、機能リスト
//! - **ステップ**: 工程名（ID から解決）
//! - **職種**: スケジュール上の職種名
//! - **タスク**: カテゴリ + タスク名 から解決
//!
//! 翻訳が無い場合は例外を出さず、正規名（または指定されたフォールバック）を返す。
//!
//! ## モジュール構成
//!
//! - `resolver`: 共通の解決器
//! - `tables`: 正規名 → キー の静的テーブル
//! - `task_title`: タスクIDインデックスとタスク名解決
//!
//! ## 使用例
//!
//! ```rust
//! use chantier_core::label::{translate_category_name, translate_step_name};
//!
//! let t = |key: &str| match key {
//!     "categories.roofing" => "Roofing".to_string(),
//!     other => other.to_string(),
//! };
//!
//! assert_eq!(translate_category_name(&t, "Toiture"), "Roofing");
//! assert_eq!(translate_category_name(&t, "Piscine"), "Piscine");
//! assert_eq!(translate_step_name(&t, "pose-spa", None), "Pose spa");
//! ```

mod resolver;
mod tables;
mod task_title;

use once_cell::sync::Lazy;

use crate::i18n::Translate;

pub use resolver::{humanize_id, FallbackPolicy, LabelResolver};
pub use tables::{CATEGORY_KEYS, PLAN_KEYS, STEP_KEYS, TRADE_KEYS};
pub use task_title::{
    effective_category, resolve_task_title, TaskIdIndex, EXCLUDED_STEP_IDS,
    MERGED_STEP_CATEGORIES, OTHER_ITEMS, OTHER_ITEMS_KEY,
};

pub static CATEGORY_LABELS: Lazy<LabelResolver> =
    Lazy::new(|| LabelResolver::new("categories.", CATEGORY_KEYS));

pub static PLAN_NAMES: Lazy<LabelResolver> =
    Lazy::new(|| LabelResolver::new("plans.", PLAN_KEYS).with_suffix(".name"));

pub static PLAN_DESCRIPTIONS: Lazy<LabelResolver> =
    Lazy::new(|| LabelResolver::new("plans.", PLAN_KEYS).with_suffix(".description"));

pub static PLAN_FEATURES: Lazy<LabelResolver> =
    Lazy::new(|| LabelResolver::new("plans.", PLAN_KEYS).with_suffix(".features"));

pub static STEP_LABELS: Lazy<LabelResolver> = Lazy::new(|| {
    LabelResolver::new("steps.", STEP_KEYS).with_policy(FallbackPolicy::HumanizeId)
});

pub static TRADE_LABELS: Lazy<LabelResolver> =
    Lazy::new(|| LabelResolver::new("schedule.trades.", TRADE_KEYS));

/// 予算カテゴリ名を翻訳
pub fn translate_category_name(t: &dyn Translate, name: &str) -> String {
    CATEGORY_LABELS.resolve(t, name)
}

/// プラン名を翻訳
pub fn translate_plan_name(t: &dyn Translate, plan: &str) -> String {
    PLAN_NAMES.resolve(t, plan)
}

/// プラン説明を翻訳（失敗時は `fallback`）
pub fn translate_plan_description(t: &dyn Translate, plan: &str, fallback: &str) -> String {
    PLAN_DESCRIPTIONS.resolve_or(t, plan, fallback)
}

/// プラン機能リストを翻訳（失敗時は `fallback` をそのまま返す）
pub fn translate_plan_features(t: &dyn Translate, plan: &str, fallback: &[String]) -> Vec<String> {
    PLAN_FEATURES.resolve_list(t, plan, fallback)
}

/// 工程名を翻訳
///
/// 失敗時は `fallback`。それも無い場合、テーブルにあるIDはそのまま、
/// テーブルに無いIDは表示名を合成して返す。
pub fn translate_step_name(t: &dyn Translate, step_id: &str, fallback: Option<&str>) -> String {
    match fallback {
        Some(fallback) => STEP_LABELS.resolve_or(t, step_id, fallback),
        None => STEP_LABELS.resolve(t, step_id),
    }
}

/// 職種名を翻訳
pub fn translate_trade_name(t: &dyn Translate, trade: &str) -> String {
    TRADE_LABELS.resolve(t, trade)
}

/// 全解決器が参照しうる翻訳キー（カタログの欠落検出用）
pub fn all_label_keys() -> Vec<String> {
    let mut keys: Vec<String> = [
        &*CATEGORY_LABELS,
        &*PLAN_NAMES,
        &*PLAN_DESCRIPTIONS,
        &*PLAN_FEATURES,
        &*STEP_LABELS,
        &*TRADE_LABELS,
    ]
    .iter()
    .flat_map(|resolver| resolver.all_keys())
    .chain(TaskIdIndex::global().all_keys())
    .chain(std::iter::once(OTHER_ITEMS_KEY.to_string()))
    .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Identity};
    use serde_json::json;

    fn english_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_locale_json(
            "en",
            &json!({
                "categories": { "basementSlab": "Basement slab pour", "electrical": "Electrical" },
                "plans": {
                    "pro": {
                        "name": "Pro",
                        "description": "For active builders",
                        "features": ["Unlimited projects", "Schedule"]
                    },
                    "essential": { "name": "Essential" }
                },
                "steps": { "plumbingRoughIn": "Plumbing rough-in" },
                "schedule": { "trades": { "electrician": "Electrician" } }
            }),
        );
        catalog
    }

    #[test]
    fn test_translate_category_name() {
        let catalog = english_catalog();
        let t = catalog.translator("en");
        assert_eq!(
            translate_category_name(&t, "Coulage de dalle du sous-sol"),
            "Basement slab pour"
        );
        assert_eq!(translate_category_name(&t, "Électricité"), "Electrical");
        assert_eq!(translate_category_name(&t, "Toiture"), "Toiture");
    }

    #[test]
    fn test_translate_plan() {
        let catalog = english_catalog();
        let t = catalog.translator("en");
        assert_eq!(translate_plan_name(&t, "Essentiel"), "Essential");
        assert_eq!(
            translate_plan_description(&t, "Pro", "Pour les pros"),
            "For active builders"
        );
        assert_eq!(
            translate_plan_description(&t, "Essentiel", "Pour débuter"),
            "Pour débuter"
        );
    }

    #[test]
    fn test_translate_plan_features() {
        let catalog = english_catalog();
        let t = catalog.translator("en");
        let fallback = vec!["A".to_string(), "B".to_string()];
        assert_eq!(
            translate_plan_features(&t, "Pro", &fallback),
            vec!["Unlimited projects", "Schedule"]
        );
        assert_eq!(translate_plan_features(&t, "Essentiel", &fallback), fallback);
    }

    #[test]
    fn test_translate_step_name() {
        let catalog = english_catalog();
        let t = catalog.translator("en");
        assert_eq!(
            translate_step_name(&t, "plomberie-roughin", None),
            "Plumbing rough-in"
        );
        assert_eq!(
            translate_step_name(&t, "toiture", Some("Toiture")),
            "Toiture"
        );
        // mapped id without a translation comes back unchanged
        assert_eq!(translate_step_name(&t, "toiture", None), "toiture");
        assert_eq!(
            translate_step_name(&Identity, "electricite-finition", None),
            "electricite-finition"
        );
        // ids outside the table are made readable
        assert_eq!(translate_step_name(&Identity, "pose-spa", None), "Pose spa");
        assert_eq!(translate_step_name(&Identity, "pose-spa", Some("Spa")), "Spa");
    }

    #[test]
    fn test_translate_trade_name() {
        let catalog = english_catalog();
        let t = catalog.translator("en");
        assert_eq!(translate_trade_name(&t, "Électricien"), "Electrician");
        assert_eq!(translate_trade_name(&t, "Plombier"), "Plombier");
        assert_eq!(translate_trade_name(&t, "Soudeur"), "Soudeur");
    }

    #[test]
    fn test_all_label_keys() {
        let keys = all_label_keys();
        assert!(keys.contains(&"categories.foundation".to_string()));
        assert!(keys.contains(&"plans.essential.features".to_string()));
        assert!(keys.contains(&"schedule.trades.plumber".to_string()));
        assert!(keys.contains(&"budget.otherItems".to_string()));
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
