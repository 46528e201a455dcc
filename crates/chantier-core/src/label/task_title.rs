//! Task Title Resolver
//!
//! 予算カテゴリ名 + タスク名（どちらも正規表記）からタスクIDを引き、
//! `construction.tasks.<id>.title` で翻訳する。
//! インデックスは工程カタログから一度だけ構築される。

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::i18n::{is_translated, Translate};
use crate::normalize::normalize;
use crate::steps::{builtin_steps, ConstructionStep};

/// 「その他の項目」バケットの正規名
pub const OTHER_ITEMS: &str = "Autres éléments";

/// 「その他の項目」の翻訳キー
pub const OTHER_ITEMS_KEY: &str = "budget.otherItems";

/// インデックス対象外の最終工程
pub const EXCLUDED_STEP_IDS: &[&str] = &["inspections-finales"];

/// 工程ID → 共有カテゴリ名（荒工事と仕上げを1カテゴリにまとめる）
pub const MERGED_STEP_CATEGORIES: &[(&str, &str)] = &[
    ("plomberie-roughin", "Plomberie"),
    ("plomberie-finition", "Plomberie"),
    ("electricite-roughin", "Électricité"),
    ("electricite-finition", "Électricité"),
    ("hvac-roughin", "Chauffage et ventilation"),
    ("hvac-finition", "Chauffage et ventilation"),
];

const KEY_SEPARATOR: &str = "__";

static GLOBAL_INDEX: Lazy<TaskIdIndex> = Lazy::new(|| TaskIdIndex::build(&builtin_steps()));

/// `(正規化カテゴリ名, 正規化タスク名)` → タスクID
#[derive(Debug, Clone, Default)]
pub struct TaskIdIndex {
    entries: HashMap<String, String>,
}

impl TaskIdIndex {
    /// 工程カタログからインデックスを構築
    ///
    /// 同じ複合キーが複数ある場合は最初のものを採用する。
    pub fn build(steps: &[ConstructionStep]) -> Self {
        let mut entries = HashMap::new();

        for step in steps {
            if !step.phase.is_physical_work() || EXCLUDED_STEP_IDS.contains(&step.id.as_str()) {
                continue;
            }

            let category = effective_category(step);
            for task in &step.tasks {
                entries
                    .entry(composite_key(category, &task.title))
                    .or_insert_with(|| task.id.clone());
            }
        }

        debug!(entries = entries.len(), "built task id index");
        Self { entries }
    }

    /// ビルトイン工程カタログから構築したプロセス共有のインデックス
    pub fn global() -> &'static Self {
        &GLOBAL_INDEX
    }

    pub fn task_id(&self, category: &str, task_title: &str) -> Option<&str> {
        self.entries
            .get(&composite_key(category, task_title))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// タスク名を表示用に解決する
    pub fn resolve_title(&self, t: &dyn Translate, category: &str, task_title: &str) -> String {
        if normalize(task_title) == normalize(OTHER_ITEMS) {
            return t.translate(OTHER_ITEMS_KEY);
        }

        let Some(task_id) = self.task_id(category, task_title) else {
            return task_title.to_string();
        };

        let key = task_title_key(task_id);
        let translated = t.translate(&key);
        if is_translated(&key, &translated) {
            translated
        } else {
            task_title.to_string()
        }
    }

    /// インデックス内の全タスクの翻訳キー（ソート済み）
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.values().map(|id| task_title_key(id)).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

/// グローバルインデックスでタスク名を解決する
pub fn resolve_task_title(t: &dyn Translate, category: &str, task_title: &str) -> String {
    TaskIdIndex::global().resolve_title(t, category, task_title)
}

/// 工程の予算カテゴリ名（統合テーブル優先、無ければ工程名）
pub fn effective_category(step: &ConstructionStep) -> &str {
    MERGED_STEP_CATEGORIES
        .iter()
        .find(|(id, _)| *id == step.id)
        .map(|(_, category)| *category)
        .unwrap_or(step.title.as_str())
}

fn composite_key(category: &str, task_title: &str) -> String {
    format!(
        "{}{}{}",
        normalize(category),
        KEY_SEPARATOR,
        normalize(task_title)
    )
}

fn task_title_key(task_id: &str) -> String {
    format!("construction.tasks.{task_id}.title")
}
