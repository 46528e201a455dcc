//! Label Resolver
//!
//! 正規名 → ローカライズキー → 翻訳文字列 の解決器。
//! 5つの解決器（カテゴリ、プラン、ステップ、職種、タスク）はすべてこの型の
//! インスタンスで、テーブル・キー接頭辞・フォールバック方針だけが異なる。

use std::collections::HashMap;

use crate::i18n::{is_translated, Translate};

/// 解決に失敗した場合の振る舞い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// 正規名をそのまま返す
    #[default]
    Canonical,
    /// テーブルに無い識別子だけ表示用ラベルを合成する（先頭大文字、`-` → スペース）
    ///
    /// テーブルにあるが翻訳が無い場合は正規名（識別子）をそのまま返す。
    HumanizeId,
}

/// 正規名テーブルとキー規則を持つ解決器
#[derive(Debug, Clone)]
pub struct LabelResolver {
    prefix: &'static str,
    suffix: &'static str,
    table: HashMap<&'static str, &'static str>,
    policy: FallbackPolicy,
}

impl LabelResolver {
    /// `(正規名, キー断片)` のテーブルから構築
    pub fn new(prefix: &'static str, entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            prefix,
            suffix: "",
            table: entries.iter().copied().collect(),
            policy: FallbackPolicy::Canonical,
        }
    }

    /// キー末尾（例: `.name`）を設定
    pub fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 正規名に対応する完全なローカライズキー
    ///
    /// テーブルは正規表記そのままで引く（正規化しない）。
    pub fn key_for(&self, canonical: &str) -> Option<String> {
        self.table
            .get(canonical)
            .map(|entry| format!("{}{}{}", self.prefix, entry, self.suffix))
    }

    /// 表示ラベルを解決する
    ///
    /// テーブルに無い名前はフォールバック方針に従い、
    /// 翻訳が無いだけの場合は正規名を返す。
    pub fn resolve(&self, t: &dyn Translate, canonical: &str) -> String {
        let Some(key) = self.key_for(canonical) else {
            return self.unmapped(canonical);
        };
        translate_key(t, &key).unwrap_or_else(|| canonical.to_string())
    }

    /// 表示ラベルを解決する。失敗時は `fallback` を返す
    pub fn resolve_or(&self, t: &dyn Translate, canonical: &str, fallback: &str) -> String {
        self.lookup(t, canonical)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// リスト値を解決する
    ///
    /// カタログが先頭要素が文字列の空でないリストを返した場合のみそれを使い、
    /// それ以外は `fallback` をそのまま返す（部分的なマージはしない）。
    pub fn resolve_list(
        &self,
        t: &dyn Translate,
        canonical: &str,
        fallback: &[String],
    ) -> Vec<String> {
        self.key_for(canonical)
            .and_then(|key| t.translate_list(&key))
            .filter(|items| !items.is_empty())
            .unwrap_or_else(|| fallback.to_vec())
    }

    /// テーブルに登録された正規名（ソート済み）
    pub fn canonical_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// テーブル全体から生成されるキー一覧（ソート済み）
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .table
            .values()
            .map(|entry| format!("{}{}{}", self.prefix, entry, self.suffix))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    fn lookup(&self, t: &dyn Translate, canonical: &str) -> Option<String> {
        translate_key(t, &self.key_for(canonical)?)
    }

    fn unmapped(&self, canonical: &str) -> String {
        match self.policy {
            FallbackPolicy::Canonical => canonical.to_string(),
            FallbackPolicy::HumanizeId => humanize_id(canonical),
        }
    }
}

fn translate_key(t: &dyn Translate, key: &str) -> Option<String> {
    let translated = t.translate(key);
    is_translated(key, &translated).then_some(translated)
}

/// `"electricite-roughin"` → `"Electricite roughin"`
///
/// 先頭・末尾の `-` は落とし、内部の `-` だけをスペースにする。
pub fn humanize_id(id: &str) -> String {
    let spaced = id.trim_matches('-').replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
