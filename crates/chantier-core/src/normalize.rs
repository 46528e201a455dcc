//! Key Normalizer
//!
//! 比較用のテキスト正規化。ヒューリスティックなマッチングと
//! インデックスキーはすべてこの関数を通した値同士で比較する。

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 比較用に文字列を正規化する
///
/// - 小文字化
/// - NFD分解してダイアクリティカルマークを除去（"é" == "e"）
/// - 連続する空白を1つのスペースに畳み込み、前後をトリム
///
/// ```
/// use chantier_core::normalize::normalize;
///
/// assert_eq!(normalize("  Électricité \t Rough-in "), "electricite rough-in");
/// assert_eq!(normalize("Électricité"), normalize("electricite"));
/// ```
pub fn normalize(input: impl AsRef<str>) -> String {
    let stripped: String = input
        .as_ref()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 値が無い場合は空文字列として扱う
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_accents() {
        assert_eq!(normalize("Drain Français"), "drain francais");
        assert_eq!(normalize("Béton"), "beton");
        assert_eq!(normalize("Coulage de dalle du sous-sol"), "coulage de dalle du sous-sol");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  plancher \n\n  béton  "), "plancher beton");
        assert_eq!(normalize("\t"), "");
    }

    #[test]
    fn test_absent_input_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" Éé ")), "ee");
    }

    #[test]
    fn test_precomposed_and_decomposed_match() {
        // "é" precomposed vs "e" + U+0301
        assert_eq!(normalize("\u{00e9}"), normalize("e\u{0301}"));
    }

    #[test]
    fn test_keeps_punctuation() {
        assert_eq!(normalize("Dalle 4\""), "dalle 4\"");
        assert_eq!(normalize("Béton 25 MPa"), "beton 25 mpa");
    }
}
