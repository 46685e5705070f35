//! テキスト正規化モジュール
//!
//! 処理順:
//! 1. 大文字化
//! 2. NFD分解して結合文字（アクセント記号）を除去
//! 3. `A-Z` / `0-9` / 空白 以外をスペースに置換
//! 4. 連続する空白を1つにまとめ、前後を除去

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// 照合用にテキストを正規化する
///
/// 何度適用しても結果は変わらない（冪等）。
pub fn normalize(text: &str) -> String {
    let folded = fold_case_and_accents(text);

    let cleaned: String = folded
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    collapse_whitespace(&cleaned)
}

/// ブランド名・エイリアス・モデル名の比較用トークン
///
/// `normalize` の結果から空白をすべて除去する（"Mercedes Benz" -> "MERCEDESBENZ"）。
pub fn normalize_token(text: &str) -> String {
    normalize(text).chars().filter(|c| !c.is_whitespace()).collect()
}

/// 大文字化とアクセント除去のみを行う
///
/// 記号や区切り文字は残すため、ナンバープレート（"M-1234-AB"）や
/// 車台番号の検出はこちらの形式に対して行う。
pub fn fold_case_and_accents(text: &str) -> String {
    text.to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// 連続する空白を単一スペースにまとめ、前後の空白を除去
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
