//! 依頼部品テキスト抽出モジュール
//!
//! 元メッセージから検出済みの値を取り除き、残りを「依頼部品」とみなす。

use super::normalize::collapse_whitespace;
use regex::RegexBuilder;

/// 検出済みの値を元テキストから除去する
///
/// 除去順: ナンバープレート → VIN → ブランド → モデル（大文字小文字は無視）。
/// 何も残らない場合は元のメッセージをそのまま返す。
pub fn extract_piece_text(
    original: &str,
    plate: Option<&str>,
    vin: Option<&str>,
    brand: Option<&str>,
    model: Option<&str>,
) -> String {
    let mut text = original.to_string();

    for value in [plate, vin, brand, model].into_iter().flatten() {
        text = remove_ignore_case(&text, value);
    }

    let piece = collapse_whitespace(&text);
    if piece.is_empty() {
        original.to_string()
    } else {
        piece
    }
}

/// `needle` の出現箇所をすべて除去（リテラル一致、大文字小文字無視）
fn remove_ignore_case(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }

    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(e) => {
            tracing::warn!(needle = %needle, error = %e, "除去パターンの生成に失敗");
            text.to_string()
        }
    }
}
