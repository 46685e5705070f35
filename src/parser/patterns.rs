//! ナンバープレート・車台番号(VIN)抽出モジュール

use super::normalize::fold_case_and_accents;
use regex::Regex;
use std::sync::LazyLock;

/// 現行フォーマット: 1234ABC, 1234 ABC
static PLATE_MODERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([0-9]{4})\s?([A-Z]{3})\b").unwrap());

/// 旧県別フォーマット: M-1234-AB, O1234BB, B 1234 ZZ
static PLATE_LEGACY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Z]{1,2})[-\s]?([0-9]{3,4})[-\s]?([A-Z]{1,2})\b").unwrap()
});

/// VIN: 17文字の英数字（I, O, Q を除く）
static VIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([A-HJ-NPR-Z0-9]{17})\b").unwrap());

/// テキストからナンバープレートを抽出
/// 優先順位: 現行フォーマット > 旧県別フォーマット
///
/// 区切り文字を除いた正規形（"1234ABC", "M1234AB"）を返す。
pub fn detect_plate(text: &str) -> Option<String> {
    let clean = fold_case_and_accents(text);

    if let Some(caps) = PLATE_MODERN.captures(&clean) {
        return Some(format!("{}{}", &caps[1], &caps[2]).to_uppercase());
    }

    if let Some(caps) = PLATE_LEGACY.captures(&clean) {
        return Some(format!("{}{}{}", &caps[1], &caps[2], &caps[3]).to_uppercase());
    }

    None
}

/// テキストから車台番号(VIN)を抽出
pub fn detect_vin(text: &str) -> Option<String> {
    let clean = fold_case_and_accents(text);

    VIN.captures(&clean)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
}
