//! メッセージ解析モジュール - 受信メッセージから車両情報と依頼部品を抽出

mod extract;
pub mod normalize;
mod patterns;
mod vehicle;

pub use extract::extract_piece_text;
pub use normalize::{fold_case_and_accents, normalize, normalize_token};
pub use patterns::{detect_plate, detect_vin};
pub use vehicle::MatchMode;

use crate::catalog::Catalog;
use serde::Serialize;

/// メッセージから抽出された情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// 元のメッセージ
    pub original: String,
    /// 照合用に正規化したテキスト
    pub normalized: String,
    /// ナンバープレート (1234ABC, M1234AB)
    pub plate: Option<String>,
    /// 車台番号 (17文字)
    pub vin: Option<String>,
    /// ブランド表示名
    pub brand: Option<String>,
    /// モデル名（ブランド検出時のみ）
    pub model: Option<String>,
    /// 依頼部品の説明
    pub extracted_piece: String,
}

/// メッセージ解析器
///
/// カタログを借用するだけで状態を持たないため、複数スレッドから同時に使用できる。
#[derive(Debug, Clone, Copy)]
pub struct MessageParser<'a> {
    catalog: &'a Catalog,
    mode: MatchMode,
}

impl Default for MessageParser<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> MessageParser<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// テキストからブランドを判定
    pub fn detect_brand(&self, text: &str) -> Option<String> {
        vehicle::detect_brand(self.catalog, text, self.mode)
    }

    /// 判定済みブランドのモデルを判定（ブランドなしなら `None`）
    pub fn detect_model(&self, text: &str, brand: Option<&str>) -> Option<String> {
        vehicle::detect_model(self.catalog, text, brand, self.mode)
    }

    /// メッセージを解析
    pub fn parse(&self, message: &str) -> DetectionResult {
        let normalized = normalize(message);

        let plate = detect_plate(message);
        let vin = detect_vin(message);
        let brand = self.detect_brand(&normalized);
        let model = self.detect_model(&normalized, brand.as_deref());

        let extracted_piece = extract_piece_text(
            message,
            plate.as_deref(),
            vin.as_deref(),
            brand.as_deref(),
            model.as_deref(),
        );

        tracing::debug!(
            plate = ?plate,
            vin = ?vin,
            brand = ?brand,
            model = ?model,
            piece = %extracted_piece,
            "メッセージを解析"
        );

        DetectionResult {
            original: message.to_string(),
            normalized,
            plate,
            vin,
            brand,
            model,
            extracted_piece,
        }
    }
}

/// 組み込みカタログ・部分一致モードでメッセージを解析
pub fn parse_message(message: &str) -> DetectionResult {
    MessageParser::default().parse(message)
}

/// 組み込みカタログでブランドを判定
pub fn detect_brand(text: &str) -> Option<String> {
    MessageParser::default().detect_brand(text)
}

/// 組み込みカタログでモデルを判定
pub fn detect_model(text: &str, brand: Option<&str>) -> Option<String> {
    MessageParser::default().detect_model(text, brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_message() {
        let result = parse_message("Necesito un retrovisor para un Seat Ibiza matricula 1234ABC");

        assert_eq!(result.plate.as_deref(), Some("1234ABC"));
        assert_eq!(result.vin, None);
        assert_eq!(result.brand.as_deref(), Some("Seat"));
        assert_eq!(result.model.as_deref(), Some("Ibiza"));
        assert!(result.extracted_piece.contains("retrovisor"));
        assert!(!result.extracted_piece.contains("1234ABC"));
        assert!(!result.extracted_piece.contains("Seat"));
        assert!(!result.extracted_piece.contains("Ibiza"));
        assert_eq!(
            result.normalized,
            "NECESITO UN RETROVISOR PARA UN SEAT IBIZA MATRICULA 1234ABC"
        );
    }

    #[test]
    fn test_parse_vin_message() {
        let result = parse_message("bastidor VF1LM000123456789");

        assert_eq!(result.vin.as_deref(), Some("VF1LM000123456789"));
        assert_eq!(result.plate, None);
        assert_eq!(result.extracted_piece, "bastidor");
    }

    #[test]
    fn test_parse_empty_message() {
        let result = parse_message("");

        assert_eq!(result, DetectionResult::default());
        assert_eq!(result.extracted_piece, "");
    }

    #[test]
    fn test_parse_only_identifiers_falls_back() {
        let result = parse_message("Seat Ibiza");

        assert_eq!(result.brand.as_deref(), Some("Seat"));
        assert_eq!(result.model.as_deref(), Some("Ibiza"));
        assert_eq!(result.extracted_piece, "Seat Ibiza");
    }

    #[test]
    fn test_parse_brand_without_model() {
        let result = parse_message("faro delantero volkswagen");

        assert_eq!(result.brand.as_deref(), Some("Volkswagen"));
        assert_eq!(result.model, None);
        assert_eq!(result.extracted_piece, "faro delantero");
    }

    #[test]
    fn test_parse_strict_mode() {
        let parser = MessageParser::default().with_mode(MatchMode::WholeWord);
        let result = parser.parse("suministro de pilotos");

        assert_eq!(result.brand, None);
        assert_eq!(parse_message("suministro de pilotos").brand.as_deref(), Some("Mini"));
    }

    #[test]
    fn test_result_json_keys() {
        let result = parse_message("faro seat ibiza 1234 ABC");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["extractedPiece"], "faro 1234 ABC");
        assert_eq!(json["plate"], "1234ABC");
        assert!(json["vin"].is_null());
    }
}
