//! ブランド・モデル判定モジュール

use super::normalize::normalize;
use crate::catalog::{Catalog, CatalogTerm};
use crate::error::ParserError;
use std::str::FromStr;

/// モデル名の表記揺れ許容: 先頭この文字数が一致すれば採用
const MODEL_PREFIX_LEN: usize = 5;

/// カタログ照合モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// 空白を除いた正規化テキストに部分一致（"BMWX5", "toyotacorolla" も拾う）
    #[default]
    Substring,
    /// 単語単位で一致した場合のみ採用
    WholeWord,
}

impl FromStr for MatchMode {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "whole-word" | "wholeword" | "strict" => Ok(Self::WholeWord),
            other => Err(ParserError::InvalidMatchMode(other.to_string())),
        }
    }
}

/// 照合対象テキスト
struct Haystack {
    mode: MatchMode,
    /// 空白なしトークン
    token: String,
    /// 前後にスペースを付けた単語列 (" NECESITO PIEZA VW GOLF ")
    words: String,
}

impl Haystack {
    fn new(text: &str, mode: MatchMode) -> Self {
        let normalized = normalize(text);
        let token = normalized.replace(' ', "");
        Self {
            mode,
            token,
            words: format!(" {} ", normalized),
        }
    }

    fn contains(&self, term: &CatalogTerm) -> bool {
        if term.token.is_empty() {
            return false;
        }
        match self.mode {
            MatchMode::Substring => self.token.contains(&term.token),
            MatchMode::WholeWord => self.words.contains(&term.words),
        }
    }

    fn contains_prefix(&self, prefix: &str, term: &CatalogTerm) -> bool {
        match self.mode {
            MatchMode::Substring => self.token.contains(prefix),
            // 単語の先頭一致のみ。複数語のモデル名は対象外
            MatchMode::WholeWord => {
                term.is_single_word() && self.words.split(' ').any(|w| w.starts_with(prefix))
            }
        }
    }
}

/// テキストからブランドを判定
///
/// カタログの定義順に、ブランド名 → エイリアスの順で照合し、最初に一致したものを返す。
pub fn detect_brand(catalog: &Catalog, text: &str, mode: MatchMode) -> Option<String> {
    let haystack = Haystack::new(text, mode);
    if haystack.token.is_empty() {
        return None;
    }

    for brand in catalog.brands() {
        if haystack.contains(&brand.name) {
            tracing::debug!(brand = %brand.entry.canonical_name, "ブランド名で一致");
            return Some(brand.entry.canonical_name.clone());
        }

        let alias_hit = brand
            .aliases
            .iter()
            .zip(&brand.entry.aliases)
            .find(|(term, _)| haystack.contains(term));

        if let Some((_, alias)) = alias_hit {
            tracing::debug!(brand = %brand.entry.canonical_name, alias = %alias, "エイリアスで一致");
            return Some(brand.entry.canonical_name.clone());
        }
    }

    None
}

/// 判定済みブランドのモデル一覧からモデルを判定
///
/// ブランドが未検出なら検索せず `None`。
/// 5文字以上のモデル名は先頭5文字の一致でも採用する（"Octav" -> "Octavia"）。
pub fn detect_model(
    catalog: &Catalog,
    text: &str,
    brand: Option<&str>,
    mode: MatchMode,
) -> Option<String> {
    let brand = catalog.find_indexed(brand?)?;
    let haystack = Haystack::new(text, mode);

    for (term, model) in brand.models.iter().zip(&brand.entry.models) {
        if haystack.contains(term) {
            tracing::debug!(model = %model, "モデル名で一致");
            return Some(model.clone());
        }

        if term.token.len() >= MODEL_PREFIX_LEN {
            if let Some(prefix) = term.token.get(..MODEL_PREFIX_LEN) {
                if haystack.contains_prefix(prefix, term) {
                    tracing::debug!(model = %model, prefix = %prefix, "モデル名の先頭一致");
                    return Some(model.clone());
                }
            }
        }
    }

    None
}
