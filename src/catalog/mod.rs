//! 車両カタログモジュール
//!
//! ブランド表示名 → エイリアス → モデル一覧 の読み取り専用テーブル。
//! 起動時に一度だけ構築し、以降は変更しない。

mod builtin;

use crate::error::{ParserError, Result};
use crate::parser::normalize::{normalize, normalize_token};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = builtin::BUILTIN_VEHICLES
        .iter()
        .map(|(brand, aliases, models)| VehicleBrandEntry::new(*brand, aliases, models))
        .collect();
    Catalog::from_entries(entries)
});

/// カタログの1ブランド分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleBrandEntry {
    /// 表示名 ("Mercedes-Benz" など)
    #[serde(rename = "brand")]
    pub canonical_name: String,
    /// 別表記・略称・よくある誤記
    #[serde(default)]
    pub aliases: Vec<String>,
    /// 既知のモデル名（空でもよい）
    #[serde(default)]
    pub models: Vec<String>,
}

impl VehicleBrandEntry {
    pub fn new(
        canonical_name: impl Into<String>,
        aliases: &[&str],
        models: &[&str],
    ) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// 照合用に事前計算したカタログ上の名称
#[derive(Debug, Clone)]
pub(crate) struct CatalogTerm {
    /// 空白なしトークン ("MERCEDESBENZ")
    pub token: String,
    /// 前後にスペースを付けた単語列 (" MERCEDES BENZ ")
    pub words: String,
}

impl CatalogTerm {
    fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        Self {
            token: normalized.replace(' ', ""),
            words: format!(" {} ", normalized),
        }
    }

    pub fn is_single_word(&self) -> bool {
        !self.words.trim().contains(' ')
    }
}

/// 照合用の形式を事前計算したブランド
#[derive(Debug, Clone)]
pub(crate) struct IndexedBrand {
    pub entry: VehicleBrandEntry,
    pub name: CatalogTerm,
    /// `entry.aliases` と同じ並び
    pub aliases: Vec<CatalogTerm>,
    /// `entry.models` と同じ並び
    pub models: Vec<CatalogTerm>,
}

impl IndexedBrand {
    fn new(entry: VehicleBrandEntry) -> Self {
        let name = CatalogTerm::new(&entry.canonical_name);
        let aliases = entry.aliases.iter().map(|a| CatalogTerm::new(a)).collect();
        let models = entry.models.iter().map(|m| CatalogTerm::new(m)).collect();
        Self {
            entry,
            name,
            aliases,
            models,
        }
    }
}

/// 車両カタログ
///
/// 並び順がそのままブランド判定の優先順位になる。
#[derive(Debug, Clone)]
pub struct Catalog {
    brands: Vec<IndexedBrand>,
}

impl Catalog {
    /// エントリを検証してカタログを構築
    pub fn new(entries: Vec<VehicleBrandEntry>) -> Result<Self> {
        let catalog = Self::from_entries(entries);
        catalog.validate()?;
        Ok(catalog)
    }

    /// 組み込みカタログ（プロセス内で共有）
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// JSON文字列から読み込み
    ///
    /// 形式: `[{ "brand": "Seat", "aliases": ["SEAT"], "models": ["Ibiza"] }, ...]`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<VehicleBrandEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            brands = catalog.len(),
            "車両カタログを読み込み"
        );
        Ok(catalog)
    }

    fn from_entries(entries: Vec<VehicleBrandEntry>) -> Self {
        Self {
            brands: entries.into_iter().map(IndexedBrand::new).collect(),
        }
    }

    /// 不変条件をチェック
    /// - ブランド名は正規化後も空でない
    /// - エイリアス・モデル名は正規化後も空でない
    /// - 同じブランドが重複しない
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for brand in &self.brands {
            let name = &brand.entry.canonical_name;

            if brand.name.token.is_empty() {
                return Err(ParserError::InvalidCatalog(format!(
                    "ブランド名が空です: {:?}",
                    name
                )));
            }

            if !seen.insert(brand.name.token.as_str()) {
                return Err(ParserError::InvalidCatalog(format!(
                    "ブランドが重複しています: {}",
                    name
                )));
            }

            if let Some(i) = brand.aliases.iter().position(|t| t.token.is_empty()) {
                return Err(ParserError::InvalidCatalog(format!(
                    "{} のエイリアスが空です: {:?}",
                    name, brand.entry.aliases[i]
                )));
            }

            if let Some(i) = brand.models.iter().position(|t| t.token.is_empty()) {
                return Err(ParserError::InvalidCatalog(format!(
                    "{} のモデル名が空です: {:?}",
                    name, brand.entry.models[i]
                )));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// エントリを定義順に列挙
    pub fn entries(&self) -> impl Iterator<Item = &VehicleBrandEntry> {
        self.brands.iter().map(|b| &b.entry)
    }

    /// ブランド名から検索（大文字小文字・アクセント無視）
    pub(crate) fn find_indexed(&self, brand: &str) -> Option<&IndexedBrand> {
        let token = normalize_token(brand);
        self.brands.iter().find(|b| b.name.token == token)
    }

    pub(crate) fn brands(&self) -> &[IndexedBrand] {
        &self.brands
    }
}
