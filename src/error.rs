//! エラー型定義
//!
//! 解析パイプライン自体は失敗しない（検出できない項目は `None`）。
//! エラーが発生するのは車両カタログや設定の読み込み時のみ。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("カタログファイルの読み込みに失敗: {0}")]
    CatalogRead(#[from] std::io::Error),

    #[error("カタログJSONの解析に失敗: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("カタログが不正: {0}")]
    InvalidCatalog(String),

    #[error("不明な照合モード: {0} (substring/whole-word)")]
    InvalidMatchMode(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;
