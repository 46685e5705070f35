//! 環境変数による設定

use crate::catalog::Catalog;
use crate::error::Result;
use crate::parser::MatchMode;
use std::path::PathBuf;

/// カタログJSONファイルのパス
pub const ENV_CATALOG: &str = "ORDER_PARSER_CATALOG";
/// 照合モード (substring / whole-word)
pub const ENV_MATCH_MODE: &str = "ORDER_PARSER_MATCH_MODE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub match_mode: MatchMode,
}

/// コマンドライン引数などで明示された値（環境変数より優先）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub match_mode: Option<MatchMode>,
}

impl Config {
    /// 環境変数から読み込み（`.env` の読み込みは呼び出し側で行う）
    ///
    /// `overrides` で指定済みの項目は環境変数を参照しない。
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// 値の取得元を指定して読み込み（`lookup` は環境変数名から値を返す）
    pub fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = match overrides.catalog_path {
            Some(path) => Some(path),
            None => lookup(ENV_CATALOG)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };

        let match_mode = match overrides.match_mode {
            Some(mode) => mode,
            None => match lookup(ENV_MATCH_MODE) {
                Some(value) if !value.trim().is_empty() => value.parse()?,
                _ => MatchMode::default(),
            },
        };

        Ok(Self {
            catalog_path,
            match_mode,
        })
    }

    /// 設定に従ってカタログを読み込む（未指定なら組み込みカタログ）
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_file(path),
            None => Ok(Catalog::builtin().clone()),
        }
    }
}
