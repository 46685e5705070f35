//! 受注メッセージ解析 - 自動車部品の注文メッセージから車両情報を抽出
//!
//! # 機能
//! - スペインのナンバープレート（現行・旧県別）と車台番号(VIN)の検出
//! - エイリアス付き車両カタログによるブランド・モデル判定
//! - 検出済みの値を除いた「依頼部品」テキストの抽出
//!
//! ```
//! let result = order_message_parser::parse_message("Necesito un retrovisor para un Seat Ibiza matricula 1234ABC");
//! assert_eq!(result.plate.as_deref(), Some("1234ABC"));
//! assert_eq!(result.brand.as_deref(), Some("Seat"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod parser;

pub use catalog::{Catalog, VehicleBrandEntry};
pub use error::{ParserError, Result};
pub use parser::{DetectionResult, MatchMode, MessageParser, parse_message};
