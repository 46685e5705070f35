//! 受注メッセージ解析 - CLIエントリポイント
//!
//! 引数で渡したメッセージ、または標準入力の各行を解析し、1行1件のJSONで出力する。

use anyhow::{Context, Result};
use clap::Parser;
use order_message_parser::config::{Config, ConfigOverrides};
use order_message_parser::{Catalog, MatchMode, MessageParser};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "order-message-parser")]
#[command(about = "部品注文メッセージからナンバー・VIN・ブランド・モデル・依頼部品を抽出", long_about = None)]
struct Cli {
    /// 解析するメッセージ（省略時は標準入力を1行ずつ解析）
    messages: Vec<String>,

    /// 車両カタログJSONファイル（環境変数 ORDER_PARSER_CATALOG より優先）
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// 照合モード: substring / whole-word（環境変数 ORDER_PARSER_MATCH_MODE より優先）
    #[arg(long, value_name = "MODE")]
    match_mode: Option<MatchMode>,

    /// --match-mode whole-word と同じ
    #[arg(long, conflicts_with = "match_mode")]
    strict: bool,

    /// JSONを整形して出力
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            catalog_path: self.catalog.clone(),
            match_mode: self
                .match_mode
                .or(self.strict.then_some(MatchMode::WholeWord)),
        }
    }
}

fn main() -> Result<()> {
    // 環境変数の読み込み
    dotenvy::dotenv().ok();

    // ロギング初期化（標準出力はJSON専用）
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env(cli.overrides()).context("設定の読み込みに失敗")?;
    let catalog: Catalog = config.load_catalog().context("車両カタログの読み込みに失敗")?;
    let parser = MessageParser::new(&catalog).with_mode(config.match_mode);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&parser, &cli.messages, std::io::stdin().lock(), &mut out, cli.pretty)
}

/// 引数のメッセージ（なければ `input` の空でない各行）を解析して書き出す
fn run(
    parser: &MessageParser<'_>,
    messages: &[String],
    input: impl BufRead,
    out: &mut impl Write,
    pretty: bool,
) -> Result<()> {
    if messages.is_empty() {
        for line in input.lines() {
            let line = line.context("標準入力の読み込みに失敗")?;
            if line.trim().is_empty() {
                continue;
            }
            write_result(out, parser, &line, pretty)?;
        }
    } else {
        for message in messages {
            write_result(out, parser, message, pretty)?;
        }
    }

    Ok(())
}

fn write_result(
    out: &mut impl Write,
    parser: &MessageParser<'_>,
    message: &str,
    pretty: bool,
) -> Result<()> {
    let result = parser.parse(message);
    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_message_parser::config::{ENV_CATALOG, ENV_MATCH_MODE};
    use std::io::Cursor;

    fn run_to_string(messages: &[&str], stdin: &str, pretty: bool) -> String {
        let messages: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
        let mut out = Vec::new();
        run(&MessageParser::default(), &messages, Cursor::new(stdin), &mut out, pretty).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn env(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars.to_vec();
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_stdin_blank_lines_skipped() {
        let output = run_to_string(&[], "faro seat ibiza\n\n   \nbastidor VF1LM000123456789\n", false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["brand"], "Seat");
        assert_eq!(second["vin"], "VF1LM000123456789");
    }

    #[test]
    fn test_one_record_per_message() {
        let output = run_to_string(&["faro seat ibiza", "hola"], "", false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["original"], "hola");
        assert!(second["brand"].is_null());
    }

    #[test]
    fn test_messages_take_precedence_over_stdin() {
        // 引数があれば標準入力は読まない
        let output = run_to_string(&["faro seat ibiza"], "bastidor VF1LM000123456789\n", false);
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("\"Seat\""));
    }

    #[test]
    fn test_pretty_output() {
        let output = run_to_string(&["faro seat ibiza"], "", true);

        assert!(output.lines().count() > 1);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["model"], "Ibiza");
        assert_eq!(json["extractedPiece"], "faro");
    }

    #[test]
    fn test_strict_overrides_invalid_env_mode() {
        let cli = Cli::try_parse_from(["order-message-parser", "--strict", "faro seat ibiza"]).unwrap();
        let config = Config::resolve(cli.overrides(), env(&[(ENV_MATCH_MODE, "fuzzy")])).unwrap();
        assert_eq!(config.match_mode, MatchMode::WholeWord);
    }

    #[test]
    fn test_match_mode_flag_overrides_env() {
        let cli = Cli::try_parse_from(["order-message-parser", "--match-mode", "substring"]).unwrap();
        let config = Config::resolve(cli.overrides(), env(&[(ENV_MATCH_MODE, "whole-word")])).unwrap();
        assert_eq!(config.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_catalog_flag_overrides_env() {
        let cli = Cli::try_parse_from(["order-message-parser", "--catalog", "cli.json"]).unwrap();
        let config = Config::resolve(cli.overrides(), env(&[(ENV_CATALOG, "env.json")])).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_env_used_without_flags() {
        let cli = Cli::try_parse_from(["order-message-parser"]).unwrap();
        let config = Config::resolve(
            cli.overrides(),
            env(&[(ENV_CATALOG, "env.json"), (ENV_MATCH_MODE, "whole-word")]),
        )
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("env.json")));
        assert_eq!(config.match_mode, MatchMode::WholeWord);
    }

    #[test]
    fn test_invalid_match_mode_flag() {
        assert!(Cli::try_parse_from(["order-message-parser", "--match-mode", "fuzzy"]).is_err());
        assert!(
            Cli::try_parse_from(["order-message-parser", "--strict", "--match-mode", "substring"])
                .is_err()
        );
    }
}
