//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。開発環境では `.env` ファイルを
//! `dotenvy` で事前に読み込んでおく。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8000` | ポート番号 |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | `info,agecalc=debug` | ログレベル |

use std::{env, net::SocketAddr, num::ParseIntError};

use thiserror::Error;

/// バインドアドレスのデフォルト値
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// ポート番号のデフォルト値
pub const DEFAULT_PORT: u16 = 8000;

/// 設定の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   /// ポート番号が数値でない、または範囲外
   #[error("API_PORT は有効なポート番号である必要があります: {value:?}")]
   InvalidPort {
      value:  String,
      #[source]
      source: ParseIntError,
   },

   /// ホストとポートからソケットアドレスを組み立てられない
   #[error("バインドアドレスが不正です: {0}")]
   InvalidAddress(String),
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストではプロセスの環境変数を書き換えずに値を差し込める。
   pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
   where
      F: Fn(&str) -> Option<String>,
   {
      let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
      let port = match lookup("API_PORT") {
         Some(raw) => raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort {
               value: raw.clone(),
               source,
            })?,
         None => DEFAULT_PORT,
      };

      Ok(Self { host, port })
   }

   /// バインド先のソケットアドレス
   pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
      let addr = format!("{}:{}", self.host, self.port);
      addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let map: HashMap<String, String> = pairs
         .iter()
         .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
         .collect();
      move |key| map.get(key).cloned()
   }

   #[test]
   fn test_未設定の場合はデフォルト値を使う() {
      let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

      assert_eq!(
         config,
         ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
         }
      );
   }

   #[test]
   fn test_環境変数の値で上書きされる() {
      let config =
         ApiConfig::from_lookup(lookup_from(&[("API_HOST", "127.0.0.1"), ("API_PORT", "3000")]))
            .unwrap();

      assert_eq!(config.host, "127.0.0.1");
      assert_eq!(config.port, 3000);
   }

   #[test]
   fn test_ポート番号が不正な場合はエラー() {
      let result = ApiConfig::from_lookup(lookup_from(&[("API_PORT", "eighty")]));

      assert!(matches!(
         result,
         Err(ConfigError::InvalidPort { ref value, .. }) if value == "eighty"
      ));
   }

   #[test]
   fn test_ポート番号が範囲外の場合はエラー() {
      let result = ApiConfig::from_lookup(lookup_from(&[("API_PORT", "70000")]));

      assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
   }

   #[test]
   fn test_socket_addrはホストとポートを結合する() {
      let config = ApiConfig {
         host: "127.0.0.1".to_string(),
         port: 8000,
      };

      assert_eq!(
         config.socket_addr().unwrap(),
         "127.0.0.1:8000".parse::<SocketAddr>().unwrap()
      );
   }

   #[test]
   fn test_socket_addrはホスト名が不正な場合エラー() {
      let config = ApiConfig {
         host: "not an address".to_string(),
         port: 8000,
      };

      assert!(matches!(
         config.socket_addr(),
         Err(ConfigError::InvalidAddress(_))
      ));
   }
}
