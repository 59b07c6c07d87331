//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **AppBuilder**: consumer の登録と起動時検証
//! - **Dispatcher**: bag を分割し、consumer を N 回呼び出す
//! - **SieveConfig**: JSON 設定ファイル

pub mod builder;
pub mod config;
pub mod dispatcher;

pub use self::builder::{AppBuilder, BuildError};
pub use self::config::{ConfigError, SieveConfig};
pub use self::dispatcher::{DispatchReport, Dispatcher, Invocation};
