//! argsieve-core
//!
//! Split one bag of keyword arguments into per-consumer subsets.
//!
//! # モジュール構成
//! - **domain**: FieldName, Schema, ArgBag, SieveError
//! - **partition**: フィールド集合による bag の分割（コア）
//! - **typed**: 型付き API（Props trait, Consumer trait, ConsumerRegistry）
//! - **app**: AppBuilder, Dispatcher, SieveConfig
//! - **observability**: tracing subscriber の初期化

pub mod app;
pub mod domain;
pub mod observability;
pub mod partition;
pub mod typed;

pub use self::domain::{ArgBag, FieldDecl, FieldKind, FieldName, Schema, SieveError};
pub use self::partition::{UnknownKeyPolicy, partition, partition_with, unknown_keys};
