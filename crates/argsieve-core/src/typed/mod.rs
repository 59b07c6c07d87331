//! Typed - 型付き Props / Consumer API
//!
//! # 二層構造
//! - **表層（Typed）**: `Props` trait, `Consumer<P>` trait - 型安全
//! - **内部（Dyn）**: `DynConsumer` trait - object-safe, type erasure

pub mod consumer;
pub mod props;
pub mod registry;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::consumer::{Consumer, DynConsumer, TypedConsumer};
pub use self::props::{Props, decode, into};
pub use self::registry::{ConsumerRegistry, RegistryError};
