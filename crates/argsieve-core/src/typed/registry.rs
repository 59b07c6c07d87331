//! ConsumerRegistry - Consumer の登録と管理
//!
//! # 学習ポイント
//! - 型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権

use std::sync::Arc;

use super::consumer::{Consumer, DynConsumer, TypedConsumer};
use super::props::Props;
use crate::domain::Schema;

/// ConsumerRegistry keeps one consumer per schema name, in registration order.
///
/// Order matters: the dispatcher calls consumers in the order they were
/// registered, matching the order calls appear at the call site.
#[derive(Default)]
pub struct ConsumerRegistry {
    consumers: Vec<Arc<dyn DynConsumer>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Consumer for schema '{0}' is already registered")]
    AlreadyRegistered(String),
}

impl ConsumerRegistry {
    pub fn new() -> Self {
        Self {
            consumers: Vec::new(),
        }
    }

    pub fn register<P: Props, C: Consumer<P> + 'static>(
        &mut self,
        consumer: C,
    ) -> Result<(), RegistryError> {
        if self.get(P::NAME).is_some() {
            return Err(RegistryError::AlreadyRegistered(P::NAME.to_string()));
        }
        self.consumers
            .push(Arc::new(TypedConsumer::<P, C>::new(consumer)));
        Ok(())
    }

    pub fn get(&self, schema: &str) -> Option<Arc<dyn DynConsumer>> {
        self.consumers.iter().find(|c| c.name() == schema).cloned()
    }

    pub fn consumers(&self) -> &[Arc<dyn DynConsumer>] {
        &self.consumers
    }

    pub fn registered_schemas(&self) -> Vec<String> {
        self.consumers.iter().map(|c| c.name().to_string()).collect()
    }

    /// Union of every registered schema: the full set of keyword arguments
    /// the call site accepts.
    pub fn combined_schema(&self, name: impl Into<String>) -> Schema {
        Schema::union_all(name, self.consumers.iter().map(|c| c.schema()))
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }
}
