//! Consumer trait - 分割された引数を受け取る関数の定義
//!
//! # 学習ポイント
//! - ジェネリック trait (Consumer<P>)
//! - Object-safe trait (DynConsumer)
//! - Type erasure パターン (TypedConsumer<P, C> → DynConsumer)

use std::marker::PhantomData;

use async_trait::async_trait;

use super::props::{Props, decode};
use crate::domain::{ArgBag, Schema, SieveError};

/// Consumer receives the typed subset of a bag that matches `P`.
///
/// # 使用例
/// ```ignore
/// struct Foo;
///
/// #[async_trait]
/// impl Consumer<FooProps> for Foo {
///     async fn consume(&self, props: FooProps) -> Result<(), SieveError> {
///         println!("{:?}", props.a);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Consumer<P: Props>: Send + Sync {
    async fn consume(&self, props: P) -> Result<(), SieveError>;
}

/// Object-safe view of a consumer, so different `P` can share one registry.
///
/// `consume_dyn` expects a bag that has already been partitioned by
/// `schema()`.
#[async_trait]
pub trait DynConsumer: Send + Sync {
    async fn consume_dyn(&self, args: ArgBag) -> Result<(), SieveError>;
    fn schema(&self) -> &Schema;
    fn name(&self) -> &str;
}

pub struct TypedConsumer<P: Props, C: Consumer<P>> {
    consumer: C,
    schema: Schema,
    _marker: PhantomData<P>,
}

impl<P: Props, C: Consumer<P>> TypedConsumer<P, C> {
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            schema: P::schema(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<P: Props, C: Consumer<P>> DynConsumer for TypedConsumer<P, C> {
    async fn consume_dyn(&self, args: ArgBag) -> Result<(), SieveError> {
        let props: P = decode(args)?;
        self.consumer.consume(props).await
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn name(&self) -> &str {
        P::NAME
    }
}
