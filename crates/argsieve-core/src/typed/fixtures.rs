//! テスト用の Props / Consumer 型

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::consumer::Consumer;
use super::props::Props;
use crate::domain::{FieldDecl, FieldKind, SieveError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestProps {
    #[serde(default)]
    pub value: Option<i64>,
}

impl Props for TestProps {
    const NAME: &'static str = "test.props";
    const FIELDS: &'static [FieldDecl] = &[FieldDecl::new("value", FieldKind::Int)];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnotherTestProps {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Props for AnotherTestProps {
    const NAME: &'static str = "test.another";
    const FIELDS: &'static [FieldDecl] = &[
        FieldDecl::new("name", FieldKind::Str),
        FieldDecl::new("tags", FieldKind::Json),
    ];
}

pub struct TestConsumer;

#[async_trait]
impl Consumer<TestProps> for TestConsumer {
    async fn consume(&self, _props: TestProps) -> Result<(), SieveError> {
        Ok(())
    }
}

pub struct AnotherTestConsumer;

#[async_trait]
impl Consumer<AnotherTestProps> for AnotherTestConsumer {
    async fn consume(&self, _props: AnotherTestProps) -> Result<(), SieveError> {
        Ok(())
    }
}
