//! AppBuilder - Dispatcher の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use crate::partition::UnknownKeyPolicy;
use crate::typed::{Consumer, ConsumerRegistry, Props, RegistryError};

use super::config::SieveConfig;
use super::dispatcher::Dispatcher;

/// Name given to the combined schema when none is set.
pub const DEFAULT_CALL_SITE: &str = "call_site";

/// AppBuilder wires consumers into a `Dispatcher`.
///
/// # 使用例
/// ```ignore
/// let dispatcher = AppBuilder::new()
///     .call_site("foobar")
///     .register::<FooProps, _>(Foo)?
///     .register::<BarProps, _>(Bar)?
///     .expect_schemas(&["FooProps", "BarProps"])
///     .policy(UnknownKeyPolicy::Reject)
///     .build()?;
/// ```
pub struct AppBuilder {
    registry: ConsumerRegistry,
    expected_schemas: Option<Vec<String>>,
    policy: UnknownKeyPolicy,
    call_site: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing schemas: {0:?}. These schemas were expected but have no consumer.")]
    MissingSchemas(Vec<String>),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            registry: ConsumerRegistry::new(),
            expected_schemas: None,
            policy: UnknownKeyPolicy::default(),
            call_site: DEFAULT_CALL_SITE.to_string(),
        }
    }

    /// Start from a loaded config (policy only; `times` belongs to the caller).
    pub fn from_config(config: &SieveConfig) -> Self {
        Self::new().policy(config.unknown_keys)
    }

    pub fn register<P: Props, C: Consumer<P> + 'static>(
        mut self,
        consumer: C,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<P, C>(consumer)?;
        Ok(self)
    }

    pub fn expect_schemas(mut self, schemas: &[&str]) -> Self {
        self.expected_schemas = Some(schemas.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn policy(mut self, policy: UnknownKeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Name of the combined schema, shown in unknown-key errors and logs.
    pub fn call_site(mut self, name: impl Into<String>) -> Self {
        self.call_site = name.into();
        self
    }

    /// # 検証
    /// - expect_schemas() の全スキーマに consumer が登録されているか
    pub fn build(self) -> Result<Dispatcher, BuildError> {
        if let Some(expected) = &self.expected_schemas {
            let registered = self.registry.registered_schemas();
            let missing: Vec<String> = expected
                .iter()
                .filter(|x| !registered.contains(x))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingSchemas(missing));
            }
        }
        Ok(Dispatcher::new(self.registry, self.call_site, self.policy))
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed::fixtures::{AnotherTestProps, TestConsumer, TestProps};

    #[test]
    fn test_build_success() {
        let app = AppBuilder::new()
            .register::<TestProps, _>(TestConsumer)
            .unwrap()
            .expect_schemas(&[TestProps::NAME])
            .build();
        assert!(app.is_ok());
    }

    #[test]
    fn test_build_missing_schemas() {
        let app = AppBuilder::new()
            .register::<TestProps, _>(TestConsumer)
            .unwrap()
            .expect_schemas(&[TestProps::NAME, AnotherTestProps::NAME])
            .build();
        assert!(matches!(
            app,
            Err(BuildError::MissingSchemas(missing)) if missing == vec![AnotherTestProps::NAME.to_string()]
        ));
    }

    #[test]
    fn test_build_no_expect_schemas() {
        let app = AppBuilder::new()
            .register::<TestProps, _>(TestConsumer)
            .unwrap()
            .build();
        assert!(app.is_ok());
    }

    #[test]
    fn test_from_config_takes_policy() {
        let config = SieveConfig {
            unknown_keys: UnknownKeyPolicy::Reject,
            ..SieveConfig::default()
        };
        let dispatcher = AppBuilder::from_config(&config)
            .call_site("foobar")
            .build()
            .unwrap();
        assert_eq!(dispatcher.policy(), UnknownKeyPolicy::Reject);
        assert_eq!(dispatcher.combined_schema().name(), "foobar");
    }
}
