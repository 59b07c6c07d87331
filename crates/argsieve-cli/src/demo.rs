//! The `foo` / `bar` pair: two consumers that each accept one keyword.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use argsieve_core::typed::{Consumer, Props};
use argsieve_core::{FieldDecl, FieldKind, SieveError};

/// Name of the combined schema both consumers are reached through.
pub const FOOBAR: &str = "FooBarProps";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FooProps {
    #[serde(default)]
    pub a: Option<String>,
}

impl Props for FooProps {
    const NAME: &'static str = "FooProps";
    const FIELDS: &'static [FieldDecl] = &[FieldDecl::new("a", FieldKind::Str)];
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BarProps {
    #[serde(default)]
    pub b: Option<i64>,
}

impl Props for BarProps {
    const NAME: &'static str = "BarProps";
    const FIELDS: &'static [FieldDecl] = &[FieldDecl::new("b", FieldKind::Int)];
}

/// Prints `a`, or `None` when it was not given.
pub struct Foo;

impl Foo {
    pub fn line(props: &FooProps) -> String {
        match &props.a {
            Some(a) => a.clone(),
            None => "None".to_string(),
        }
    }
}

#[async_trait]
impl Consumer<FooProps> for Foo {
    async fn consume(&self, props: FooProps) -> Result<(), SieveError> {
        println!("{}", Self::line(&props));
        Ok(())
    }
}

/// Prints `b + 1`; a missing `b` counts as 0.
pub struct Bar;

impl Bar {
    pub fn line(props: &BarProps) -> Result<String, SieveError> {
        let b = props.b.unwrap_or(0);
        let next = b
            .checked_add(1)
            .ok_or_else(|| SieveError::consumer(BarProps::NAME, format!("{b} + 1 overflows")))?;
        Ok(next.to_string())
    }
}

#[async_trait]
impl Consumer<BarProps> for Bar {
    async fn consume(&self, props: BarProps) -> Result<(), SieveError> {
        println!("{}", Self::line(&props)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argsieve_core::ArgBag;
    use argsieve_core::typed::into;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[test]
    fn hi_five_splits_between_foo_and_bar() {
        let bag = ArgBag::new().with("a", "hi").with("b", 5);
        let foo: FooProps = into(&bag).unwrap();
        let bar: BarProps = into(&bag).unwrap();
        assert_eq!(foo.a.as_deref(), Some("hi"));
        assert_eq!(bar.b, Some(5));
    }

    #[tokio::test]
    async fn bar_overflow_is_a_consumer_error() {
        let err = Bar
            .consume(BarProps { b: Some(i64::MAX) })
            .await
            .unwrap_err();
        assert!(matches!(err, SieveError::Consumer { .. }));
    }

    #[rstest]
    #[case(json!({ "a": "hi", "b": 5 }), "hi")]
    #[case(json!({ "b": 5 }), "None")]
    #[case(json!({ "a": null }), "None")]
    #[case(json!({ "baz": 10 }), "None")]
    fn foo_prints_a_or_none(#[case] args: Value, #[case] expected: &str) {
        let bag: ArgBag = serde_json::from_value(args).unwrap();
        let props: FooProps = into(&bag).unwrap();
        assert_eq!(Foo::line(&props), expected);
    }

    #[rstest]
    #[case(json!({ "a": "hi", "b": 5 }), "6")]
    #[case(json!({ "a": "hi" }), "1")]
    #[case(json!({ "b": null }), "1")]
    #[case(json!({ "b": -1 }), "0")]
    #[case(json!({ "baz": 10 }), "1")]
    fn bar_prints_b_plus_one(#[case] args: Value, #[case] expected: &str) {
        let bag: ArgBag = serde_json::from_value(args).unwrap();
        let props: BarProps = into(&bag).unwrap();
        assert_eq!(Bar::line(&props).unwrap(), expected);
    }

    #[test]
    fn quoted_number_reaches_foo_as_string() {
        let (key, value) = ArgBag::parse_pair(r#"a="5""#).unwrap();
        let bag = ArgBag::new().with(key, value);
        let props: FooProps = into(&bag).unwrap();
        assert_eq!(Foo::line(&props), "5");
    }

    #[test]
    fn bare_number_for_foo_is_a_decode_error() {
        let (key, value) = ArgBag::parse_pair("a=5").unwrap();
        let bag = ArgBag::new().with(key, value);
        let err = into::<FooProps>(&bag).unwrap_err();
        assert!(matches!(err, SieveError::Decode { ref schema, .. } if schema == "FooProps"));
    }

    #[tokio::test]
    async fn missing_values_are_fine() {
        Foo.consume(FooProps::default()).await.unwrap();
        Bar.consume(BarProps::default()).await.unwrap();
    }
}
