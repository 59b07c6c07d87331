//! Props trait - 静的なスキーマを持つ型付き引数
//!
//! # 学習ポイント
//! - Associated Constants (`const NAME`, `const FIELDS`)
//! - フィールド名はリフレクションではなく定数で宣言する

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{ArgBag, FieldDecl, Schema, SieveError};
use crate::partition::partition;

/// Props binds a Rust struct to the schema it accepts.
///
/// # 使用例
/// ```ignore
/// #[derive(Serialize, Deserialize, Default)]
/// struct FooProps {
///     #[serde(default)]
///     a: Option<String>,
/// }
///
/// impl Props for FooProps {
///     const NAME: &'static str = "FooProps";
///     const FIELDS: &'static [FieldDecl] = &[FieldDecl::new("a", FieldKind::Str)];
/// }
/// ```
///
/// Every field should be `#[serde(default)]` so that a partition missing
/// some keys still decodes.
pub trait Props: Serialize + DeserializeOwned + Send + Sync + 'static {
    const NAME: &'static str;
    const FIELDS: &'static [FieldDecl];

    fn schema() -> Schema {
        Schema::from_decls(Self::NAME, Self::FIELDS)
    }
}

/// Filter `bag` down to `P`'s fields and decode the result.
///
/// Values are not checked by the filter itself; a value serde cannot decode
/// into the declared field type surfaces here as `SieveError::Decode`.
pub fn into<P: Props>(bag: &ArgBag) -> Result<P, SieveError> {
    decode(partition(&P::schema(), bag))
}

/// Decode an already partitioned bag.
pub fn decode<P: Props>(args: ArgBag) -> Result<P, SieveError> {
    serde_json::from_value(args.into_value()).map_err(|e| SieveError::Decode {
        schema: P::NAME.to_string(),
        message: e.to_string(),
    })
}
