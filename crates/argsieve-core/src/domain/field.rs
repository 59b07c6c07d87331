//! Field names and their (advisory) semantic kinds.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A recognized keyword-argument name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Expected semantic type of a field.
///
/// Kinds are metadata only: the partitioner never inspects values, so a key
/// carrying a value of the "wrong" kind still passes through. Type errors are
/// caught later, if at all, when a partition is decoded into a `Props` struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Any,
    Str,
    Int,
    Float,
    Bool,
    Json,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Any => "any",
            FieldKind::Str => "str",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::Json => "json",
        };
        f.write_str(s)
    }
}

/// Compile-time field declaration, used in `Props::FIELDS`.
///
/// ```ignore
/// const FIELDS: &'static [FieldDecl] = &[FieldDecl::new("a", FieldKind::Str)];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDecl {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    pub const fn any(name: &'static str) -> Self {
        Self::new(name, FieldKind::Any)
    }
}

/// A field as held by a runtime `Schema`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub kind: FieldKind,
}

impl From<&FieldDecl> for Field {
    fn from(decl: &FieldDecl) -> Self {
        Self {
            name: FieldName::new(decl.name),
            kind: decl.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_serializes_snake_case() {
        let s = serde_json::to_string(&FieldKind::Str).unwrap();
        assert_eq!(s, "\"str\"");
        let k: FieldKind = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(k, FieldKind::Json);
    }

    #[test]
    fn field_from_decl_keeps_name_and_kind() {
        const DECL: FieldDecl = FieldDecl::new("b", FieldKind::Int);
        let f = Field::from(&DECL);
        assert_eq!(f.name.as_str(), "b");
        assert_eq!(f.kind, FieldKind::Int);
    }
}
