//! Schema - 認識するフィールド名の集合
//!
//! A schema is declared once (usually as `Props::FIELDS`) and never changes.
//! Composition is plain set union; there is no inheritance between schemas.

use std::collections::HashSet;

use super::errors::SieveError;
use super::field::{Field, FieldDecl, FieldKind, FieldName};

/// A named, finite set of recognized field names.
///
/// Declaration order is kept for display; membership checks go through a
/// hash index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    fields: Vec<Field>,
    index: HashSet<FieldName>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// A schema that recognizes nothing.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    /// Build from static declarations. Later duplicates are ignored.
    pub fn from_decls(name: impl Into<String>, decls: &[FieldDecl]) -> Self {
        decls
            .iter()
            .fold(Self::new(name), |schema, decl| schema.field(decl.name, decl.kind))
    }

    /// Add a field. If the name is already present the first declaration wins.
    pub fn field(mut self, name: impl Into<FieldName>, kind: FieldKind) -> Self {
        self.push(Field {
            name: name.into(),
            kind,
        });
        self
    }

    /// Add a field, rejecting a name that is already declared.
    pub fn try_field(
        mut self,
        name: impl Into<FieldName>,
        kind: FieldKind,
    ) -> Result<Self, SieveError> {
        let name = name.into();
        if self.index.contains(&name) {
            return Err(SieveError::DuplicateField {
                schema: self.name,
                field: name,
            });
        }
        self.push(Field { name, kind });
        Ok(self)
    }

    fn push(&mut self, field: Field) {
        if self.index.insert(field.name.clone()) {
            self.fields.push(field);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Recognized names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.iter().map(|f| &f.name)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    pub fn kind_of(&self, key: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|f| f.name.as_str() == key)
            .map(|f| f.kind)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Composite schema recognizing the names of `self` followed by the names
    /// of `other` not already present.
    pub fn union(&self, other: &Schema, name: impl Into<String>) -> Schema {
        let mut out = Schema {
            name: name.into(),
            fields: self.fields.clone(),
            index: self.index.clone(),
        };
        for field in &other.fields {
            out.push(field.clone());
        }
        out
    }

    pub fn union_all<'a>(
        name: impl Into<String>,
        schemas: impl IntoIterator<Item = &'a Schema>,
    ) -> Schema {
        let name = name.into();
        schemas
            .into_iter()
            .fold(Schema::new(name.clone()), |acc, s| acc.union(s, name.clone()))
    }
}
