//! Domain model (field names, schemas, argument bags, errors).

pub mod bag;
pub mod errors;
pub mod field;
pub mod schema;

pub use self::bag::ArgBag;
pub use self::errors::SieveError;
pub use self::field::{Field, FieldDecl, FieldKind, FieldName};
pub use self::schema::Schema;
