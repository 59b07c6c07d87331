//! Field-set partitioner.
//!
//! `partition` is the whole core: keep the entries of a bag whose key the
//! schema recognizes, in the bag's order, with values untouched. It is pure
//! and borrows its inputs, so it can be called from any number of threads.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::errors::join_keys;
use crate::domain::{ArgBag, FieldName, Schema, SieveError};

/// What to do with keys the schema does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeyPolicy {
    /// Discard silently.
    #[default]
    Drop,
    /// Discard, but emit a warning event.
    Warn,
    /// Fail with `SieveError::UnknownKeys`.
    Reject,
}

impl std::str::FromStr for UnknownKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "warn" => Ok(Self::Warn),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown policy '{other}' (expected drop, warn or reject)")),
        }
    }
}

/// Keep the entries of `bag` whose key is recognized by `schema`.
pub fn partition(schema: &Schema, bag: &ArgBag) -> ArgBag {
    bag.iter()
        .filter(|(key, _)| schema.contains(key))
        .map(|(key, value)| (key, value.clone()))
        .collect()
}

/// Keys of `bag` that `schema` does not recognize, in bag order.
pub fn unknown_keys(schema: &Schema, bag: &ArgBag) -> Vec<FieldName> {
    bag.keys()
        .filter(|key| !schema.contains(key))
        .map(FieldName::from)
        .collect()
}

/// `partition` with an explicit policy for unrecognized keys.
pub fn partition_with(
    schema: &Schema,
    bag: &ArgBag,
    policy: UnknownKeyPolicy,
) -> Result<ArgBag, SieveError> {
    if policy != UnknownKeyPolicy::Drop {
        let unknown = unknown_keys(schema, bag);
        if !unknown.is_empty() {
            if policy == UnknownKeyPolicy::Reject {
                return Err(SieveError::UnknownKeys {
                    schema: schema.name().to_string(),
                    keys: unknown,
                });
            }
            warn!(
                schema = schema.name(),
                dropped = %join_keys(&unknown),
                "dropping unrecognized keyword arguments"
            );
        }
    }

    let out = partition(schema, bag);
    debug!(schema = schema.name(), kept = out.len(), total = bag.len(), "partitioned");
    Ok(out)
}
