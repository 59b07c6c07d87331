//! Dispatcher - bag を分割して各 consumer に渡す
//!
//! One round = validate the bag against the combined schema, then give every
//! consumer (in registration order) the partition matching its own schema.
//! Per-consumer partitions always drop silently: keys meant for a sibling
//! consumer are expected there. The policy only applies to keys that no
//! consumer recognizes.

use serde::Serialize;
use tracing::debug;

use crate::domain::{ArgBag, Schema, SieveError};
use crate::partition::{UnknownKeyPolicy, partition, partition_with};
use crate::typed::ConsumerRegistry;

/// One consumer call: which schema, with which arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invocation {
    pub schema: String,
    pub args: ArgBag,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DispatchReport {
    pub rounds: u32,
    pub calls: Vec<Invocation>,
}

pub struct Dispatcher {
    registry: ConsumerRegistry,
    combined: Schema,
    policy: UnknownKeyPolicy,
}

impl Dispatcher {
    pub fn new(registry: ConsumerRegistry, call_site: String, policy: UnknownKeyPolicy) -> Self {
        let combined = registry.combined_schema(call_site);
        Self {
            registry,
            combined,
            policy,
        }
    }

    /// Union of all consumer schemas.
    pub fn combined_schema(&self) -> &Schema {
        &self.combined
    }

    pub fn policy(&self) -> UnknownKeyPolicy {
        self.policy
    }

    /// Run a single round.
    pub async fn dispatch(&self, bag: &ArgBag) -> Result<DispatchReport, SieveError> {
        self.run(1, bag).await
    }

    /// Run `times` rounds over the same bag. The bag is checked against the
    /// combined schema once, before the first round. The first consumer
    /// error stops the run. `times == 0` calls nothing and validates nothing.
    pub async fn run(&self, times: u32, bag: &ArgBag) -> Result<DispatchReport, SieveError> {
        let mut report = DispatchReport::default();
        if times == 0 {
            return Ok(report);
        }
        partition_with(&self.combined, bag, self.policy)?;

        for round in 0..times {
            self.run_round(bag, round, &mut report).await?;
            report.rounds += 1;
        }
        Ok(report)
    }

    async fn run_round(
        &self,
        bag: &ArgBag,
        round: u32,
        report: &mut DispatchReport,
    ) -> Result<(), SieveError> {
        for consumer in self.registry.consumers() {
            let args = partition(consumer.schema(), bag);
            debug!(round, schema = consumer.name(), args = args.len(), "dispatch");
            report.calls.push(Invocation {
                schema: consumer.name().to_string(),
                args: args.clone(),
            });
            consumer.consume_dyn(args).await?;
        }
        Ok(())
    }
}
