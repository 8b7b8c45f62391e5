//! Record assembly

use chrono::NaiveDate;
use core_kernel::{temporal, FakeSource, PolicyNumber};
use domain_party::{AgeRange, Owner};
use domain_vehicle::Car;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::PolicyError;
use crate::insurance::InsuranceTerm;
use crate::policy_number::generate_policy_number;

/// A complete fictitious insurance record
///
/// Created fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceRecord {
    pub policy_number: PolicyNumber,
    pub owner: Owner,
    pub car: Car,
    pub insurance: InsuranceTerm,
}

impl InsuranceRecord {
    /// Calls every field generator once and nests the results
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        today: NaiveDate,
        ages: AgeRange,
    ) -> Result<Self, PolicyError> {
        Ok(Self {
            policy_number: generate_policy_number(rng),
            owner: Owner::generate(rng, today, ages)?,
            car: Car::generate(rng),
            insurance: InsuranceTerm::starting(today),
        })
    }
}

/// Generates records from an injected random source
///
/// Cloning is cheap; clones share the same source.
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    source: Arc<FakeSource>,
}

impl RecordGenerator {
    pub fn new(source: Arc<FakeSource>) -> Self {
        Self { source }
    }

    /// A generator backed by the process-wide source
    pub fn shared() -> Self {
        Self::new(FakeSource::shared())
    }

    pub fn source(&self) -> &Arc<FakeSource> {
        &self.source
    }

    /// Generates a record with the default owner age range
    pub fn generate(&self) -> Result<InsuranceRecord, PolicyError> {
        self.generate_with(AgeRange::default())
    }

    /// Generates a record whose owner age lies within `ages`
    pub fn generate_with(&self, ages: AgeRange) -> Result<InsuranceRecord, PolicyError> {
        self.generate_on(temporal::today(), ages)
    }

    /// Generates a record as of the calendar date `today`
    pub fn generate_on(
        &self,
        today: NaiveDate,
        ages: AgeRange,
    ) -> Result<InsuranceRecord, PolicyError> {
        let record = self
            .source
            .with_rng(|rng| InsuranceRecord::generate(rng, today, ages))?;

        debug!(
            policy_number = %record.policy_number,
            min_age = ages.minimum(),
            max_age = ages.maximum(),
            "Generated insurance record"
        );
        Ok(record)
    }
}
