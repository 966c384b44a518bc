//! Simulated plant analyzer.
//!
//! No image is inspected. Each call to [`MockAnalyzer::pick`] draws one
//! record uniformly from [`CATALOG`] using the analyzer's random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::diagnosis::{DiagnosisRecord, CATALOG};

/// Picks canned diagnoses from an injectable random source.
#[derive(Debug, Clone)]
pub struct MockAnalyzer<R = StdRng> {
    rng: R,
}

impl MockAnalyzer<StdRng> {
    /// Analyzer seeded from the platform entropy source.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic analyzer, mostly useful in tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MockAnalyzer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick(&mut self) -> &'static DiagnosisRecord {
        let index = self.rng.gen_range(0..CATALOG.len());
        let record = &CATALOG[index];
        tracing::debug!(index, disease = record.disease, "picked simulated diagnosis");
        record
    }
}
