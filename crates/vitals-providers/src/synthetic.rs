use crate::Result;
use crate::traits::Connector;
use chrono::NaiveDate;
use vitals_types::{Source, SourceRecord};

/// Connector that serves seeded synthetic data for one source, so the full
/// pipeline (fetch, merge, persist, render) runs without live credentials.
pub struct SyntheticConnector {
    source: Source,
    seed: u64,
}

impl SyntheticConnector {
    pub fn new(source: Source, seed: u64) -> Self {
        Self { source, seed }
    }

    /// One synthetic connector per known source, sharing a seed.
    pub fn all(seed: u64) -> Vec<SyntheticConnector> {
        Source::ALL
            .into_iter()
            .map(|source| SyntheticConnector::new(source, seed))
            .collect()
    }
}

impl Connector for SyntheticConnector {
    fn source(&self) -> Source {
        self.source
    }

    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<SourceRecord>> {
        Ok(vitals_engine::generate_source(
            self.source,
            start,
            end,
            self.seed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_testing::fixtures::date;

    #[test]
    fn serves_only_its_source() {
        let connector = SyntheticConnector::new(Source::Oura, 1);
        let records = connector
            .fetch(date("2024-01-01"), date("2024-01-07"))
            .unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.source() == Source::Oura));
    }

    #[test]
    fn all_covers_every_source() {
        let connectors = SyntheticConnector::all(1);
        let sources: Vec<_> = connectors.iter().map(|c| c.source()).collect();
        assert_eq!(sources, Source::ALL.to_vec());
    }
}
