use vitals_types::Source;

/// Static descriptive metadata for one source.
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub source: Source,
    pub description: &'static str,
}

const SOURCES: &[SourceMetadata] = &[
    SourceMetadata {
        source: Source::Oura,
        description: "Oura ring (sleep, readiness, activity)",
    },
    SourceMetadata {
        source: Source::Cronometer,
        description: "Cronometer nutrition log",
    },
    SourceMetadata {
        source: Source::Strava,
        description: "Strava runs",
    },
    SourceMetadata {
        source: Source::Garmin,
        description: "Garmin Connect activities and recovery",
    },
    SourceMetadata {
        source: Source::Manual,
        description: "Manual entries (bodyweight, lifts)",
    },
];

pub fn get_all_sources() -> &'static [SourceMetadata] {
    SOURCES
}

pub fn get_source_metadata(source: Source) -> Option<&'static SourceMetadata> {
    SOURCES.iter().find(|m| m.source == source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_source_is_registered() {
        for source in Source::ALL {
            assert!(get_source_metadata(source).is_some());
        }
        assert_eq!(get_all_sources().len(), Source::ALL.len());
    }
}
