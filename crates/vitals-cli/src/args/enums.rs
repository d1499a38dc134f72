use clap::ValueEnum;
use vitals_types::Source;

/// Clap-facing source selector. Kept separate from the wire enum so the
/// argument surface can evolve without touching serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceName {
    Oura,
    Cronometer,
    Strava,
    Garmin,
    Manual,
}

impl From<SourceName> for Source {
    fn from(name: SourceName) -> Self {
        match name {
            SourceName::Oura => Source::Oura,
            SourceName::Cronometer => Source::Cronometer,
            SourceName::Strava => Source::Strava,
            SourceName::Garmin => Source::Garmin,
            SourceName::Manual => Source::Manual,
        }
    }
}
