pub mod error;
pub mod manual;
pub mod metadata;
pub mod metrics;
pub mod record;
pub mod source;

pub use error::{Error, Result};
pub use manual::{EntryKey, ManualEntry};
pub use metadata::{MetricCategory, MetricMeta, WeeklyAgg, metric_meta, metric_metadata};
pub use metrics::{
    CronometerMetrics, GarminMetrics, ManualMetrics, MetricBag, MetricValue, OuraMetrics,
    StravaMetrics, fields_for,
};
pub use record::{DailyRecord, SourceMetrics, SourceRecord};
pub use source::Source;
