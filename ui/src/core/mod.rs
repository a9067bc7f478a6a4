//! Data aggregation for the results page: the six raw datasets, composite
//! keys, chart series and before/after comparisons. Nothing here touches the
//! DOM; the Dioxus views in `results` call into these functions.

pub mod comparison;
pub mod dataset;
pub mod format;
pub mod keys;
pub mod loader;
pub mod series;
pub mod store;

pub use comparison::{compute, ComparisonRow, FormattedRow, Tone};
pub use dataset::{
    Category, DatasetId, MetricKind, SceneType, TimePoint, TrainingStatus, CATEGORY_PREFIX,
};
pub use keys::{build_key, metric_key, parse_key, CompositeKey};
pub use loader::{load_store, DatasetLoadError, LoadReport, LoaderConfig, DATA_DIR_ENV};
pub use series::{extract, SceneSeries, Series, StatusSeries};
pub use store::{MetricStore, RawDataset};
