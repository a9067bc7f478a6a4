//! Reads the six `sekai{bt|ft}_{same|half|unknown}_merged.json` documents
//! from a data directory into a [`MetricStore`].
//!
//! A file that is missing or malformed does not abort the load: its pair
//! stays empty in the store and the failure is reported alongside it.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::dataset::DatasetId;
use super::keys::parse_key;
use super::store::{MetricStore, RawDataset};

const DEFAULT_DATA_DIR: &str = "static/data";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "SEKAI_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub data_dir: PathBuf,
}

impl LoaderConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Picks the data directory: an explicit override wins, then the first
    /// candidate that exists, then the default `static/data`.
    pub fn resolve(override_dir: Option<PathBuf>, candidates: &[PathBuf]) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(dir);
        }
        candidates
            .iter()
            .find(|dir| dir.is_dir())
            .map(|dir| Self::new(dir.clone()))
            .unwrap_or_default()
    }

    /// [`LoaderConfig::resolve`] with the override read from `SEKAI_DATA_DIR`.
    pub fn from_env(candidates: &[PathBuf]) -> Self {
        Self::resolve(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from), candidates)
    }

    pub fn path_for(&self, id: DatasetId) -> PathBuf {
        self.data_dir.join(id.file_name())
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("{file}: unable to read ({source})")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}: invalid JSON ({source})")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{file}: expected a JSON object of key/value pairs")]
    NotAnObject { file: String },
}

impl DatasetLoadError {
    pub fn file(&self) -> &str {
        match self {
            DatasetLoadError::Io { file, .. }
            | DatasetLoadError::Json { file, .. }
            | DatasetLoadError::NotAnObject { file } => file,
        }
    }
}

/// Outcome of [`load_store`]: whatever loaded, plus one error per failed file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub store: MetricStore,
    pub errors: Vec<DatasetLoadError>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty() && self.store.loaded_count() == DatasetId::COUNT
    }
}

/// Parse one document. `file` is only used to label errors.
pub fn parse_dataset(file: &str, source: &str) -> Result<RawDataset, DatasetLoadError> {
    let value: serde_json::Value =
        serde_json::from_str(source).map_err(|source| DatasetLoadError::Json {
            file: file.to_string(),
            source,
        })?;

    match value {
        serde_json::Value::Object(object) => Ok(RawDataset::from_json_object(object)),
        _ => Err(DatasetLoadError::NotAnObject {
            file: file.to_string(),
        }),
    }
}

pub fn load_dataset(config: &LoaderConfig, id: DatasetId) -> Result<RawDataset, DatasetLoadError> {
    let file = id.file_name();
    let path = config.path_for(id);
    let source = fs::read_to_string(&path).map_err(|source| DatasetLoadError::Io {
        file: file.clone(),
        source,
    })?;
    parse_dataset(&file, &source)
}

pub fn load_store(config: &LoaderConfig) -> LoadReport {
    let mut report = LoadReport::default();

    for id in DatasetId::ALL {
        match load_dataset(config, id) {
            Ok(dataset) => {
                let unrecognised = dataset.keys().filter(|key| parse_key(key).is_none()).count();
                if unrecognised > 0 {
                    debug!(
                        dataset = %id.name(),
                        unrecognised,
                        "dataset carries keys outside the composite key grammar"
                    );
                }
                debug!(dataset = %id.name(), values = dataset.len(), "dataset loaded");
                report.store.insert(id, dataset);
            }
            Err(err) => {
                warn!("{err}; treating {} as empty", id.name());
                report.errors.push(err);
            }
        }
    }

    info!(
        loaded = report.store.loaded_count(),
        failed = report.errors.len(),
        data_dir = %config.data_dir.display(),
        "metric datasets ready"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{SceneType, TrainingStatus};

    #[test]
    fn parses_flat_object() {
        let dataset = parse_dataset(
            "sekaibt_same_merged.json",
            r#"{"sekai_time_lpips_1s": 0.245, "sekai_time_lpips_2s": 0.0}"#,
        )
        .unwrap();
        assert_eq!(dataset.get("sekai_time_lpips_1s"), Some(0.245));
        assert_eq!(dataset.get("sekai_time_lpips_2s"), Some(0.0));
    }

    #[test]
    fn rejects_non_objects() {
        let err = parse_dataset("sekaift_half_merged.json", "[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DatasetLoadError::NotAnObject { .. }));
        assert_eq!(err.file(), "sekaift_half_merged.json");
    }

    #[test]
    fn reports_invalid_json() {
        let err = parse_dataset("sekaift_half_merged.json", "{ not json").unwrap_err();
        assert!(matches!(err, DatasetLoadError::Json { .. }));
        assert!(err.to_string().starts_with("sekaift_half_merged.json: invalid JSON"));
    }

    #[test]
    fn default_config_points_at_static_data() {
        let config = LoaderConfig::default();
        let id = DatasetId::new(SceneType::Unfamiliar, TrainingStatus::After);
        assert_eq!(
            config.path_for(id),
            PathBuf::from("static/data/sekaift_unknown_merged.json")
        );
    }

    #[test]
    fn override_wins_over_candidates() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LoaderConfig::resolve(
            Some(PathBuf::from("/srv/sekai")),
            &[tmp.path().to_path_buf()],
        );
        assert_eq!(config.data_dir, PathBuf::from("/srv/sekai"));
    }

    #[test]
    fn first_existing_candidate_is_used() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("assets").join("data");
        let present = tmp.path().to_path_buf();
        let config = LoaderConfig::resolve(None, &[missing, present.clone()]);
        assert_eq!(config.data_dir, present);
    }

    #[test]
    fn no_candidate_falls_back_to_static_data() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LoaderConfig::resolve(None, &[tmp.path().join("nope")]);
        assert_eq!(config, LoaderConfig::default());
        assert_eq!(LoaderConfig::resolve(None, &[]), LoaderConfig::default());
    }

    #[test]
    fn missing_directory_degrades_to_empty_store() {
        let config = LoaderConfig::new("/definitely/not/a/real/sekai/dir");
        let report = load_store(&config);
        assert!(report.store.is_empty());
        assert_eq!(report.errors.len(), DatasetId::COUNT);
        assert!(!report.is_complete());
        assert!(report
            .errors
            .iter()
            .all(|err| matches!(err, DatasetLoadError::Io { .. })));
    }
}
