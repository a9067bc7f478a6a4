//! In-memory view over the six loaded datasets.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::dataset::{Category, DatasetId, MetricKind, SceneType, TimePoint, TrainingStatus};
use super::keys::metric_key;

/// Flat mapping from composite key to scalar. A key that is not present is
/// a missing value, never zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataset {
    values: BTreeMap<String, f64>,
}

static EMPTY_DATASET: RawDataset = RawDataset::empty();

impl RawDataset {
    pub const fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Keep the numeric entries of a decoded JSON object; anything else
    /// (strings, `null`, nested values) reads as missing.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let values = object
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|number| (key, number)))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn value(&self, category: Category, metric: MetricKind, time: TimePoint) -> Option<f64> {
        self.get(&metric_key(category, metric, time))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RawDataset {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The six datasets addressed by `(scene, status)`.
///
/// Pairs that have not been loaded (or failed to load) resolve to a shared
/// empty dataset, so lookups never fail. Clones share the loaded data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricStore {
    datasets: [Option<Arc<RawDataset>>; DatasetId::COUNT],
}

impl MetricStore {
    /// State before loading completes: every pair reads as empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: DatasetId, dataset: RawDataset) {
        self.datasets[id.index()] = Some(Arc::new(dataset));
    }

    pub fn with_dataset(
        mut self,
        scene: SceneType,
        status: TrainingStatus,
        dataset: RawDataset,
    ) -> Self {
        self.insert(DatasetId::new(scene, status), dataset);
        self
    }

    pub fn get(&self, scene: SceneType, status: TrainingStatus) -> &RawDataset {
        self.datasets[DatasetId::new(scene, status).index()]
            .as_deref()
            .unwrap_or(&EMPTY_DATASET)
    }

    pub fn is_loaded(&self, scene: SceneType, status: TrainingStatus) -> bool {
        self.datasets[DatasetId::new(scene, status).index()].is_some()
    }

    pub fn loaded_count(&self) -> usize {
        self.datasets.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded_count() == 0
    }

    pub fn value(
        &self,
        scene: SceneType,
        status: TrainingStatus,
        category: Category,
        metric: MetricKind,
        time: TimePoint,
    ) -> Option<f64> {
        self.get(scene, status).value(category, metric, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_pair_reads_as_empty() {
        let store = MetricStore::empty();
        for id in DatasetId::ALL {
            assert!(store.get(id.scene, id.status).is_empty());
            assert!(!store.is_loaded(id.scene, id.status));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn zero_is_a_value() {
        let dataset: RawDataset = [("sekai_time_lpips_1s", 0.0)].into_iter().collect();
        let store = MetricStore::empty().with_dataset(
            SceneType::Familiar,
            TrainingStatus::Before,
            dataset,
        );
        assert_eq!(
            store.value(
                SceneType::Familiar,
                TrainingStatus::Before,
                Category::Time,
                MetricKind::Lpips,
                TimePoint::Sec1
            ),
            Some(0.0)
        );
        assert_eq!(
            store.value(
                SceneType::Familiar,
                TrainingStatus::Before,
                Category::Time,
                MetricKind::Lpips,
                TimePoint::Sec2
            ),
            None
        );
        assert_eq!(store.loaded_count(), 1);
    }

    #[test]
    fn non_numeric_entries_are_dropped() {
        let object = json!({
            "sekai_time_fid_1s": 45.2,
            "sekai_time_fid_2s": null,
            "sekai_time_fid_4s": "51.0",
            "sekai_time_fid_6s": 12
        });
        let serde_json::Value::Object(map) = object else {
            unreachable!()
        };
        let dataset = RawDataset::from_json_object(map);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get("sekai_time_fid_1s"), Some(45.2));
        assert_eq!(dataset.get("sekai_time_fid_2s"), None);
        assert_eq!(dataset.get("sekai_time_fid_4s"), None);
        assert_eq!(dataset.get("sekai_time_fid_6s"), Some(12.0));
    }

    #[test]
    fn pairs_do_not_alias() {
        let before: RawDataset = [("sekai_time_fid_1s", 45.2)].into_iter().collect();
        let store = MetricStore::empty().with_dataset(
            SceneType::Unfamiliar,
            TrainingStatus::Before,
            before,
        );
        assert!(store.get(SceneType::Unfamiliar, TrainingStatus::After).is_empty());
        assert!(store.get(SceneType::Familiar, TrainingStatus::Before).is_empty());
        assert_eq!(store.get(SceneType::Unfamiliar, TrainingStatus::Before).len(), 1);
    }
}
