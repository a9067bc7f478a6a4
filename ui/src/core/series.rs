//! Chart series: the five-point before/after curves of one metric for every
//! scene type.

use super::dataset::{Category, MetricKind, SceneType, TimePoint, TrainingStatus};
use super::store::{MetricStore, RawDataset};

/// One value per time point, in `TimePoint::ALL` order. `None` marks a gap.
pub type Series = [Option<f64>; TimePoint::COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusSeries {
    pub before: Series,
    pub after: Series,
}

impl StatusSeries {
    pub fn get(&self, status: TrainingStatus) -> &Series {
        match status {
            TrainingStatus::Before => &self.before,
            TrainingStatus::After => &self.after,
        }
    }
}

/// Full, unfiltered series for a `(metric, category)` selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSeries {
    pub metric: MetricKind,
    pub category: Category,
    scenes: [StatusSeries; 3],
}

impl SceneSeries {
    pub fn get(&self, scene: SceneType) -> &StatusSeries {
        &self.scenes[scene.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SceneType, &StatusSeries)> {
        SceneType::ALL.into_iter().map(move |scene| (scene, self.get(scene)))
    }

    /// True when no scene/status has a single value.
    pub fn is_all_missing(&self) -> bool {
        self.scenes
            .iter()
            .flat_map(|series| series.before.iter().chain(series.after.iter()))
            .all(Option::is_none)
    }
}

pub fn extract(store: &MetricStore, metric: MetricKind, category: Category) -> SceneSeries {
    let scenes = SceneType::ALL.map(|scene| StatusSeries {
        before: read_series(store.get(scene, TrainingStatus::Before), category, metric),
        after: read_series(store.get(scene, TrainingStatus::After), category, metric),
    });

    SceneSeries {
        metric,
        category,
        scenes,
    }
}

fn read_series(dataset: &RawDataset, category: Category, metric: MetricKind) -> Series {
    TimePoint::ALL.map(|time| dataset.value(category, metric, time))
}
