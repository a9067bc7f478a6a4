mod charts;
pub use charts::{ChartLine, ChartModel, ChartPoint, MarkerShape, ResultsCharts};

mod table;
pub use table::{table_rows, ResultsTable, TableRow};

mod export;
pub use export::ResultsExportPanel;

mod toggles;
pub use toggles::{CategorySelector, VisibilityToggles};

mod utils;
pub(crate) use utils::*;

use crate::core::{loader, DatasetId, LoaderConfig, MetricStore, SceneType, TrainingStatus};

/// Shared state for the results view: the loaded store plus any per-file
/// load failures. `ready` flips once the loader has finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsState {
    pub store: MetricStore,
    pub errors: Vec<String>,
    pub ready: bool,
}

impl ResultsState {
    /// Before the loader reports back; every lookup reads as missing.
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn load(config: &LoaderConfig) -> Self {
        let report = loader::load_store(config);
        Self {
            store: report.store,
            errors: report.errors.iter().map(|err| err.to_string()).collect(),
            ready: true,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            store: MetricStore::empty(),
            errors: vec![message],
            ready: true,
        }
    }

    pub fn missing_datasets(&self) -> Vec<DatasetId> {
        DatasetId::ALL
            .into_iter()
            .filter(|id| !self.store.is_loaded(id.scene, id.status))
            .collect()
    }
}

/// Which lines the charts draw. Toggles apply to all three metric charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    scenes: [bool; 3],
    statuses: [bool; 2],
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            scenes: [true; 3],
            statuses: [true; 2],
        }
    }
}

impl Visibility {
    pub fn scene_visible(&self, scene: SceneType) -> bool {
        self.scenes[scene.index()]
    }

    pub fn status_visible(&self, status: TrainingStatus) -> bool {
        self.statuses[status.index()]
    }

    pub fn is_visible(&self, scene: SceneType, status: TrainingStatus) -> bool {
        self.scene_visible(scene) && self.status_visible(status)
    }

    pub fn toggle_scene(&mut self, scene: SceneType) {
        let slot = &mut self.scenes[scene.index()];
        *slot = !*slot;
    }

    pub fn toggle_status(&mut self, status: TrainingStatus) {
        let slot = &mut self.statuses[status.index()];
        *slot = !*slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_visible_by_default() {
        let visibility = Visibility::default();
        for scene in SceneType::ALL {
            for status in TrainingStatus::ALL {
                assert!(visibility.is_visible(scene, status));
            }
        }
    }

    #[test]
    fn toggles_combine() {
        let mut visibility = Visibility::default();
        visibility.toggle_scene(SceneType::HalfFamiliar);
        visibility.toggle_status(TrainingStatus::Before);

        assert!(!visibility.is_visible(SceneType::HalfFamiliar, TrainingStatus::After));
        assert!(!visibility.is_visible(SceneType::Familiar, TrainingStatus::Before));
        assert!(visibility.is_visible(SceneType::Familiar, TrainingStatus::After));

        visibility.toggle_scene(SceneType::HalfFamiliar);
        assert!(visibility.is_visible(SceneType::HalfFamiliar, TrainingStatus::After));
    }

    #[test]
    fn pending_state_lists_every_dataset_as_missing() {
        let state = ResultsState::pending();
        assert!(!state.ready);
        assert_eq!(state.missing_datasets().len(), DatasetId::COUNT);
    }
}
