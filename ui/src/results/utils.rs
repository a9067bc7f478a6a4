use crate::core::{DatasetId, MetricKind, SceneType, TrainingStatus, DATA_DIR_ENV};

use super::ResultsState;

/// Chart card order on the page.
pub(crate) const CHART_METRICS: [MetricKind; 3] =
    [MetricKind::Lpips, MetricKind::Dreamsim, MetricKind::Fid];

pub(crate) fn line_color(scene: SceneType, status: TrainingStatus) -> &'static str {
    match (scene, status) {
        (SceneType::Familiar, TrainingStatus::Before) => "#7ff6ec",
        (SceneType::Familiar, TrainingStatus::After) => "#249e97",
        (SceneType::HalfFamiliar, TrainingStatus::Before) => "#ff9a9a",
        (SceneType::HalfFamiliar, TrainingStatus::After) => "#b22d2d",
        (SceneType::Unfamiliar, TrainingStatus::Before) => "#b3ffb3",
        (SceneType::Unfamiliar, TrainingStatus::After) => "#008000",
    }
}

pub(crate) fn legend_label(scene: SceneType, status: TrainingStatus) -> String {
    let scene_label = match scene {
        SceneType::HalfFamiliar => "Half",
        other => other.label(),
    };
    format!("{scene_label} {}", status.label())
}

pub(crate) fn dataset_label(id: DatasetId) -> String {
    format!("{} · {}", id.scene.label(), id.status.label())
}

pub(crate) fn load_summary(state: &ResultsState) -> String {
    if !state.ready {
        return "Loading metric datasets…".to_string();
    }

    let missing = state.missing_datasets();
    if missing.is_empty() {
        return format!("All {} datasets loaded", DatasetId::COUNT);
    }

    let loaded = DatasetId::COUNT - missing.len();
    if loaded == 0 {
        return format!("No datasets loaded · set {DATA_DIR_ENV} to the folder holding the merged JSON files");
    }
    let names = missing
        .into_iter()
        .map(dataset_label)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{loaded} of {} datasets loaded · missing: {names}", DatasetId::COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MetricStore, RawDataset};

    #[test]
    fn every_line_has_its_own_color() {
        let mut colors = std::collections::HashSet::new();
        for id in DatasetId::ALL {
            assert!(colors.insert(line_color(id.scene, id.status)));
        }
    }

    #[test]
    fn legend_labels() {
        assert_eq!(
            legend_label(SceneType::HalfFamiliar, TrainingStatus::Before),
            "Half Before"
        );
        assert_eq!(
            legend_label(SceneType::Unfamiliar, TrainingStatus::After),
            "Unfamiliar After"
        );
    }

    #[test]
    fn summary_names_missing_pairs() {
        let mut state = ResultsState::pending();
        assert_eq!(load_summary(&state), "Loading metric datasets…");

        let mut store = MetricStore::empty();
        for id in DatasetId::ALL {
            if id != DatasetId::new(SceneType::Familiar, TrainingStatus::After) {
                store.insert(id, RawDataset::empty());
            }
        }
        state.store = store;
        state.ready = true;
        assert_eq!(
            load_summary(&state),
            "5 of 6 datasets loaded · missing: Familiar · After"
        );
    }

    #[test]
    fn empty_load_points_at_data_dir_variable() {
        let state = ResultsState::failed("sekaibt_same_merged.json: unable to read".into());
        assert_eq!(
            load_summary(&state),
            "No datasets loaded · set SEKAI_DATA_DIR to the folder holding the merged JSON files"
        );
    }
}
