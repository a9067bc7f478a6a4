//! Before/after comparison for one table cell group.

use super::dataset::{Category, MetricKind, SceneType, TimePoint, TrainingStatus};
use super::format::{format_metric, format_ratio};
use super::store::MetricStore;

/// Numeric comparison. `improvement` is `before - after` (positive means the
/// fine-tuned model is better, every metric being lower-is-better); `ratio`
/// is `after / before` as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComparisonRow {
    pub before: Option<f64>,
    pub after: Option<f64>,
    pub improvement: Option<f64>,
    pub ratio: Option<f64>,
}

impl ComparisonRow {
    pub fn from_values(before: Option<f64>, after: Option<f64>) -> Self {
        let (improvement, ratio) = match (before, after) {
            (Some(before), Some(after)) => {
                let ratio = (before != 0.0).then(|| (after / before) * 100.0);
                (Some(before - after), ratio)
            }
            _ => (None, None),
        };

        Self {
            before,
            after,
            improvement,
            ratio,
        }
    }

    pub fn improvement_tone(&self) -> Tone {
        match self.improvement {
            Some(delta) if delta > 0.0 => Tone::Better,
            Some(delta) if delta < 0.0 => Tone::Worse,
            _ => Tone::Neutral,
        }
    }

    pub fn ratio_tone(&self) -> Tone {
        match self.ratio {
            Some(percent) if percent < 100.0 => Tone::Better,
            Some(percent) if percent > 100.0 => Tone::Worse,
            _ => Tone::Neutral,
        }
    }

    pub fn format(&self, metric: MetricKind) -> FormattedRow {
        let decimals = metric.decimals();
        FormattedRow {
            before: format_metric(self.before, decimals),
            after: format_metric(self.after, decimals),
            improvement: format_metric(self.improvement, decimals),
            ratio: format_ratio(self.ratio),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRow {
    pub before: String,
    pub after: String,
    pub improvement: String,
    pub ratio: String,
}

/// Direction of a change, for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Better,
    Worse,
    Neutral,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Better => "results-table__cell--better",
            Tone::Worse => "results-table__cell--worse",
            Tone::Neutral => "",
        }
    }
}

pub fn compute(
    store: &MetricStore,
    metric: MetricKind,
    category: Category,
    time: TimePoint,
    scene: SceneType,
) -> ComparisonRow {
    let before = store.value(scene, TrainingStatus::Before, category, metric, time);
    let after = store.value(scene, TrainingStatus::After, category, metric, time);
    ComparisonRow::from_values(before, after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::RawDataset;

    fn fid_store() -> MetricStore {
        MetricStore::empty()
            .with_dataset(
                SceneType::Familiar,
                TrainingStatus::Before,
                [("sekai_time_fid_1s", 45.2)].into_iter().collect(),
            )
            .with_dataset(
                SceneType::Familiar,
                TrainingStatus::After,
                [("sekai_time_fid_1s", 32.1)].into_iter().collect(),
            )
    }

    #[test]
    fn derives_improvement_and_ratio() {
        let row = ComparisonRow::from_values(Some(0.4), Some(0.3));
        assert_eq!(row.improvement, Some(0.4 - 0.3));
        assert_eq!(row.ratio, Some((0.3 / 0.4) * 100.0));
        assert_eq!(row.improvement_tone(), Tone::Better);
        assert_eq!(row.ratio_tone(), Tone::Better);
    }

    #[test]
    fn missing_operand_blanks_derived_fields() {
        for row in [
            ComparisonRow::from_values(None, Some(0.3)),
            ComparisonRow::from_values(Some(0.3), None),
            ComparisonRow::from_values(None, None),
        ] {
            assert_eq!(row.improvement, None);
            assert_eq!(row.ratio, None);
            let text = row.format(MetricKind::Lpips);
            assert_eq!(text.improvement, "N/A");
            assert_eq!(text.ratio, "N/A");
        }
    }

    #[test]
    fn zero_before_guards_ratio_only() {
        let row = ComparisonRow::from_values(Some(0.0), Some(0.12));
        assert_eq!(row.ratio, None);
        assert_eq!(row.improvement, Some(-0.12));
        let text = row.format(MetricKind::Dreamsim);
        assert_eq!(text.before, ".000");
        assert_eq!(text.improvement, "-.120");
        assert_eq!(text.ratio, "N/A");
        assert_eq!(row.improvement_tone(), Tone::Worse);
        assert_eq!(row.ratio_tone(), Tone::Neutral);
    }

    #[test]
    fn fid_scenario_formats_like_the_table() {
        let row = compute(
            &fid_store(),
            MetricKind::Fid,
            Category::Time,
            TimePoint::Sec1,
            SceneType::Familiar,
        );
        assert_eq!(
            row.format(MetricKind::Fid),
            FormattedRow {
                before: "45.2".into(),
                after: "32.1".into(),
                improvement: "13.1".into(),
                ratio: "71.0%".into(),
            }
        );
    }

    #[test]
    fn missing_after_dataset() {
        let store = MetricStore::empty().with_dataset(
            SceneType::Unfamiliar,
            TrainingStatus::Before,
            [("sekai_time_lpips_4s", 0.398)].into_iter().collect::<RawDataset>(),
        );
        for time in TimePoint::ALL {
            let text = compute(
                &store,
                MetricKind::Lpips,
                Category::Time,
                time,
                SceneType::Unfamiliar,
            )
            .format(MetricKind::Lpips);
            let expected_before = if time == TimePoint::Sec4 { ".398" } else { "N/A" };
            assert_eq!(text.before, expected_before);
            assert_eq!(text.after, "N/A");
            assert_eq!(text.improvement, "N/A");
            assert_eq!(text.ratio, "N/A");
        }
    }

    #[test]
    fn regression_reads_as_worse() {
        let row = ComparisonRow::from_values(Some(30.0), Some(36.0));
        assert_eq!(row.improvement_tone(), Tone::Worse);
        assert_eq!(row.ratio_tone(), Tone::Worse);
        assert_eq!(row.format(MetricKind::Fid).ratio, "120.0%");
    }
}
