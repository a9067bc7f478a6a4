//! Composite keys addressing a single scalar inside a raw dataset:
//! `{prefix}_{category}_{metric}_{timepoint}`, e.g. `sekai_time_lpips_2s`.

use super::dataset::{Category, MetricKind, TimePoint, CATEGORY_PREFIX};

/// Plain interpolation; callers pass values from the closed vocabularies.
pub fn build_key(category_prefix: &str, category: &str, metric: &str, timepoint: &str) -> String {
    format!("{category_prefix}_{category}_{metric}_{timepoint}")
}

/// Typed convenience over [`build_key`] using the shared `sekai` prefix.
pub fn metric_key(category: Category, metric: MetricKind, time: TimePoint) -> String {
    build_key(
        CATEGORY_PREFIX,
        category.as_str(),
        metric.as_str(),
        time.label(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pub category: Category,
    pub metric: MetricKind,
    pub time: TimePoint,
}

impl CompositeKey {
    pub fn new(category: Category, metric: MetricKind, time: TimePoint) -> Self {
        Self {
            category,
            metric,
            time,
        }
    }

    pub fn to_key(self) -> String {
        metric_key(self.category, self.metric, self.time)
    }
}

/// Decode a key produced by [`metric_key`].
///
/// Categories may contain underscores (`rollout_1fps`), so the metric and
/// time point are split off from the right.
pub fn parse_key(key: &str) -> Option<CompositeKey> {
    let rest = key.strip_prefix(CATEGORY_PREFIX)?.strip_prefix('_')?;
    let (head, time) = rest.rsplit_once('_')?;
    let (category, metric) = head.rsplit_once('_')?;

    Some(CompositeKey {
        category: Category::parse(category)?,
        metric: MetricKind::parse(metric)?,
        time: TimePoint::parse(time)?,
    })
}
