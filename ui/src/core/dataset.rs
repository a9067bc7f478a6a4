//! Closed vocabularies of the experiment (scene types, training status,
//! categories, metrics, time points) and the table that maps each
//! `(scene, status)` pair to its dataset identifier.
//!
//! Every string that ends up in a filename or a composite key is produced
//! from the tables below; nothing else in the crate concatenates scene keys
//! or status prefixes by hand.

use serde::{Deserialize, Serialize};

/// Prefix shared by every composite key and every dataset filename.
pub const CATEGORY_PREFIX: &str = "sekai";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneType {
    Familiar,
    HalfFamiliar,
    Unfamiliar,
}

/// Scene type ↔ scene key used in dataset names. Order matches `SceneType::ALL`.
const SCENE_KEYS: [(SceneType, &str); 3] = [
    (SceneType::Familiar, "same"),
    (SceneType::HalfFamiliar, "half"),
    (SceneType::Unfamiliar, "unknown"),
];

impl SceneType {
    pub const ALL: [SceneType; 3] = [
        SceneType::Familiar,
        SceneType::HalfFamiliar,
        SceneType::Unfamiliar,
    ];

    pub fn index(self) -> usize {
        match self {
            SceneType::Familiar => 0,
            SceneType::HalfFamiliar => 1,
            SceneType::Unfamiliar => 2,
        }
    }

    /// Internal key used in dataset identifiers (`same`, `half`, `unknown`).
    pub fn scene_key(self) -> &'static str {
        SCENE_KEYS[self.index()].1
    }

    pub fn from_scene_key(key: &str) -> Option<Self> {
        SCENE_KEYS
            .iter()
            .find(|(_, candidate)| *candidate == key)
            .map(|(scene, _)| *scene)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SceneType::Familiar => "familiar",
            SceneType::HalfFamiliar => "half-familiar",
            SceneType::Unfamiliar => "unfamiliar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SceneType::Familiar => "Familiar",
            SceneType::HalfFamiliar => "Half-Familiar",
            SceneType::Unfamiliar => "Unfamiliar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Before,
    After,
}

/// Training status ↔ dataset prefix. Order matches `TrainingStatus::ALL`.
const STATUS_PREFIXES: [(TrainingStatus, &str); 2] =
    [(TrainingStatus::Before, "bt"), (TrainingStatus::After, "ft")];

impl TrainingStatus {
    pub const ALL: [TrainingStatus; 2] = [TrainingStatus::Before, TrainingStatus::After];

    pub fn index(self) -> usize {
        match self {
            TrainingStatus::Before => 0,
            TrainingStatus::After => 1,
        }
    }

    /// Dataset prefix (`bt` before training, `ft` after fine-tuning).
    pub fn prefix(self) -> &'static str {
        STATUS_PREFIXES[self.index()].1
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        STATUS_PREFIXES
            .iter()
            .find(|(_, candidate)| *candidate == prefix)
            .map(|(status, _)| *status)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrainingStatus::Before => "before",
            TrainingStatus::After => "after",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrainingStatus::Before => "Before",
            TrainingStatus::After => "After",
        }
    }
}

/// Sub-experiment a value was measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "rollout_1fps")]
    Rollout1Fps,
    #[serde(rename = "rollout_4fps")]
    Rollout4Fps,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Time, Category::Rollout1Fps, Category::Rollout4Fps];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Time => "time",
            Category::Rollout1Fps => "rollout_1fps",
            Category::Rollout4Fps => "rollout_4fps",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Time => "Time",
            Category::Rollout1Fps => "Rollout 1 fps",
            Category::Rollout4Fps => "Rollout 4 fps",
        }
    }
}

/// Image-quality metric. All three are lower-is-better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Dreamsim,
    Lpips,
    Fid,
}

impl MetricKind {
    /// Table order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Dreamsim, MetricKind::Lpips, MetricKind::Fid];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Dreamsim => "dreamsim",
            MetricKind::Lpips => "lpips",
            MetricKind::Fid => "fid",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.as_str() == raw)
    }

    /// Fixed display precision.
    pub fn decimals(self) -> usize {
        match self {
            MetricKind::Dreamsim | MetricKind::Lpips => 3,
            MetricKind::Fid => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Dreamsim => "DreamSim",
            MetricKind::Lpips => "LPIPS",
            MetricKind::Fid => "FID",
        }
    }

    pub fn axis_label(self) -> String {
        format!("{} (↓)", self.label())
    }
}

/// Rollout horizon. Labels and x-positions are index-aligned; the spacing is
/// deliberately non-uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimePoint {
    #[serde(rename = "1s")]
    Sec1,
    #[serde(rename = "2s")]
    Sec2,
    #[serde(rename = "4s")]
    Sec4,
    #[serde(rename = "6s")]
    Sec6,
    #[serde(rename = "8s")]
    Sec8,
}

impl TimePoint {
    pub const COUNT: usize = 5;

    pub const ALL: [TimePoint; TimePoint::COUNT] = [
        TimePoint::Sec1,
        TimePoint::Sec2,
        TimePoint::Sec4,
        TimePoint::Sec6,
        TimePoint::Sec8,
    ];

    pub const LABELS: [&'static str; TimePoint::COUNT] = ["1s", "2s", "4s", "6s", "8s"];

    pub const X_POSITIONS: [f64; TimePoint::COUNT] = [1.0, 2.0, 4.0, 6.0, 8.0];

    pub fn index(self) -> usize {
        match self {
            TimePoint::Sec1 => 0,
            TimePoint::Sec2 => 1,
            TimePoint::Sec4 => 2,
            TimePoint::Sec6 => 3,
            TimePoint::Sec8 => 4,
        }
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.index()]
    }

    pub fn x_position(self) -> f64 {
        Self::X_POSITIONS[self.index()]
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|time| time.label() == raw)
    }
}

/// One of the six raw datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetId {
    pub scene: SceneType,
    pub status: TrainingStatus,
}

impl DatasetId {
    pub const COUNT: usize = 6;

    /// Before datasets first, then after; scene order within each.
    pub const ALL: [DatasetId; DatasetId::COUNT] = [
        DatasetId::new(SceneType::Familiar, TrainingStatus::Before),
        DatasetId::new(SceneType::HalfFamiliar, TrainingStatus::Before),
        DatasetId::new(SceneType::Unfamiliar, TrainingStatus::Before),
        DatasetId::new(SceneType::Familiar, TrainingStatus::After),
        DatasetId::new(SceneType::HalfFamiliar, TrainingStatus::After),
        DatasetId::new(SceneType::Unfamiliar, TrainingStatus::After),
    ];

    pub const fn new(scene: SceneType, status: TrainingStatus) -> Self {
        Self { scene, status }
    }

    pub fn index(self) -> usize {
        self.status.index() * SceneType::ALL.len() + self.scene.index()
    }

    /// Dataset identifier, e.g. `sekaibt_same_merged`.
    pub fn name(self) -> String {
        format!(
            "{CATEGORY_PREFIX}{}_{}_merged",
            self.status.prefix(),
            self.scene.scene_key()
        )
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    /// Inverse of [`DatasetId::name`]; also accepts the `.json` filename.
    pub fn from_name(raw: &str) -> Option<Self> {
        let stem = raw.strip_suffix(".json").unwrap_or(raw);
        let rest = stem.strip_prefix(CATEGORY_PREFIX)?;
        let rest = rest.strip_suffix("_merged")?;
        let (prefix, scene_key) = rest.split_once('_')?;
        Some(Self::new(
            SceneType::from_scene_key(scene_key)?,
            TrainingStatus::from_prefix(prefix)?,
        ))
    }
}
