use dioxus::prelude::*;

use crate::core::{
    extract, Category, MetricKind, MetricStore, SceneSeries, SceneType, TimePoint, TrainingStatus,
};
use crate::results::{legend_label, line_color, Visibility, CHART_METRICS};

const SVG_WIDTH: f64 = 700.0;
const SVG_HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_RIGHT: f64 = 100.0;
const MARGIN_BOTTOM: f64 = 80.0;
const MARGIN_LEFT: f64 = 80.0;
const INNER_WIDTH: f64 = SVG_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const INNER_HEIGHT: f64 = SVG_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
/// The x axis only spans part of the inner width; the legend sits to its right.
const PLOT_WIDTH: f64 = INNER_WIDTH * 0.56;
const X_DOMAIN: (f64, f64) = (0.0, 8.0);
const Y_TICKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub scene: SceneType,
    pub status: TrainingStatus,
    pub time: TimePoint,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Triangle,
    Cross,
}

impl MarkerShape {
    pub fn for_scene(scene: SceneType) -> Self {
        match scene {
            SceneType::Familiar => MarkerShape::Circle,
            SceneType::HalfFamiliar => MarkerShape::Triangle,
            SceneType::Unfamiliar => MarkerShape::Cross,
        }
    }
}

/// One drawn line in pixel space (origin at the top-left of the plot area).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub scene: SceneType,
    pub status: TrainingStatus,
    pub color: &'static str,
    pub points: Vec<(f64, f64)>,
}

impl ChartLine {
    /// SVG path through the points. Three or more points use a monotone
    /// cubic in x (Fritsch-Carlson tangents), so the curve never overshoots
    /// between two samples; two points are a straight segment.
    pub fn path(&self) -> String {
        let points = &self.points;
        let Some(&(x0, y0)) = points.first() else {
            return String::new();
        };
        let mut d = format!("M{x0:.1},{y0:.1}");

        if points.len() == 2 {
            let (x1, y1) = points[1];
            d.push_str(&format!(" L{x1:.1},{y1:.1}"));
            return d;
        }
        if points.len() < 3 {
            return d;
        }

        let tangents = monotone_tangents(points);
        for (i, pair) in points.windows(2).enumerate() {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            let dx = (x1 - x0) / 3.0;
            d.push_str(&format!(
                " C{:.1},{:.1} {:.1},{:.1} {x1:.1},{y1:.1}",
                x0 + dx,
                y0 + dx * tangents[i],
                x1 - dx,
                y1 - dx * tangents[i + 1],
            ));
        }
        d
    }
}

fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);
    tangents
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let sign = |v: f64| if v < 0.0 { -1.0 } else { 1.0 };
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_nan() {
        0.0
    } else {
        tangent
    }
}

/// One-sided tangent at either end of the line, from the neighbouring one.
fn end_tangent(a: (f64, f64), b: (f64, f64), neighbour: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (b.1 - a.1) / h - neighbour) / 2.0
    }
}

/// Plot data for one metric chart after visibility filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub metric: MetricKind,
    pub points: Vec<ChartPoint>,
    /// Data extent padded by 10% of its span, lower bound clamped at zero.
    pub y_domain: (f64, f64),
}

impl ChartModel {
    /// `None` when nothing is left to draw.
    pub fn build(series: &SceneSeries, visibility: &Visibility) -> Option<Self> {
        let mut points = Vec::new();

        for (scene, status_series) in series.iter() {
            for status in TrainingStatus::ALL {
                if !visibility.is_visible(scene, status) {
                    continue;
                }
                let values = status_series.get(status);
                for (time, value) in TimePoint::ALL.into_iter().zip(values.iter()) {
                    if let Some(y) = value {
                        points.push(ChartPoint {
                            scene,
                            status,
                            time,
                            x: time.x_position(),
                            y: *y,
                        });
                    }
                }
            }
        }

        if points.is_empty() {
            return None;
        }

        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), point| {
                (lo.min(point.y), hi.max(point.y))
            });
        let padding = (max - min) * 0.1;

        Some(Self {
            metric: series.metric,
            points,
            y_domain: ((min - padding).max(0.0), max + padding),
        })
    }

    pub fn x_px(&self, x: f64) -> f64 {
        (x - X_DOMAIN.0) / (X_DOMAIN.1 - X_DOMAIN.0) * PLOT_WIDTH
    }

    pub fn y_px(&self, y: f64) -> f64 {
        let (lo, hi) = self.y_domain;
        let span = hi - lo;
        if span <= 0.0 {
            return INNER_HEIGHT / 2.0;
        }
        INNER_HEIGHT - (y - lo) / span * INNER_HEIGHT
    }

    pub fn lines(&self) -> Vec<ChartLine> {
        let mut lines = Vec::new();
        for scene in SceneType::ALL {
            for status in TrainingStatus::ALL {
                let mut points: Vec<&ChartPoint> = self
                    .points
                    .iter()
                    .filter(|point| point.scene == scene && point.status == status)
                    .collect();
                if points.is_empty() {
                    continue;
                }
                points.sort_by(|a, b| a.x.total_cmp(&b.x));
                lines.push(ChartLine {
                    scene,
                    status,
                    color: line_color(scene, status),
                    points: points
                        .into_iter()
                        .map(|point| (self.x_px(point.x), self.y_px(point.y)))
                        .collect(),
                });
            }
        }
        lines
    }

    /// Evenly spaced tick values across the y domain.
    pub fn y_ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.y_domain;
        if count < 2 || hi <= lo {
            return vec![lo];
        }
        let step = (hi - lo) / (count - 1) as f64;
        (0..count).map(|i| lo + step * i as f64).collect()
    }
}

#[component]
pub fn ResultsCharts(
    store: MetricStore,
    category: Category,
    visibility: Signal<Visibility>,
) -> Element {
    let current = visibility();

    rsx! {
        section { class: "results-card results-charts",
            div { class: "results-card__header",
                h2 { "Quantitative comparison" }
                span { class: "results-card__meta", "{category.label()}" }
            }

            div { class: "results-charts__grid",
                for metric in CHART_METRICS {
                    ChartCard {
                        key: "{metric.as_str()}",
                        metric: metric,
                        series: extract(&store, metric, category),
                        visibility: current,
                    }
                }
            }
        }
    }
}

#[component]
fn ChartCard(metric: MetricKind, series: SceneSeries, visibility: Visibility) -> Element {
    let model = ChartModel::build(&series, &visibility);

    rsx! {
        div { class: "results-chart",
            h3 { class: "results-chart__title", "{metric.label()}" }

            match model {
                Some(model) => render_chart(&model),
                None => rsx! {
                    p { class: "results-card__placeholder", "No data for the selected lines." }
                },
            }
        }
    }
}

struct Tick {
    pos: String,
    label: String,
}

struct Marker {
    shape: MarkerShape,
    color: &'static str,
    x: String,
    y: String,
    triangle: String,
    translate: String,
}

struct LegendRow {
    translate: String,
    color: &'static str,
    label: String,
}

fn render_chart(model: &ChartModel) -> Element {
    let decimals = model.metric.decimals();
    let lines: Vec<(String, &'static str)> = model
        .lines()
        .into_iter()
        .map(|line| (line.path(), line.color))
        .collect();

    let y_ticks: Vec<Tick> = model
        .y_ticks(Y_TICKS)
        .into_iter()
        .map(|value| Tick {
            pos: format!("{:.1}", model.y_px(value)),
            label: format!("{value:.decimals$}"),
        })
        .collect();

    let x_ticks: Vec<Tick> = TimePoint::ALL
        .into_iter()
        .map(|time| Tick {
            pos: format!("{:.1}", model.x_px(time.x_position())),
            label: time.label().to_string(),
        })
        .collect();

    let markers: Vec<Marker> = model
        .points
        .iter()
        .map(|point| {
            let x = model.x_px(point.x);
            let y = model.y_px(point.y);
            Marker {
                shape: MarkerShape::for_scene(point.scene),
                color: line_color(point.scene, point.status),
                x: format!("{x:.1}"),
                y: format!("{y:.1}"),
                triangle: format!(
                    "M{x:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} Z",
                    y - 5.0,
                    x - 5.0,
                    y + 5.0,
                    x + 5.0,
                    y + 5.0
                ),
                translate: format!("translate({x:.1},{y:.1})"),
            }
        })
        .collect();

    let legend: Vec<LegendRow> = SceneType::ALL
        .into_iter()
        .flat_map(|scene| TrainingStatus::ALL.map(move |status| (scene, status)))
        .enumerate()
        .map(|(row, (scene, status))| LegendRow {
            translate: format!("translate(0,{})", row * 18),
            color: line_color(scene, status),
            label: legend_label(scene, status),
        })
        .collect();

    let view_box = format!("0 0 {SVG_WIDTH} {SVG_HEIGHT}");
    let plot_transform = format!("translate({MARGIN_LEFT},{MARGIN_TOP})");
    let legend_transform = format!("translate({},20)", INNER_WIDTH - 90.0);
    let plot_width = format!("{PLOT_WIDTH:.1}");
    let plot_height = format!("{INNER_HEIGHT:.1}");
    let tick_label_y = format!("{:.1}", INNER_HEIGHT + 18.0);
    let x_label_x = format!("{:.1}", INNER_WIDTH / 2.0);
    let x_label_y = format!("{:.1}", INNER_HEIGHT + 50.0);
    let y_label_x = format!("{:.1}", -INNER_HEIGHT / 2.0);
    let axis_label = model.metric.axis_label();

    rsx! {
        svg {
            class: "results-chart__svg",
            view_box: "{view_box}",
            g { transform: "{plot_transform}",
                line { class: "results-chart__axis", x1: "0", x2: "{plot_width}", y1: "{plot_height}", y2: "{plot_height}" }
                line { class: "results-chart__axis", x1: "0", x2: "0", y1: "0", y2: "{plot_height}" }

                for tick in x_ticks {
                    text { class: "results-chart__tick", x: "{tick.pos}", y: "{tick_label_y}", text_anchor: "middle", "{tick.label}" }
                }
                for tick in y_ticks {
                    text { class: "results-chart__tick", x: "-8", y: "{tick.pos}", text_anchor: "end", "{tick.label}" }
                }

                text { class: "results-chart__axis-label", x: "{x_label_x}", y: "{x_label_y}", text_anchor: "middle", "Time (seconds)" }
                text { class: "results-chart__axis-label", transform: "rotate(-90)", x: "{y_label_x}", y: "-50", text_anchor: "middle", "{axis_label}" }

                for (outline, color) in lines {
                    path { class: "results-chart__line", d: "{outline}", fill: "none", stroke: "{color}", stroke_width: "2" }
                }

                for marker in markers {
                    match marker.shape {
                        MarkerShape::Circle => rsx! {
                            circle { cx: "{marker.x}", cy: "{marker.y}", r: "4", fill: "{marker.color}" }
                        },
                        MarkerShape::Triangle => rsx! {
                            path { d: "{marker.triangle}", fill: "{marker.color}" }
                        },
                        MarkerShape::Cross => rsx! {
                            g { transform: "{marker.translate}",
                                line { x1: "-4", x2: "4", y1: "0", y2: "0", stroke: "{marker.color}", stroke_width: "2" }
                                line { x1: "0", x2: "0", y1: "-4", y2: "4", stroke: "{marker.color}", stroke_width: "2" }
                            }
                        },
                    }
                }

                g { class: "results-chart__legend", transform: "{legend_transform}",
                    for row in legend {
                        g { transform: "{row.translate}",
                            line { x1: "0", x2: "15", y1: "6", y2: "6", stroke: "{row.color}", stroke_width: "2" }
                            text { x: "20", y: "9", font_size: "11", "{row.label}" }
                        }
                    }
                }
            }
        }
    }
}
