use dioxus::prelude::*;

use crate::core::{
    compute, Category, ComparisonRow, FormattedRow, MetricKind, MetricStore, SceneType, TimePoint,
};

/// One table row: a metric at one time point, with a cell group per scene.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub metric: MetricKind,
    pub time: TimePoint,
    pub cells: Vec<TableCellGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCellGroup {
    pub scene: SceneType,
    pub values: ComparisonRow,
    pub text: FormattedRow,
}

/// Rows in table order: metrics (`MetricKind::ALL`), then time points.
pub fn table_rows(store: &MetricStore, category: Category) -> Vec<TableRow> {
    MetricKind::ALL
        .into_iter()
        .flat_map(|metric| {
            TimePoint::ALL.into_iter().map(move |time| TableRow {
                metric,
                time,
                cells: SceneType::ALL
                    .into_iter()
                    .map(|scene| {
                        let values = compute(store, metric, category, time, scene);
                        TableCellGroup {
                            scene,
                            values,
                            text: values.format(metric),
                        }
                    })
                    .collect(),
            })
        })
        .collect()
}

#[component]
pub fn ResultsTable(store: MetricStore, category: Category) -> Element {
    let rows = table_rows(&store, category);
    let time_span = TimePoint::COUNT.to_string();
    let column_count = 2 + SceneType::ALL.len() * 4;

    rsx! {
        section { class: "results-card results-table",
            div { class: "results-card__header",
                h2 { "Before vs. after fine-tuning" }
                span { class: "results-card__meta", "{category.label()}" }
            }

            div { class: "results-table__scroll",
                table { class: "results-table__grid",
                    thead {
                        tr {
                            th { class: "results-table__head results-table__head--metric", rowspan: "2", "Metric" }
                            th { class: "results-table__head results-table__head--time", rowspan: "2", "Time" }
                            for scene in SceneType::ALL {
                                th { class: "results-table__head results-table__head--scene", colspan: "4", "{scene.label()}" }
                            }
                        }
                        tr {
                            for _scene in SceneType::ALL {
                                th { class: "results-table__subhead", "Before" }
                                th { class: "results-table__subhead", "After" }
                                th { class: "results-table__subhead results-table__subhead--improve", title: "Improvement (Before - After)", "Improve" }
                                th { class: "results-table__subhead results-table__subhead--ratio", title: "Ratio (After / Before) as percentage", "Ratio" }
                            }
                        }
                    }
                    tbody {
                        for row in rows {
                            if row.time == TimePoint::ALL[0] && row.metric != MetricKind::ALL[0] {
                                tr { class: "results-table__separator",
                                    for _ in 0..column_count {
                                        td {}
                                    }
                                }
                            }
                            {render_row(row, &time_span)}
                        }
                    }
                }
            }
        }
    }
}

fn render_row(row: TableRow, time_span: &str) -> Element {
    let first_of_metric = row.time == TimePoint::ALL[0];
    let metric_label = row.metric.label();
    let time_label = row.time.label();

    rsx! {
        tr { class: "results-table__row",
            if first_of_metric {
                td { class: "results-table__metric", rowspan: "{time_span}", "{metric_label}" }
            }
            td { class: "results-table__time", "{time_label}" }
            for cell in row.cells {
                td { class: "results-table__value", "{cell.text.before}" }
                td { class: "results-table__value", "{cell.text.after}" }
                td {
                    class: "results-table__value results-table__value--improve {cell.values.improvement_tone().css_class()}",
                    "{cell.text.improvement}"
                }
                td {
                    class: "results-table__value results-table__value--ratio {cell.values.ratio_tone().css_class()}",
                    "{cell.text.ratio}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrainingStatus;

    #[test]
    fn fifteen_rows_of_three_groups() {
        let rows = table_rows(&MetricStore::empty(), Category::Time);
        assert_eq!(rows.len(), MetricKind::ALL.len() * TimePoint::COUNT);
        assert!(rows.iter().all(|row| row.cells.len() == 3));
        assert_eq!(rows[0].metric, MetricKind::Dreamsim);
        assert_eq!(rows[5].metric, MetricKind::Lpips);
        assert_eq!(rows[14].metric, MetricKind::Fid);
        assert_eq!(rows[14].time, TimePoint::Sec8);
        assert!(rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .all(|cell| cell.text.before == "N/A" && cell.text.ratio == "N/A"));
    }

    #[test]
    fn category_selects_keys() {
        let store = MetricStore::empty()
            .with_dataset(
                SceneType::Familiar,
                TrainingStatus::Before,
                [
                    ("sekai_time_fid_1s", 45.2),
                    ("sekai_rollout_4fps_fid_1s", 60.0),
                ]
                .into_iter()
                .collect(),
            )
            .with_dataset(
                SceneType::Familiar,
                TrainingStatus::After,
                [
                    ("sekai_time_fid_1s", 32.1),
                    ("sekai_rollout_4fps_fid_1s", 30.0),
                ]
                .into_iter()
                .collect(),
            );

        let fid_row = |category| {
            table_rows(&store, category)
                .into_iter()
                .find(|row| row.metric == MetricKind::Fid && row.time == TimePoint::Sec1)
                .unwrap()
        };

        let time = fid_row(Category::Time);
        assert_eq!(time.cells[0].text.ratio, "71.0%");
        let rollout = fid_row(Category::Rollout4Fps);
        assert_eq!(rollout.cells[0].text.ratio, "50.0%");
        assert_eq!(rollout.cells[0].text.improvement, "30.0");
        assert_eq!(rollout.cells[1].text.before, "N/A");
    }
}
