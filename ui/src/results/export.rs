use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::format::to_fixed;
use crate::core::{Category, MetricStore};
use crate::results::table_rows;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

const CSV_HEADER: [&str; 8] = [
    "metric",
    "category",
    "time",
    "scene",
    "before",
    "after",
    "improvement",
    "ratio",
];

#[component]
pub fn ResultsExportPanel(store: MetricStore, category: Category) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let loaded = store.loaded_count();

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "results-card__meta results-card__meta--success",
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error",
            format!("⚠️ {err}"),
        )),
    };

    let csv_handler = move |_| {
        let csv = build_csv(&store, category);
        let filename = format!("sekai-results-{}-{}.csv", category.as_str(), timestamp_slug());
        match save_export(&filename, csv.as_bytes()) {
            Ok(path) => {
                info!(path = %path, "results exported");
                status.set(ExportStatus::Done(format!("CSV saved to {path}")));
            }
            Err(err) => {
                warn!(error = %err, "results export failed");
                status.set(ExportStatus::Error(err));
            }
        }
    };

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h2 { "Export" }
            }
            if loaded == 0 {
                p { class: "results-card__placeholder", "Export unlocks once a dataset has loaded." }
            } else {
                p { "Save the comparison table for {category.label()} as CSV." }
                div { class: "results-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: csv_handler,
                        "Export CSV"
                    }
                }
                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

/// Extra digits written beyond the on-screen precision.
const EXPORT_EXTRA_DECIMALS: usize = 3;

/// One line per (metric, time point, scene). Absent values are empty fields.
pub(crate) fn build_csv(store: &MetricStore, category: Category) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');

    for row in table_rows(store, category) {
        let decimals = row.metric.decimals() + EXPORT_EXTRA_DECIMALS;
        for cell in &row.cells {
            let fields = [
                row.metric.as_str().to_string(),
                category.as_str().to_string(),
                row.time.label().to_string(),
                cell.scene.as_str().to_string(),
                number_field(cell.values.before, decimals),
                number_field(cell.values.after, decimals),
                number_field(cell.values.improvement, decimals),
                number_field(cell.values.ratio, 1 + EXPORT_EXTRA_DECIMALS),
            ];
            let line = fields
                .iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(",");
            csv.push_str(&line);
            csv.push('\n');
        }
    }
    csv
}

fn number_field(value: Option<f64>, decimals: usize) -> String {
    value.map(|v| to_fixed(v, decimals)).unwrap_or_default()
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

#[cfg(not(target_arch = "wasm32"))]
fn save_export(filename: &str, bytes: &[u8]) -> Result<String, String> {
    let dir = export_dir()?;
    write_export(&dir, filename, bytes)
}

#[cfg(target_arch = "wasm32")]
fn save_export(_filename: &str, _bytes: &[u8]) -> Result<String, String> {
    Err("CSV export is only available in the desktop app".into())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(dir: &std::path::Path, filename: &str, bytes: &[u8]) -> Result<String, String> {
    use std::fs;

    fs::create_dir_all(dir).map_err(|err| err.to_string())?;
    let path = dir.join(filename);
    fs::write(&path, bytes).map_err(|err| err.to_string())?;
    Ok(path.to_string_lossy().to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "Sekai", "SekaiResults")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
