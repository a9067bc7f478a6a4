use dioxus::prelude::*;
use tracing::warn;

use crate::core::{Category, LoaderConfig};
use crate::results::{
    load_summary, CategorySelector, ResultsCharts, ResultsExportPanel, ResultsState, ResultsTable,
    Visibility, VisibilityToggles,
};

/// The results page. Datasets load once in the background; until then every
/// chart is empty and every table cell reads `N/A`.
#[component]
pub fn Results(config: LoaderConfig) -> Element {
    let loaded = use_resource(move || {
        let config = config.clone();
        async move { load_state(config).await }
    });
    let visibility = use_signal(Visibility::default);
    let category = use_signal(|| Category::Time);

    let state = (*loaded.read())
        .clone()
        .unwrap_or_else(ResultsState::pending);
    let summary = load_summary(&state);
    let selected = category();

    rsx! {
        section { class: "page page-results",
            div { class: "results__header",
                h1 { "Sekai fine-tuning results" }
                p {
                    "Video quality metrics for the base and fine-tuned models across familiar, half-familiar and unfamiliar scenes."
                }
                span { class: "results-card__meta", "{summary}" }
            }

            if !state.errors.is_empty() {
                ul { class: "results__errors",
                    for error in state.errors.iter() {
                        li { class: "results-card__meta results-card__meta--error", "{error}" }
                    }
                }
            }

            div { class: "results__controls",
                CategorySelector { category }
                VisibilityToggles { visibility }
            }

            ResultsCharts { store: state.store.clone(), category: selected, visibility }
            ResultsTable { store: state.store.clone(), category: selected }
            ResultsExportPanel { store: state.store, category: selected }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_state(config: LoaderConfig) -> ResultsState {
    match tokio::task::spawn_blocking(move || ResultsState::load(&config)).await {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, "dataset loader task failed");
            ResultsState::failed(format!("Dataset loader stopped: {err}"))
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_state(config: LoaderConfig) -> ResultsState {
    let state = ResultsState::load(&config);
    if !state.errors.is_empty() {
        warn!(errors = state.errors.len(), "some datasets failed to load");
    }
    state
}
