use dioxus::prelude::*;

use crate::core::{Category, SceneType, TrainingStatus};
use crate::results::Visibility;

/// Scene and training-status buttons. Each flips its lines on every chart.
#[component]
pub fn VisibilityToggles(visibility: Signal<Visibility>) -> Element {
    let current = visibility();

    rsx! {
        div { class: "results-toggles",
            div { class: "results-toggles__group",
                for scene in SceneType::ALL {
                    {scene_button(scene, current.scene_visible(scene), visibility)}
                }
            }
            div { class: "results-toggles__group",
                for status in TrainingStatus::ALL {
                    {status_button(status, current.status_visible(status), visibility)}
                }
            }
        }
    }
}

fn scene_button(scene: SceneType, active: bool, mut visibility: Signal<Visibility>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button results-toggles__button results-toggles__button--{scene.as_str()}",
            "data-active": "{active}",
            onclick: move |_| visibility.with_mut(|v| v.toggle_scene(scene)),
            "{scene.label()}"
        }
    }
}

fn status_button(status: TrainingStatus, active: bool, mut visibility: Signal<Visibility>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button results-toggles__button results-toggles__button--{status.as_str()}",
            "data-active": "{active}",
            onclick: move |_| visibility.with_mut(|v| v.toggle_status(status)),
            "{status.label()}"
        }
    }
}

/// Switches the sub-experiment shown by the charts and the table.
#[component]
pub fn CategorySelector(category: Signal<Category>) -> Element {
    let selected = category();

    rsx! {
        div { class: "results-categories",
            for option in Category::ALL {
                {category_button(option, option == selected, category)}
            }
        }
    }
}

fn category_button(option: Category, active: bool, mut category: Signal<Category>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if active { "button button--primary" } else { "button button--ghost" },
            onclick: move |_| category.set(option),
            "{option.label()}"
        }
    }
}
