//! Shared UI crate for the Sekai results page: the metric data core and the
//! Dioxus views that chart and tabulate it.

pub mod core;
pub mod results;
pub mod views;
