use dioxus::prelude::*;

use crate::core::format;
use crate::core::samples::{ANALYTICS_KPIS, HEADLINE_METRICS};

/// The four headline metric cards on the Home page.
#[component]
pub fn HeadlineCards() -> Element {
    rsx! {
        div { class: "metric-cards",
            for metric in HEADLINE_METRICS {
                div { class: "metric-card", key: "{metric.label}",
                    span { class: "metric-card__icon", "{metric.icon}" }
                    strong { class: "metric-card__value", "{format::format_count(metric.value)}" }
                    span { class: "metric-card__label", "{metric.label}" }
                    span { class: "metric-card__delta", "↗️ {metric.delta}" }
                }
            }
        }
    }
}

/// KPI tiles for the Analytics page.
#[component]
pub fn KpiRow() -> Element {
    rsx! {
        div { class: "kpi-row",
            for kpi in ANALYTICS_KPIS {
                div { class: "kpi-tile", key: "{kpi.label}",
                    span { class: "kpi-tile__label", "{kpi.label}" }
                    strong { class: "kpi-tile__value", "{kpi.value}" }
                    span { class: "kpi-tile__delta", "{kpi.delta}" }
                }
            }
        }
    }
}
