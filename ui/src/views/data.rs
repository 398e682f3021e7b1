use dioxus::prelude::*;

use crate::core::samples::CATEGORY_STATS;
use crate::insights::{BarChart, CategoryTable, ChartSeries, LineChart};

#[component]
pub fn Data() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let articles: Vec<(String, f64)> = CATEGORY_STATS
        .iter()
        .map(|stat| (stat.category.to_string(), stat.articles as f64))
        .collect();

    let growth = ChartSeries {
        name: "Growth (%)".to_string(),
        values: CATEGORY_STATS
            .iter()
            .map(|stat| stat.growth_pct as f64)
            .collect(),
    };
    let growth_labels: Vec<String> = CATEGORY_STATS
        .iter()
        .map(|stat| stat.category.to_string())
        .collect();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-data",
            h1 { {crate::t!("page-data-title")} }

            h2 { "📈 Category Overview" }
            CategoryTable {}

            h2 { "📊 Article Distribution" }
            BarChart { title: "Articles per category", series: articles }

            h2 { "📈 Growth Rates" }
            LineChart {
                title: "Growth rate per category",
                labels: growth_labels,
                series: vec![growth],
            }
        }
    }
}
