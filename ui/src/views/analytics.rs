use dioxus::prelude::*;

use crate::core::samples::{monthly_trend_series, TREND_MONTHS};
use crate::insights::{ChartSeries, KpiRow, LineChart};

#[component]
pub fn Analytics() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Sample the demo trend once per mount, not per re-render.
    let trends = use_signal(|| monthly_trend_series(&mut rand::thread_rng()));

    let series: Vec<ChartSeries> = trends()
        .iter()
        .map(|trend| ChartSeries {
            name: trend.name.to_string(),
            values: trend.counts.iter().map(|&c| c as f64).collect(),
        })
        .collect();
    let months: Vec<String> = TREND_MONTHS.iter().map(|m| m.to_string()).collect();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-analytics",
            h1 { {crate::t!("page-analytics-title")} }

            h2 { "🎯 Key Performance Indicators" }
            KpiRow {}

            h2 { "📊 Sample Trend Data" }
            LineChart {
                title: "Monthly article counts (sample)",
                labels: months,
                series: series,
            }

            p { class: "page-analytics__insight",
                "💡 Insight: AI & Machine Learning shows consistent upward trend with seasonal peaks in Q2 and Q4."
            }
        }
    }
}
