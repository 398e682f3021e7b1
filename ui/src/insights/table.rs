use dioxus::prelude::*;

use crate::core::format;
use crate::core::samples::CATEGORY_STATS;

/// Category overview table for the Data page.
#[component]
pub fn CategoryTable() -> Element {
    rsx! {
        table { class: "category-table",
            thead {
                tr {
                    th { "Category" }
                    th { class: "category-table__num", "Articles" }
                    th { class: "category-table__num", "Growth" }
                    th { "Trending Topics" }
                }
            }
            tbody {
                for stat in CATEGORY_STATS {
                    tr { key: "{stat.category}",
                        td { "{stat.category}" }
                        td { class: "category-table__num", "{format::format_count(stat.articles)}" }
                        td { class: "category-table__num category-table__growth",
                            "{format::format_growth(stat.growth_pct)}"
                        }
                        td { "{stat.trending}" }
                    }
                }
            }
        }
    }
}
