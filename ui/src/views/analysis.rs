use dioxus::prelude::*;

use crate::analysis::AnalysisForm;

#[component]
pub fn Analysis() -> Element {
    // Subscribe to global language code (if provided) so this view re-renders
    // immediately when the locale changes elsewhere.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        // Hidden marker node ensures reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-analysis",
            h1 { {crate::t!("page-analysis-title")} }
            div { class: "analysis-box",
                h3 { "🎯 Personalized Career Insights" }
                p {
                    "Get customized analysis and recommendations based on your STEM interests, career level, and goals. "
                    "Our AI-powered system will provide detailed insights and actionable advice for your career journey."
                }
            }
            AnalysisForm {}
        }
    }
}
