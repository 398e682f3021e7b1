use dioxus::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn About() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-about",
            h1 { {crate::t!("page-about-title")} }

            p {
                "Stemscope combines sample data visualization with a rule-based career "
                "analysis to bring insights from the world of Science, Technology, "
                "Engineering, and Mathematics to one place."
            }

            h2 { "🎯 Our Mission" }
            p {
                "To democratize access to STEM knowledge and make complex scientific "
                "information accessible to everyone - from students and researchers to "
                "industry professionals and curious minds."
            }

            h2 { "🛠️ Technology Behind the Scenes" }
            ul {
                li { "Shared UI: Dioxus components compiled for web and desktop" }
                li { "Charts: inline SVG rendered from sample series" }
                li { "Career analysis: a deterministic template composer over a fixed profile table" }
                li { "Localization: Fluent message bundles embedded at compile time" }
            }

            h2 { "📈 Current Features" }
            ul {
                li { "Category analysis with sample article statistics" }
                li { "Trend monitoring over generated monthly series" }
                li { "Personalized career analysis reports with export" }
                li { "Responsive layout across web and desktop builds" }
            }

            h2 { "🔮 Coming Soon" }
            ul {
                li { "Real-time news integration from live feeds" }
                li { "Sentiment analysis and topic modeling" }
                li { "Predictive analytics for emerging STEM trends" }
                li { "Saved preferences and progress tracking" }
            }

            p { class: "page-about__footer",
                "✨ Version {VERSION} — this is an open-source project; "
                "feel free to contribute, report issues, or suggest features."
            }
        }
    }
}
