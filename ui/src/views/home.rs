use dioxus::prelude::*;

use crate::insights::HeadlineCards;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

/// Feature cards shown under the headline metrics. Static demo copy.
const FEATURES: &[(&str, &str)] = &[
    (
        "🔍 Search & Analyze",
        "Real-time STEM news analysis with AI-powered insights",
    ),
    (
        "📊 Visualize Trends",
        "Interactive charts and data visualization tools",
    ),
    (
        "📈 Track Patterns",
        "Monitor scientific publication trends and patterns",
    ),
    (
        "🤖 AI Insights",
        "Get intelligent recommendations on emerging technologies",
    ),
    ("📱 Mobile Ready", "Access your insights anywhere, anytime"),
    ("🎯 Personalized", "Customized content based on your interests"),
];

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    // Debug render log
    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { class: "page-home__tagline", {crate::t!("home-tagline")} }

            HeadlineCards {}

            h2 { "🎯 What You Can Do:" }
            div { class: "feature-cards",
                for (title, description) in FEATURES {
                    div { class: "feature-card", key: "{title}",
                        h4 { "{title}" }
                        p { "{description}" }
                    }
                }
            }

            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
