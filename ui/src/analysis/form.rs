use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::composer::{
    compose, AnalysisRequest, CAREER_LEVELS, CHALLENGE_CHOICES, GOAL_CHOICES, INTEREST_CHOICES,
    TOPIC_CHOICES,
};
use crate::insights::ReportExportPanel;

/// Quick stats rendered under every generated report. Fixed demo figures.
const QUICK_STATS: &[(&str, &str, &str)] = &[
    ("💼 Job Growth", "15-25%", "projected 2024-2030"),
    ("💰 Avg Salary", "$75K-$150K", "based on experience"),
    ("🌟 Satisfaction", "4.2/5", "industry average"),
];

#[derive(Debug, Clone)]
enum AnalysisEvent {
    Generate(AnalysisRequest),
}

/// A composed report together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
struct GeneratedReport {
    request: AnalysisRequest,
    text: String,
}

#[component]
pub fn AnalysisForm() -> Element {
    let mut topic = use_signal(|| TOPIC_CHOICES[0].to_string());
    // Career level starts unselected so the mandatory-field guard is reachable.
    let mut career_level = use_signal(String::new);
    let interests = use_signal(Vec::<String>::new);
    let challenges = use_signal(Vec::<String>::new);
    let goals = use_signal(Vec::<String>::new);
    let mut notes = use_signal(String::new);

    let mut report = use_signal(|| Option::<GeneratedReport>::None);
    let mut status_line = use_signal(|| "Tell us about yourself, then generate.".to_string());

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<AnalysisEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                AnalysisEvent::Generate(request) => {
                    // Mandatory selections are a form concern; the composer
                    // itself accepts anything.
                    if request.topic.trim().is_empty() || request.career_level.trim().is_empty() {
                        status_line.set(
                            "⚠️ Please fill in at least the Research Area and Career Level fields."
                                .to_string(),
                        );
                        continue;
                    }

                    status_line.set("🤖 Generating your personalized analysis…".to_string());
                    let text = compose(&request);
                    report.set(Some(GeneratedReport { request, text }));
                    status_line
                        .set("✅ Analysis complete! Copy or download it for future reference."
                            .to_string());
                }
            }
        }
    });

    let generate = move |_| {
        coroutine.send(AnalysisEvent::Generate(AnalysisRequest {
            topic: topic(),
            career_level: career_level(),
            interests: interests(),
            challenges: challenges(),
            goals: goals(),
        }));
    };

    rsx! {
        article { class: "analysis-form",
            h2 { "📋 Tell Us About Yourself" }

            div { class: "analysis-form__columns",
                div { class: "analysis-form__column",
                    label { r#for: "analysis-topic", "🔬 Primary Research/Interest Area:" }
                    select {
                        id: "analysis-topic",
                        value: "{topic}",
                        oninput: move |evt| topic.set(evt.value()),
                        for choice in TOPIC_CHOICES {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }

                    label { r#for: "analysis-level", "👤 Career Level:" }
                    select {
                        id: "analysis-level",
                        value: "{career_level}",
                        oninput: move |evt| career_level.set(evt.value()),
                        option { value: "", disabled: true, "Select your career level…" }
                        for choice in CAREER_LEVELS {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }

                    CheckboxGroup {
                        legend: "🎯 Specific Interests (select multiple):",
                        options: INTEREST_CHOICES.to_vec(),
                        selected: interests,
                    }
                }

                div { class: "analysis-form__column",
                    CheckboxGroup {
                        legend: "⚠️ Current Challenges:",
                        options: CHALLENGE_CHOICES.to_vec(),
                        selected: challenges,
                    }

                    CheckboxGroup {
                        legend: "🎯 Career Goals (select multiple):",
                        options: GOAL_CHOICES.to_vec(),
                        selected: goals,
                    }

                    label { r#for: "analysis-notes", "📝 Additional Information (optional):" }
                    // Collected for context only; the composer does not read it.
                    textarea {
                        id: "analysis-notes",
                        placeholder: "Tell us anything else that might help us provide better recommendations...",
                        value: "{notes}",
                        oninput: move |evt| notes.set(evt.value()),
                    }
                }
            }

            div { class: "analysis-form__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: generate,
                    "🚀 Generate Analysis"
                }
                span { class: "analysis-form__status", "{status_line}" }
            }

            if let Some(generated) = report() {
                section { class: "result-box",
                    h3 { "✨ Your Personalized STEM Career Analysis" }
                    div { class: "result-box__report", "{generated.text}" }

                    div { class: "kpi-row",
                        for (label, value, delta) in QUICK_STATS {
                            div { class: "kpi-tile", key: "{label}",
                                span { class: "kpi-tile__label", "{label}" }
                                strong { class: "kpi-tile__value", "{value}" }
                                span { class: "kpi-tile__delta", "{delta}" }
                            }
                        }
                    }

                    ReportExportPanel {
                        request: generated.request.clone(),
                        report: generated.text.clone(),
                    }
                }
            }
        }
    }
}

/// A titled checkbox multi-select bound to a list signal. Selection order is
/// click order and flows through to the report's interest phrase.
#[component]
fn CheckboxGroup(
    legend: String,
    options: Vec<&'static str>,
    selected: Signal<Vec<String>>,
) -> Element {
    let mut selected = selected;

    rsx! {
        fieldset { class: "checkbox-group",
            legend { "{legend}" }
            for option in options {
                label { class: "checkbox-group__item", key: "{option}",
                    input {
                        r#type: "checkbox",
                        checked: selected.read().iter().any(|item| item == option),
                        oninput: move |_| selected.with_mut(|list| toggle(list, option)),
                    }
                    span { "{option}" }
                }
            }
        }
    }
}

/// Add `value` if absent (preserving click order), otherwise remove it.
fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|item| item == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_preserves_click_order() {
        let mut list = Vec::new();
        toggle(&mut list, "Consulting");
        toggle(&mut list, "Machine Learning");
        assert_eq!(list, vec!["Consulting", "Machine Learning"]);

        toggle(&mut list, "Consulting");
        assert_eq!(list, vec!["Machine Learning"]);
    }
}
