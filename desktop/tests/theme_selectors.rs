#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (metric cards,
  charts, the analysis form, and the report export panel) remain present in
  the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

A lightweight substring presence check is sufficient as an early warning and
keeps this test dependency-free.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Home metric & feature cards
    ".metric-cards",
    ".metric-card",
    ".metric-card__value",
    ".metric-card__delta",
    ".feature-card",
    // KPI tiles
    ".kpi-row",
    ".kpi-tile",
    ".kpi-tile__value",
    // Category table
    ".category-table",
    ".category-table__num",
    ".category-table__growth",
    // Charts
    ".chart {",
    ".chart__title",
    ".chart__axis",
    ".chart__tick",
    ".chart__legend",
    ".chart__legend-swatch",
    // Analysis form
    ".analysis-box",
    ".analysis-form__columns",
    ".analysis-form__actions",
    ".analysis-form__status",
    ".checkbox-group",
    ".checkbox-group__item",
    // Result & export
    ".result-box",
    ".result-box__report",
    ".report-export",
    ".report-export__status",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn result_box_pairs_with_report_body() {
    // The generated report needs both the container and the pre-wrap body.
    let has_box = THEME_CSS.contains(".result-box {");
    let has_report = THEME_CSS.contains(".result-box__report");
    assert!(
        has_box && has_report,
        "Result box sub‑selectors missing (box: {has_box}, report: {has_report})"
    );
}
