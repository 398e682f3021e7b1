//! Export affordances for a generated career report: clipboard copy and a
//! Markdown download/save. Failures surface as a status line, never a panic.

use dioxus::prelude::*;
use serde::Serialize;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::core::composer::AnalysisRequest;

/// What the JSON export carries: the inputs alongside the narrative, so a
/// report can be traced back to the selections that produced it.
#[derive(Debug, Serialize)]
struct ReportBundle<'a> {
    request: &'a AnalysisRequest,
    report: &'a str,
}

#[component]
pub fn ReportExportPanel(request: AnalysisRequest, report: String) -> Element {
    let mut status = use_signal(|| Option::<String>::None);

    let copy_report = {
        let report = report.clone();
        move |_| {
            let payload = report.clone();
            spawn(async move {
                match copy_to_clipboard(payload).await {
                    Ok(()) => status.set(Some("Report copied to clipboard.".to_string())),
                    Err(err) => status.set(Some(format!("Copy failed: {err}"))),
                }
            });
        }
    };

    let copy_json = {
        let request = request.clone();
        let report = report.clone();
        move |_| {
            let bundle = ReportBundle {
                request: &request,
                report: &report,
            };
            let payload = match serde_json::to_string_pretty(&bundle) {
                Ok(json) => json,
                Err(err) => {
                    status.set(Some(format!("Failed to serialise report: {err}")));
                    return;
                }
            };
            spawn(async move {
                match copy_to_clipboard(payload).await {
                    Ok(()) => status.set(Some("JSON copied to clipboard.".to_string())),
                    Err(err) => status.set(Some(format!("Copy failed: {err}"))),
                }
            });
        }
    };

    let save_report = {
        let report = report.clone();
        move |_| {
            let payload = report.clone();
            spawn(async move {
                match save_markdown(payload).await {
                    Ok(location) => status.set(Some(format!("Report saved: {location}"))),
                    Err(err) => status.set(Some(format!("Save failed: {err}"))),
                }
            });
        }
    };

    rsx! {
        div { class: "report-export",
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: copy_report,
                "Copy report"
            }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: copy_json,
                "Copy JSON"
            }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: save_report,
                "Download .md"
            }
            if let Some(message) = status() {
                span { class: "report-export__status", "{message}" }
            }
        }
    }
}

/// `stem-analysis-20250612-143000.md`
fn export_filename() -> String {
    let slug = OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]-[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".to_string());
    format!("stem-analysis-{slug}.md")
}

#[cfg(target_arch = "wasm32")]
async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&payload))
        .await
        .map(|_| ())
        .map_err(|_| "Clipboard write rejected".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| format!("Clipboard unavailable: {err}"))?;
    clipboard
        .set_text(payload)
        .map_err(|err| format!("Clipboard write failed: {err}"))
}

/// Web: trigger a browser download through a temporary object URL.
#[cfg(target_arch = "wasm32")]
async fn save_markdown(payload: String) -> Result<String, String> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or("No window available")?;
    let document = window.document().ok_or("No document available")?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&payload));
    let mut opts = web_sys::BlobPropertyBag::new();
    opts.type_("text/markdown");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Unable to build blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create object URL".to_string())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Unable to create anchor".to_string())?
        .dyn_into()
        .map_err(|_| "Anchor element cast failed".to_string())?;

    let filename = export_filename();
    anchor.set_href(&url);
    anchor.set_download(&filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(filename)
}

/// Desktop: write into the platform data directory.
#[cfg(not(target_arch = "wasm32"))]
async fn save_markdown(payload: String) -> Result<String, String> {
    let dirs = directories::ProjectDirs::from("com", "Stemscope", "Stemscope")
        .ok_or("Unable to determine export directory")?;
    let export_dir = dirs.data_dir().join("exports");
    std::fs::create_dir_all(&export_dir)
        .map_err(|err| format!("Unable to create export directory: {err}"))?;

    let path = export_dir.join(export_filename());
    std::fs::write(&path, payload).map_err(|err| format!("Write failed: {err}"))?;
    Ok(path.display().to_string())
}
