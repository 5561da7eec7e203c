use dioxus::prelude::*;

/// Catch-all route: hands the unmatched path to the shared page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::info!("route: not found path={path}");
    rsx! { ui::NotFoundPage { path } }
}
