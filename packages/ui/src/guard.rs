use dioxus::prelude::*;
use shop::{Navigator, Outcome};

/// Runs the navigation guard for `path` before rendering `children`.
///
/// The `Navigator` (route table + guard) must be provided as context by the
/// platform crate.
#[component]
pub fn RouteGate(path: String, children: Element) -> Element {
    let navigator = use_context::<Navigator>();
    let session = crate::use_app().session;

    let outcome = navigator.navigate(&path, &session.read());
    match outcome {
        Outcome::Render(_) => rsx! { {children} },
        Outcome::Redirect { to, reason } => {
            tracing::info!("route_gate: path={path} to={to} reason={reason:?}");
            rsx! { RedirectTo { to } }
        }
    }
}

#[component]
fn RedirectTo(to: String) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(to.clone());
    });
    rsx! {}
}
