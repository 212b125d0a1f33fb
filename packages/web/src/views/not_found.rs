use dioxus::prelude::*;

use crate::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            h2 { "Page Not Found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "not-found-home", to: Route::Dashboard {}, "Back to Pokédex" }
        }
    }
}
