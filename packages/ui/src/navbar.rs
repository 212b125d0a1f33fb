use dioxus::prelude::*;

use crate::icons::{FaMagnifyingGlass, FaBars, FaXmark};
use crate::session::{use_session, LogoutButton};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar: brand, navigation `children`, catalog search, greeting and logout.
///
/// `on_search` receives the trimmed, lowercased query; empty queries are ignored.
#[component]
pub fn Navbar(
    on_search: EventHandler<String>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let session = use_session();
    let mut query = use_signal(String::new);
    let mut menu_open = use_signal(|| false);

    let username = session
        .read()
        .session()
        .map(|s| s.username.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Trainer".to_string());

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_lowercase();
        if q.is_empty() {
            return;
        }
        query.set(String::new());
        on_search.call(q);
    };

    let menu_class = if menu_open() { "navbar-menu open" } else { "navbar-menu" };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                span { class: "navbar-logo" }
                span { "PokéDex" }
            }
            button {
                class: "icon-btn navbar-toggle",
                aria_label: "Toggle menu",
                onclick: move |_| menu_open.toggle(),
                if menu_open() {
                    Icon { icon: FaXmark, width: 18, height: 18 }
                } else {
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
            }
            div {
                class: "{menu_class}",
                div { class: "navbar-links", {children} }
                form {
                    class: "navbar-search",
                    onsubmit: handle_search,
                    input {
                        r#type: "text",
                        placeholder: "Search Pokémon...",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "icon-btn",
                        aria_label: "Search",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    }
                }
                div {
                    class: "navbar-user",
                    span { "Hello, {username}" }
                    LogoutButton {
                        class: "btn btn-danger btn-sm",
                        on_logout: move |_| on_logout.call(()),
                    }
                }
            }
        }
    }
}
