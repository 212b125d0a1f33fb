use dioxus::prelude::*;
use ui::{use_session, Navbar};

use crate::Route;

/// Shell for signed-in pages. Renders nothing until the session is
/// restored and sends anonymous visitors to the login page.
#[component]
pub fn AppLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let (loading, authenticated) = {
        let state = session.read();
        (state.is_loading(), state.is_authenticated())
    };
    if loading {
        return rsx! {};
    }
    if !authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Navbar {
            on_search: move |query: String| {
                nav.push(Route::PokemonPage { id: query });
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Link { to: Route::Dashboard {}, "Home" }
            Link { to: Route::Inventory {}, "Inventory" }
            Link { to: Route::Statistics {}, "Statistics" }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
