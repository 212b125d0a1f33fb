use dioxus::prelude::*;

const LOADER_CSS: Asset = asset!("/assets/styling/loader.css");

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LoaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Spinning Poké Ball.
#[component]
pub fn Loader(#[props(default)] size: LoaderSize) -> Element {
    let size_class = match size {
        LoaderSize::Small => "loader-sm",
        LoaderSize::Medium => "loader-md",
        LoaderSize::Large => "loader-lg",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LOADER_CSS }
        div {
            class: "loader {size_class}",
            role: "status",
            div { class: "loader-top" }
            div { class: "loader-bottom" }
            div { class: "loader-ring" }
        }
    }
}
