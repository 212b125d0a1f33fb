use dioxus::prelude::*;
use ui::views::StatisticsView;

#[component]
pub fn Statistics() -> Element {
    rsx! {
        StatisticsView {}
    }
}
