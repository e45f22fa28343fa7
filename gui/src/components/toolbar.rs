// Toolbar with the form title and the theme switch
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::state::app_state::{AppState, Theme};

#[component]
pub fn Toolbar(app_state: Signal<AppState>, title: String) -> Element {
    let mut app_state = app_state;
    let toggle_label = match app_state.read().current_theme {
        Theme::Dark => "Tema claro",
        Theme::Light => "Tema oscuro",
    };

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; justify-content: space-between; align-items: center;",
            h1 { "{title}" }
            button {
                onclick: move |_| app_state.write().toggle_theme(),
                "{toggle_label}"
            }
        }
    }
}
