//! UI components for the atlas viewer

use dioxus::prelude::*;

use indus_core::ViewController;

use crate::theme::ThemedRoot;

mod charts;
mod map_surface;
mod sidebar;

pub use charts::{ChartDeckView, PieChart};
pub use map_surface::MapSurface;
pub use sidebar::Sidebar;

/// Main application component
#[component]
pub fn App(
    controller: Signal<Option<ViewController>>,
    boot_error: Signal<Option<String>>,
) -> Element {
    let boot_error_msg = boot_error.read().clone();
    let ready = controller.read().is_some();

    rsx! {
        ThemedRoot {
            div { class: "app-container",
                if let Some(message) = boot_error_msg {
                    div { class: "loading-screen",
                        "Failed to start the atlas: {message}"
                    }
                } else if ready {
                    MapSurface { controller }
                    Sidebar { controller }
                    ChartDeckView { controller }
                    NoticeBar { controller }
                } else {
                    div { class: "loading-screen", "Loading atlas..." }
                }
            }
        }
    }
}

/// Non-blocking inline notice for gateway and catalog errors
#[component]
fn NoticeBar(controller: Signal<Option<ViewController>>) -> Element {
    let mut controller_write = controller;
    let notice = controller
        .read()
        .as_ref()
        .and_then(|c| c.notice().map(str::to_string));

    rsx! {
        if let Some(message) = notice {
            div { class: "notice-bar",
                span { class: "notice-message", "{message}" }
                button {
                    class: "notice-dismiss",
                    onclick: move |_| {
                        if let Some(ctl) = controller_write.write().as_mut() {
                            ctl.clear_notice();
                        }
                    },
                    "✕"
                }
            }
        }
    }
}
