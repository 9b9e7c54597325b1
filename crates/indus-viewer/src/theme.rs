//! Theme system for the atlas viewer
//!
//! Dark is the default; a light alternative is switchable at runtime.

use dioxus::prelude::*;

/// Available themes for the application
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the CSS data-theme attribute value
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Returns the display name for the theme
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Returns all available themes
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }
}

/// Global signal for current theme
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Themed root wrapper component
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme switcher dropdown component
#[component]
pub fn ThemeSwitcher() -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{theme.css_value()}",
                onchange: move |evt| {
                    *CURRENT_THEME.write() = match evt.value().as_str() {
                        "light" => Theme::Light,
                        _ => Theme::Dark,
                    };
                },
                for t in Theme::all() {
                    option {
                        value: "{t.css_value()}",
                        selected: *t == theme,
                        "{t.display_name()}"
                    }
                }
            }
        }
    }
}
