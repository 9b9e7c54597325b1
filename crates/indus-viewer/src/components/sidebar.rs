//! Sidebar panel: selection controls, legend, citation, and about
//!
//! Mirrors the published application's panel: title, citation block,
//! province/district selects, reset button, waiting note, legend, and
//! contact block, plus the theme switcher and the secondary-model
//! layer toggle.

use dioxus::prelude::*;

use indus_core::{SusceptibilityClass, ViewController};

use crate::theme::ThemeSwitcher;

const PAPER_DOI: &str = "https://doi.org/10.1016/j.ijdrr.2025.105442";
const SECONDARY_LAYER: &str = "FSM XGBoost";

/// Sidebar component owning the selection controls
#[component]
pub fn Sidebar(controller: Signal<Option<ViewController>>) -> Element {
    let mut controller_write = controller;

    let ctl_ref = controller.read();
    let Some(ctl) = ctl_ref.as_ref() else {
        return rsx! {};
    };

    let provinces: Vec<String> = ctl.provinces().iter().map(|p| p.name.clone()).collect();
    let selection = ctl.selection();
    let selected_province = selection.province().map(|p| p.name.clone()).unwrap_or_default();
    let selected_district = selection.district().map(|d| d.name.clone()).unwrap_or_default();
    let district_enabled = selection.district_control_enabled();
    let district_options: Vec<String> = selection
        .district_options()
        .iter()
        .map(|d| d.name.clone())
        .collect();
    let placeholder_visible = ctl.placeholder_visible();
    let secondary_visible = ctl
        .map()
        .layers
        .iter()
        .any(|l| l.name == SECONDARY_LAYER && l.visible);
    drop(ctl_ref);

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h1 { class: "sidebar-title",
                    "High Resolution Flood Susceptibility Mapping and Exposure Assessment in Pakistan"
                }
                ThemeSwitcher {}
            }

            section { class: "sidebar-section",
                h2 { class: "sidebar-section-title", "Citation" }
                p { class: "sidebar-text",
                    a { href: PAPER_DOI,
                        "Waleed, M., & Sajjad, M. (2025). High-resolution flood susceptibility \
                         mapping and exposure assessment in Pakistan: An integrated artificial \
                         intelligence, machine learning and geospatial framework. International \
                         Journal of Disaster Risk Reduction, 121(10544), 2."
                    }
                }
                p { class: "sidebar-text",
                    a { href: PAPER_DOI, "Click here to see the published paper" }
                }
            }

            section { class: "sidebar-section",
                h2 { class: "sidebar-section-title", "Area Selection" }
                p { class: "sidebar-text",
                    "Note: Select your province and see the flood susceptibility distribution."
                }

                label { class: "control-label", "Province Name:" }
                select {
                    class: "region-select",
                    value: "{selected_province}",
                    onchange: move |evt| {
                        let value = evt.value();
                        let name = (!value.is_empty()).then_some(value);
                        let req = controller_write
                            .write()
                            .as_mut()
                            .and_then(|c| c.select_province(name.as_deref()));
                        if let Some(req) = req {
                            let catalog = controller_write.read().as_ref().map(|c| c.catalog());
                            if let Some(catalog) = catalog {
                                spawn(async move {
                                    let result = catalog.districts(&req.province).await;
                                    if let Some(ctl) = controller_write.write().as_mut() {
                                        ctl.apply_districts(req, result);
                                    }
                                });
                            }
                        }
                    },
                    option { value: "", "Select Province" }
                    for name in provinces {
                        option { value: "{name}", selected: name == selected_province, "{name}" }
                    }
                }

                label { class: "control-label", "District Name:" }
                select {
                    class: "region-select",
                    disabled: !district_enabled,
                    value: "{selected_district}",
                    onchange: move |evt| {
                        let value = evt.value();
                        if value.is_empty() {
                            if let Some(ctl) = controller_write.write().as_mut() {
                                ctl.clear_district();
                            }
                            return;
                        }
                        let req = controller_write
                            .write()
                            .as_mut()
                            .and_then(|c| c.select_district(&value));
                        if let Some(req) = req {
                            let stats = controller_write
                                .read()
                                .as_ref()
                                .map(|c| c.stats_pipeline());
                            if let Some(stats) = stats {
                                spawn(async move {
                                    let result = stats.compute(&req.raster, &req.district).await;
                                    if let Some(ctl) = controller_write.write().as_mut() {
                                        ctl.apply_district_stats(req, result);
                                    }
                                });
                            }
                        }
                    },
                    option { value: "", "Select District" }
                    for name in district_options {
                        option { value: "{name}", selected: name == selected_district, "{name}" }
                    }
                }

                button {
                    class: "reset-button",
                    onclick: move |_| {
                        if let Some(ctl) = controller_write.write().as_mut() {
                            ctl.reset();
                        }
                    },
                    "Reset Map"
                }

                if placeholder_visible {
                    p { class: "waiting-note",
                        "Waiting for the district area to be selected..."
                    }
                }
            }

            section { class: "sidebar-section",
                h2 { class: "sidebar-section-title", "Legend" }
                div { class: "legend",
                    for class in SusceptibilityClass::all() {
                        div { class: "legend-item",
                            span {
                                class: "legend-swatch",
                                style: "background-color: {class.color()};",
                            }
                            span { class: "legend-label", "{class.legend_label()}" }
                        }
                    }
                }
            }

            section { class: "sidebar-section",
                h2 { class: "sidebar-section-title", "Model Layers" }
                label { class: "layer-toggle",
                    input {
                        r#type: "checkbox",
                        checked: secondary_visible,
                        onchange: move |evt| {
                            let visible = evt.value() == "true";
                            if let Some(ctl) = controller_write.write().as_mut() {
                                ctl.set_layer_visibility(SECONDARY_LAYER, visible);
                            }
                        },
                    }
                    span { "{SECONDARY_LAYER}" }
                }
            }

            section { class: "sidebar-section",
                h2 { class: "sidebar-section-title", "About" }
                p { class: "sidebar-text", "App Created By: Mirza Waleed" }
                p { class: "sidebar-text",
                    a { href: "mailto:waleedgeo@outlook.com", "Email: waleedgeo@outlook.com" }
                }
                p { class: "sidebar-text",
                    a { href: "https://waleedgeo.com", "Website: waleedgeo.com" }
                }
            }
        }
    }
}
