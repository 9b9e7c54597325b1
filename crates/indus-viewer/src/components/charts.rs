//! Pie-chart components
//!
//! Pure SVG pies rendered from [`ClassAreaDistribution`] data: the
//! static national/province strip and the live district panel share
//! this one renderer.

use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;

use indus_core::{ClassAreaDistribution, SusceptibilityClass, ViewController};

/// The chart deck: horizontal strip of static panels, or the single
/// district panel when a district is selected
#[component]
pub fn ChartDeckView(controller: Signal<Option<ViewController>>) -> Element {
    let ctl_ref = controller.read();
    let Some(ctl) = ctl_ref.as_ref() else {
        return rsx! {};
    };
    let deck = ctl.charts().clone();
    drop(ctl_ref);

    rsx! {
        if deck.strip_visible {
            div { class: "chart-strip",
                for panel in deck.panels.iter().filter(|p| p.visible) {
                    PieChart {
                        title: panel.title.clone(),
                        distribution: panel.distribution.clone(),
                    }
                }
            }
        }
        if let Some(panel) = deck.district_panel {
            div { class: "chart-district",
                PieChart {
                    title: panel.title,
                    distribution: panel.distribution,
                    size: 220,
                    show_legend: true,
                }
            }
        }
    }
}

/// One labeled pie chart with fixed per-slice class colors
///
/// Zero-valued classes draw no slice but keep their legend entry.
#[component]
pub fn PieChart(
    title: String,
    distribution: ClassAreaDistribution,
    /// Pie diameter in pixels
    #[props(default = 150)]
    size: u32,
    /// Whether to list per-class percentages under the pie
    #[props(default = false)]
    show_legend: bool,
) -> Element {
    let size_f = size as f64;
    let cx = size_f / 2.0;
    let cy = size_f / 2.0;
    let radius = size_f * 0.44;

    // Build one wedge path per non-zero slice.
    let mut wedges: Vec<(String, &'static str)> = Vec::new();
    let mut start = 0.0f64;
    for (class, pct) in distribution.slices() {
        let frac = pct / 100.0;
        if frac <= 0.0 {
            continue;
        }
        if frac >= 0.9999 {
            // A single-class region is a full disc, not an arc.
            wedges.push((String::new(), class.color()));
            start = 1.0;
            break;
        }
        let a0 = start * TAU - FRAC_PI_2;
        let a1 = (start + frac) * TAU - FRAC_PI_2;
        let (x0, y0) = (cx + radius * a0.cos(), cy + radius * a0.sin());
        let (x1, y1) = (cx + radius * a1.cos(), cy + radius * a1.sin());
        let large_arc = if frac > 0.5 { 1 } else { 0 };
        let path = format!(
            "M {cx:.1} {cy:.1} L {x0:.1} {y0:.1} A {radius:.1} {radius:.1} 0 {large_arc} 1 {x1:.1} {y1:.1} Z"
        );
        wedges.push((path, class.color()));
        start += frac;
    }
    let empty = start <= 0.0;

    let legend_rows: Vec<(&'static str, String)> = SusceptibilityClass::all()
        .iter()
        .map(|c| {
            (
                c.color(),
                format!("{}: {:.1}%", c.label(), distribution.percentage(*c)),
            )
        })
        .collect();

    rsx! {
        div { class: "chart-panel",
            div { class: "chart-title", "{title}" }
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",

                if empty {
                    circle {
                        cx: "{cx}",
                        cy: "{cy}",
                        r: "{radius}",
                        fill: "none",
                        stroke: "var(--border-color)",
                        stroke_width: "1",
                    }
                }
                for (path, color) in wedges {
                    if path.is_empty() {
                        circle { cx: "{cx}", cy: "{cy}", r: "{radius}", fill: "{color}" }
                    } else {
                        path { d: "{path}", fill: "{color}", stroke: "var(--chart-gap)", stroke_width: "0.5" }
                    }
                }
            }
            if show_legend {
                div { class: "chart-legend",
                    for (color, text) in legend_rows {
                        div { class: "chart-legend-row",
                            span {
                                class: "legend-swatch",
                                style: "background-color: {color};",
                            }
                            span { class: "legend-label", "{text}" }
                        }
                    }
                }
            }
        }
    }
}
