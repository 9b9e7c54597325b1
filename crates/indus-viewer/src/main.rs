//! Indus Atlas - Main entry point
//!
//! A standalone Dioxus desktop application for exploring flood
//! susceptibility across Pakistan's provinces and districts.
//!
//! Usage:
//!   indus-atlas
//!   indus-atlas --theme light --scale 60 --latency-ms 0

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use clap::Parser;
use dioxus::prelude::*;

use indus_core::ViewController;
use indus_gateway::SyntheticGateway;
use indus_viewer::components::App;
use indus_viewer::{gateway, install_gateway};

/// Embedded CSS styles
const THEMES_CSS: &str = include_str!("../assets/themes.css");
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global reduction scale for the stats pipeline
static SCALE_M: OnceLock<f64> = OnceLock::new();

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "indus-atlas")]
#[command(about = "Flood susceptibility atlas for Pakistan")]
struct Args {
    /// Initial theme (dark or light)
    #[arg(short, long, default_value = "dark")]
    theme: String,

    /// Zonal reduction scale in meters
    #[arg(short, long, default_value_t = 30.0)]
    scale: f64,

    /// Simulated gateway latency in milliseconds
    #[arg(long, default_value_t = 150)]
    latency_ms: u64,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    // Set initial theme
    if args.theme == "light" {
        *indus_viewer::theme::CURRENT_THEME.write() = indus_viewer::theme::Theme::Light;
    }

    SCALE_M.set(args.scale).ok();

    let gateway = match SyntheticGateway::bundled() {
        Ok(gw) => Arc::new(gw.with_latency(Duration::from_millis(args.latency_ms))),
        Err(err) => {
            tracing::error!(%err, "failed to load the bundled boundary dataset");
            std::process::exit(1);
        }
    };
    install_gateway(gateway);

    // Launch the desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("Indus Atlas - Flood Susceptibility Mapping of Pakistan")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1400, 900))
                        .with_resizable(true)
                        .with_maximized(true),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    THEMES_CSS, STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root application component
fn RootApp() -> Element {
    // Controller state; None until the bootstrap fetch completes
    let mut controller = use_signal(|| None::<ViewController>);
    let mut boot_error = use_signal(|| None::<String>);

    let _bootstrap = use_resource(move || async move {
        let scale = SCALE_M.get().copied().unwrap_or(30.0);
        match ViewController::bootstrap(gateway(), scale).await {
            Ok(ctl) => controller.set(Some(ctl)),
            Err(err) => {
                tracing::error!(%err, "bootstrap failed");
                boot_error.set(Some(err.to_string()));
            }
        }
    });

    rsx! {
        App { controller, boot_error }
    }
}
