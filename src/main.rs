#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::{config::load_config, logging, version::APP_NAME};

/// Rendering fallbacks for Wayland sessions. A variable the user already set wins.
const WAYLAND_DEFAULTS: [(&str, &str); 2] = [
    // Explicit sync crashes some drivers under wgpu.
    ("WGPU_BACKEND", "gl"),
    // WebKit's DMABUF renderer opts into explicit sync too.
    ("WEBKIT_DISABLE_DMABUF_RENDERER", "1"),
];

fn apply_wayland_defaults() {
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        return;
    }
    for (key, value) in WAYLAND_DEFAULTS {
        if std::env::var_os(key).is_none() {
            tracing::debug!(key, value, "applying wayland default");
            std::env::set_var(key, value);
        }
    }
}

fn main() {
    logging::init_tracing();
    apply_wayland_defaults();

    let config = load_config();
    tracing::info!(
        app = APP_NAME,
        postcode = %config.postcode,
        area = %config.area,
        "launching"
    );
    let title = format!("{APP_NAME} - {}", config.postcode);

    let builder = LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop! {
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(1280.0, 900.0))
        )
    });

    #[cfg(not(feature = "desktop"))]
    let _ = title;

    builder.launch(app::App);
}
