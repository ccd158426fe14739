//! # OptGUI
//!
//! Interactive constraint geometry for drone trajectory planning: the user
//! sketches obstacles, keep-in regions, planes and waypoints on a 2D canvas,
//! and the bound items are streamed to an external trajectory solver whose
//! feasibility verdicts flow back onto the drones.
//!
//! ## Architecture
//!
//! OptGUI is organized as a workspace with multiple crates:
//!
//! 1. **optgui-core** - Errors, scene constants and tuning parameters, shared-state aliases
//! 2. **optgui-designer** - Models, resize handles, views, scene bounds, canvas controller
//! 3. **optgui-settings** - Configuration files
//! 4. **optgui** - This facade: re-exports and logging setup

pub use optgui_core::{Error, GeometryError, RenderParams, Result, SceneParams};
pub use optgui_designer as designer;
pub use optgui_designer::{
    Bounds, Canvas, ConstraintRecord, FeasibilityChannel, GeometryModel, ItemId, ModelKind,
    Point, PointerButton, RenderFrame, ToolMode, Viewport,
};
pub use optgui_settings::{Config, ConfigError, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Builds a canvas with a viewport sized, zoomed and limited per `config`.
///
/// # Panics
/// If the zoom limits are inverted; [`Config::validate`] rejects those.
pub fn canvas_from_config(config: &Config) -> Canvas {
    let mut viewport = Viewport::new(config.view.viewport_width, config.view.viewport_height)
        .with_zoom_limits(config.view.min_zoom, config.view.max_zoom);
    viewport.set_zoom(config.view.initial_zoom);
    Canvas::with_viewport(config.scene_params(), config.render_params(), viewport)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (INFO by default)
/// - Thread ids and line numbers, since feasibility writes arrive from the
///   solver thread
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
