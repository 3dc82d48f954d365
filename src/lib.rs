#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod layout;
pub mod render;
pub mod scene;
pub mod surface;
pub mod theme;

pub use config::{LegendConfig, OverlayConfig, RenderConfig, load_config};
pub use layout::{
    CellSize, ConnectorSpec, GridPoint, PixelPoint, RoutedPath, draw_connector, route,
};
pub use render::{compose, render_scene, write_output_svg};
pub use scene::{Scene, SceneError, parse_scene};
pub use surface::Surface;
pub use theme::{SolverCategory, SolverStyle, SolverStyleTable, Theme};

#[cfg(feature = "cli")]
pub use cli::run;
