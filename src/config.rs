use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry of the legend panel. Defaults reproduce the stock panel: three
/// 250px columns of 30px swatches at a 40px row pitch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendConfig {
    pub element_size: f32,
    pub x_offset: f32,
    pub column_width: f32,
    pub row_pitch: f32,
    pub rows_top: f32,
    pub header_y: f32,
    pub title_y: f32,
    pub height: f32,
    pub title_font_size: f32,
    pub header_font_size: f32,
    pub entry_font_size: f32,
    pub border_stroke_width: f32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            element_size: 30.0,
            x_offset: 10.0,
            column_width: 250.0,
            row_pitch: 40.0,
            rows_top: 80.0,
            header_y: 60.0,
            title_y: 15.0,
            height: 500.0,
            title_font_size: 30.0,
            header_font_size: 24.0,
            entry_font_size: 20.0,
            border_stroke_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub theme: Theme,
    pub legend: LegendConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    theme: Option<String>,
    #[serde(default)]
    colors: Option<ColorVariables>,
    #[serde(default)]
    legend: Option<LegendVariables>,
}

/// Per-category color overrides, applied on top of the selected theme.
#[derive(Debug, Clone, Deserialize)]
struct ColorVariables {
    background: Option<String>,
    text_color: Option<String>,
    group: Option<String>,
    component: Option<String>,
    input: Option<String>,
    unconnected_input: Option<String>,
    output_explicit: Option<String>,
    output_implicit: Option<String>,
    collapsed: Option<String>,
    connection: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct LegendVariables {
    element_size: Option<f32>,
    column_width: Option<f32>,
    row_pitch: Option<f32>,
    height: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<OverlayConfig> {
    let mut config = OverlayConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
        } else if theme_name == "classic" || theme_name == "default" {
            config.theme = Theme::classic();
        }
    }

    if let Some(vars) = parsed.colors {
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.group {
            config.theme.group = v;
        }
        if let Some(v) = vars.component {
            config.theme.component = v;
        }
        if let Some(v) = vars.input {
            config.theme.input = v;
        }
        if let Some(v) = vars.unconnected_input {
            config.theme.unconnected_input = v;
        }
        if let Some(v) = vars.output_explicit {
            config.theme.output_explicit = v;
        }
        if let Some(v) = vars.output_implicit {
            config.theme.output_implicit = v;
        }
        if let Some(v) = vars.collapsed {
            config.theme.collapsed = v;
        }
        if let Some(v) = vars.connection {
            config.theme.connection = v;
        }
    }

    if let Some(vars) = parsed.legend {
        if let Some(v) = vars.element_size {
            config.legend.element_size = v;
        }
        if let Some(v) = vars.column_width {
            config.legend.column_width = v;
        }
        if let Some(v) = vars.row_pitch {
            config.legend.row_pitch = v;
        }
        if let Some(v) = vars.height {
            config.legend.height = v;
        }
    }

    Ok(config)
}
