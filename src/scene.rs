use crate::layout::{CellSize, ConnectorSpec};
use crate::theme::SolverStyleTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scene has no connectors and no visible legend; nothing to render")]
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendFlags {
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub show_linear_solvers: bool,
}

fn default_visible() -> bool {
    true
}

impl Default for LegendFlags {
    fn default() -> Self {
        Self {
            visible: true,
            show_linear_solvers: false,
        }
    }
}

/// One overlay render request: the cell geometry, the connectors to draw,
/// and the legend flags the diagram controller would otherwise supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub cell_size: CellSize,
    #[serde(default)]
    pub connectors: Vec<ConnectorSpec>,
    #[serde(default)]
    pub legend: LegendFlags,
    /// Replaces the builtin solver table when present.
    #[serde(default)]
    pub solvers: Option<SolverStyleTable>,
}

impl Scene {
    /// Grid extent covered by the connectors, as (rows, cols).
    pub fn grid_extent(&self) -> (i32, i32) {
        let mut rows = 0;
        let mut cols = 0;
        for spec in &self.connectors {
            rows = rows.max(spec.start.row + 1).max(spec.end.row + 1);
            cols = cols.max(spec.start.col + 1).max(spec.end.col + 1);
        }
        (rows, cols)
    }
}

pub fn parse_scene(input: &str) -> Result<Scene, SceneError> {
    let scene: Scene = serde_json::from_str(input)?;
    if scene.connectors.is_empty() && !scene.legend.visible {
        return Err(SceneError::Empty);
    }
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_scene() {
        let scene = parse_scene(
            r##"{
                "cell_size": {"width": 20, "height": 20},
                "connectors": [
                    {"start": {"row": 2, "col": 5}, "end": {"row": 7, "col": 1},
                     "color": "#30B0AD", "stroke_width": 2.0}
                ]
            }"##,
        )
        .unwrap();
        assert_eq!(scene.connectors.len(), 1);
        assert!(scene.legend.visible);
        assert!(!scene.legend.show_linear_solvers);
        assert_eq!(scene.grid_extent(), (8, 6));
    }

    #[test]
    fn rejects_a_scene_with_nothing_to_render() {
        let err = parse_scene(
            r#"{"cell_size": {"width": 20, "height": 20}, "legend": {"visible": false}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::Empty));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_scene("not json").unwrap_err(),
            SceneError::Json(_)
        ));
    }
}
