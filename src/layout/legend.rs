use crate::config::LegendConfig;
use crate::theme::{SolverCategory, SolverStyleTable, Theme};

/// Shape drawn inside one legend row's swatch slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchShape {
    /// Plain filled rectangle (color legend, solver colors).
    Swatch,
    /// Ellipse at 0.6x the half-size, marking scalar variables.
    Scalar,
    /// Rectangle at 1.2x the half-size, marking vector variables.
    Vector,
    /// Four thin frame bars plus an inner rectangle, echoing a collapsed
    /// diagram group.
    GroupBordered,
}

/// One swatch element, reshapeable in place via [`update_swatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub shape: SwatchShape,
    pub fill: String,
    pub half_width: f32,
    pub half_height: f32,
}

pub fn create_swatch(shape: SwatchShape, fill: &str, half_width: f32, half_height: f32) -> Swatch {
    Swatch {
        shape,
        fill: fill.to_string(),
        half_width,
        half_height,
    }
}

/// Re-colors and re-sizes an existing swatch without changing its shape.
pub fn update_swatch(swatch: &mut Swatch, fill: &str, half_width: f32, half_height: f32) {
    swatch.fill = fill.to_string();
    swatch.half_width = half_width;
    swatch.half_height = half_height;
}

#[derive(Debug, Clone)]
pub struct LegendTitle {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct LegendHeader {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// One labeled row in a legend column. `x`/`y` address the swatch center;
/// the label hangs off to the right.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub column: usize,
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub swatch: Swatch,
    /// Column 2 symbols sit inside a thin white element border.
    pub bordered: bool,
}

#[derive(Debug, Clone)]
pub struct LegendLayout {
    pub width: f32,
    pub height: f32,
    pub title: LegendTitle,
    pub headers: Vec<LegendHeader>,
    pub entries: Vec<LegendEntry>,
}

const NUM_COLUMNS: usize = 3;

/// Lays out the full legend panel: title, three column headers, the fixed
/// color and symbol columns, and one solver column filtered by category.
///
/// Pure with respect to its inputs; the caller rebuilds the panel from this
/// layout on every invocation rather than patching a previous one.
pub fn compose_layout(
    theme: &Theme,
    solvers: &SolverStyleTable,
    show_linear_solvers: bool,
    cfg: &LegendConfig,
) -> LegendLayout {
    let u = cfg.element_size * 0.5;
    let v = u;
    let width = cfg.column_width * NUM_COLUMNS as f32;

    let entry_pos = |column: usize, row: usize| -> (f32, f32) {
        (
            cfg.column_width * column as f32 + cfg.x_offset + u,
            cfg.rows_top + cfg.row_pitch * row as f32 + v,
        )
    };

    let title = LegendTitle {
        x: width * 0.5,
        y: cfg.title_y,
        text: "LEGEND".to_string(),
    };

    let solver_header = if show_linear_solvers {
        " Linear Solvers"
    } else {
        "Nonlinear Solvers"
    };
    let headers = ["Systems & Variables", "N^2 Symbols", solver_header]
        .iter()
        .enumerate()
        .map(|(i, text)| LegendHeader {
            x: cfg.column_width * i as f32 + cfg.x_offset,
            y: cfg.header_y,
            text: text.to_string(),
        })
        .collect();

    let mut entries = Vec::new();

    // Column 1: element colors, fixed insertion order (not alphabetical).
    let colors: [(&str, &str); 8] = [
        ("Group", theme.group.as_str()),
        ("Component", theme.component.as_str()),
        ("Input", theme.input.as_str()),
        ("Unconnected Input", theme.unconnected_input.as_str()),
        ("Output Explicit", theme.output_explicit.as_str()),
        ("Output Implicit", theme.output_implicit.as_str()),
        ("Collapsed", theme.collapsed.as_str()),
        ("Connection", theme.connection.as_str()),
    ];
    for (row, (label, color)) in colors.iter().enumerate() {
        let (x, y) = entry_pos(0, row);
        entries.push(LegendEntry {
            column: 0,
            row,
            x,
            y,
            label: label.to_string(),
            swatch: create_swatch(SwatchShape::Swatch, color, u, v),
            bordered: false,
        });
    }

    // Column 2: variable symbol shapes, all in the explicit-output color.
    let symbols: [(&str, SwatchShape); 3] = [
        ("Scalar", SwatchShape::Scalar),
        ("Vector", SwatchShape::Vector),
        ("Collapsed variables", SwatchShape::GroupBordered),
    ];
    for (row, (label, shape)) in symbols.iter().enumerate() {
        let (x, y) = entry_pos(1, row);
        entries.push(LegendEntry {
            column: 1,
            row,
            x,
            y,
            label: label.to_string(),
            swatch: create_swatch(*shape, &theme.output_explicit, u, v),
            bordered: true,
        });
    }

    // Column 3: solvers of the selected category, in table order. Row index
    // restarts within the column.
    let wanted = if show_linear_solvers {
        SolverCategory::Linear
    } else {
        SolverCategory::Nonlinear
    };
    let mut row = 0;
    for (name, style) in solvers.iter() {
        if style.category != wanted {
            continue;
        }
        let (x, y) = entry_pos(2, row);
        entries.push(LegendEntry {
            column: 2,
            row,
            x,
            y,
            label: name.to_string(),
            swatch: create_swatch(SwatchShape::Swatch, &style.fill, u, v),
            bordered: false,
        });
        row += 1;
    }

    LegendLayout {
        width,
        height: cfg.height,
        title,
        headers,
        entries,
    }
}
