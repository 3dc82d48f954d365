use crate::config::{LegendConfig, OverlayConfig, RenderConfig};
use crate::layout::legend::{LegendEntry, Swatch, SwatchShape, compose_layout};
use crate::layout::{draw_connector, route};
use crate::scene::Scene;
use crate::surface::{Surface, escape_xml};
use crate::theme::{SolverStyleTable, Theme};
use anyhow::Result;
use std::path::Path;

/// Rebuilds (or removes) the legend panel on the surface.
///
/// The panel is recomputed from scratch on every call; the previous panel is
/// always dropped first, so repeated calls cannot accumulate stale rows.
pub fn compose(
    visible: bool,
    theme: &Theme,
    solvers: &SolverStyleTable,
    show_linear_solvers: bool,
    cfg: &LegendConfig,
    surface: &mut Surface,
) {
    surface.remove_legend();
    if !visible {
        return;
    }

    let layout = compose_layout(theme, solvers, show_linear_solvers, cfg);
    let mut elements = Vec::with_capacity(layout.entries.len() + layout.headers.len() + 2);

    elements.push(format!(
        "<rect class=\"background\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
        layout.width, layout.height, theme.background
    ));

    elements.push(format!(
        "<g transform=\"translate({:.2},{:.2})\"><text text-anchor=\"middle\" dy=\".35em\" font-family=\"{}\" font-size=\"{}\" text-decoration=\"underline\" fill=\"{}\">{}</text></g>",
        layout.title.x,
        layout.title.y,
        theme.font_family,
        cfg.title_font_size,
        theme.text_color,
        escape_xml(&layout.title.text)
    ));

    for header in &layout.headers {
        elements.push(format!(
            "<g transform=\"translate({:.2},{:.2})\"><text dy=\".35em\" font-family=\"{}\" font-size=\"{}\" text-decoration=\"underline\" fill=\"{}\">{}</text></g>",
            header.x,
            header.y,
            theme.font_family,
            cfg.header_font_size,
            theme.text_color,
            escape_xml(&header.text)
        ));
    }

    for entry in &layout.entries {
        elements.push(legend_entry_svg(entry, theme, cfg));
    }

    surface.set_legend(elements);
}

fn legend_entry_svg(entry: &LegendEntry, theme: &Theme, cfg: &LegendConfig) -> String {
    let u = entry.swatch.half_width;
    let v = entry.swatch.half_height;
    let mut el = format!(
        "<g transform=\"translate({:.2},{:.2})\">",
        entry.x, entry.y
    );
    el.push_str(&swatch_svg(&entry.swatch));
    if entry.bordered {
        el.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" stroke-width=\"{}\" stroke=\"white\" fill=\"none\"/>",
            -u,
            -v,
            u * 2.0,
            v * 2.0,
            cfg.border_stroke_width
        ));
    }
    el.push_str(&format!(
        "<text x=\"{:.2}\" y=\"0\" dy=\".35em\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        u + 5.0,
        theme.font_family,
        cfg.entry_font_size,
        theme.text_color,
        escape_xml(&entry.label)
    ));
    el.push_str("</g>");
    el
}

/// Emits one swatch in the local coordinates of its entry group (the swatch
/// center is the origin).
pub fn swatch_svg(swatch: &Swatch) -> String {
    let u = swatch.half_width;
    let v = swatch.half_height;
    let fill = &swatch.fill;
    match swatch.shape {
        SwatchShape::Swatch => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" stroke-width=\"0\" fill-opacity=\"1\" fill=\"{fill}\"/>",
            -u,
            -v,
            u * 2.0,
            v * 2.0
        ),
        SwatchShape::Scalar => format!(
            "<ellipse rx=\"{:.2}\" ry=\"{:.2}\" fill=\"{fill}\"/>",
            u * 0.6,
            v * 0.6
        ),
        SwatchShape::Vector => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{fill}\"/>",
            -u * 0.6,
            -v * 0.6,
            u * 1.2,
            v * 1.2
        ),
        SwatchShape::GroupBordered => {
            // Frame of four thin bars, then the inner block.
            let mut el = String::new();
            let bars = [
                (-u, -v, u * 2.0, v * 0.2),
                (-u, -v, u * 0.2, v * 2.0),
                (u * 0.8, -v, u * 0.2, v * 2.0),
                (-u, v * 0.8, u * 2.0, v * 0.2),
            ];
            for (x, y, w, h) in bars {
                el.push_str(&format!(
                    "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{fill}\"/>",
                ));
            }
            el.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{fill}\"/>",
                -u * 0.6,
                -v * 0.6,
                u * 1.2,
                v * 1.2
            ));
            el
        }
    }
}

/// Routes and draws every connector in a scene, then composes the legend
/// below the matrix area. The surface is sized to fit both.
pub fn render_scene(scene: &Scene, config: &OverlayConfig) -> String {
    let (rows, cols) = scene.grid_extent();
    let matrix_width = cols as f32 * scene.cell_size.width;
    let matrix_height = rows as f32 * scene.cell_size.height;

    let (legend_width, legend_height) = if scene.legend.visible {
        (config.legend.column_width * 3.0, config.legend.height)
    } else {
        (0.0, 0.0)
    };

    let mut surface = Surface::new(
        matrix_width.max(legend_width),
        matrix_height + legend_height,
    );
    surface.set_legend_origin(0.0, matrix_height);

    for spec in &scene.connectors {
        let path = route(spec, scene.cell_size);
        draw_connector(&path, spec, &mut surface);
    }

    let solvers = scene
        .solvers
        .clone()
        .unwrap_or_else(SolverStyleTable::builtin);
    compose(
        scene.legend.visible,
        &config.theme,
        &solvers,
        scene.legend.show_linear_solvers,
        &config.legend,
        &mut surface,
    );

    surface.to_svg()
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(800.0, 600.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output requires the `png` feature (resvg/usvg)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_false_removes_panel_idempotently() {
        let mut surface = Surface::new(750.0, 500.0);
        let theme = Theme::classic();
        let solvers = SolverStyleTable::builtin();
        let cfg = LegendConfig::default();

        compose(true, &theme, &solvers, true, &cfg, &mut surface);
        assert!(surface.legend_present());

        compose(false, &theme, &solvers, true, &cfg, &mut surface);
        assert!(!surface.legend_present());
        compose(false, &theme, &solvers, true, &cfg, &mut surface);
        assert!(!surface.legend_present());
    }

    #[test]
    fn compose_rebuilds_rather_than_appends() {
        let mut surface = Surface::new(750.0, 500.0);
        let theme = Theme::classic();
        let solvers = SolverStyleTable::builtin();
        let cfg = LegendConfig::default();

        compose(true, &theme, &solvers, true, &cfg, &mut surface);
        let first = surface.to_svg();
        compose(true, &theme, &solvers, true, &cfg, &mut surface);
        assert_eq!(surface.to_svg(), first);
    }

    #[test]
    fn legend_svg_carries_fixed_labels_and_solver_subset() {
        let mut surface = Surface::new(750.0, 500.0);
        let theme = Theme::classic();
        let solvers = SolverStyleTable::builtin();
        compose(
            true,
            &theme,
            &solvers,
            false,
            &LegendConfig::default(),
            &mut surface,
        );
        let svg = surface.to_svg();
        assert!(svg.contains("LEGEND"));
        assert!(svg.contains("Systems &amp; Variables"));
        assert!(svg.contains("Nonlinear Solvers"));
        assert!(svg.contains("Unconnected Input"));
        assert!(svg.contains("NL: Newton"));
        assert!(!svg.contains("LN: DIRECT"));
    }

    #[test]
    fn bordered_group_swatch_is_a_frame_plus_inner_block() {
        let swatch = crate::layout::legend::create_swatch(
            SwatchShape::GroupBordered,
            "#9FC4C6",
            15.0,
            15.0,
        );
        let el = swatch_svg(&swatch);
        assert_eq!(el.matches("<rect").count(), 5);
        // Frame bar thickness is 0.2x the half-size.
        assert!(el.contains("height=\"3.00\""));
        assert!(el.contains("width=\"3.00\""));
    }
}
