/// Externally owned drawing surface, modeled as grouped SVG element buffers.
///
/// Connector paths, bend-dot decorations, and the legend panel live in
/// separate groups so callers can clear one concern without touching the
/// others. The surface never outlives a render pass in this crate; each
/// draw/compose call receives it by `&mut`.
#[derive(Debug, Clone)]
pub struct Surface {
    width: f32,
    height: f32,
    defs: Vec<String>,
    connectors: Vec<String>,
    decorations: Vec<String>,
    legend: Option<Vec<String>>,
    legend_origin: (f32, f32),
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            connectors: Vec::new(),
            decorations: Vec::new(),
            legend: None,
            legend_origin: (0.0, 0.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Registers an arrowhead marker def and returns its element id.
    pub fn add_marker_def(&mut self, marker_size: f32) -> String {
        let id = format!("arrow-{}", self.defs.len());
        self.defs.push(format!(
            "<marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"{marker_size}\" markerHeight=\"{marker_size}\" orient=\"auto-start-reverse\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"black\"/></marker>",
        ));
        id
    }

    pub fn push_connector(&mut self, element: String) {
        self.connectors.push(element);
    }

    pub fn push_decoration(&mut self, element: String) {
        self.decorations.push(element);
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    pub fn decoration_count(&self) -> usize {
        self.decorations.len()
    }

    /// Where the legend panel's local coordinates land on the surface.
    pub fn set_legend_origin(&mut self, x: f32, y: f32) {
        self.legend_origin = (x, y);
    }

    /// Replaces the legend host's contents wholesale.
    pub fn set_legend(&mut self, elements: Vec<String>) {
        self.legend = Some(elements);
    }

    /// Removes the legend panel; a no-op when none is present.
    pub fn remove_legend(&mut self) {
        self.legend = None;
    }

    pub fn legend_present(&self) -> bool {
        self.legend.is_some()
    }

    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
        ));

        if !self.defs.is_empty() {
            svg.push_str("<defs>");
            for def in &self.defs {
                svg.push_str(def);
            }
            svg.push_str("</defs>");
        }

        svg.push_str("<g class=\"n2-connectors\">");
        for element in &self.connectors {
            svg.push_str(element);
        }
        svg.push_str("</g>");

        svg.push_str("<g class=\"n2-decorations\">");
        for element in &self.decorations {
            svg.push_str(element);
        }
        svg.push_str("</g>");

        if let Some(legend) = &self.legend {
            svg.push_str(&format!(
                "<g class=\"n2-legend\" transform=\"translate({:.2},{:.2})\">",
                self.legend_origin.0, self.legend_origin.1
            ));
            for element in legend {
                svg.push_str(element);
            }
            svg.push_str("</g>");
        }

        svg.push_str("</svg>");
        svg
    }
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_legend_is_idempotent() {
        let mut surface = Surface::new(100.0, 100.0);
        surface.remove_legend();
        assert!(!surface.legend_present());
        surface.set_legend(vec!["<rect/>".to_string()]);
        assert!(surface.legend_present());
        surface.remove_legend();
        surface.remove_legend();
        assert!(!surface.legend_present());
        assert!(!surface.to_svg().contains("n2-legend"));
    }

    #[test]
    fn marker_ids_are_unique_per_def() {
        let mut surface = Surface::new(10.0, 10.0);
        let a = surface.add_marker_def(0.8);
        let b = surface.add_marker_def(1.2);
        assert_ne!(a, b);
        let svg = surface.to_svg();
        assert!(svg.contains(&format!("id=\"{a}\"")));
        assert!(svg.contains(&format!("id=\"{b}\"")));
    }

    #[test]
    fn escape_xml_covers_markup_characters() {
        assert_eq!(
            escape_xml("Systems & <Variables> \"x\""),
            "Systems &amp; &lt;Variables&gt; &quot;x&quot;"
        );
    }
}
