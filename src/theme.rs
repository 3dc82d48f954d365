use serde::{Deserialize, Serialize};

/// Named colors for every element category the diagram and its legend use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub text_color: String,
    pub group: String,
    pub component: String,
    pub input: String,
    pub unconnected_input: String,
    pub output_explicit: String,
    pub output_implicit: String,
    pub collapsed: String,
    pub connection: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "helvetica, sans-serif".to_string(),
            background: "#E0E0E0".to_string(),
            text_color: "black".to_string(),
            group: "#6092B5".to_string(),
            component: "#02BFFF".to_string(),
            input: "#30B0AD".to_string(),
            unconnected_input: "#F42F0D".to_string(),
            output_explicit: "#9FC4C6".to_string(),
            output_implicit: "#C7D06D".to_string(),
            collapsed: "#555555".to_string(),
            connection: "black".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            background: "#F4F6FA".to_string(),
            text_color: "#1C2430".to_string(),
            group: "#5B8CB8".to_string(),
            component: "#3FB8E8".to_string(),
            input: "#47A8A4".to_string(),
            unconnected_input: "#E05A4E".to_string(),
            output_explicit: "#A6C6C8".to_string(),
            output_implicit: "#C3CC7F".to_string(),
            collapsed: "#6B7280".to_string(),
            connection: "#1C2430".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverCategory {
    Linear,
    Nonlinear,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverStyle {
    pub category: SolverCategory,
    pub fill: String,
}

/// Solver name -> style, iterated in insertion order. The legend's third
/// column reproduces this order, so a sorted map would reshuffle it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverStyleTable {
    entries: Vec<(String, SolverStyle)>,
}

impl SolverStyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, style: SolverStyle) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = style;
        } else {
            self.entries.push((name, style));
        }
    }

    pub fn get(&self, name: &str) -> Option<&SolverStyle> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SolverStyle)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stock solver assignments shipped with the renderer.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        let linear = [
            ("LN: LNBGS", "#7FC97F"),
            ("LN: SCIPY", "#BEAED4"),
            ("LN: DIRECT", "#FDC086"),
            ("LN: RUNONCE", "#A0B8D8"),
        ];
        let nonlinear = [
            ("NL: NLBGS", "#FFD92F"),
            ("NL: Newton", "#386CB0"),
            ("NL: RUNONCE", "#F0027F"),
        ];
        for (name, fill) in linear {
            table.insert(
                name,
                SolverStyle {
                    category: SolverCategory::Linear,
                    fill: fill.to_string(),
                },
            );
        }
        for (name, fill) in nonlinear {
            table.insert(
                name,
                SolverStyle {
                    category: SolverCategory::Nonlinear,
                    fill: fill.to_string(),
                },
            );
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_preserves_insertion_order() {
        let mut table = SolverStyleTable::new();
        table.insert(
            "NL: Newton",
            SolverStyle {
                category: SolverCategory::Nonlinear,
                fill: "#386CB0".to_string(),
            },
        );
        table.insert(
            "LN: DIRECT",
            SolverStyle {
                category: SolverCategory::Linear,
                fill: "#FDC086".to_string(),
            },
        );
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["NL: Newton", "LN: DIRECT"]);
    }

    #[test]
    fn insert_replaces_existing_entry_in_place() {
        let mut table = SolverStyleTable::builtin();
        let before = table.len();
        table.insert(
            "NL: Newton",
            SolverStyle {
                category: SolverCategory::Nonlinear,
                fill: "#000000".to_string(),
            },
        );
        assert_eq!(table.len(), before);
        assert_eq!(table.get("NL: Newton").unwrap().fill, "#000000");
    }
}
