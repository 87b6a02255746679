//! Icon legend grid placement
//!
//! Legend entries are laid out row-major in first-seen element order,
//! independent of which rule alternatives the tree build picked.

use serde::Serialize;

use super::config::LayoutConfig;

/// One legend icon cell: the element name plus the cell origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// The placed legend grid
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegendLayout {
    pub entries: Vec<LegendEntry>,
    pub rows: usize,
}

impl LayoutConfig {
    /// Place legend icons on a grid, preserving the given element order.
    pub fn legend_layout<I, S>(&self, elements: I) -> LegendLayout
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let legend = &self.legend;
        let entries: Vec<LegendEntry> = elements
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let row = i / legend.icons_per_row;
                let col = i % legend.icons_per_row;
                LegendEntry {
                    name: name.as_ref().to_string(),
                    x: col as f64 * (legend.icon_size + legend.column_gap),
                    y: row as f64 * legend.row_height + legend.header_offset,
                }
            })
            .collect();
        let rows = entries.len().div_ceil(legend.icons_per_row);
        LegendLayout { entries, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_legend() {
        let layout = LayoutConfig::detailed().legend_layout(Vec::<String>::new());
        assert!(layout.entries.is_empty());
        assert_eq!(layout.rows, 0);
    }

    #[test]
    fn test_grid_positions_wrap_per_row() {
        let config = LayoutConfig::compact();
        let names: Vec<String> = (0..7).map(|i| format!("e{i}")).collect();
        let layout = config.legend_layout(&names);

        assert_eq!(layout.rows, 2);
        // Column stride is icon_size + column_gap = 70, row stride 60.
        assert_eq!(layout.entries[0].x, 0.0);
        assert_eq!(layout.entries[0].y, 30.0);
        assert_eq!(layout.entries[1].x, 70.0);
        assert_eq!(layout.entries[5].x, 350.0);
        // Seventh entry wraps to the second row.
        assert_eq!(layout.entries[6].x, 0.0);
        assert_eq!(layout.entries[6].y, 90.0);
    }

    #[test]
    fn test_order_is_preserved() {
        let layout = LayoutConfig::detailed().legend_layout(["Water", "Fire", "Steam"]);
        let names: Vec<&str> = layout.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Water", "Fire", "Steam"]);
    }
}
