//! Declarative chart configuration.
//!
//! `build_options` combines the static taxonomy with the style engine into
//! the full option tree the sunburst painter consumes. It is re-invoked, not
//! cached, whenever the viewport resizes past the breakpoint, the user
//! drills in or out, or the expanded-label toggle flips; decoration over the
//! whole tree is cheap (the dataset is under 200 nodes).

pub mod sunburst;

use serde::Serialize;

use crate::style::{decorate, DecoratedNode, ViewState};
use crate::taxonomy::{self, TaxonomyNode, CENTRAL_CATEGORY};

/// Radial band for one ring, as fractions of the chart radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelBand {
    pub r0: f32,
    pub r1: f32,
}

/// Ring boundaries: center disc, categories, subcategories, leaves.
pub const LEVELS: [LevelBand; 4] = [
    LevelBand { r0: 0.0, r1: 0.10 },
    LevelBand { r0: 0.10, r1: 0.40 },
    LevelBand { r0: 0.40, r1: 0.60 },
    LevelBand { r0: 0.60, r1: 0.65 },
];

#[derive(Debug, Clone, Serialize)]
pub struct TitleOptions {
    pub text: String,
    pub centered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SunburstSeries {
    pub start_angle_deg: f32,
    /// Segments keep taxonomy order; `None` means no sorting by value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub corner_radius: f32,
    pub border_width: f32,
    /// Hovering focuses the ancestor lineage; everything else dims.
    pub emphasis_ancestor_focus: bool,
    pub levels: Vec<LevelBand>,
    pub data: Vec<DecoratedNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOptions {
    pub title: TitleOptions,
    pub transparent_background: bool,
    pub animation: bool,
    pub series: SunburstSeries,
}

/// Build the full option tree for the current view state. Runs the style
/// engine over the whole tree every call.
pub fn build_options(tree: &[TaxonomyNode], view: &ViewState) -> ChartOptions {
    ChartOptions {
        title: TitleOptions { text: "C-Atlas Chart".to_string(), centered: true },
        transparent_background: true,
        animation: false,
        series: SunburstSeries {
            start_angle_deg: 83.5,
            sort: None,
            corner_radius: 3.0,
            border_width: 1.0,
            emphasis_ancestor_focus: true,
            levels: LEVELS.to_vec(),
            data: decorate(tree, view),
        },
    }
}

/// Tooltip text for a node, or `None` where tooltips are suppressed: on the
/// top-category ring and on direct children of the central category.
pub fn tooltip_for(node: &DecoratedNode) -> Option<String> {
    match node.parent_name.as_deref() {
        None => None,
        Some(CENTRAL_CATEGORY) => None,
        Some(_) => Some(taxonomy::names::full_title(&node.name).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn options() -> ChartOptions {
        build_options(&taxonomy::base_taxonomy(), &ViewState::new(1280.0))
    }

    #[test]
    fn test_levels_are_contiguous_and_bounded() {
        for pair in LEVELS.windows(2) {
            assert_eq!(pair[0].r1, pair[1].r0);
        }
        assert_eq!(LEVELS[0].r0, 0.0);
        assert_eq!(LEVELS[3].r1, 0.65);
    }

    #[test]
    fn test_options_carry_decorated_tree() {
        let opts = options();
        assert_eq!(opts.series.data.len(), 10);
        assert_eq!(opts.series.start_angle_deg, 83.5);
        assert!(!opts.animation);
    }

    #[test]
    fn test_tooltip_suppression() {
        let opts = options();
        let top = &opts.series.data[0]; // Materialism
        assert_eq!(tooltip_for(top), None);
        let central_child = &top.children[0];
        assert_eq!(tooltip_for(central_child), None);
        let leaf = &central_child.children[2]; // Functionalism
        assert_eq!(tooltip_for(leaf), Some("Functionalism".to_string()));

        let quantum = &opts.series.data[2];
        let hameroff = &quantum.children[0];
        assert_eq!(
            tooltip_for(hameroff),
            Some("Penrose-Hameroff's Orchestrated Objective Reduction".to_string())
        );
    }

    #[test]
    fn test_options_serialize() {
        let json = serde_json::to_value(options()).unwrap();
        let first = &json["series"]["data"][0];
        assert_eq!(first["name"], "Materialism");
        assert_eq!(first["color"], "#03045e");
        assert_eq!(first["label"]["position"], "inside");
    }

    #[test]
    fn test_rebuild_reflects_view_state() {
        let tree = taxonomy::base_taxonomy();
        let desktop = build_options(&tree, &ViewState::new(1280.0));
        let mobile = build_options(&tree, &ViewState::new(390.0));
        // Same colors, different label policy.
        assert_eq!(
            desktop.series.data[0].color,
            Color::parse_hex("#03045E")
        );
        let desktop_leaf = &desktop.series.data[0].children[0].children[0];
        let mobile_leaf = &mobile.series.data[0].children[0].children[0];
        assert!(desktop_leaf.label.is_some());
        assert!(mobile_leaf.label.is_none());
    }
}
