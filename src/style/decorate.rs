//! Tree decoration: derive per-node color and label styling from depth,
//! sibling index, and the parent's resolved color.
//!
//! Decoration is a pure function of the static taxonomy and a `ViewState`;
//! every chart rebuild produces a fresh decorated copy and discards it after
//! handing it to the painter. Nothing here mutates the source tree.

use serde::Serialize;

use crate::taxonomy::{TaxonomyNode, CENTRAL_CATEGORY};

use super::{desaturate, lighten, Color, FALLBACK, PALETTE};

/// Viewport width at or below which the chart uses the mobile label policy.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// The view-dependent inputs to decoration, passed by value into every
/// rebuild instead of living in module-level mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Set when the user drills into a non-central branch; cleared on
    /// drill-out, leaf selection, background click, and resize.
    pub expanded_labels: bool,
    pub viewport_width: f32,
}

impl ViewState {
    pub fn new(viewport_width: f32) -> Self {
        Self { expanded_labels: false, viewport_width }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_BREAKPOINT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelStyle {
    pub position: LabelPosition,
    pub font_size: f32,
}

/// A taxonomy node with derived rendering attributes. `label` is `None`
/// when the label is suppressed entirely (mobile-collapsed outer rings).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelStyle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DecoratedNode>,
}

impl DecoratedNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Decorate the whole tree. Top-level colors cycle through [`PALETTE`] by
/// occurrence index; deeper levels derive from the parent color.
pub fn decorate(nodes: &[TaxonomyNode], view: &ViewState) -> Vec<DecoratedNode> {
    let mut palette_idx = 0usize;
    walk(nodes, 0, None, &mut palette_idx, view)
}

fn walk(
    nodes: &[TaxonomyNode],
    depth: usize,
    parent: Option<(Color, &str)>,
    palette_idx: &mut usize,
    view: &ViewState,
) -> Vec<DecoratedNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let color = node_color(depth, i, parent, palette_idx);
            let label = node_label(depth, parent.map(|(_, name)| name), view);
            let children = walk(
                &node.children,
                depth + 1,
                Some((color, node.name.as_str())),
                palette_idx,
                view,
            );
            DecoratedNode {
                name: node.name.clone(),
                value: node.value,
                parent_name: parent.map(|(_, name)| name.to_string()),
                color,
                label,
                children,
            }
        })
        .collect()
}

fn node_color(
    depth: usize,
    sibling_idx: usize,
    parent: Option<(Color, &str)>,
    palette_idx: &mut usize,
) -> Color {
    match depth {
        0 => {
            let c = PALETTE[*palette_idx % PALETTE.len()];
            *palette_idx += 1;
            c
        }
        1 => match parent {
            // 20-35% lightening, varied by sibling index
            Some((pc, _)) => lighten(pc, 20 + (sibling_idx as u32 * 3) % 15),
            None => FALLBACK,
        },
        _ => match parent {
            // 25-45% desaturation, varied by sibling index
            Some((pc, _)) => desaturate(pc, 25 + (sibling_idx as u32 * 2) % 20),
            None => FALLBACK,
        },
    }
}

fn node_label(depth: usize, parent_name: Option<&str>, view: &ViewState) -> Option<LabelStyle> {
    if depth == 0 {
        // Top-level category labels always render inside their segment.
        return Some(LabelStyle { position: LabelPosition::Inside, font_size: 12.0 });
    }

    let central_child = depth == 1 && parent_name == Some(CENTRAL_CATEGORY);
    let base = if central_child {
        LabelStyle { position: LabelPosition::Inside, font_size: 12.0 }
    } else {
        LabelStyle { position: LabelPosition::Outside, font_size: 10.0 }
    };

    if !view.is_mobile() {
        return Some(base);
    }

    if view.expanded_labels {
        // Drilled-in on mobile: depth-1 labels move inside and grow.
        if depth == 1 {
            Some(LabelStyle { position: LabelPosition::Inside, font_size: 12.0 })
        } else {
            Some(base)
        }
    } else {
        // Collapsed on mobile: outer rings lose their labels, depth-1 shrinks.
        if depth >= 2 {
            None
        } else {
            Some(LabelStyle { font_size: 8.0, ..base })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;

    fn desktop() -> ViewState {
        ViewState::new(1280.0)
    }

    #[test]
    fn test_top_level_colors_cycle_palette_in_order() {
        let tree = taxonomy::base_taxonomy();
        let decorated = decorate(&tree, &desktop());
        for (i, node) in decorated.iter().enumerate() {
            assert_eq!(node.color, PALETTE[i % PALETTE.len()], "category {}", node.name);
        }
    }

    #[test]
    fn test_decoration_is_deterministic() {
        let tree = taxonomy::base_taxonomy();
        assert_eq!(decorate(&tree, &desktop()), decorate(&tree, &desktop()));
    }

    #[test]
    fn test_central_children_labeled_inside_others_outside() {
        let tree = taxonomy::base_taxonomy();
        for top in decorate(&tree, &desktop()) {
            let expect = if top.name == CENTRAL_CATEGORY {
                LabelPosition::Inside
            } else {
                LabelPosition::Outside
            };
            for child in &top.children {
                assert_eq!(child.label.unwrap().position, expect, "{}", child.name);
            }
        }
    }

    #[test]
    fn test_depth_two_labels_always_outside() {
        let tree = taxonomy::base_taxonomy();
        for top in decorate(&tree, &desktop()) {
            for child in &top.children {
                for leaf in &child.children {
                    let label = leaf.label.expect("desktop labels visible");
                    assert_eq!(label.position, LabelPosition::Outside);
                    assert_eq!(label.font_size, 10.0);
                }
            }
        }
    }

    #[test]
    fn test_depth_one_color_is_lightened_parent() {
        let tree = taxonomy::base_taxonomy();
        let decorated = decorate(&tree, &desktop());
        let top = &decorated[0];
        for (i, child) in top.children.iter().enumerate() {
            let expected = lighten(top.color, 20 + (i as u32 * 3) % 15);
            assert_eq!(child.color, expected);
            assert_eq!(child.parent_name.as_deref(), Some(top.name.as_str()));
        }
    }

    #[test]
    fn test_mobile_collapsed_hides_outer_ring_labels() {
        let tree = taxonomy::base_taxonomy();
        let view = ViewState::new(390.0);
        for top in decorate(&tree, &view) {
            assert!(top.label.is_some(), "category labels survive mobile");
            for child in &top.children {
                if let Some(label) = child.label {
                    assert_eq!(label.font_size, 8.0);
                }
                for leaf in &child.children {
                    assert!(leaf.label.is_none(), "{} should be hidden", leaf.name);
                }
            }
        }
    }

    #[test]
    fn test_mobile_expanded_moves_depth_one_inside() {
        let tree = taxonomy::base_taxonomy();
        let view = ViewState { expanded_labels: true, viewport_width: 390.0 };
        for top in decorate(&tree, &view) {
            for child in &top.children {
                let label = child.label.expect("expanded labels visible");
                assert_eq!(label.position, LabelPosition::Inside);
                assert_eq!(label.font_size, 12.0);
                for leaf in &child.children {
                    assert_eq!(leaf.label.unwrap().position, LabelPosition::Outside);
                }
            }
        }
    }
}
