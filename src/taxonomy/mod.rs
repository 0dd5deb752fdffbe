//! The static taxonomy of consciousness theories.
//!
//! The tree is immutable configuration: three levels for the Materialism
//! branch (category → subcategory → theory) and two for every other category
//! (leaves hang directly under the top level). A node is a leaf iff it has no
//! children, and only leaves carry a `value`.

mod data;
pub mod names;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use data::base_taxonomy;

/// The distinguished root category whose subtree gets special label and
/// tooltip treatment (it dominates the chart's inner rings).
pub const CENTRAL_CATEGORY: &str = "Materialism";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    pub fn leaf(name: &str) -> Self {
        Self { name: name.to_string(), value: Some(1), children: Vec::new() }
    }

    pub fn branch(name: &str, children: Vec<TaxonomyNode>) -> Self {
        Self { name: name.to_string(), value: None, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Depth-first ordered list of all leaf names. This is the keyboard-cycling
/// order, so it must be stable across rebuilds.
pub fn flatten_leaves(nodes: &[TaxonomyNode]) -> Vec<String> {
    let mut out = Vec::new();
    fn visit(nodes: &[TaxonomyNode], out: &mut Vec<String>) {
        for node in nodes {
            if node.is_leaf() {
                out.push(node.name.clone());
            } else {
                visit(&node.children, out);
            }
        }
    }
    visit(nodes, &mut out);
    out
}

/// Depth-first search for the first node with the given name.
pub fn find_node<'a>(nodes: &'a [TaxonomyNode], name: &str) -> Option<&'a TaxonomyNode> {
    for node in nodes {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, name) {
            return Some(found);
        }
    }
    None
}

/// Where a theory sits in the taxonomy. Categories are lowercased because
/// they double as URL path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheoryMapping {
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
}

/// Name → placement lookup for every leaf theory, built once from the tree.
pub struct TheoryIndex {
    map: HashMap<String, TheoryMapping>,
    order: Vec<String>,
}

impl TheoryIndex {
    pub fn new(tree: &[TaxonomyNode]) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for category in tree {
            for child in &category.children {
                if child.is_leaf() {
                    // Irregular case: theory directly under a top category.
                    insert(&mut map, &mut order, &child.name, &category.name, None);
                } else {
                    for theory in &child.children {
                        insert(&mut map, &mut order, &theory.name, &category.name, Some(&child.name));
                    }
                }
            }
        }
        Self { map, order }
    }

    pub fn category_of(&self, theory_name: &str) -> Option<&str> {
        self.map.get(theory_name).map(|m| m.category.as_str())
    }

    pub fn mapping(&self, theory_name: &str) -> Option<&TheoryMapping> {
        self.map.get(theory_name)
    }

    /// All mappings in taxonomy order (search results iterate this).
    pub fn entries(&self) -> impl Iterator<Item = &TheoryMapping> {
        self.order.iter().filter_map(|name| self.map.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn insert(
    map: &mut HashMap<String, TheoryMapping>,
    order: &mut Vec<String>,
    name: &str,
    category: &str,
    subcategory: Option<&str>,
) {
    if map
        .insert(
            name.to_string(),
            TheoryMapping {
                name: name.to_string(),
                category: category.to_lowercase(),
                subcategory: subcategory.map(|s| s.to_lowercase()),
            },
        )
        .is_none()
    {
        order.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_leaves_carry_value() {
        fn check(nodes: &[TaxonomyNode]) {
            for node in nodes {
                if node.is_leaf() {
                    assert_eq!(node.value, Some(1), "{}", node.name);
                } else {
                    assert_eq!(node.value, None, "{}", node.name);
                    check(&node.children);
                }
            }
        }
        check(&base_taxonomy());
    }

    #[test]
    fn test_flatten_leaves_depth_first() {
        let leaves = flatten_leaves(&base_taxonomy());
        assert_eq!(leaves.first().map(String::as_str), Some("Eliminative"));
        assert_eq!(leaves.last().map(String::as_str), Some("Davies"));
        assert!(leaves.len() > 150);
    }

    #[test]
    fn test_find_node() {
        let tree = base_taxonomy();
        let node = find_node(&tree, "Functionalism").unwrap();
        assert!(node.is_leaf());
        assert!(find_node(&tree, "Neurobiological").is_some());
        assert!(find_node(&tree, "no such theory").is_none());
    }

    #[test]
    fn test_index_three_level_placement() {
        let tree = base_taxonomy();
        let index = TheoryIndex::new(&tree);
        let m = index.mapping("Functionalism").unwrap();
        assert_eq!(m.category, "materialism");
        assert_eq!(m.subcategory.as_deref(), Some("philosophical"));
    }

    #[test]
    fn test_index_irregular_two_level_placement() {
        let tree = base_taxonomy();
        let index = TheoryIndex::new(&tree);
        let m = index.mapping("Penrose-Hameroff").unwrap();
        assert_eq!(m.category, "quantum");
        assert_eq!(m.subcategory, None);
    }

    #[test]
    fn test_full_title_lookup_with_fallback() {
        assert_eq!(names::full_title("Functionalism"), "Functionalism");
        assert_eq!(
            names::full_title("Penrose-Hameroff"),
            "Penrose-Hameroff's Orchestrated Objective Reduction"
        );
        assert_eq!(names::full_title("Unlisted"), "Unlisted");
    }
}
