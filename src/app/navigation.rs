//! Navigation methods for `AtlasApp`.
//!
//! Covers chart click handling (drill in/out, theory selection), the
//! arrow-key theory cycle, and the debounced viewport resize.

use std::time::{Duration, Instant};

use eframe::egui;

use c_atlas::chart::sunburst::{ChartHit, Segment};
use c_atlas::router::slugify;

use super::AtlasApp;

/// Resize events settle for this long before the chart re-decorates.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// One step of the circular theory cursor. `delta` is +1 or -1.
pub fn cycle(cursor: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match cursor {
        None => {
            if delta > 0 {
                0
            } else {
                len - 1
            }
        }
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
    };
    Some(next)
}

impl AtlasApp {
    /// Fold a chart click into navigation state.
    pub fn handle_chart_hit(&mut self, hit: ChartHit) {
        match hit {
            ChartHit::Node(seg) if seg.is_leaf => self.open_theory_from_click(seg),
            ChartHit::Node(seg) if seg.is_center() => {
                // Clicking the center drills back out one level.
                self.set_drill(seg.parent_name.clone());
            }
            ChartHit::Node(seg) => {
                log::debug!("drill into {}", seg.name);
                self.set_drill(Some(seg.name));
                // Drilling in hides any open detail panel.
                self.clicked_leaf = None;
                self.router.go_home();
            }
            ChartHit::Background => {
                self.set_drill(None);
                self.highlighted = None;
            }
        }
    }

    /// Change the drill root. Drilling into a non-central branch expands
    /// the mobile labels; drilling out collapses them again.
    fn set_drill(&mut self, root: Option<String>) {
        self.view.expanded_labels = matches!(
            root.as_deref(),
            Some(name) if name != c_atlas::taxonomy::CENTRAL_CATEGORY
        );
        self.drill_root = root;
        self.rebuild_options();
    }

    pub fn open_theory_from_click(&mut self, seg: Segment) {
        self.select_theory(&seg.name, seg.parent_name.as_deref());
    }

    /// Select a real segment's theory, whether by click or keyboard:
    /// collapse the mobile labels, remember the selection origin, and
    /// navigate. Missing documents for selected segments render the
    /// generic panel, not an error.
    pub fn select_theory(&mut self, name: &str, parent: Option<&str>) {
        self.view.expanded_labels = false;
        self.rebuild_options();
        self.clicked_leaf = Some(name.to_string());
        self.theory_cursor = self.leaf_names.iter().position(|n| n == name);
        let category = match self.index.category_of(name) {
            Some(category) => category.to_string(),
            // Not in the index: fall back to the segment's parent.
            None => parent.unwrap_or("uncategorized").to_lowercase(),
        };
        self.router.navigate_to_theory(&slugify(&category), &slugify(name));
    }

    /// Navigate without a selected segment (search, deep links). A load
    /// failure here gets the error panel.
    pub fn open_theory(&mut self, name: &str) {
        let category = self.index.category_of(name).unwrap_or("uncategorized").to_string();
        self.router.navigate_to_theory(&slugify(&category), &slugify(name));
    }

    /// Arrow keys cycle through every theory in chart order. Ignored while
    /// a text field has keyboard focus.
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (left, right) = ctx.input(|i| {
            (i.key_pressed(egui::Key::ArrowLeft), i.key_pressed(egui::Key::ArrowRight))
        });
        let delta = match (left, right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => return,
        };
        if let Some(next) = cycle(self.theory_cursor, self.leaf_names.len(), delta) {
            self.theory_cursor = Some(next);
            let name = self.leaf_names[next].clone();
            self.highlighted = Some(name.clone());
            self.select_theory(&name, None);
        }
    }

    /// Track viewport width changes and re-decorate once they settle.
    /// Crossing the mobile breakpoint changes label visibility, so the
    /// rebuild is deferred until the window stops moving.
    pub fn handle_resize(&mut self, ctx: &egui::Context) {
        let width = ctx.screen_rect().width();
        if (width - self.view.viewport_width).abs() > f32::EPSILON
            && self.pending_width != Some(width)
        {
            self.pending_width = Some(width);
            self.resize_deadline = Some(Instant::now() + RESIZE_DEBOUNCE);
        }

        if let (Some(pending), Some(deadline)) = (self.pending_width, self.resize_deadline) {
            if Instant::now() >= deadline {
                self.view.viewport_width = pending;
                self.view.expanded_labels = false;
                self.pending_width = None;
                self.resize_deadline = None;
                self.rebuild_options();
            }
        }
    }

    /// Close the detail panel and return to the home route.
    pub fn close_panel(&mut self) {
        self.clicked_leaf = None;
        self.router.go_home();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_left_wraps_once_over_all_leaves() {
        let len = 7;
        let mut cursor = None;
        let mut visited = Vec::new();
        for _ in 0..len {
            cursor = cycle(cursor, len, -1);
            visited.push(cursor.unwrap());
        }
        // First press lands on the last leaf, then walks backwards; after
        // exactly len presses every index was visited once.
        assert_eq!(visited[0], len - 1);
        let mut sorted = visited.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), len);
        assert_eq!(cycle(cursor, len, -1), Some(len - 1));
    }

    #[test]
    fn test_cycle_right_wraps() {
        assert_eq!(cycle(None, 3, 1), Some(0));
        assert_eq!(cycle(Some(2), 3, 1), Some(0));
        assert_eq!(cycle(Some(0), 3, -1), Some(2));
    }

    #[test]
    fn test_cycle_empty_is_none() {
        assert_eq!(cycle(None, 0, 1), None);
        assert_eq!(cycle(Some(3), 0, -1), None);
    }

    #[test]
    fn test_keyboard_selection_takes_the_segment_path() {
        use c_atlas::config::AppConfig;

        let mut app = AtlasApp::new(AppConfig::default()).unwrap();
        app.view.expanded_labels = true;

        // The arrow-key handler selects by leaf name; a keyboard-selected
        // theory must behave exactly like a clicked segment.
        let name = app.leaf_names[0].clone();
        app.select_theory(&name, None);

        assert_eq!(app.clicked_leaf.as_deref(), Some(name.as_str()));
        assert_eq!(app.theory_cursor, Some(0));
        assert!(!app.view.expanded_labels);
        assert!(app.router.path().ends_with(&c_atlas::router::slugify(&name)));
    }
}
