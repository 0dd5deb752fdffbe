//! Toolbar rendering for `AtlasApp`.
//!
//! Draws the home/back/forward controls, the theory search field with its
//! results popup, the expanded-labels toggle, and the feedback button.

use eframe::egui;

use c_atlas::router::slugify;
use c_atlas::taxonomy::names::full_title;

/// A search hit, precomputed so the popup borrows nothing from the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub title: String,
    pub category: String,
}

const MIN_QUERY_LEN: usize = 2;
const MAX_RESULTS: usize = 8;

use super::AtlasApp;

impl AtlasApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            if ui.button("\u{2302}").on_hover_text("Home").clicked() {
                self.clicked_leaf = None;
                self.highlighted = None;
                self.drill_root = None;
                self.router.go_home();
            }

            // Back / Forward
            if ui
                .add_enabled(
                    self.router.can_go_back(),
                    egui::Button::new("\u{25C0}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.clicked_leaf = None;
                self.router.go_back();
            }
            if ui
                .add_enabled(
                    self.router.can_go_forward(),
                    egui::Button::new("\u{25B6}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.clicked_leaf = None;
                self.router.go_forward();
            }

            ui.separator();

            // Search
            let response = ui.add_sized(
                [220.0, 24.0],
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Search theories..."),
            );
            let hits = self.search(&self.search_query);
            let popup_id = ui.make_persistent_id("search_results");
            if response.changed() {
                ui.memory_mut(|mem| {
                    if hits.is_empty() {
                        mem.close_popup();
                    } else {
                        mem.open_popup(popup_id);
                    }
                });
            }
            egui::popup::popup_above_or_below_widget(
                ui,
                popup_id,
                &response,
                egui::AboveOrBelow::Below,
                egui::popup::PopupCloseBehavior::CloseOnClick,
                |ui| {
                    ui.set_min_width(260.0);
                    for hit in &hits {
                        let label = format!("{} ({})", hit.title, hit.category);
                        if ui.selectable_label(false, label).clicked() {
                            self.highlighted = Some(hit.name.clone());
                            self.clicked_leaf = None;
                            let name = hit.name.clone();
                            self.open_theory(&name);
                            self.search_query.clear();
                        }
                    }
                },
            );

            if self.view.is_mobile() {
                let prev = self.view.expanded_labels;
                ui.toggle_value(&mut self.view.expanded_labels, "Labels");
                if self.view.expanded_labels != prev {
                    self.rebuild_options();
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(4.0);
                if ui.button("Feedback").clicked() {
                    self.feedback.open = true;
                }
                if self.router.is_loading() {
                    ui.spinner();
                }
            });
        });
    }

    /// Case-insensitive substring match over title, category, and slug.
    /// Queries shorter than two characters return nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }
        self.index
            .entries()
            .filter(|entry| {
                let title = full_title(&entry.name).to_lowercase();
                title.contains(&query)
                    || entry.category.to_lowercase().contains(&query)
                    || slugify(&entry.name).contains(&query)
            })
            .take(MAX_RESULTS)
            .map(|entry| SearchHit {
                name: entry.name.clone(),
                title: full_title(&entry.name).to_string(),
                category: entry.category.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c_atlas::config::AppConfig;

    fn app() -> AtlasApp {
        AtlasApp::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_short_queries_return_nothing() {
        let app = app();
        assert!(app.search("").is_empty());
        assert!(app.search("g").is_empty());
    }

    #[test]
    fn test_search_matches_full_title() {
        let app = app();
        let hits = app.search("global workspace");
        assert!(hits.iter().any(|h| h.name == "Baars-Dehaene"), "hits: {:?}", hits);
    }

    #[test]
    fn test_search_is_capped() {
        let app = app();
        // Every theory under Materialism matches its category name.
        assert_eq!(app.search("materialism").len(), MAX_RESULTS);
    }

    #[test]
    fn test_search_matches_slug() {
        let app = app();
        let hits = app.search("penrose-hameroff");
        assert!(hits.iter().any(|h| h.name == "Penrose-Hameroff"));
    }
}
