//! Main viewport rendering for `AtlasApp`: the sunburst chart with its
//! tooltip, and the right-hand detail panel in its four states (hidden,
//! loading, loaded, error/generic).

use eframe::egui;

use c_atlas::chart::{sunburst, tooltip_for};
use c_atlas::router::{deslugify, LoadState};
use c_atlas::style::DecoratedNode;
use c_atlas::theory::TheoryDocument;

use super::AtlasApp;

impl AtlasApp {
    /// Render the sunburst and handle pointer activity on it.
    pub fn draw_chart(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(&self.config.title);
        });

        let output = sunburst::draw(
            ui,
            &self.options,
            self.drill_root.as_deref(),
            self.highlighted.as_deref(),
        );

        if let (Some(seg), Some(pos)) = (&output.hovered, output.hover_pos) {
            if let Some(node) = find_decorated(&self.options.series.data, &seg.name) {
                if let Some(text) = tooltip_for(node) {
                    egui::show_tooltip_at(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new("chart_tooltip"),
                        pos + egui::vec2(12.0, 12.0),
                        |ui| ui.label(text),
                    );
                }
            }
        }

        if let Some(hit) = output.clicked {
            self.handle_chart_hit(hit);
        }
    }

    /// Render whichever detail panel the load state calls for.
    pub fn draw_detail_panel(&mut self, ctx: &egui::Context) {
        let state = self.router.state().clone();
        match state {
            LoadState::Idle => {}
            LoadState::Loading { .. } => {
                self.side_panel(ctx, |ui| {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.label("Loading theory data...");
                    });
                });
            }
            LoadState::Loaded(doc) => {
                self.side_panel(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| draw_document(ui, &doc));
                });
            }
            LoadState::Error(message) => {
                // A click on a real segment with no document behind it gets
                // the generic panel; typed or historical routes get the error.
                if self.clicked_leaf.is_some() {
                    let title = self
                        .router
                        .route()
                        .map(|r| deslugify(&r.theory_slug))
                        .unwrap_or_default();
                    self.side_panel(ctx, |ui| {
                        ui.heading(&title);
                        ui.add_space(8.0);
                        ui.label("No detailed information is available for this theory yet.");
                    });
                } else {
                    self.side_panel(ctx, |ui| {
                        ui.heading("Failed to Load Theory");
                        ui.add_space(8.0);
                        ui.colored_label(egui::Color32::from_rgb(220, 80, 80), &message);
                    });
                }
            }
        }
    }

    fn side_panel(&mut self, ctx: &egui::Context, add_contents: impl FnOnce(&mut egui::Ui)) {
        let mut close = false;
        egui::SidePanel::right("detail")
            .default_width(420.0)
            .min_width(280.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("\u{2715}").on_hover_text("Close").clicked() {
                            close = true;
                        }
                    });
                });
                add_contents(ui);
            });
        if close {
            self.close_panel();
        }
    }
}

fn find_decorated<'a>(nodes: &'a [DecoratedNode], name: &str) -> Option<&'a DecoratedNode> {
    for node in nodes {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = find_decorated(&node.children, name) {
            return Some(found);
        }
    }
    None
}

fn field(ui: &mut egui::Ui, label: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    ui.label(egui::RichText::new(label).strong());
    ui.label(value);
    ui.add_space(6.0);
}

fn draw_document(ui: &mut egui::Ui, doc: &TheoryDocument) {
    ui.heading(doc.panel_title());
    if !doc.id_and_class.core_identity_tagline.trim().is_empty() {
        ui.label(egui::RichText::new(&doc.id_and_class.core_identity_tagline).italics());
    }
    let placement = match doc.id_and_class.subcategory.trim() {
        "" => doc.id_and_class.category.clone(),
        sub => format!("{} / {}", doc.id_and_class.category, sub),
    };
    if !placement.trim().is_empty() {
        ui.small(placement);
    }
    ui.add_space(8.0);

    field(ui, "Summary", &doc.id_and_class.summary);
    if !doc.id_and_class.associated_thinkers.is_empty() {
        field(ui, "Thinkers", &doc.id_and_class.associated_thinkers.join(", "));
    }
    if !doc.id_and_class.classification_tags.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for tag in &doc.id_and_class.classification_tags {
                ui.small_button(tag);
            }
        });
        ui.add_space(6.0);
    }

    egui::CollapsingHeader::new("Conceptual ground").default_open(true).show(ui, |ui| {
        let g = &doc.conceptual_ground;
        field(ui, "Identity claim", &g.explanatory_identity_claim);
        field(ui, "Ontological status", &g.ontological_status);
        field(ui, "Mind-body relationship", &g.mind_body_relationship);
        field(ui, "Primitive or emergent", &g.primitive_or_emergent_status);
        field(ui, "Emergence type", &g.emergence_type);
        field(ui, "Subjectivity and intentionality", &g.subjectivity_and_intentionality);
        field(ui, "Qualia", &g.qualia_account);
        field(ui, "Ontological commitments", &g.ontological_commitments);
        field(ui, "Epistemic access", &g.epistemic_access);
        field(ui, "Constituents and structure", &g.constituents_and_structure);
    });

    egui::CollapsingHeader::new("Mechanism and dynamics").show(ui, |ui| {
        let m = &doc.mechanism_and_dynamics;
        field(ui, "Scope", &m.scope_of_consciousness);
        field(ui, "Distinctive mechanism", &m.distinctive_mechanism_or_principle);
        field(ui, "Dynamics of emergence", &m.dynamics_of_emergence);
        field(ui, "Location and distribution", &m.location_and_distribution);
        field(ui, "Causation and functional role", &m.causation_and_functional_role);
        field(ui, "Integration or binding", &m.integration_or_binding);
        field(ui, "Information flow", &m.information_flow_or_representation);
        field(ui, "Evolutionary account", &m.evolutionary_account);
        if !m.core_claims_and_evidence.is_empty() {
            ui.label(egui::RichText::new("Core claims and evidence").strong());
            for claim in &m.core_claims_and_evidence {
                ui.label(format!("\u{2022} {}", claim));
            }
            ui.add_space(6.0);
        }
        field(ui, "Basis of belief", &m.basis_of_belief_or_evidence_type);
    });

    egui::CollapsingHeader::new("Empirics and critiques").show(ui, |ui| {
        let e = &doc.empirics_and_critiques;
        field(ui, "Testability", &e.testability_status);
        field(ui, "Known tests", &e.known_empirical_interventions_or_tests);
        field(ui, "Criticisms and tensions", &e.criticisms_and_tensions);
        field(ui, "Open questions", &e.open_questions_and_limitations);
        field(ui, "Ontological coherence", &e.ontological_coherence);
    });

    egui::CollapsingHeader::new("Implications").show(ui, |ui| {
        for (label, stance) in [
            ("AI consciousness", &doc.implications.ai_consciousness),
            ("Survival beyond death", &doc.implications.survival_beyond_death),
            ("Meaning and purpose", &doc.implications.meaning_and_purpose),
            ("Virtual immortality", &doc.implications.virtual_immortality),
        ] {
            if stance.stance.trim().is_empty() && stance.rationale.trim().is_empty() {
                continue;
            }
            ui.label(egui::RichText::new(label).strong());
            if !stance.stance.trim().is_empty() {
                ui.label(&stance.stance);
            }
            if !stance.rationale.trim().is_empty() {
                ui.small(&stance.rationale);
            }
            ui.add_space(6.0);
        }
    });

    let relations = &doc.relations_and_sources;
    if !relations.related_theories.is_empty() || !relations.sources_and_references.is_empty() {
        egui::CollapsingHeader::new("Relations and sources").show(ui, |ui| {
            for related in &relations.related_theories {
                ui.label(format!("\u{2022} {}: {}", related.name, related.relationship));
            }
            if !relations.sources_and_references.is_empty() {
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Sources").strong());
                for source in &relations.sources_and_references {
                    match source.year {
                        Some(year) => {
                            ui.small(format!("{} ({})", source.title_with_names, year))
                        }
                        None => ui.small(&source.title_with_names),
                    };
                }
            }
        });
    }
}
