//! `AtlasApp` - the top-level egui application state.
//!
//! This module declares the `AtlasApp` struct and its frame loop.
//! All methods are split across the sibling sub-modules:
//!
//! - `navigation` - chart clicks, keyboard cycling, resize debounce
//! - `toolbar`    - history controls, search, feedback button
//! - `content`    - sunburst viewport and the detail panels
//! - `feedback`   - the feedback form popup

pub mod content;
pub mod feedback;
pub mod navigation;
pub mod toolbar;

use std::sync::Arc;
use std::time::Instant;

use eframe::egui;

use c_atlas::chart::{build_options, ChartOptions};
use c_atlas::config::AppConfig;
use c_atlas::router::Router;
use c_atlas::style::ViewState;
use c_atlas::taxonomy::{self, TaxonomyNode, TheoryIndex};
use c_atlas::theory::{HttpSource, LoadError};

use feedback::FeedbackForm;

pub struct AtlasApp {
    pub config: AppConfig,
    pub router: Router,
    pub tree: Vec<TaxonomyNode>,
    pub index: TheoryIndex,
    /// All theory names in chart order, for arrow-key cycling.
    pub leaf_names: Vec<String>,
    pub view: ViewState,
    pub options: ChartOptions,
    /// Branch currently occupying the center disc, if drilled in.
    pub drill_root: Option<String>,
    /// Segment to outline, set from search results.
    pub highlighted: Option<String>,
    /// Position in `leaf_names` of the last keyboard-visited theory.
    pub theory_cursor: Option<usize>,
    /// Set when the current route came from selecting a real segment
    /// (click or arrow key). A missing document then renders the generic
    /// panel instead of the error panel.
    pub clicked_leaf: Option<String>,
    // Resize debounce
    pub pending_width: Option<f32>,
    pub resize_deadline: Option<Instant>,
    // Search
    pub search_query: String,
    pub feedback: FeedbackForm,
}

impl AtlasApp {
    pub fn new(config: AppConfig) -> Result<Self, LoadError> {
        let source = HttpSource::new(&config.api_base_url)?;
        let tree = taxonomy::base_taxonomy();
        let index = TheoryIndex::new(&tree);
        let leaf_names = taxonomy::flatten_leaves(&tree);
        let view = ViewState::new(1280.0);
        let options = build_options(&tree, &view);
        let feedback = FeedbackForm::new(config.api_base_url.clone());
        Ok(Self {
            config,
            router: Router::new(Arc::new(source)),
            tree,
            index,
            leaf_names,
            view,
            options,
            drill_root: None,
            highlighted: None,
            theory_cursor: None,
            clicked_leaf: None,
            pending_width: None,
            resize_deadline: None,
            search_query: String::new(),
            feedback,
        })
    }

    /// Re-run the style engine after a view-state change.
    pub fn rebuild_options(&mut self) {
        self.options = build_options(&self.tree, &self.view);
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.router.check_fetch();
        self.feedback.poll();
        self.handle_resize(ctx);
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("{} v{}", self.config.title, self.config.version));
            });
        });

        self.draw_detail_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_chart(ui);
        });

        self.feedback.draw(ctx);

        // Keep polling while anything is in flight or a timer is pending.
        if self.router.is_loading() || self.feedback.busy() || self.resize_deadline.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
