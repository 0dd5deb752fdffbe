//! The route/loader state machine.
//!
//! The URL path is the single source of truth: which panel is visible is
//! always a function of the parsed route plus the load outcome. Navigation
//! pushes a history entry and re-resolves; resolution either hits the cache
//! synchronously or spawns a background fetch whose result is polled from
//! the frame loop via `check_fetch`.
//!
//! Every spawned fetch carries the generation current at spawn time. A
//! navigation bumps the generation, so a slow fetch for a superseded route
//! is discarded when it finally lands instead of clobbering newer state.

pub mod slug;

use std::sync::{mpsc, Arc};

pub use slug::{deslugify, slugify};

use crate::theory::{DocumentCache, DocumentSource, LoadError, TheoryDocument};

/// A parsed theory route. `None` (from [`parse_path`]) means home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    pub category: String,
    pub theory_slug: String,
}

/// Parse a URL path. Zero or one non-empty segments is home; two or more
/// name a theory.
pub fn parse_path(path: &str) -> Option<RouteState> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let category = segments.next()?;
    let theory_slug = segments.next()?;
    Some(RouteState { category: category.to_string(), theory_slug: theory_slug.to_string() })
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading { category: String, slug: String },
    Loaded(Box<TheoryDocument>),
    Error(String),
}

struct FetchOutcome {
    generation: u64,
    name: String,
    result: Result<TheoryDocument, LoadError>,
}

pub struct Router {
    source: Arc<dyn DocumentSource>,
    cache: Arc<DocumentCache>,
    path: String,
    history: Vec<String>,
    history_idx: usize,
    state: LoadState,
    generation: u64,
    rx: Option<mpsc::Receiver<FetchOutcome>>,
}

impl Router {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            source,
            cache: Arc::new(DocumentCache::new()),
            path: "/".to_string(),
            history: vec!["/".to_string()],
            history_idx: 0,
            state: LoadState::Idle,
            generation: 0,
            rx: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Option<RouteState> {
        parse_path(&self.path)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// Push `/{category}/{slug}` and start resolving. The resolution is
    /// asynchronous: the detail panel will not have updated when this
    /// returns unless the document was already cached.
    pub fn navigate_to_theory(&mut self, category: &str, slug: &str) {
        self.push(format!("/{}/{}", category, slug));
    }

    /// Push the home path; any in-flight fetch becomes stale.
    pub fn go_home(&mut self) {
        self.push("/".to_string());
    }

    pub fn can_go_back(&self) -> bool {
        self.history_idx > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_idx + 1 < self.history.len()
    }

    /// Walk one step back in history without pushing a new entry.
    pub fn go_back(&mut self) {
        if self.can_go_back() {
            self.history_idx -= 1;
            self.path = self.history[self.history_idx].clone();
            self.resolve();
        }
    }

    /// Walk one step forward in history without pushing a new entry.
    pub fn go_forward(&mut self) {
        if self.can_go_forward() {
            self.history_idx += 1;
            self.path = self.history[self.history_idx].clone();
            self.resolve();
        }
    }

    fn push(&mut self, path: String) {
        if self.history[self.history_idx] != path {
            // Truncate forward history before pushing
            self.history.truncate(self.history_idx + 1);
            self.history.push(path.clone());
            self.history_idx = self.history.len() - 1;
        }
        self.path = path;
        self.resolve();
    }

    /// Re-derive the load state from the current path. Supersedes any
    /// in-flight fetch.
    fn resolve(&mut self) {
        self.generation += 1;
        self.rx = None;

        let route = match parse_path(&self.path) {
            Some(route) => route,
            None => {
                self.state = LoadState::Idle;
                return;
            }
        };

        let name = deslugify(&route.theory_slug);
        if let Some(doc) = self.cache.get(&name) {
            self.state = LoadState::Loaded(Box::new(doc));
            return;
        }

        log::info!("loading theory {}/{}", route.category, route.theory_slug);
        self.state = LoadState::Loading {
            category: route.category.clone(),
            slug: route.theory_slug.clone(),
        };

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        std::thread::spawn(move || {
            let result = source.fetch(&name);
            let _ = tx.send(FetchOutcome { generation, name, result });
        });
    }

    /// Poll the fetch channel and fold any result into the state machine.
    /// Call once per frame. Errors are converted to state here; nothing
    /// propagates further.
    pub fn check_fetch(&mut self) {
        let Some(rx) = &self.rx else { return };
        let Ok(outcome) = rx.try_recv() else { return };
        self.rx = None;

        if outcome.generation != self.generation {
            log::debug!("discarding stale fetch for {}", outcome.name);
            return;
        }

        match outcome.result {
            Ok(doc) => {
                self.cache.insert(&outcome.name, doc.clone());
                self.state = LoadState::Loaded(Box::new(doc));
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", outcome.name, e);
                self.state = LoadState::Error(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct StaticSource {
        docs: Vec<(String, TheoryDocument)>,
        delay: Duration,
    }

    impl StaticSource {
        fn with_doc(name: &str, title: &str) -> Self {
            let mut doc = TheoryDocument::default();
            doc.id_and_class.theory_title = title.to_string();
            Self { docs: vec![(name.to_string(), doc)], delay: Duration::ZERO }
        }

        fn delayed(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    impl DocumentSource for StaticSource {
        fn fetch(&self, name: &str) -> Result<TheoryDocument, LoadError> {
            std::thread::sleep(self.delay);
            self.docs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, d)| d.clone())
                .ok_or_else(|| LoadError::NotFound(name.to_string()))
        }
    }

    fn pump(router: &mut Router) {
        for _ in 0..200 {
            router.check_fetch();
            if !router.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("fetch never completed");
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("/"), None);
        assert_eq!(parse_path(""), None);
        assert_eq!(parse_path("/materialism"), None);
        assert_eq!(
            parse_path("/materialism/functionalism"),
            Some(RouteState {
                category: "materialism".into(),
                theory_slug: "functionalism".into()
            })
        );
        // Extra segments are ignored, not an error.
        assert!(parse_path("/a/b/c").is_some());
    }

    #[test]
    fn test_navigate_loads_and_caches() {
        let source = StaticSource::with_doc("Functionalism", "Functionalism");
        let mut router = Router::new(Arc::new(source));

        router.navigate_to_theory("materialism", "functionalism");
        assert!(router.is_loading());
        pump(&mut router);

        match router.state() {
            LoadState::Loaded(doc) => assert_eq!(doc.panel_title(), "Functionalism"),
            other => panic!("expected Loaded, got {:?}", other),
        }

        // Second visit resolves synchronously from cache.
        router.go_home();
        router.navigate_to_theory("materialism", "functionalism");
        assert!(matches!(router.state(), LoadState::Loaded(_)));
    }

    #[test]
    fn test_missing_theory_becomes_error_state() {
        let source = StaticSource::with_doc("Functionalism", "Functionalism");
        let mut router = Router::new(Arc::new(source));

        router.navigate_to_theory("materialism", "unknown");
        pump(&mut router);

        match router.state() {
            LoadState::Error(msg) => assert!(msg.contains("Theory not found"), "{}", msg),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_go_home_during_slow_fetch_stays_idle() {
        let source = StaticSource::with_doc("Functionalism", "Functionalism")
            .delayed(Duration::from_millis(80));
        let mut router = Router::new(Arc::new(source));

        router.navigate_to_theory("materialism", "functionalism");
        assert!(router.is_loading());
        router.go_home();
        assert_eq!(router.state(), &LoadState::Idle);

        // Let the superseded fetch land, then poll: it must be discarded.
        std::thread::sleep(Duration::from_millis(160));
        router.check_fetch();
        assert_eq!(router.state(), &LoadState::Idle);
        assert_eq!(router.path(), "/");
    }

    #[test]
    fn test_history_back_and_forward() {
        let mut source = StaticSource::with_doc("Functionalism", "Functionalism");
        let mut doc = TheoryDocument::default();
        doc.id_and_class.theory_title = "Seth's \"Beast Machine\" Theory".to_string();
        source.docs.push(("Seth".to_string(), doc));
        let mut router = Router::new(Arc::new(source));

        router.navigate_to_theory("materialism", "functionalism");
        pump(&mut router);
        router.navigate_to_theory("materialism", "seth");
        pump(&mut router);

        assert!(router.can_go_back());
        router.go_back();
        assert_eq!(router.path(), "/materialism/functionalism");
        assert!(matches!(router.state(), LoadState::Loaded(_)));

        router.go_back();
        assert_eq!(router.path(), "/");
        assert_eq!(router.state(), &LoadState::Idle);
        assert!(!router.can_go_back());

        router.go_forward();
        assert_eq!(router.path(), "/materialism/functionalism");
    }

    #[test]
    fn test_push_same_path_does_not_grow_history() {
        let source = StaticSource::with_doc("Functionalism", "Functionalism");
        let mut router = Router::new(Arc::new(source));
        router.go_home();
        router.go_home();
        assert!(!router.can_go_back());
        assert!(!router.can_go_forward());
    }
}
