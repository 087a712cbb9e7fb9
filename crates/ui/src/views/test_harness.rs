use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use dna_core::QuizEvent;
use dna_core::model::{AnswerSet, MatchResult};
use services::{AppServices, QuizConfig, QuizLoopService, ScoringClient, ScoringError};
use storage::{InMemorySessionStorage, MatchCache, SessionStorage, Storage, StorageError};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{PortfolioView, QuizView};

/// Scoring double that answers with a fixed result or fails.
pub struct FakeScoring {
    calls: AtomicUsize,
    results: Option<Vec<MatchResult>>,
}

impl FakeScoring {
    pub fn succeeding(results: Vec<MatchResult>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            results: Some(results),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            results: None,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoringClient for FakeScoring {
    async fn score(&self, _answers: &AnswerSet) -> Result<Vec<MatchResult>, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .clone()
            .ok_or(ScoringError::TimedOut(Duration::from_secs(30)))
    }
}

/// Session storage that reads and writes but refuses to delete.
#[derive(Clone, Default)]
pub struct UndeletableSession {
    inner: InMemorySessionStorage,
}

impl UndeletableSession {
    pub fn storage() -> Storage {
        Storage {
            session: Arc::new(Self::default()),
        }
    }
}

#[async_trait]
impl SessionStorage for UndeletableSession {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("session is read-only".to_string()))
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Portfolio(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = props.view.clone();
    use_context_provider(|| view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Portfolio(name) => rsx! { PortfolioView { name } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub scoring: Arc<FakeScoring>,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until spawned tasks and resources have had a chance to finish.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub async fn dispatch(&mut self, event: QuizEvent) {
        let handles = self.quiz_handles.clone().expect("quiz handles");
        let dispatch = handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        self.settle().await;
    }

    /// Label of option `index` of the question on screen.
    pub fn option(&self, index: usize) -> String {
        let handles = self.quiz_handles.clone().expect("quiz handles");
        let vm = handles.vm();
        self.dom.in_runtime(|| {
            vm.read()
                .as_ref()
                .and_then(|vm| vm.controller().current_question())
                .map(|question| question.options()[index].clone())
                .expect("question on screen")
        })
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn seed_cached_matches(storage: &Storage, results: &[MatchResult]) {
    MatchCache::new(Arc::clone(&storage.session))
        .store(results)
        .await
        .expect("seed cache");
}

pub fn setup_view_harness(
    view: ViewKind,
    storage: Storage,
    scoring: Arc<FakeScoring>,
) -> ViewHarness {
    let config = QuizConfig::from_lookup(|_| None).expect("default config");
    setup_view_harness_with_config(view, storage, scoring, &config)
}

pub fn setup_view_harness_with_config(
    view: ViewKind,
    storage: Storage,
    scoring: Arc<FakeScoring>,
    config: &QuizConfig,
) -> ViewHarness {
    let services = AppServices::with_scoring(
        config,
        &storage,
        Arc::clone(&scoring) as Arc<dyn ScoringClient>,
    );
    let quiz_handles = match view {
        ViewKind::Quiz => Some(QuizTestHandles::default()),
        ViewKind::Portfolio(_) => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        scoring,
        quiz_handles,
    }
}
