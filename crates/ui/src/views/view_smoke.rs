use dna_core::QuizEvent;
use dna_core::model::MatchResult;
use services::QuizConfig;
use storage::{MATCHES_KEY, SessionStorage, Storage};

use super::test_harness::{
    FakeScoring, UndeletableSession, ViewHarness, ViewKind, seed_cached_matches,
    setup_view_harness, setup_view_harness_with_config,
};

fn alice() -> Vec<MatchResult> {
    vec![MatchResult::new("Alice", 92, "Great fit")]
}

async fn answer_all(harness: &mut ViewHarness) {
    for step in 1..=6 {
        let html = harness.render();
        let label = format!("Question {step} of 6");
        assert!(html.contains(&label), "missing {label} in {html}");
        let option = harness.option(0);
        harness.dispatch(QuizEvent::OptionSelected(option)).await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Storage::in_memory(),
        FakeScoring::succeeding(alice()),
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 6"), "missing progress in {html}");
    assert!(html.contains("Choose your visual mood:"), "missing prompt in {html}");
    assert!(html.contains("dna-btn"), "missing option buttons in {html}");
    assert!(html.contains("Luxury"), "missing option in {html}");
    assert!(!html.contains("quiz-subtitle"), "subtitle still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_cached_results_skip_questions() {
    let storage = Storage::in_memory();
    seed_cached_matches(&storage, &alice()).await;
    let scoring = FakeScoring::succeeding(Vec::new());
    let mut harness = setup_view_harness(ViewKind::Quiz, storage, scoring);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Your Curated Matches"), "missing heading in {html}");
    assert!(html.contains("92%"), "missing score in {html}");
    assert!(html.contains("Great fit"), "missing reason in {html}");
    assert!(html.contains("/portfolio/Alice"), "missing link in {html}");
    assert!(!html.contains("Question 1"), "question shown in {html}");
    assert_eq!(harness.scoring.calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_links_ignore_site_base_path() {
    let storage = Storage::in_memory();
    seed_cached_matches(&storage, &alice()).await;
    let config = QuizConfig::from_lookup(|key| match key {
        "DNA_SITE_URL" => Some("https://studio.example/pixel/".to_string()),
        _ => None,
    })
    .expect("config");
    let mut harness = setup_view_harness_with_config(
        ViewKind::Quiz,
        storage,
        FakeScoring::succeeding(Vec::new()),
        &config,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("/portfolio/Alice"), "missing route link in {html}");
    assert!(!html.contains("/pixel/"), "site base leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_full_flow_renders_and_caches_matches() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Storage::in_memory(),
        FakeScoring::succeeding(alice()),
    );
    harness.rebuild();
    harness.settle().await;

    answer_all(&mut harness).await;

    let html = harness.render();
    assert!(html.contains("Match Score: 92%"), "missing score in {html}");
    assert!(html.contains("Alice"), "missing name in {html}");
    assert!(html.contains("Great fit"), "missing reason in {html}");
    assert!(html.contains("/portfolio/Alice"), "missing link in {html}");
    assert!(html.contains("View Full Portfolio"), "missing link text in {html}");
    assert_eq!(harness.scoring.calls(), 1);

    let cached = harness
        .storage
        .session
        .get_item(MATCHES_KEY)
        .await
        .expect("read cache");
    assert!(cached.is_some_and(|raw| raw.contains("Alice")));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_failure_shows_connection_error() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Storage::in_memory(),
        FakeScoring::failing(),
    );
    harness.rebuild();
    harness.settle().await;

    answer_all(&mut harness).await;

    let html = harness.render();
    assert!(
        html.contains("Connection Error. Please try again."),
        "missing error in {html}"
    );
    assert!(!html.contains("START OVER"), "restart offered in {html}");
    let cached = harness
        .storage
        .session
        .get_item(MATCHES_KEY)
        .await
        .expect("read cache");
    assert_eq!(cached, None);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_restart_clears_cache_and_asks_again() {
    let storage = Storage::in_memory();
    seed_cached_matches(&storage, &alice()).await;
    let mut harness =
        setup_view_harness(ViewKind::Quiz, storage, FakeScoring::succeeding(alice()));
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("START OVER / CLEAR DNA"));

    harness.dispatch(QuizEvent::RestartRequested).await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 6"), "missing first question in {html}");
    let cached = harness
        .storage
        .session
        .get_item(MATCHES_KEY)
        .await
        .expect("read cache");
    assert_eq!(cached, None);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_failed_restart_shows_generic_error() {
    let storage = UndeletableSession::storage();
    seed_cached_matches(&storage, &alice()).await;
    let mut harness =
        setup_view_harness(ViewKind::Quiz, storage, FakeScoring::succeeding(alice()));
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("Your Curated Matches"));

    harness.dispatch(QuizEvent::RestartRequested).await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error in {html}"
    );
    assert!(!html.contains("Question 1 of 6"), "quiz restarted in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn portfolio_view_smoke_renders_name() {
    let mut harness = setup_view_harness(
        ViewKind::Portfolio("Elena Grace".to_string()),
        Storage::in_memory(),
        FakeScoring::succeeding(Vec::new()),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Elena Grace"), "missing name in {html}");
    assert!(html.contains("Back to your matches"), "missing back link in {html}");
}
