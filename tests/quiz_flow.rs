//! Full-session flows through `App`: intent dispatch, the provider
//! requests it hands back, and the single-in-flight guard.

mod common;

use std::sync::atomic::Ordering;

use charisma_quiz::provider::ContentProvider;
use charisma_quiz::quiz::{Phase, QuizIntent, FALLBACK_ARCHETYPE};
use charisma_quiz::ui::app::{App, ProviderRequest};
use charisma_quiz::ui::events::ProviderOutcome;
use common::{sample_questions, MockProvider};

/// Drive one provider request against the mock and feed the outcome
/// back, the way the runtime loop does.
async fn complete(app: &mut App, provider: &MockProvider, request: ProviderRequest) {
    let outcome = match request {
        ProviderRequest::Generate => match provider.generate_questions().await {
            Ok(questions) => ProviderOutcome::QuestionsReady(questions),
            Err(err) => ProviderOutcome::QuestionsFailed(err),
        },
        ProviderRequest::Analyze { score, total } => {
            match provider.analyze_performance(score, total).await {
                Ok(result) => ProviderOutcome::AnalysisReady(result),
                Err(err) => ProviderOutcome::AnalysisFailed(err),
            }
        }
    };
    let followup = app.dispatch(outcome.into_intent());
    assert_eq!(followup, None, "a completion must not trigger another call");
}

#[test]
fn start_requests_generation_once() {
    let mut app = App::new();
    let request = app.dispatch(QuizIntent::Start);
    assert_eq!(request, Some(ProviderRequest::Generate));

    // Repeated starts while loading must not fire a second call.
    assert_eq!(app.dispatch(QuizIntent::Start), None);
    assert_eq!(app.session().phase, Phase::Loading);
}

#[tokio::test]
async fn three_of_five_scores_sixty_percent() {
    let provider = MockProvider::working();
    let mut app = App::new();

    let request = app.dispatch(QuizIntent::Start).expect("generation request");
    complete(&mut app, &provider, request).await;
    assert_eq!(app.session().phase, Phase::Quiz);

    // 3 correct (option 0), then 2 wrong (option 1), in order.
    let mut analyze = None;
    for pick in [0, 0, 0, 1, 1] {
        assert_eq!(app.dispatch(QuizIntent::SelectOption(pick)), None);
        if let Some(request) = app.dispatch(QuizIntent::Advance) {
            analyze = Some(request);
        }
    }
    let request = analyze.expect("final advance requests analysis");
    assert_eq!(request, ProviderRequest::Analyze { score: 3, total: 5 });

    complete(&mut app, &provider, request).await;
    let session = app.session();
    assert_eq!(session.phase, Phase::Results);
    let result = session.result.as_ref().expect("result");
    assert_eq!(result.score, 3);
    assert_eq!(result.total_questions, 5);
    assert_eq!(result.percentage(), 60);
    assert_eq!(provider.generate_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.analyze_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn generation_failure_is_fatal() {
    let provider = MockProvider::generation_down();
    let mut app = App::new();

    let request = app.dispatch(QuizIntent::Start).expect("generation request");
    complete(&mut app, &provider, request).await;

    assert_eq!(app.session().phase, Phase::Error);
    assert!(app.session().questions.is_empty());
}

#[tokio::test]
async fn analysis_failure_degrades_to_fallback_results() {
    let provider = MockProvider::analysis_down();
    let mut app = App::new();

    let request = app.dispatch(QuizIntent::Start).expect("generation request");
    complete(&mut app, &provider, request).await;

    let mut analyze = None;
    for _ in 0..5 {
        app.dispatch(QuizIntent::SelectOption(0));
        if let Some(request) = app.dispatch(QuizIntent::Advance) {
            analyze = Some(request);
        }
    }
    complete(&mut app, &provider, analyze.expect("analysis request")).await;

    // Never an error screen: the user finished the quiz.
    let session = app.session();
    assert_eq!(session.phase, Phase::Results);
    let result = session.result.as_ref().expect("fallback result");
    assert_eq!(result.archetype, FALLBACK_ARCHETYPE);
    assert!(!result.feedback.is_empty());
    assert_eq!(result.score, 5);
    assert_eq!(result.total_questions, 5);
}

#[test]
fn restart_mid_flight_keeps_single_call_outstanding() {
    let mut app = App::new();
    assert_eq!(app.dispatch(QuizIntent::Start), Some(ProviderRequest::Generate));

    // Restart while generation is still in flight, then start again:
    // no second call may be issued while the first is outstanding.
    assert_eq!(app.dispatch(QuizIntent::Restart), None);
    assert_eq!(app.dispatch(QuizIntent::Start), None);
    assert_eq!(app.session().phase, Phase::Loading);

    // The outstanding call finally lands and satisfies the new wait.
    let request = app.dispatch(QuizIntent::QuestionsLoaded(sample_questions()));
    assert_eq!(request, None);
    assert_eq!(app.session().phase, Phase::Quiz);
}

#[test]
fn stale_completion_reissues_pending_request() {
    let mut app = App::new();

    // Reach Analyzing with an analysis call in flight.
    app.dispatch(QuizIntent::Start);
    app.dispatch(QuizIntent::QuestionsLoaded(sample_questions()));
    for _ in 0..5 {
        app.dispatch(QuizIntent::SelectOption(0));
        app.dispatch(QuizIntent::Advance);
    }
    assert_eq!(app.session().phase, Phase::Analyzing);

    // User bails out and starts over before the analysis lands.
    app.dispatch(QuizIntent::Restart);
    assert_eq!(app.dispatch(QuizIntent::Start), None);

    // The stale analysis completion is ignored by the reducer but must
    // free the slot and re-request generation for the waiting screen.
    let request = app.dispatch(QuizIntent::AnalysisFailed);
    assert_eq!(request, Some(ProviderRequest::Generate));
    assert_eq!(app.session().phase, Phase::Loading);
}

#[tokio::test]
async fn restart_after_results_resets_session() {
    let provider = MockProvider::working();
    let mut app = App::new();

    let request = app.dispatch(QuizIntent::Start).expect("generation request");
    complete(&mut app, &provider, request).await;
    let mut analyze = None;
    for _ in 0..5 {
        app.dispatch(QuizIntent::SelectOption(1));
        if let Some(request) = app.dispatch(QuizIntent::Advance) {
            analyze = Some(request);
        }
    }
    complete(&mut app, &provider, analyze.expect("analysis request")).await;
    assert_eq!(app.session().phase, Phase::Results);

    assert_eq!(app.dispatch(QuizIntent::Restart), None);
    let session = app.session();
    assert_eq!(session.phase, Phase::Welcome);
    assert!(session.questions.is_empty());
    assert_eq!(session.score, 0);
    assert_eq!(session.current_question, 0);
    assert_eq!(session.result, None);
}
