use crate::quiz::intent::QuizIntent;
use crate::quiz::state::{Phase, SessionState};
use crate::quiz::types::QuizResult;
use crate::ui::mvi::Reducer;

/// Feedback substituted when performance analysis fails. Analysis
/// failure is non-fatal: the user finished the quiz, so they still get
/// a results screen.
pub const FALLBACK_FEEDBACK: &str =
    "The AI mentor could not be reached for a full analysis, but your score \
     is in. Keep practicing and the scenarios will start reading themselves.";

/// Archetype substituted when performance analysis fails.
pub const FALLBACK_ARCHETYPE: &str = "Participant";

/// Pure transition function for the quiz session.
///
/// Generation failure is fatal (→ [`Phase::Error`]); analysis failure is
/// recovered with a fallback result (→ [`Phase::Results`]). That
/// asymmetry is intentional: without questions there is nothing to show,
/// while a finished quiz always deserves a verdict.
pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = SessionState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::Start => match state.phase {
                Phase::Welcome => SessionState {
                    phase: Phase::Loading,
                    ..SessionState::default()
                },
                _ => state,
            },
            QuizIntent::QuestionsLoaded(questions) => match state.phase {
                // The adapter rejects an empty batch; the reducer keeps
                // the same invariant locally so it can never show a quiz
                // with nothing to ask.
                Phase::Loading if questions.is_empty() => SessionState {
                    phase: Phase::Error,
                    ..SessionState::default()
                },
                Phase::Loading => SessionState {
                    phase: Phase::Quiz,
                    questions,
                    current_question: 0,
                    score: 0,
                    result: None,
                    selected_option: None,
                    explanation_visible: false,
                },
                _ => state,
            },
            QuizIntent::GenerationFailed => match state.phase {
                Phase::Loading => SessionState {
                    phase: Phase::Error,
                    ..SessionState::default()
                },
                _ => state,
            },
            QuizIntent::SelectOption(index) => select_option(state, index),
            QuizIntent::Advance => advance(state),
            QuizIntent::AnalysisReady(result) => match state.phase {
                Phase::Analyzing => SessionState {
                    phase: Phase::Results,
                    result: Some(result),
                    ..state
                },
                _ => state,
            },
            QuizIntent::AnalysisFailed => match state.phase {
                Phase::Analyzing => {
                    let fallback = QuizResult {
                        score: state.score,
                        total_questions: state.total_questions(),
                        feedback: FALLBACK_FEEDBACK.to_string(),
                        archetype: FALLBACK_ARCHETYPE.to_string(),
                    };
                    SessionState {
                        phase: Phase::Results,
                        result: Some(fallback),
                        ..state
                    }
                }
                _ => state,
            },
            QuizIntent::Restart => SessionState::default(),
        }
    }
}

/// One-shot pick: once the explanation is visible the answer is locked
/// and further selections are no-ops.
fn select_option(state: SessionState, index: usize) -> SessionState {
    if state.phase != Phase::Quiz || state.explanation_visible {
        return state;
    }
    let correct = match state.current_question() {
        Some(question) if index < question.options.len() => {
            index == question.correct_option_index
        }
        _ => return state,
    };
    SessionState {
        selected_option: Some(index),
        explanation_visible: true,
        score: state.score + u32::from(correct),
        ..state
    }
}

/// Rejected until an option has been picked for the current question.
fn advance(state: SessionState) -> SessionState {
    if state.phase != Phase::Quiz || !state.explanation_visible {
        return state;
    }
    if state.is_last_question() {
        SessionState {
            phase: Phase::Analyzing,
            selected_option: None,
            explanation_visible: false,
            ..state
        }
    } else {
        SessionState {
            current_question: state.current_question + 1,
            selected_option: None,
            explanation_visible: false,
            ..state
        }
    }
}
