use crate::quiz::types::{Question, QuizResult};
use crate::ui::mvi::UiState;

/// Where the session currently is in the welcome → results funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Welcome,
    /// Waiting on question generation.
    Loading,
    Quiz,
    /// Waiting on performance analysis.
    Analyzing,
    Results,
    /// Question generation failed; only restart leaves this phase.
    Error,
}

/// Complete state of one quiz attempt.
///
/// Owned by [`App`](crate::ui::app::App) and mutated only through
/// [`QuizReducer`](crate::quiz::QuizReducer). Restart returns every
/// field to its default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub phase: Phase,
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub score: u32,
    pub result: Option<QuizResult>,
    /// Option picked for the current question, if any.
    pub selected_option: Option<usize>,
    /// Once true, the pick is locked in and the explanation is shown.
    pub explanation_visible: bool,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_question + 1 == self.questions.len()
    }

    pub fn total_questions(&self) -> u32 {
        self.questions.len() as u32
    }
}
