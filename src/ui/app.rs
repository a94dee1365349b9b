use std::time::{Duration, Instant};

use crate::quiz::{Phase, QuizIntent, QuizReducer, SessionState};
use crate::share::ShareOutcome;
use crate::ui::mvi::Reducer;

/// How long the "link copied" confirmation stays on screen.
const SHARE_NOTICE_TTL: Duration = Duration::from_secs(2);

/// A provider call the runtime must issue after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderRequest {
    Generate,
    Analyze { score: u32, total: u32 },
}

/// Owns the session and everything else the view needs.
///
/// All quiz mutations go through [`QuizReducer`]; `App` adds the
/// resource concerns around it: the single-in-flight guard for provider
/// calls, the spinner, the share confirmation and quit.
pub struct App {
    session: SessionState,
    should_quit: bool,
    /// True while a provider call is outstanding. At most one at a
    /// time; there is no cancellation once issued.
    in_flight: bool,
    spinner_frame: usize,
    share_notice: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: SessionState::default(),
            should_quit: false,
            in_flight: false,
            spinner_frame: 0,
            share_notice: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Run one intent through the reducer and report the provider call
    /// the new phase demands, if any.
    ///
    /// `Loading` wants generation, `Analyzing` wants analysis. A
    /// request is only handed out when no call is outstanding, and
    /// completions clear the guard. Deriving the request from the
    /// post-transition phase (not from the edge) also covers stale
    /// completions after a mid-flight restart: a completion the reducer
    /// ignores still frees the guard, and the waiting phase asks again.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Option<ProviderRequest> {
        let completion = matches!(
            intent,
            QuizIntent::QuestionsLoaded(_)
                | QuizIntent::GenerationFailed
                | QuizIntent::AnalysisReady(_)
                | QuizIntent::AnalysisFailed
        );

        self.session = QuizReducer::reduce(std::mem::take(&mut self.session), intent);

        if completion {
            self.in_flight = false;
        }
        if self.in_flight {
            return None;
        }

        let request = match self.session.phase {
            Phase::Loading => Some(ProviderRequest::Generate),
            Phase::Analyzing => Some(ProviderRequest::Analyze {
                score: self.session.score,
                total: self.session.total_questions(),
            }),
            _ => None,
        };

        if request.is_some() {
            self.in_flight = true;
        }
        request
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if let Some(shown) = self.share_notice {
            if shown.elapsed() >= SHARE_NOTICE_TTL {
                self.share_notice = None;
            }
        }
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Record the outcome of a share attempt. Only a clipboard copy
    /// gets the transient confirmation; a native hand-off shows its own
    /// UI.
    pub fn note_share(&mut self, outcome: ShareOutcome) {
        if outcome == ShareOutcome::Copied {
            self.share_notice = Some(Instant::now());
        }
    }

    pub fn share_notice_visible(&self) -> bool {
        self.share_notice.is_some()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
