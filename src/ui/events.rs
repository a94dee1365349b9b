use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::provider::{AnalysisError, GenerationError};
use crate::quiz::{Question, QuizIntent, QuizResult};

/// Completion of a background provider call, posted to the UI loop.
#[derive(Debug)]
pub enum ProviderOutcome {
    QuestionsReady(Vec<Question>),
    QuestionsFailed(GenerationError),
    AnalysisReady(QuizResult),
    AnalysisFailed(AnalysisError),
}

impl ProviderOutcome {
    pub fn into_intent(self) -> QuizIntent {
        match self {
            ProviderOutcome::QuestionsReady(questions) => QuizIntent::QuestionsLoaded(questions),
            ProviderOutcome::QuestionsFailed(_) => QuizIntent::GenerationFailed,
            ProviderOutcome::AnalysisReady(result) => QuizIntent::AnalysisReady(result),
            ProviderOutcome::AnalysisFailed(_) => QuizIntent::AnalysisFailed,
        }
    }
}

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    Provider(ProviderOutcome),
}

/// Fans terminal input and ticks into one channel; provider tasks post
/// their outcomes through a cloned sender.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
